// Loads the optional brand logo shown in the card's bottom bar.
// Visual expectation: a small monochrome logo replaces the title text.

use crate::error::Error;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Decode an image file. Sizing happens per card, see `fit_logo`.
pub fn load_logo(path: &Path) -> Result<DynamicImage, Error> {
    image::open(path).map_err(|e| Error::Logo(format!("{}: {e}", path.display())))
}

/// Keep aspect ratio; images already small enough are left at their size.
pub fn fit_logo(img: &DynamicImage, max_height: u32) -> RgbaImage {
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    if h <= max_height || h == 0 || max_height == 0 {
        return rgba;
    }
    let new_w = ((w as u64 * max_height as u64) / h as u64).max(1) as u32;
    imageops::resize(&rgba, new_w, max_height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn tall_logo_is_scaled_down_keeping_aspect() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 100, Rgba([10, 20, 30, 255])));
        let out = fit_logo(&img, 25);
        assert_eq!(out.dimensions(), (50, 25));
    }

    #[test]
    fn small_logo_is_untouched() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 4, Rgba([1, 2, 3, 4])));
        let out = fit_logo(&img, 24);
        assert_eq!(out.dimensions(), (8, 4));
        assert_eq!(out.get_pixel(0, 0), &Rgba([1, 2, 3, 4]));
    }

    #[test]
    fn missing_file_is_a_logo_error() {
        let err = load_logo(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, Error::Logo(_)));
    }
}
