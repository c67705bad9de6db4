// Paints the scratch-off layer for a fresh session.
// Visual: a solid pink card with faint white blotches and a centered
// "SCRATCH HERE / CLICK & DRAG" prompt. Every pixel is covered.

use crate::draw::{blend_disc, draw_text_centered, fit_scale, text_height};
use crate::gamma::GammaLut;
use crate::types::FrameBuffer;
use rand::Rng;

pub const COVER_FILL: u32 = 0x00_FD_A4_AF;
pub const SPECKLE_COLOR: u32 = 0x00_FF_FF_FF;
pub const SPECKLE_OPACITY: f32 = 0.2;
pub const SPECKLE_MAX_RADIUS: f32 = 40.0;
pub const PROMPT_COLOR: u32 = 0x00_BE_18_5D;

pub const PROMPT: &str = "SCRATCH HERE";
pub const PROMPT_HINT: &str = "CLICK & DRAG";

/// Render the cover pixels. The mask decides later how much of it stays visible.
pub fn paint_cover<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    speckles: usize,
    rng: &mut R,
    lut: &GammaLut,
) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(width, height, COVER_FILL);

    // Decorative texture; placement is free, the fill underneath already covers
    for _ in 0..speckles {
        let x = rng.random_range(0.0..width as f32);
        let y = rng.random_range(0.0..height as f32);
        let r = rng.random_range(0.0..SPECKLE_MAX_RADIUS);
        blend_disc(&mut fb, x, y, r, SPECKLE_COLOR, SPECKLE_OPACITY, lut);
    }

    // Prompt: roughly width/12 tall, at most 64 px, and never wider than the card
    let font_px = (width as f32 / 12.0).min(64.0);
    let max_w = (width as i32 * 9) / 10;
    let big = fit_scale(PROMPT, max_w, ((font_px / 7.0) as i32).max(1));
    let small = fit_scale(PROMPT_HINT, max_w, (big / 3).max(1));

    let cx = width as i32 / 2;
    let cy = height as i32 / 2;
    draw_text_centered(&mut fb, cx, cy, PROMPT, big, PROMPT_COLOR);
    let gap = text_height(big) / 2 + text_height(small);
    draw_text_centered(&mut fb, cx, cy + gap, PROMPT_HINT, small, PROMPT_COLOR);

    fb
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cover_has_no_holes_and_shows_prompt() {
        let lut = GammaLut::new();
        let mut rng = StdRng::seed_from_u64(7);
        let fb = paint_cover(240, 120, 30, &mut rng, &lut);
        assert_eq!(fb.pixels.len(), 240 * 120);
        assert!(fb.pixels.iter().any(|&p| p == PROMPT_COLOR));
        assert!(fb.pixels.iter().any(|&p| p == COVER_FILL));
    }

    #[test]
    fn same_seed_same_cover() {
        let lut = GammaLut::new();
        let a = paint_cover(100, 60, 30, &mut StdRng::seed_from_u64(3), &lut);
        let b = paint_cover(100, 60, 30, &mut StdRng::seed_from_u64(3), &lut);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn tiny_surface_still_paints() {
        let lut = GammaLut::new();
        let fb = paint_cover(1, 1, 5, &mut StdRng::seed_from_u64(9), &lut);
        assert_eq!(fb.pixels.len(), 1);
    }
}
