// The prize face: what sits underneath the scratch cover.
// Visual: a pale rose card with a dotted texture and a branding strip at
// the bottom; the revealed variant also carries the white prize box.
//
// The hidden variant never contains the prize name, so nothing can be read
// through a partially scratched cover before the reveal.

use crate::draw::{blend_pixel, fill_rect, fit_scale, stroke_rect, text_height, text_width, draw_text, draw_text_centered};
use crate::gamma::GammaLut;
use crate::logo::fit_logo;
use crate::types::FrameBuffer;
use image::{DynamicImage, RgbaImage};

const FACE_BG: u32 = 0x00_FF_F1_F2;
const DOT_COLOR: u32 = 0x00_FB_71_85;
const DOT_OPACITY: f32 = 0.1;
const DOT_SPACING: usize = 30;

const BOX_FILL: u32 = 0x00_FF_FF_FF;
const BOX_BORDER: u32 = 0x00_EC_48_99;
const LABEL_COLOR: u32 = 0x00_F4_72_B6;
const NAME_COLOR: u32 = 0x00_E1_1D_48;
const RULE_COLOR: u32 = 0x00_FF_E4_E6;

const BRAND_COLOR: u32 = 0x00_88_13_37;
const BRAND_OPACITY: f32 = 0.3;

pub const RESULT_LABEL: &str = "OFFICIAL RESULT";
pub const VALIDITY: &str = "VALID UNTIL 2025";

/// Title or logo shown in the bottom strip. Logo wins when present.
#[derive(Clone, Default)]
pub struct Branding {
    pub title: String,
    pub logo: Option<RgbaImage>,
}

impl Branding {
    /// Branding for a card `height` pixels tall, with the logo fitted to it.
    pub fn for_card(title: &str, logo: Option<&DynamicImage>, height: usize) -> Self {
        Self {
            title: title.to_string(),
            logo: logo.map(|img| fit_logo(img, logo_height_for(height))),
        }
    }
}

/// Height a logo should be scaled to for a card of `height` pixels.
pub fn logo_height_for(height: usize) -> u32 {
    ((height / 20).max(8)) as u32
}

/// Render the face. `prize` = `Some(name)` draws the prize box.
pub fn render_face(width: usize, height: usize, prize: Option<&str>, branding: &Branding, lut: &GammaLut) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(width, height, FACE_BG);
    draw_dot_grid(&mut fb, lut);
    draw_branding(&mut fb, branding, lut);
    if let Some(name) = prize {
        draw_prize_box(&mut fb, name);
    }
    fb
}

fn draw_dot_grid(fb: &mut FrameBuffer, lut: &GammaLut) {
    let offset = DOT_SPACING / 2;
    for y in (offset..fb.height).step_by(DOT_SPACING) {
        for x in (offset..fb.width).step_by(DOT_SPACING) {
            blend_pixel(fb, x as i32, y as i32, DOT_COLOR, DOT_OPACITY, lut);
            blend_pixel(fb, x as i32 + 1, y as i32, DOT_COLOR, DOT_OPACITY, lut);
            blend_pixel(fb, x as i32, y as i32 + 1, DOT_COLOR, DOT_OPACITY, lut);
            blend_pixel(fb, x as i32 + 1, y as i32 + 1, DOT_COLOR, DOT_OPACITY, lut);
        }
    }
}

fn draw_prize_box(fb: &mut FrameBuffer, name: &str) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    let pad = (w / 40).max(4);
    let border = (w / 96).max(2);

    let name_scale = fit_scale(name, w * 7 / 10, (h / 40).max(1));
    let label_scale = (name_scale / 3).max(1);
    let name_w = text_width(name, name_scale);
    let label_h = text_height(label_scale);
    let name_h = text_height(name_scale);
    let rule_h = (name_scale / 2).max(2);

    let box_w = (name_w + pad * 2).max((w * 4 / 10).min(320)).min(w - 2);
    let box_h = (pad * 2 + label_h + pad + name_h + pad + rule_h).min(h - 2);
    let x0 = (w - box_w) / 2;
    let y0 = (h - box_h) / 2;

    fill_rect(fb, x0, y0, box_w, box_h, BOX_FILL);
    stroke_rect(fb, x0, y0, box_w, box_h, border, BOX_BORDER);

    let cx = w / 2;
    let mut y = y0 + pad;
    draw_text_centered(fb, cx, y + label_h / 2, RESULT_LABEL, label_scale, LABEL_COLOR);
    y += label_h + pad;
    draw_text_centered(fb, cx, y + name_h / 2, name, name_scale, NAME_COLOR);
    y += name_h + pad;
    let rule_w = (box_w / 8).max(8);
    fill_rect(fb, cx - rule_w / 2, y, rule_w, rule_h, RULE_COLOR);
}

fn draw_branding(fb: &mut FrameBuffer, branding: &Branding, lut: &GammaLut) {
    let (w, h) = (fb.width as i32, fb.height as i32);
    let scale = (h / 160).max(1);
    let margin = (w / 20).max(4);
    let line_h = text_height(scale);
    let baseline = h - (h / 12).max(line_h + 2);

    // Text is first drawn opaque into a scratch strip, then mixed in at 30%
    let mut strip = FrameBuffer::filled(fb.width, fb.height, u32::MAX);
    let right_w = text_width(VALIDITY, scale);
    draw_text(&mut strip, w - margin - right_w, baseline, VALIDITY, scale, BRAND_COLOR);

    match &branding.logo {
        Some(logo) => {
            let top = baseline + line_h / 2 - logo.height() as i32 / 2;
            draw_logo(fb, logo, margin, top, lut);
        }
        None => draw_text(&mut strip, margin, baseline, &branding.title, scale, BRAND_COLOR),
    }

    for (dst, &src) in fb.pixels.iter_mut().zip(strip.pixels.iter()) {
        if src != u32::MAX {
            *dst = lut.mix(*dst, src, BRAND_OPACITY);
        }
    }
}

/// Grayscale + inverted, honoring the logo's own alpha.
fn draw_logo(fb: &mut FrameBuffer, logo: &RgbaImage, left: i32, top: i32, lut: &GammaLut) {
    for (x, y, px) in logo.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let luma = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as u32;
        let v = 255 - luma.min(255);
        let gray = (v << 16) | (v << 8) | v;
        let t = BRAND_OPACITY * a as f32 / 255.0;
        blend_pixel(fb, left + x as i32, top + y as i32, gray, t, lut);
    }
}
