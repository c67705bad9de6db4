// Software drawing utilities.
// Visual effects provided here:
// 1) Filled rectangles/discs for the cover and the prize box.
// 2) A 5x7 bitmap font, scaled by whole pixels, for every piece of card text.

use crate::gamma::GammaLut;
use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Blend `color` over the pixel at (x,y) with opacity `t` (linear light).
#[inline]
pub fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32, t: f32, lut: &GammaLut) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = lut.mix(fb.pixels[idx], color, t);
}

/// Solid axis-aligned rectangle, clipped to the buffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..(y + h) {
        for xx in x..(x + w) {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// Rectangle outline `thickness` pixels wide, drawn inward.
pub fn stroke_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: u32) {
    fill_rect(fb, x, y, w, thickness, color);
    fill_rect(fb, x, y + h - thickness, w, thickness, color);
    fill_rect(fb, x, y, thickness, h, color);
    fill_rect(fb, x + w - thickness, y, thickness, h, color);
}

/// Translucent disc centered at (cx,cy).
/// Visual: a soft-looking round blotch; the underlying color still shows.
pub fn blend_disc(fb: &mut FrameBuffer, cx: f32, cy: f32, radius: f32, color: u32, t: f32, lut: &GammaLut) {
    if !(radius > 0.0) {
        return;
    }
    let r2 = radius * radius;
    let y0 = (cy - radius).floor() as i32;
    let y1 = (cy + radius).ceil() as i32;
    let x0 = (cx - radius).floor() as i32;
    let x1 = (cx + radius).ceil() as i32;
    for y in y0..=y1 {
        let dy = y as f32 + 0.5 - cy;
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                blend_pixel(fb, x, y, color, t, lut);
            }
        }
    }
}

/* ---------- 5x7 bitmap font (uppercase ASCII subset used on the card) ---------- */

/// Return a 5x7 glyph bitmap.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
/// Lowercase letters are drawn as uppercase.
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        ',' => g!(0b00000,0b00000,0b00000,0b00000,0b00100,0b00100,0b01000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '?' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100),
        '$' => g!(0b00100,0b01111,0b10100,0b01110,0b00101,0b11110,0b00100),
        '&' => g!(0b01100,0b10010,0b10100,0b01000,0b10101,0b10010,0b01101),
        '%' => g!(0b11001,0b11010,0b00010,0b00100,0b01000,0b01011,0b10011),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '+' => g!(0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),
        '\'' => g!(0b00100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Pixel width of `text` at `scale` (5px glyph + 1px gap per char, last gap dropped).
pub fn text_width(text: &str, scale: i32) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { (n * 6 - 1) * scale }
}

/// Pixel height of one text line at `scale`.
pub fn text_height(scale: i32) -> i32 {
    7 * scale
}

/// Largest whole-pixel scale so that `text` fits in `max_width`, capped at `max_scale`.
pub fn fit_scale(text: &str, max_width: i32, max_scale: i32) -> i32 {
    let base = text_width(text, 1).max(1);
    (max_width / base).clamp(1, max_scale.max(1))
}

/// Draw a single 5x7 character with its top-left at (x,y), each dot `scale` px square.
fn draw_char(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    // Unknown characters render as blanks but still advance the pen
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fill_rect(fb, x + rx * scale, y + ry as i32 * scale, scale, scale, color);
                }
            }
        }
    }
}

/// Draw a text string starting at (x,y).
pub fn draw_text(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    for ch in text.chars() {
        draw_char(fb, x, y, ch, scale, color);
        x += 6 * scale;
    }
}

/// Draw `text` centered on (cx,cy).
pub fn draw_text_centered(fb: &mut FrameBuffer, cx: i32, cy: i32, text: &str, scale: i32, color: u32) {
    let x = cx - text_width(text, scale) / 2;
    let y = cy - text_height(scale) / 2;
    draw_text(fb, x, y, text, scale, color);
}
