// Core buffer types shared by the surface engine and the renderer.

/// A packed RGB image; what the window shows each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is (pixels)
    pub height: usize,     // how tall the frame is (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer filled with one color.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }
}

/// Cover coverage per pixel: 255 = scratch layer fully present, 0 = scratched away.
/// Visual: unseen directly; it decides where the prize face shows through.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<u8>,    // length = width * height
}

impl Mask {
    /// Fresh, fully opaque cover.
    pub fn opaque(width: usize, height: usize) -> Self {
        Self { width, height, alpha: vec![u8::MAX; width * height] }
    }
}
