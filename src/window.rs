// Window wrapper around minifb.
// Visual: a resizable window that stretches the card buffer to its size.
// Mouse positions are reported in window space, not buffer space; the
// surface does the scaling itself.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};
use scratch_lotto::coords::ElementBox;
use scratch_lotto::error::Error;
use scratch_lotto::types::FrameBuffer;

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the card.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// N or Space: deal a new card.
    pub fn new_card_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::N, KeyRepeat::No)
            || self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }

    /// Client area in window units; what the card is stretched over.
    pub fn element_box(&self) -> ElementBox {
        let (w, h) = self.window.get_size();
        ElementBox::sized(w as f32, h as f32)
    }

    /// Pointer in window units, `None` once it leaves the client area.
    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.window.get_unscaled_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }
}
