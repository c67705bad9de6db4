// Visual space -> surface pixel space.
// The element can be drawn bigger or smaller than its pixel buffer (window
// stretched, layout scaling), so raw client coordinates are never used directly.

/// Host element bounding box in visual units (same space as client coords).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// A box anchored at the origin, e.g. a window's client area.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Pointer position as reported by the input device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

impl ClientPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Translate a client point into the surface's internal pixel space.
/// `None` when the box has no area (nothing sensible to scale by).
pub fn to_surface(
    point: ClientPoint,
    bounds: ElementBox,
    pixel_width: usize,
    pixel_height: usize,
) -> Option<(f32, f32)> {
    if bounds.is_empty() {
        return None;
    }
    let scale_x = pixel_width as f32 / bounds.width;
    let scale_y = pixel_height as f32 / bounds.height;
    Some((
        (point.x - bounds.left) * scale_x,
        (point.y - bounds.top) * scale_y,
    ))
}
