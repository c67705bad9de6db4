// Turns polled mouse state (what a window gives us once per frame) into the
// discrete pointer events the surface understands.

use crate::coords::ClientPoint;
use crate::surface::PointerEvent;

#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    last_pos: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pos` is the pointer in window space (`None` while outside the window),
    /// `down` whether the primary button is held this frame.
    pub fn poll(&mut self, pos: Option<(f32, f32)>, down: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        match pos {
            None => {
                if self.last_pos.is_some() {
                    events.push(PointerEvent::Leave);
                }
            }
            Some((x, y)) => {
                let p = ClientPoint::new(x, y);
                if down && !self.was_down {
                    events.push(PointerEvent::Down(p));
                } else if self.last_pos != Some((x, y)) {
                    events.push(PointerEvent::Move(p));
                }
                if !down && self.was_down {
                    events.push(PointerEvent::Up);
                }
            }
        }

        // A press only counts when its edge is seen inside the window
        self.was_down = down;
        self.last_pos = pos;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Move(ClientPoint::new(x, y))
    }

    #[test]
    fn press_drag_release() {
        let mut t = PointerTracker::new();
        assert_eq!(t.poll(Some((1.0, 1.0)), false), vec![pt(1.0, 1.0)]);
        assert_eq!(
            t.poll(Some((1.0, 1.0)), true),
            vec![PointerEvent::Down(ClientPoint::new(1.0, 1.0))]
        );
        assert_eq!(t.poll(Some((4.0, 2.0)), true), vec![pt(4.0, 2.0)]);
        assert!(t.poll(Some((4.0, 2.0)), true).is_empty());
        assert_eq!(t.poll(Some((4.0, 2.0)), false), vec![PointerEvent::Up]);
    }

    #[test]
    fn release_after_moving_reports_move_then_up() {
        let mut t = PointerTracker::new();
        t.poll(Some((0.0, 0.0)), true);
        assert_eq!(t.poll(Some((3.0, 0.0)), false), vec![pt(3.0, 0.0), PointerEvent::Up]);
    }

    #[test]
    fn leaving_the_window_ends_the_stroke_once() {
        let mut t = PointerTracker::new();
        t.poll(Some((5.0, 5.0)), true);
        assert_eq!(t.poll(None, true), vec![PointerEvent::Leave]);
        assert!(t.poll(None, true).is_empty());
        // Coming back with the button still held is only a move; no new stroke
        assert_eq!(t.poll(Some((6.0, 5.0)), true), vec![pt(6.0, 5.0)]);
        assert_eq!(t.poll(Some((6.0, 5.0)), false), vec![PointerEvent::Up]);
    }

    #[test]
    fn press_outside_then_drag_in_is_not_a_press() {
        let mut t = PointerTracker::new();
        assert!(t.poll(None, true).is_empty());
        assert_eq!(t.poll(Some((2.0, 3.0)), true), vec![pt(2.0, 3.0)]);
        assert_eq!(t.poll(Some((4.0, 3.0)), true), vec![pt(4.0, 3.0)]);

        // Releasing and pressing again inside is a real press
        t.poll(Some((4.0, 3.0)), false);
        assert_eq!(
            t.poll(Some((4.0, 3.0)), true),
            vec![PointerEvent::Down(ClientPoint::new(4.0, 3.0))]
        );
    }

    #[test]
    fn nothing_happens_outside() {
        let mut t = PointerTracker::new();
        assert!(t.poll(None, false).is_empty());
        assert!(t.poll(None, true).is_empty());
    }
}
