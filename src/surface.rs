// Scratch surface: one round's cover, mask and reveal state machine.
// Visual expectation: drag across the pink cover and round holes appear
// under the pointer; once enough of the card shows, the card flips to
// "revealed" exactly once and stops reacting to input.
//
// A session is never reset in place. The host drops it and builds a new one
// for the next card, so no mask state can leak between rounds.

use crate::coords::{ClientPoint, ElementBox, to_surface};
use crate::cover::paint_cover;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::mask::{erase_disc, transparent_fraction};
use crate::types::{FrameBuffer, Mask};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.60;
pub const DEFAULT_BRUSH_RADIUS: f32 = 100.0;
pub const DEFAULT_SAMPLE_CHANCE: f64 = 0.1;
pub const DEFAULT_SPECKLES: usize = 30;

/// Tunables for a surface session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceSettings {
    /// Cleared share of the card at which the prize counts as revealed.
    pub reveal_threshold: f64,
    /// Eraser radius in internal pixels.
    pub brush_radius: f32,
    /// Chance that a move event while drawing also samples progress.
    pub sample_chance: f64,
    pub speckle_count: usize,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            sample_chance: DEFAULT_SAMPLE_CHANCE,
            speckle_count: DEFAULT_SPECKLES,
        }
    }
}

impl SurfaceSettings {
    /// Reject values the engine cannot act on. NaN fails every check.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(Error::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !(self.brush_radius > 0.0 && self.brush_radius.is_finite()) {
            return Err(Error::Config(format!("brush_radius must be positive, got {}", self.brush_radius)));
        }
        if !(0.0..=1.0).contains(&self.sample_chance) {
            return Err(Error::Config(format!(
                "sample_chance must be in [0, 1], got {}",
                self.sample_chance
            )));
        }
        Ok(())
    }
}

/// Host-assigned identity of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Freshly painted, never touched.
    Covered,
    /// Between strokes; nothing changes.
    Idle,
    /// A stroke is active; moves erase.
    Drawing,
    /// Terminal for the session.
    Revealed,
}

/// Inbound input events, client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down(ClientPoint),
    Move(ClientPoint),
    Up,
    Leave,
    TouchStart(Vec<ClientPoint>),
    TouchMove(Vec<ClientPoint>),
    TouchEnd,
}

/// What handling one event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Stale or irrelevant event; no mutation happened.
    Ignored,
    /// Mask changed, progress not sampled this time.
    Scratched,
    /// Progress sampled, still under the threshold.
    Progress(f64),
    /// Threshold crossed. Returned once per session.
    Revealed(f64),
}

pub struct ScratchSurface {
    id: SessionId,
    settings: SurfaceSettings,
    width: usize,
    height: usize,
    cover: FrameBuffer,
    mask: Mask,
    phase: Phase,
    last_fraction: f64,
    rng: StdRng,
}

impl ScratchSurface {
    /// Size the surface from the element box (read once) and paint a fresh cover.
    /// A zero-area box is refused; the host is expected to retry after layout.
    pub fn new(
        id: SessionId,
        width: usize,
        height: usize,
        settings: SurfaceSettings,
        seed: u64,
        lut: &GammaLut,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::SurfaceUnavailable { width, height });
        }
        settings.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let cover = paint_cover(width, height, settings.speckle_count, &mut rng, lut);

        Ok(Self {
            id,
            settings,
            width,
            height,
            cover,
            mask: Mask::opaque(width, height),
            phase: Phase::Covered,
            last_fraction: 0.0,
            rng,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == Phase::Drawing
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Last sampled progress, for display.
    pub fn revealed_fraction(&self) -> f64 {
        self.last_fraction
    }

    pub fn cover(&self) -> &FrameBuffer {
        &self.cover
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    /// Feed one input event. `bounds` is the element box at event time.
    pub fn handle(&mut self, event: &PointerEvent, bounds: ElementBox) -> Response {
        if self.is_revealed() {
            return Response::Ignored;
        }
        match event {
            PointerEvent::Down(p) => self.begin_stroke(*p, bounds),
            PointerEvent::TouchStart(points) => match points.first() {
                Some(p) => self.begin_stroke(*p, bounds),
                None => Response::Ignored,
            },
            PointerEvent::Move(p) => self.stroke_to(*p, bounds),
            PointerEvent::TouchMove(points) => match points.first() {
                Some(p) => self.stroke_to(*p, bounds),
                None => Response::Ignored,
            },
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::TouchEnd => self.end_stroke(),
        }
    }

    fn begin_stroke(&mut self, point: ClientPoint, bounds: ElementBox) -> Response {
        let Some((x, y)) = to_surface(point, bounds, self.width, self.height) else {
            return Response::Ignored;
        };
        self.phase = Phase::Drawing;
        self.scratch(x, y)
    }

    fn stroke_to(&mut self, point: ClientPoint, bounds: ElementBox) -> Response {
        if self.phase != Phase::Drawing {
            return Response::Ignored;
        }
        match to_surface(point, bounds, self.width, self.height) {
            Some((x, y)) => self.scratch(x, y),
            None => Response::Ignored,
        }
    }

    /// Ending always reconciles progress, even without an active stroke.
    fn end_stroke(&mut self) -> Response {
        if self.phase == Phase::Drawing {
            self.phase = Phase::Idle;
        }
        self.sample()
    }

    fn scratch(&mut self, x: f32, y: f32) -> Response {
        erase_disc(&mut self.mask, x, y, self.settings.brush_radius);

        // Full scans are costly; only some moves pay for one
        if self.rng.random_bool(self.settings.sample_chance) {
            self.sample()
        } else {
            Response::Scratched
        }
    }

    fn sample(&mut self) -> Response {
        let fraction = transparent_fraction(&self.mask);
        self.last_fraction = fraction;
        if self.is_revealed() {
            return Response::Ignored;
        }
        if fraction >= self.settings.reveal_threshold {
            self.phase = Phase::Revealed;
            return Response::Revealed(fraction);
        }
        Response::Progress(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(sample_chance: f64) -> SurfaceSettings {
        SurfaceSettings { sample_chance, brush_radius: 10.0, ..SurfaceSettings::default() }
    }

    fn surface(w: usize, h: usize, s: SurfaceSettings) -> ScratchSurface {
        ScratchSurface::new(SessionId(1), w, h, s, 42, &GammaLut::new()).unwrap()
    }

    fn full_box(w: usize, h: usize) -> ElementBox {
        ElementBox::sized(w as f32, h as f32)
    }

    /// Sweep the whole surface in rows spaced by the brush radius.
    fn sweep(s: &mut ScratchSurface, bounds: ElementBox) -> Vec<Response> {
        let mut out = vec![s.handle(&PointerEvent::Down(ClientPoint::new(0.0, 0.0)), bounds)];
        let step = 5.0;
        let mut y = 0.0;
        while y <= bounds.height {
            let mut x = 0.0;
            while x <= bounds.width {
                out.push(s.handle(&PointerEvent::Move(ClientPoint::new(x, y)), bounds));
                x += step;
            }
            y += step;
        }
        out.push(s.handle(&PointerEvent::Up, bounds));
        out
    }

    #[test]
    fn zero_sized_surface_is_unavailable() {
        let err = ScratchSurface::new(SessionId(1), 0, 40, SurfaceSettings::default(), 1, &GammaLut::new());
        assert!(matches!(err, Err(Error::SurfaceUnavailable { width: 0, height: 40 })));
    }

    #[test]
    fn nan_settings_are_refused() {
        let lut = GammaLut::new();
        for bad in [
            SurfaceSettings { sample_chance: f64::NAN, ..SurfaceSettings::default() },
            SurfaceSettings { reveal_threshold: f64::NAN, ..SurfaceSettings::default() },
            SurfaceSettings { brush_radius: f32::NAN, ..SurfaceSettings::default() },
            SurfaceSettings { reveal_threshold: 0.0, ..SurfaceSettings::default() },
            SurfaceSettings { sample_chance: 1.5, ..SurfaceSettings::default() },
        ] {
            let err = ScratchSurface::new(SessionId(1), 10, 10, bad.clone(), 1, &lut);
            assert!(matches!(err, Err(Error::Config(_))), "accepted {bad:?}");
        }
        assert!(SurfaceSettings::default().validate().is_ok());
    }

    #[test]
    fn default_chance_samples_about_one_move_in_ten() {
        let mut s = surface(200, 200, settings(DEFAULT_SAMPLE_CHANCE));
        let b = full_box(200, 200);
        s.handle(&PointerEvent::Down(ClientPoint::new(100.0, 100.0)), b);

        let mut sampled = 0;
        for _ in 0..1000 {
            match s.handle(&PointerEvent::Move(ClientPoint::new(100.0, 100.0)), b) {
                Response::Progress(_) => sampled += 1,
                Response::Scratched => {}
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!((60..=140).contains(&sampled), "sampled {sampled} of 1000");
    }

    #[test]
    fn fresh_surface_is_covered() {
        let s = surface(80, 40, settings(0.0));
        assert_eq!(s.phase(), Phase::Covered);
        assert_eq!(s.revealed_fraction(), 0.0);
        assert!(!s.is_revealed());
        assert!(s.mask().alpha.iter().all(|&a| a == u8::MAX));
    }

    #[test]
    fn moves_without_a_stroke_do_nothing() {
        let mut s = surface(80, 40, settings(1.0));
        let r = s.handle(&PointerEvent::Move(ClientPoint::new(40.0, 20.0)), full_box(80, 40));
        assert_eq!(r, Response::Ignored);
        assert!(s.mask().alpha.iter().all(|&a| a == u8::MAX));
    }

    #[test]
    fn down_move_up_erases_and_samples() {
        let mut s = surface(200, 100, settings(0.0));
        let b = full_box(200, 100);
        assert_eq!(s.handle(&PointerEvent::Down(ClientPoint::new(20.0, 20.0)), b), Response::Scratched);
        assert!(s.is_drawing());
        assert_eq!(s.handle(&PointerEvent::Move(ClientPoint::new(60.0, 20.0)), b), Response::Scratched);

        match s.handle(&PointerEvent::Up, b) {
            Response::Progress(f) => assert!(f > 0.0 && f < 0.1, "fraction {f}"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.revealed_fraction() > 0.0);
    }

    #[test]
    fn end_without_stroke_still_samples() {
        let mut s = surface(50, 50, settings(0.0));
        assert_eq!(s.handle(&PointerEvent::Leave, full_box(50, 50)), Response::Progress(0.0));
    }

    #[test]
    fn moves_are_scaled_into_pixel_space() {
        // Element drawn at twice the buffer size
        let mut s = surface(100, 50, settings(0.0));
        let b = ElementBox::new(10.0, 10.0, 200.0, 100.0);
        s.handle(&PointerEvent::Down(ClientPoint::new(190.0, 90.0)), b);
        s.handle(&PointerEvent::Up, b);
        // (190-10)/2 = 90, (90-10)/2 = 40
        assert_eq!(s.mask().alpha[40 * 100 + 90], 0);
        assert_eq!(s.mask().alpha[0], u8::MAX);
    }

    #[test]
    fn only_first_touch_counts() {
        let mut s = surface(100, 100, settings(0.0));
        let b = full_box(100, 100);
        let touches = vec![ClientPoint::new(10.0, 10.0), ClientPoint::new(90.0, 90.0)];
        s.handle(&PointerEvent::TouchStart(touches.clone()), b);
        s.handle(&PointerEvent::TouchMove(touches), b);
        s.handle(&PointerEvent::TouchEnd, b);
        assert_eq!(s.mask().alpha[10 * 100 + 10], 0);
        assert_eq!(s.mask().alpha[90 * 100 + 90], u8::MAX);
    }

    #[test]
    fn empty_touch_list_is_ignored() {
        let mut s = surface(40, 40, settings(0.0));
        assert_eq!(s.handle(&PointerEvent::TouchStart(Vec::new()), full_box(40, 40)), Response::Ignored);
        assert!(!s.is_drawing());
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut s = surface(120, 60, settings(1.0));
        let b = full_box(120, 60);
        let responses = sweep(&mut s, b);
        let reveals = responses.iter().filter(|r| matches!(r, Response::Revealed(_))).count();
        assert_eq!(reveals, 1);
        assert!(s.is_revealed());

        // Further input is stale
        assert_eq!(s.handle(&PointerEvent::Down(ClientPoint::new(1.0, 1.0)), b), Response::Ignored);
        assert_eq!(s.handle(&PointerEvent::Up, b), Response::Ignored);
    }

    #[test]
    fn reveal_waits_for_stroke_end_when_moves_never_sample() {
        let mut s = surface(120, 60, settings(0.0));
        let responses = sweep(&mut s, full_box(120, 60));
        let (last, rest) = responses.split_last().unwrap();
        assert!(rest.iter().all(|r| *r == Response::Scratched));
        assert!(matches!(last, Response::Revealed(f) if *f >= 0.6));
    }

    #[test]
    fn revealed_never_flips_back() {
        let mut s = surface(120, 60, settings(0.0));
        let b = full_box(120, 60);
        sweep(&mut s, b);
        assert!(s.is_revealed());

        // Pretend a later sample sees a lower share
        s.mask.alpha.iter_mut().for_each(|a| *a = u8::MAX);
        assert_eq!(s.sample(), Response::Ignored);
        assert_eq!(s.revealed_fraction(), 0.0);
        assert!(s.is_revealed());
    }

    #[test]
    fn below_threshold_stays_covered() {
        let mut s = surface(400, 200, settings(1.0));
        let b = full_box(400, 200);
        s.handle(&PointerEvent::Down(ClientPoint::new(200.0, 100.0)), b);
        let r = s.handle(&PointerEvent::Up, b);
        assert!(matches!(r, Response::Progress(f) if f < 0.6));
        assert!(!s.is_revealed());
    }

    #[test]
    fn degenerate_box_is_ignored() {
        let mut s = surface(40, 40, settings(0.0));
        let r = s.handle(&PointerEvent::Down(ClientPoint::new(5.0, 5.0)), ElementBox::sized(0.0, 0.0));
        assert_eq!(r, Response::Ignored);
        assert!(!s.is_drawing());
        assert!(s.mask().alpha.iter().all(|&a| a == u8::MAX));
    }
}
