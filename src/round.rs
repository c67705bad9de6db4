// Round controller: drives "new card" requests and owns the live session.
//
// A new card happens in two phases:
//   1) `request_new_card` drops the current prize + surface right away;
//   2) a later `tick`, once the cleared state has been seen by at least one
//      tick and the delay has passed, draws the prize and builds a fresh
//      surface with a new session id.
// The old surface is never reused, so a stroke that was in flight simply
// disappears with it.

use crate::coords::ElementBox;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::prize::{Prize, select_weighted_random, validate_pool};
use crate::surface::{PointerEvent, Response, ScratchSurface, SessionId, SurfaceSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// One drawn card: the winner and the surface hiding it.
pub struct Card {
    pub prize: Prize,
    pub surface: ScratchSurface,
    pub revealed_at: Option<Instant>,
}

enum RoundState {
    /// Nothing requested yet.
    Empty,
    /// Phase 1 applied; waiting to build the next card.
    Clearing { requested_at: Instant, observed: bool },
    Active(Card),
}

pub struct RoundController<R: Rng = StdRng> {
    pool: Vec<Prize>,
    settings: SurfaceSettings,
    delay: Duration,
    rng: R,
    next_id: u64,
    state: RoundState,
    lut: GammaLut,
}

impl RoundController<StdRng> {
    pub fn new(pool: Vec<Prize>, settings: SurfaceSettings, delay: Duration, seed: u64) -> Result<Self, Error> {
        Self::with_rng(pool, settings, delay, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundController<R> {
    /// Build with an explicit random source (prize draw + cover seeds).
    pub fn with_rng(pool: Vec<Prize>, settings: SurfaceSettings, delay: Duration, rng: R) -> Result<Self, Error> {
        validate_pool(&pool)?;
        settings.validate()?;
        Ok(Self {
            pool,
            settings,
            delay,
            rng,
            next_id: 1,
            state: RoundState::Empty,
            lut: GammaLut::new(),
        })
    }

    pub fn pool(&self) -> &[Prize] {
        &self.pool
    }

    /// Replace the pool; takes effect on the next card.
    pub fn set_pool(&mut self, pool: Vec<Prize>) -> Result<(), Error> {
        validate_pool(&pool)?;
        self.pool = pool;
        Ok(())
    }

    pub fn lut(&self) -> &GammaLut {
        &self.lut
    }

    /// Phase 1: forget the current card right away.
    pub fn request_new_card(&mut self, now: Instant) {
        if let RoundState::Active(card) = &self.state {
            log::debug!("dropping session {}", card.surface.id());
        }
        self.state = RoundState::Clearing { requested_at: now, observed: false };
    }

    pub fn is_clearing(&self) -> bool {
        matches!(self.state, RoundState::Clearing { .. })
    }

    /// Phase 2. `layout` is the element size in device pixels right now.
    /// Returns the id of a card built by this tick.
    pub fn tick(&mut self, now: Instant, layout: (usize, usize)) -> Result<Option<SessionId>, Error> {
        let RoundState::Clearing { requested_at, observed } = &mut self.state else {
            return Ok(None);
        };
        if !*observed {
            *observed = true;
            return Ok(None);
        }
        if now.duration_since(*requested_at) < self.delay {
            return Ok(None);
        }
        let (width, height) = layout;
        if width == 0 || height == 0 {
            log::debug!("layout is {width}x{height}, deferring new card");
            return Ok(None);
        }

        let prize = select_weighted_random(&self.pool, &mut self.rng)?.clone();
        let id = SessionId(self.next_id);
        let seed: u64 = self.rng.random();
        let surface = ScratchSurface::new(id, width, height, self.settings.clone(), seed, &self.lut)?;

        self.next_id += 1;
        log::info!("session {id} started: {width}x{height}, prize {} ({})", prize.id, prize.name);
        self.state = RoundState::Active(Card { prize, surface, revealed_at: None });
        Ok(Some(id))
    }

    pub fn card(&self) -> Option<&Card> {
        match &self.state {
            RoundState::Active(card) => Some(card),
            _ => None,
        }
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.card().map(|c| c.surface.id())
    }

    pub fn is_revealed(&self) -> bool {
        self.card().is_some_and(|c| c.surface.is_revealed())
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        self.card().and_then(|c| c.revealed_at)
    }

    /// Route an input event to the session it was captured for.
    /// Events for a dropped or replaced session are ignored.
    pub fn handle(&mut self, session: SessionId, event: &PointerEvent, bounds: ElementBox, now: Instant) -> Response {
        let RoundState::Active(card) = &mut self.state else {
            return Response::Ignored;
        };
        if card.surface.id() != session {
            return Response::Ignored;
        }

        let response = card.surface.handle(event, bounds);
        if let Response::Revealed(fraction) = response {
            card.revealed_at = Some(now);
            log::info!(
                "session {session} revealed at {:.1}%: {}",
                fraction * 100.0,
                card.prize.name
            );
        }
        response
    }
}
