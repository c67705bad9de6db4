// What you SEE:
// • A pink scratch card fills the window.
// • Hold Left Mouse and drag: the cover is scratched away under the pointer.
// • Past 60% scratched, the rest of the cover fades out, the prize box fades
//   in and sparkles burst from the middle.
// • N (or Space) deals a new card. ESC quits.
//
// Usage: scratch-lotto [config.json]   (or set SCRATCH_LOTTO_CONFIG)

mod window;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scratch_lotto::compose::{Fade, compose_card};
use scratch_lotto::config::ScratchConfig;
use scratch_lotto::draw::draw_text;
use scratch_lotto::error::Error;
use scratch_lotto::face::{Branding, render_face};
use scratch_lotto::fx::Fx;
use scratch_lotto::gamma::GammaLut;
use scratch_lotto::input::PointerTracker;
use scratch_lotto::logo::load_logo;
use scratch_lotto::round::{Card, RoundController};
use scratch_lotto::surface::{Response, SessionId};
use scratch_lotto::types::FrameBuffer;
use image::DynamicImage;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use window::Drawer;

const PAGE_BG: u32 = 0x00_FF_F1_F2;
const HUD_COLOR: u32 = 0x00_88_13_37;
const COVER_FADE_MS: f32 = 1_000.0;
const PRIZE_FADE_MS: f32 = 700.0;
const SPARKLES: usize = 160;

/// Pre-rendered layers for the card on screen.
struct CardView {
    session: SessionId,
    hidden: FrameBuffer,
    shown: FrameBuffer,
    screen: FrameBuffer,
}

impl CardView {
    fn build(card: &Card, title: &str, logo: Option<&DynamicImage>, lut: &GammaLut) -> Self {
        let (w, h) = card.surface.dimensions();
        let branding = Branding::for_card(title, logo, h);
        Self {
            session: card.surface.id(),
            hidden: render_face(w, h, None, &branding, lut),
            shown: render_face(w, h, Some(&card.prize.name), &branding, lut),
            screen: FrameBuffer::filled(w, h, PAGE_BG),
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Config: prize pool, title/logo, tuning --- */
    let cfg = ScratchConfig::resolve(std::env::args_os().nth(1).map(PathBuf::from))?;
    let seed = cfg.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("{} prizes, seed {seed}", cfg.prizes.len());

    let logo = match &cfg.logo {
        Some(path) => match load_logo(path) {
            Ok(img) => Some(img),
            Err(e) => {
                log::warn!("{e}; showing the title instead");
                None
            }
        },
        None => None,
    };

    /* --- Window + round state --- */
    let mut drawer = Drawer::new(&cfg.title, cfg.window.width, cfg.window.height)?;
    let mut rounds = RoundController::new(cfg.prizes.clone(), cfg.surface.clone(), cfg.new_card_delay(), seed)?;
    let mut fx_rng = StdRng::seed_from_u64(seed.rotate_left(17));
    let mut fx = Fx::new(600);
    let mut tracker = PointerTracker::new();
    let mut view: Option<CardView> = None;
    let mut blank = FrameBuffer::filled(1, 1, PAGE_BG);

    let mut last_frame = Instant::now();
    let mut last_fps = last_frame;
    let mut frames = 0u32;

    rounds.request_new_card(last_frame);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        /* 1) New card: phase 1 drops the old card right now */
        if drawer.new_card_pressed() {
            rounds.request_new_card(now);
            view = None;
            fx.clear();
        }

        /* 2) Phase 2 (after the cleared frame was shown): size from the window */
        let bounds = drawer.element_box();
        let layout = (bounds.width as usize, bounds.height as usize);
        if rounds.tick(now, layout)?.is_some() {
            if let Some(card) = rounds.card() {
                view = Some(CardView::build(card, &cfg.title, logo.as_ref(), rounds.lut()));
            }
        }

        /* 3) Input -> erase strokes for the live session only */
        let events = tracker.poll(drawer.pointer(), drawer.left_mouse_down());
        if let Some(id) = rounds.session_id() {
            for ev in &events {
                if let Response::Revealed(_) = rounds.handle(id, ev, bounds, now) {
                    if let Some(card) = rounds.card() {
                        let (w, h) = card.surface.dimensions();
                        fx.burst(&mut fx_rng, w as f32 / 2.0, h as f32 / 2.0, SPARKLES);
                    }
                }
            }
        }

        /* 4) Draw: either the card or the cleared page */
        match (rounds.card(), view.as_mut()) {
            (Some(card), Some(v)) if v.session == card.surface.id() => {
                let fade = match card.revealed_at {
                    Some(t) => Fade::after_reveal(
                        now.duration_since(t).as_secs_f32() * 1_000.0,
                        COVER_FADE_MS,
                        PRIZE_FADE_MS,
                    ),
                    None => Fade::COVERED,
                };
                compose_card(
                    &mut v.screen,
                    &v.hidden,
                    &v.shown,
                    card.surface.cover(),
                    card.surface.mask(),
                    fade,
                    rounds.lut(),
                )?;
                fx.update_and_render(&mut v.screen, dt);

                let hud = format!("{:.0}% | N: NEW CARD", card.surface.revealed_fraction() * 100.0);
                draw_text(&mut v.screen, 8, 8, &hud, 2, HUD_COLOR);
                drawer.present(&v.screen)?;
            }
            _ => {
                let (w, h) = (layout.0.max(1), layout.1.max(1));
                if blank.width != w || blank.height != h {
                    blank = FrameBuffer::filled(w, h, PAGE_BG);
                }
                drawer.present(&blank)?;
            }
        }

        /* 5) FPS, once per second */
        frames += 1;
        if now.duration_since(last_fps) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps).as_secs_f32();
            log::debug!("FPS: {:.1}", frames as f32 / secs);
            frames = 0;
            last_fps = now;
        }
    }

    Ok(())
}
