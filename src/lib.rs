//! Scratch-card lottery: weighted prize draw plus an erasable cover surface
//! that reports reveal progress and fires a one-shot reveal.
//!
//! The library is headless. `round::RoundController` is the entry point for
//! hosts: request a card, tick it into existence, feed it pointer events,
//! and render `round::Card` through `face` and `compose`.

pub mod compose;
pub mod config;
pub mod coords;
pub mod cover;
pub mod draw;
pub mod error;
pub mod face;
pub mod fx;
pub mod gamma;
pub mod input;
pub mod logo;
pub mod mask;
pub mod prize;
pub mod round;
pub mod surface;
pub mod types;

pub use coords::{ClientPoint, ElementBox};
pub use error::Error;
pub use prize::{Prize, select_weighted_random};
pub use round::{Card, RoundController};
pub use surface::{PointerEvent, Response, ScratchSurface, SessionId, SurfaceSettings};
