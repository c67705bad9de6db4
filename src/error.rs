// Error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Prize pool is empty or carries no positive weight.
    #[error("invalid prize pool: {0}")]
    InvalidPool(String),
    /// Host element has no usable box yet (not laid out, minimized, ...).
    #[error("scratch surface unavailable: {width}x{height}")]
    SurfaceUnavailable { width: usize, height: usize },
    /// Buffers handed to the compositor disagree on size.
    #[error("render error: {0}")]
    Render(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("logo error: {0}")]
    Logo(String),
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Config(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(value: image::ImageError) -> Self {
        Self::Logo(value.to_string())
    }
}
