// Card configuration: prize pool, branding and tuning, read from JSON.
//
// {
//   "title": "SIMPLE PINK LOTTO",
//   "logo": "brand.png",
//   "prizes": [ { "id": "1", "name": "JACKPOT $5,000", "weight": 1 }, ... ],
//   "surface": { "reveal_threshold": 0.6, "brush_radius": 100.0 },
//   "window": { "width": 960, "height": 480 },
//   "new_card_delay_ms": 50,
//   "seed": 7
// }
//
// Every field is optional; missing ones take the stock values.

use crate::error::Error;
use crate::prize::{Prize, default_prizes, validate_pool};
use crate::surface::SurfaceSettings;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "SCRATCH_LOTTO_CONFIG";
pub const DEFAULT_TITLE: &str = "SIMPLE PINK LOTTO";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: usize,
    pub height: usize,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { width: 960, height: 480 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    pub title: String,
    pub logo: Option<PathBuf>,
    pub prizes: Vec<Prize>,
    pub surface: SurfaceSettings,
    pub window: WindowSettings,
    pub new_card_delay_ms: u64,
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            logo: None,
            prizes: default_prizes(),
            surface: SurfaceSettings::default(),
            window: WindowSettings::default(),
            new_card_delay_ms: 50,
            seed: None,
        }
    }
}

impl ScratchConfig {
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let cfg: ScratchConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let cfg: ScratchConfig = serde_json::from_reader(BufReader::new(file))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// First CLI argument, then `$SCRATCH_LOTTO_CONFIG`, then built-in defaults.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self, Error> {
        let path = cli_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(p) => {
                log::info!("loading config from {}", p.display());
                Self::from_path(&p)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn new_card_delay(&self) -> Duration {
        Duration::from_millis(self.new_card_delay_ms)
    }

    pub fn validate(&self) -> Result<(), Error> {
        validate_pool(&self.prizes)?;
        self.surface.validate()?;
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::Config("window must have a non-zero size".into()));
        }
        Ok(())
    }
}
