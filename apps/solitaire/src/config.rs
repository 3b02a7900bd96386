//! Runtime configuration from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::error::AppError;
use crate::render::{MIN_HEIGHT, MIN_WIDTH};

pub const DEFAULT_SAVE_PATH: &str = "solitaire.save.json";
pub const DEFAULT_WIDTH: usize = 90;
pub const DEFAULT_HEIGHT: usize = 35;
pub const DEFAULT_FRAME_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default file for save and load.
    pub save_path: PathBuf,
    /// Fixed shuffle seed; OS entropy when unset.
    pub seed: Option<u64>,
    pub screen_width: usize,
    pub screen_height: usize,
    /// Pause between auto-complete frames.
    pub autoplay_frame: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
            screen_width: DEFAULT_WIDTH,
            screen_height: DEFAULT_HEIGHT,
            autoplay_frame: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

impl Config {
    /// Read `SOLITAIRE_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            save_path: non_blank(&lookup, "SOLITAIRE_SAVE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.save_path),
            seed: parse_var(&lookup, "SOLITAIRE_SEED")?,
            screen_width: parse_var(&lookup, "SOLITAIRE_SCREEN_WIDTH")?
                .unwrap_or(defaults.screen_width),
            screen_height: parse_var(&lookup, "SOLITAIRE_SCREEN_HEIGHT")?
                .unwrap_or(defaults.screen_height),
            autoplay_frame: parse_var(&lookup, "SOLITAIRE_AUTOPLAY_FRAME_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.autoplay_frame),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the board fits on the configured screen.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.screen_width < MIN_WIDTH || self.screen_height < MIN_HEIGHT {
            return Err(AppError::config(format!(
                "screen {}x{} is smaller than the board ({MIN_WIDTH}x{MIN_HEIGHT})",
                self.screen_width, self.screen_height
            )));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_blank(lookup, name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
    }
}

/// Value of `name`, or `None` when unset or blank. Blank values are logged.
fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    if raw.trim().is_empty() {
        warn!(variable = name, "blank value ignored, using the default");
        return None;
    }
    Some(raw)
}
