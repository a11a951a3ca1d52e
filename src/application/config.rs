use std::time::Duration;

use crate::domain::{Orientation, presets};
use crate::error::{AppError, Result};

/// Runtime settings for a simulation run.
///
/// Defaults reproduce the classic setup: a glider at (10, 10) on a
/// 150x50 board drawn with `*` and `-`, advancing every 17 ms forever.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub alive_glyph: String,
    pub dead_glyph: String,
    pub pattern: Option<String>,
    pub orientation: Orientation,
    pub row_offset: usize,
    pub col_offset: usize,
    pub tick: Duration,
    /// Stop after this many generations; `None` runs until interrupted
    pub generations: Option<u64>,
    pub parallel: bool,
    /// Fill the board randomly with this density before stamping
    pub random_density: Option<f64>,
    pub seed: Option<u64>,
    pub show_stats: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 150,
            height: 50,
            alive_glyph: "*".to_string(),
            dead_glyph: "-".to_string(),
            pattern: Some("glider".to_string()),
            orientation: Orientation::Up,
            row_offset: 10,
            col_offset: 10,
            tick: Duration::from_millis(17),
            generations: None,
            parallel: false,
            random_density: None,
            seed: None,
            show_stats: false,
        }
    }
}

impl LifeConfig {
    /// Reject settings that cannot produce a sensible run.
    /// Grid dimensions and offsets are checked by the grid itself.
    pub fn validate(&self) -> Result<()> {
        if self.alive_glyph.is_empty() || self.dead_glyph.is_empty() {
            return Err(AppError::Config("glyphs must not be empty".to_string()));
        }
        if self.alive_glyph == self.dead_glyph {
            return Err(AppError::Config(format!(
                "alive and dead glyphs are both '{}'",
                self.alive_glyph
            )));
        }
        if let Some(density) = self.random_density {
            if !(0.0..=1.0).contains(&density) {
                return Err(AppError::Config(format!(
                    "random density {density} is outside 0.0..=1.0"
                )));
            }
        }
        if let Some(name) = &self.pattern {
            if presets::find(name).is_none() {
                return Err(AppError::Config(format!(
                    "unknown pattern '{name}' (available: {})",
                    presets::names().join(", ")
                )));
            }
        }
        Ok(())
    }
}
