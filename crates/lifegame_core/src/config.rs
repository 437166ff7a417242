//! Configuration for a lifegame session.
//!
//! Values are resolved in three layers:
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. A TOML file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `lifegame.toml`
//!
//! ```toml
//! [world]
//! rows = 40
//! cols = 60
//! seed = 42
//! density = 0.3
//!
//! [screen]
//! fps_max = 30.0
//! iteration_max = 500
//! show_stats = true
//!
//! [lens]
//! filter = "dye"
//! color_alive = "white"
//! color_dead = "blue"
//! ```

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Grid dimensions and initial population.
///
/// Dimensions are signed so that a negative value coming from a file or the
/// command line is reported as an invalid dimension rather than a parse error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub rows: i64,
    pub cols: i64,
    pub seed: Option<u64>,
    /// Probability of a cell starting alive.
    pub density: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            seed: None,
            density: 0.5,
        }
    }
}

/// Margins and column widths of a rendered frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub x_offset: usize,
    pub y_offset: usize,
    /// Blank lines between the grid, the stats block and the banner.
    pub section_sep: usize,
    pub label_width: usize,
    pub value_width: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            x_offset: 2,
            y_offset: 1,
            section_sep: 2,
            label_width: 20,
            value_width: 40,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    pub fps_max: f64,
    /// Run forever when unset.
    pub iteration_max: Option<u64>,
    pub show_stats: bool,
    pub style: StyleConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            fps_max: 24.0,
            iteration_max: None,
            show_stats: true,
            style: StyleConfig::default(),
        }
    }
}

/// Which lens the world is observed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Digitize,
    AsciiDigitize,
    Blockify,
    Emojify,
    Hanzi,
    #[default]
    Dye,
    RandomDye,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LensConfig {
    pub filter: FilterKind,
    pub color_alive: String,
    pub color_dead: String,
    /// Seed for the random lenses (emoji and random dye).
    pub seed: Option<u64>,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            filter: FilterKind::Dye,
            color_alive: "white".to_string(),
            color_dead: "green".to_string(),
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub screen: ScreenConfig,
    pub lens: LensConfig,
}

impl AppConfig {
    /// Validates every range that can be checked without building anything.
    ///
    /// Colour names are checked by the lens factory, which owns the palette.
    pub fn validate(&self) -> Result<()> {
        let WorldConfig { rows, cols, .. } = self.world;
        if rows < 0 || cols < 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        if !(0.0..=1.0).contains(&self.world.density) {
            return Err(LifeError::invalid_parameter(
                "density",
                format!("{} is outside 0.0..=1.0", self.world.density),
            ));
        }
        validate_fps_max(self.screen.fps_max)?;
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LifeError::config(e.to_string()))
    }
}

/// `fps_max` must be a finite positive number.
pub fn validate_fps_max(fps_max: f64) -> Result<()> {
    if fps_max.is_finite() && fps_max > 0.0 {
        Ok(())
    } else {
        Err(LifeError::invalid_parameter(
            "fps_max",
            format!("{fps_max} is not a finite positive number"),
        ))
    }
}
