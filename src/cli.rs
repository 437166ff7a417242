//! Command-line arguments and how they layer over the configuration file.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lifegame_core::config::{AppConfig, FilterKind};
use std::path::{Path, PathBuf};

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lifegame.toml";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Conway's Game of Life in the terminal", long_about = None)]
pub struct Args {
    /// Number of rows of the world
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    pub nrows: Option<i64>,

    /// Number of columns of the world
    #[arg(short = 'c', long, allow_negative_numbers = true)]
    pub ncols: Option<i64>,

    /// Seed of the initial population; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability of a cell starting alive
    #[arg(short = 'p', long)]
    pub density: Option<f64>,

    /// Lens used to draw the world
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Colour of live cells (dye lens)
    #[arg(short = 'A', long)]
    pub color_alive: Option<String>,

    /// Colour of dead cells (dye lens)
    #[arg(short = 'D', long)]
    pub color_dead: Option<String>,

    /// Seed of the random lenses
    #[arg(long)]
    pub lens_seed: Option<u64>,

    /// Stop after this many iterations
    #[arg(short = 'i', long)]
    pub iteration_max: Option<u64>,

    /// Upper bound of frames per second
    #[arg(long)]
    pub fps_max: Option<f64>,

    /// Show the stats block under the world
    #[arg(long, conflicts_with = "hide_stats")]
    pub show_stats: bool,

    /// Hide the stats block
    #[arg(long)]
    pub hide_stats: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterArg {
    Digitize,
    AsciiDigitize,
    Blockify,
    Emojify,
    Hanzi,
    Dye,
    RandomDye,
}

impl From<FilterArg> for FilterKind {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Digitize => FilterKind::Digitize,
            FilterArg::AsciiDigitize => FilterKind::AsciiDigitize,
            FilterArg::Blockify => FilterKind::Blockify,
            FilterArg::Emojify => FilterKind::Emojify,
            FilterArg::Hanzi => FilterKind::Hanzi,
            FilterArg::Dye => FilterKind::Dye,
            FilterArg::RandomDye => FilterKind::RandomDye,
        }
    }
}

impl Args {
    /// Loads the configuration file and applies these flags on top.
    ///
    /// An explicit `--config` must exist. The default file is optional.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let config = match &self.config {
            Some(path) => load(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    load(path)?
                } else {
                    AppConfig::default()
                }
            }
        };
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Overrides every field of `config` that was given on the command line.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(rows) = self.nrows {
            config.world.rows = rows;
        }
        if let Some(cols) = self.ncols {
            config.world.cols = cols;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if let Some(density) = self.density {
            config.world.density = density;
        }

        if let Some(filter) = self.filter {
            config.lens.filter = filter.into();
        }
        if let Some(color) = &self.color_alive {
            config.lens.color_alive = color.clone();
        }
        if let Some(color) = &self.color_dead {
            config.lens.color_dead = color.clone();
        }
        if self.lens_seed.is_some() {
            config.lens.seed = self.lens_seed;
        }

        if self.iteration_max.is_some() {
            config.screen.iteration_max = self.iteration_max;
        }
        if let Some(fps_max) = self.fps_max {
            config.screen.fps_max = fps_max;
        }
        if self.show_stats {
            config.screen.show_stats = true;
        }
        if self.hide_stats {
            config.screen.show_stats = false;
        }
        config
    }
}

fn load(path: &Path) -> Result<AppConfig> {
    AppConfig::load(path).with_context(|| format!("loading config from {}", path.display()))
}
