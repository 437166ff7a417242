//! Lenses turn a generation into printable rows.
//!
//! Every lens substitutes one symbol for live cells and another for dead
//! cells; they differ only in what those symbols look like. All symbols of a
//! lens occupy the same terminal width so rows stay aligned.

pub mod blockify;
pub mod digitize;
pub mod dye;
pub mod emojify;
pub mod hanzi;

pub use blockify::Blockify;
pub use digitize::Digitize;
pub use dye::Dye;
pub use emojify::Emojify;
pub use hanzi::Hanzi;

use lifegame_core::config::{FilterKind, LensConfig};
use lifegame_core::{BioSquare, Result};
use lifegame_data::Generation;

/// Rendered rows of one frame, top to bottom. Finite and single-use: observe
/// again to re-render.
pub type Rows<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// The two symbols a lens prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    pub alive: String,
    pub dead: String,
}

impl Symbols {
    pub fn new(alive: impl Into<String>, dead: impl Into<String>) -> Self {
        Self {
            alive: alive.into(),
            dead: dead.into(),
        }
    }

    pub fn pick(&self, alive: bool) -> &str {
        if alive {
            &self.alive
        } else {
            &self.dead
        }
    }
}

pub trait LensFilter: Send {
    fn symbols(&self) -> &Symbols;

    /// One string per row of `generation`.
    fn observe<'a>(&'a self, generation: &'a Generation) -> Rows<'a> {
        project(self.symbols(), generation)
    }
}

/// Lets a world be viewed through a lens directly.
pub trait Observe {
    fn observe<'a>(&'a self, lens: &'a dyn LensFilter) -> Rows<'a>;
}

impl Observe for BioSquare {
    fn observe<'a>(&'a self, lens: &'a dyn LensFilter) -> Rows<'a> {
        lens.observe(self.current())
    }
}

fn project<'a>(symbols: &'a Symbols, generation: &'a Generation) -> Rows<'a> {
    let line_len = symbols.alive.len().max(symbols.dead.len()) * generation.cols();
    Box::new(generation.iter_rows().map(move |row| {
        let mut line = String::with_capacity(line_len);
        for &alive in row {
            line.push_str(symbols.pick(alive));
        }
        line
    }))
}

/// Builds the lens named in `config`.
pub fn build(config: &LensConfig) -> Result<Box<dyn LensFilter>> {
    let lens: Box<dyn LensFilter> = match config.filter {
        FilterKind::Digitize => Box::new(Digitize::new()),
        FilterKind::AsciiDigitize => Box::new(Digitize::ascii()),
        FilterKind::Blockify => Box::new(Blockify::new()),
        FilterKind::Emojify => Box::new(Emojify::random(config.seed)),
        FilterKind::Hanzi => Box::new(Hanzi::new()),
        FilterKind::Dye => Box::new(Dye::from_names(&config.color_alive, &config.color_dead)?),
        FilterKind::RandomDye => Box::new(Dye::random(config.seed)),
    };
    tracing::debug!(filter = ?config.filter, symbols = ?lens.symbols(), "Lens built");
    Ok(lens)
}
