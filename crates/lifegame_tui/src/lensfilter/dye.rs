use super::{LensFilter, Symbols};
use crate::palette::Color;
use crossterm::style::Stylize;
use lifegame_core::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Two half-width spaces; a full-width space is drawn inconsistently across terminals.
const PLACEHOLDER: &str = "  ";

/// Cells painted as background colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dye {
    colors: (Color, Color),
    symbols: Symbols,
}

impl Dye {
    pub fn new(alive: Color, dead: Color) -> Self {
        let symbols = Symbols::new(
            PLACEHOLDER.on(alive.into()).to_string(),
            PLACEHOLDER.on(dead.into()).to_string(),
        );
        Self {
            colors: (alive, dead),
            symbols,
        }
    }

    /// Looks both colours up in the palette.
    pub fn from_names(alive: &str, dead: &str) -> Result<Self> {
        Ok(Self::new(alive.parse()?, dead.parse()?))
    }

    /// Two distinct palette colours, drawn without replacement.
    pub fn random(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let picks = rand::seq::index::sample(&mut rng, Color::ALL.len(), 2);
        Self::new(Color::ALL[picks.index(0)], Color::ALL[picks.index(1)])
    }

    /// `(alive, dead)`
    pub fn colors(&self) -> (Color, Color) {
        self.colors
    }
}

impl LensFilter for Dye {
    fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}
