use super::{LensFilter, Symbols};
use crossterm::style::Stylize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hanzi(Symbols);

impl Default for Hanzi {
    fn default() -> Self {
        Self::new()
    }
}

impl Hanzi {
    pub fn new() -> Self {
        Self(Symbols::new(
            '生'.bold().to_string(),
            '死'.bold().dim().to_string(),
        ))
    }
}

impl LensFilter for Hanzi {
    fn symbols(&self) -> &Symbols {
        &self.0
    }
}
