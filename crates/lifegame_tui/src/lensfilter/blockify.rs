use super::{LensFilter, Symbols};

/// Solid blocks for live cells, blanks for dead ones. Unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blockify(Symbols);

impl Default for Blockify {
    fn default() -> Self {
        Self::new()
    }
}

impl Blockify {
    pub fn new() -> Self {
        Self(Symbols::new("██", "  "))
    }
}

impl LensFilter for Blockify {
    fn symbols(&self) -> &Symbols {
        &self.0
    }
}
