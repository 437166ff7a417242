use super::{LensFilter, Symbols};
use crossterm::style::Stylize;

/// Binary digits in bold green, dead cells dimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digitize(Symbols);

impl Default for Digitize {
    fn default() -> Self {
        Self::new()
    }
}

impl Digitize {
    /// Full-width digits, two columns per cell.
    pub fn new() -> Self {
        Self::with_glyphs("１", "０")
    }

    /// Half-width digits padded to two columns, for terminals without
    /// full-width glyphs.
    pub fn ascii() -> Self {
        Self::with_glyphs("1 ", "0 ")
    }

    fn with_glyphs(alive: &str, dead: &str) -> Self {
        Self(Symbols::new(
            alive.green().bold().to_string(),
            dead.green().bold().dim().to_string(),
        ))
    }
}

impl LensFilter for Digitize {
    fn symbols(&self) -> &Symbols {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_present() {
        let full = Digitize::new();
        assert!(full.symbols().alive.contains('１'));
        assert!(full.symbols().dead.contains('０'));
        let ascii = Digitize::ascii();
        assert!(ascii.symbols().alive.contains("1 "));
        assert_ne!(ascii.symbols().alive, ascii.symbols().dead);
    }
}
