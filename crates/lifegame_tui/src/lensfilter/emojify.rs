use super::{LensFilter, Symbols};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const ALIVE_EMOJIS: [&str; 10] = ["😆", "🤣", "😊", "🥰", "😍", "🤗", "🤭", "😋", "🤤", "😤"];
pub const DEAD_EMOJIS: [&str; 9] = ["🤢", "🥶", "🥵", "😡", "🤬", "😈", "👿", "🤡", "👻"];

/// One happy face for the living, one grim face for the dead, picked once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emojify(Symbols);

impl Emojify {
    pub fn new(alive: char, dead: char) -> Self {
        Self(Symbols::new(alive, dead))
    }

    /// Draws both faces from the curated sets. The same seed always yields the
    /// same pair.
    pub fn random(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let alive = ALIVE_EMOJIS[rng.gen_range(0..ALIVE_EMOJIS.len())];
        let dead = DEAD_EMOJIS[rng.gen_range(0..DEAD_EMOJIS.len())];
        Self(Symbols::new(alive, dead))
    }
}

impl LensFilter for Emojify {
    fn symbols(&self) -> &Symbols {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_seeded() {
        assert_eq!(Emojify::random(Some(11)), Emojify::random(Some(11)));
    }

    #[test]
    fn test_random_picks_from_sets() {
        for seed in 0..32 {
            let lens = Emojify::random(Some(seed));
            assert!(ALIVE_EMOJIS.contains(&lens.symbols().alive.as_str()));
            assert!(DEAD_EMOJIS.contains(&lens.symbols().dead.as_str()));
        }
    }

    #[test]
    fn test_sets_are_disjoint() {
        assert!(ALIVE_EMOJIS.iter().all(|e| !DEAD_EMOJIS.contains(e)));
    }
}
