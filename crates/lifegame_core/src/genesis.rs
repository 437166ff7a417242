//! World initialization.

use crate::error::{LifeError, Result};
use lifegame_data::{Generation, Shape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Produces the starting generation of a world.
///
/// `epoch` counts how many times the world has been recreated: `0` for the
/// initial grid, `n` for the n-th reset that asked for a fresh one.
pub trait WorldCreator: Send {
    fn create(&self, shape: Shape, epoch: u64) -> Generation;
}

impl<F> WorldCreator for F
where
    F: Fn(Shape, u64) -> Generation + Send,
{
    fn create(&self, shape: Shape, epoch: u64) -> Generation {
        self(shape, epoch)
    }
}

/// What a reset hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// The exact grid the world started with.
    #[default]
    Replay,
    /// A new grid on every reset.
    Reroll,
}

/// Rolls a die for every cell: alive with probability `density`.
///
/// The output depends only on `(seed, shape, density, epoch)`. Without an
/// explicit seed one is drawn from OS entropy at construction, so replayed
/// resets still reproduce the first world. Each epoch reads its own ChaCha
/// stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DicingGod {
    seed: u64,
    density: f64,
}

impl DicingGod {
    pub fn new(seed: Option<u64>, density: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::invalid_parameter(
                "density",
                format!("{density} is outside 0.0..=1.0"),
            ));
        }
        let seed = seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen());
        Ok(Self { seed, density })
    }

    /// The seed in use, drawn from entropy when none was given.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    fn rng(&self, epoch: u64) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(epoch);
        rng
    }
}

impl WorldCreator for DicingGod {
    fn create(&self, shape: Shape, epoch: u64) -> Generation {
        let mut rng = self.rng(epoch);
        tracing::debug!(
            rows = shape.rows,
            cols = shape.cols,
            seed = self.seed,
            epoch,
            "Creating world"
        );
        Generation::from_fn(shape, |_, _| rng.gen_bool(self.density))
    }
}
