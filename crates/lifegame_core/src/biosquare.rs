//! The toroidal Game of Life world.

use crate::error::{LifeError, Result};
use crate::genesis::{ResetPolicy, WorldCreator};
use lifegame_data::{Generation, Shape};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Weight of the centre cell in the 3x3 kernel. Any value below -8 keeps the
/// scores of live and dead cells apart.
const CENTER_WEIGHT: i8 = -9;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct BioSquare {
    current: Generation,
    next: Generation,
    creator: Box<dyn WorldCreator>,
    reset_policy: ResetPolicy,
    epoch: u64,
    generation: u64,
}

impl BioSquare {
    /// Creates a world of `rows x cols` cells seeded by `creator`.
    pub fn new(rows: i64, cols: i64, creator: Box<dyn WorldCreator>) -> Result<Self> {
        if rows < 0 || cols < 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        let shape = Shape::new(rows as usize, cols as usize);
        let current = checked_create(creator.as_ref(), shape, 0)?;
        let next = current.clone();

        Ok(Self {
            current,
            next,
            creator,
            reset_policy: ResetPolicy::default(),
            epoch: 0,
            generation: 0,
        })
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn shape(&self) -> Shape {
        self.current.shape()
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Generations computed since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn population_density(&self) -> f64 {
        self.current.density()
    }

    /// Moves the world one generation forward.
    pub fn advance(&mut self) -> &mut Self {
        self.generation += 1;

        if self.current.size() == 0 {
            return self;
        }

        let current = &self.current;
        let cols = current.cols();

        #[cfg(feature = "parallel")]
        self.next
            .as_mut_slice()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, cells)| evolve_row(current, row, cells));

        #[cfg(not(feature = "parallel"))]
        self.next
            .as_mut_slice()
            .chunks_mut(cols)
            .enumerate()
            .for_each(|(row, cells)| evolve_row(current, row, cells));

        std::mem::swap(&mut self.current, &mut self.next);
        self
    }

    /// Replaces the world with a fresh one of the same shape.
    ///
    /// Fails with [`LifeError::InvalidDimension`] if the creator hands back a
    /// different shape; the world is left untouched then.
    pub fn reset(&mut self) -> Result<&mut Self> {
        let epoch = match self.reset_policy {
            ResetPolicy::Replay => self.epoch,
            ResetPolicy::Reroll => self.epoch + 1,
        };
        let fresh = checked_create(self.creator.as_ref(), self.shape(), epoch)?;
        self.next.copy_from(&fresh);
        self.current = fresh;
        self.epoch = epoch;
        self.generation = 0;
        tracing::info!(epoch, policy = ?self.reset_policy, "World reset");
        Ok(self)
    }
}

impl std::fmt::Debug for BioSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BioSquare")
            .field("shape", &self.shape())
            .field("generation", &self.generation)
            .field("epoch", &self.epoch)
            .field("reset_policy", &self.reset_policy)
            .finish_non_exhaustive()
    }
}

fn checked_create(creator: &dyn WorldCreator, shape: Shape, epoch: u64) -> Result<Generation> {
    let generation = creator.create(shape, epoch);
    let created = generation.shape();
    if created != shape {
        return Err(LifeError::InvalidDimension {
            rows: created.rows as i64,
            cols: created.cols as i64,
        });
    }
    Ok(generation)
}

fn evolve_row(current: &Generation, row: usize, cells: &mut [bool]) {
    for (col, cell) in cells.iter_mut().enumerate() {
        *cell = survives(kernel_score(current, row, col));
    }
}

/// Convolution of the 3x3 kernel (neighbours +1, centre -9) at one cell,
/// wrapping at the edges.
fn kernel_score(current: &Generation, row: usize, col: usize) -> i8 {
    let (row, col) = (row as isize, col as isize);
    let neighbors = NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dr, dc)| current.get_wrapping(row + dr, col + dc))
        .count() as i8;
    let center = if current.get_wrapping(row, col) {
        CENTER_WEIGHT
    } else {
        0
    };
    neighbors + center
}

/// 3: birth or survival with three neighbours. -6 and -7: live cell with two
/// or three neighbours.
fn survives(score: i8) -> bool {
    matches!(score, 3 | -6 | -7)
}
