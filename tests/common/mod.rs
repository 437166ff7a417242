use lifegame_core::{BioSquare, DicingGod, Generation, ResetPolicy, Shape};

/// Builds a world either from a hand-placed pattern or from a seed.
#[allow(dead_code)]
pub struct WorldBuilder {
    shape: Shape,
    alive: Vec<(usize, usize)>,
    seed: Option<u64>,
    density: f64,
    reset_policy: ResetPolicy,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            shape: Shape::new(rows, cols),
            alive: Vec::new(),
            seed: None,
            density: 0.5,
            reset_policy: ResetPolicy::Replay,
        }
    }

    /// Marks cells alive, offset by `(row, col)`.
    pub fn with_pattern(mut self, row: usize, col: usize, cells: &[(usize, usize)]) -> Self {
        self.alive.extend(cells.iter().map(|&(r, c)| (row + r, col + c)));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn build(self) -> BioSquare {
        let rows = self.shape.rows as i64;
        let cols = self.shape.cols as i64;
        let biosquare = match self.seed {
            Some(seed) => {
                let god = DicingGod::new(Some(seed), self.density).unwrap();
                BioSquare::new(rows, cols, Box::new(god)).unwrap()
            }
            None => {
                let alive = self.alive;
                let creator = move |shape: Shape, _epoch: u64| {
                    Generation::with_alive(shape, alive.iter().copied())
                };
                BioSquare::new(rows, cols, Box::new(creator)).unwrap()
            }
        };
        biosquare.with_reset_policy(self.reset_policy)
    }
}

#[allow(dead_code)]
pub const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
#[allow(dead_code)]
pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
#[allow(dead_code)]
pub const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

/// Live coordinates in row-major order.
#[allow(dead_code)]
pub fn alive_cells(generation: &Generation) -> Vec<(usize, usize)> {
    let cols = generation.cols();
    generation
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, &alive)| alive)
        .map(|(i, _)| (i / cols, i % cols))
        .collect()
}

/// Straightforward neighbour count on the torus.
#[allow(dead_code)]
pub fn naive_step(generation: &Generation) -> Generation {
    let (rows, cols) = (generation.rows() as isize, generation.cols() as isize);
    Generation::from_fn(generation.shape(), |r, c| {
        let (r, c) = (r as isize, c as isize);
        let mut neighbours = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) != (0, 0)
                    && generation.get_wrapping((r + dr).rem_euclid(rows), (c + dc).rem_euclid(cols))
                {
                    neighbours += 1;
                }
            }
        }
        let alive = generation.get_wrapping(r, c);
        neighbours == 3 || (alive && neighbours == 2)
    })
}
