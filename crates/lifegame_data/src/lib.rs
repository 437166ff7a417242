//! Plain data shared by the simulation and presentation crates.

use std::ops::{Index, IndexMut};

/// Dimensions of a grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// One generation of the automaton: a row-major boolean matrix where `true`
/// marks a live cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Generation {
    shape: Shape,
    cells: Vec<bool>,
}

impl Generation {
    /// All cells dead.
    pub fn dead(shape: Shape) -> Self {
        Self {
            shape,
            cells: vec![false; shape.size()],
        }
    }

    pub fn from_fn<F>(shape: Shape, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Vec::with_capacity(shape.size());
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                cells.push(f(row, col));
            }
        }
        Self { shape, cells }
    }

    /// Builds a generation from equally long rows. Returns `None` for ragged input.
    pub fn from_rows<R>(rows: &[R]) -> Option<Self>
    where
        R: AsRef<[bool]>,
    {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Some(Self {
            shape: Shape::new(rows.len(), cols),
            cells,
        })
    }

    /// A dead generation with the given cells brought to life. Coordinates wrap
    /// around the edges.
    pub fn with_alive<I>(shape: Shape, alive: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut generation = Self::dead(shape);
        if shape.is_empty() {
            return generation;
        }
        for (row, col) in alive {
            generation[(row % shape.rows, col % shape.cols)] = true;
        }
        generation
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.shape.rows && col < self.shape.cols {
            Some(self.cells[self.shape.offset(row, col)])
        } else {
            None
        }
    }

    /// Reads a cell on the torus: indices wrap in both directions.
    ///
    /// # Panics
    ///
    /// Panics on an empty generation.
    pub fn get_wrapping(&self, row: isize, col: isize) -> bool {
        let r = row.rem_euclid(self.shape.rows as isize) as usize;
        let c = col.rem_euclid(self.shape.cols as isize) as usize;
        self.cells[self.shape.offset(r, c)]
    }

    /// Rows top to bottom. Yields exactly `rows()` slices, even when there are
    /// no columns.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        let cols = self.shape.cols;
        (0..self.shape.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Fraction of live cells; `0.0` when there are no cells at all.
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.population() as f64 / self.cells.len() as f64
    }

    /// Overwrites this generation with `other`. Shapes must match.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.shape, other.shape);
        self.cells.copy_from_slice(&other.cells);
    }
}

impl Index<(usize, usize)> for Generation {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &bool {
        assert!(row < self.shape.rows && col < self.shape.cols);
        &self.cells[self.shape.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Generation {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut bool {
        assert!(row < self.shape.rows && col < self.shape.cols);
        let offset = self.shape.offset(row, col);
        &mut self.cells[offset]
    }
}
