use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use super::{
    Cell, Pattern,
    error::{Result, UniverseError},
    presets,
    rules::{ConwayRule, Rule},
};

/// Width and height of the universe built by [`Universe::new`]
pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

/// Grids with at least this many cells tick on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Universe owns a toroidal grid of cells stored row-major
/// (`index = row * width + column`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Universe {
    /// Create the default 64x64 universe with the demo starting pattern
    pub fn new() -> Self {
        Self::seeded(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a universe of the given size with the demo starting pattern:
    /// cell `i` is alive when `i % 2 == 0 || i % 7 == 0`.
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Self::seeded(width, height))
    }

    /// Create a universe with every cell dead
    pub fn empty(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        debug!(width, height, "created empty universe");
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
        })
    }

    /// Create a universe where each cell is alive with probability `density`
    pub fn random<R: Rng>(width: u32, height: u32, density: f64, rng: &mut R) -> Result<Self> {
        let mut universe = Self::empty(width, height)?;
        universe.randomize(density, rng);
        Ok(universe)
    }

    /// A new universe of the same size holding the starting pattern
    pub fn fresh(&self) -> Self {
        Self::seeded(self.width, self.height)
    }

    fn seeded(width: u32, height: u32) -> Self {
        let cells = (0..width as usize * height as usize)
            .map(|i| Cell::from_alive(i % 2 == 0 || i % 7 == 0))
            .collect();
        debug!(width, height, "created seeded universe");
        Self { width, height, cells }
    }

    fn check_dimensions(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the cell buffer, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell buffer as bytes: 0 = dead, 1 = alive
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: Cell is #[repr(u8)] with only the values 0 and 1,
        // so a [Cell] has the same layout as a [u8] of equal length.
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr().cast::<u8>(), self.cells.len()) }
    }

    /// Raw pointer to the first cell for zero-copy readers.
    /// Valid for `width * height` bytes until the next mutating call.
    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    /// Count alive cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Convert (row, column) to a buffer index
    const fn get_index(&self, row: u32, column: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    fn check_position(&self, row: u32, column: u32) -> Result<usize> {
        if row >= self.height || column >= self.width {
            return Err(UniverseError::OutOfRange {
                row,
                column,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.get_index(row, column))
    }

    /// Offset a position with toroidal wrapping on both axes
    fn wrap(&self, row: u32, column: u32, delta_row: i32, delta_column: i32) -> (u32, u32) {
        let r = (i64::from(row) + i64::from(delta_row)).rem_euclid(i64::from(self.height));
        let c = (i64::from(column) + i64::from(delta_column)).rem_euclid(i64::from(self.width));
        (r as u32, c as u32)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: u32, column: u32) -> Option<Cell> {
        (row < self.height && column < self.width).then(|| self.cells[self.get_index(row, column)])
    }

    /// Count live cells among the 8 wrapped neighbors
    pub fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| self.wrap(row, column, dr, dc))
            .filter(|&(r, c)| self.cells[self.get_index(r, c)].is_alive())
            .count() as u8
    }

    /// Advance one generation under Conway's rule
    pub fn tick(&mut self) {
        self.step_with(&ConwayRule);
    }

    /// Advance one generation under `rule`, on the rayon pool for large grids
    pub fn step_with(&mut self, rule: &dyn Rule) {
        if self.cells.len() >= PARALLEL_THRESHOLD {
            self.tick_parallel_with(rule);
        } else {
            self.tick_with(rule);
        }
    }

    /// Advance one generation under `rule`, serially
    pub fn tick_with(&mut self, rule: &dyn Rule) {
        let width = self.width;
        let next: Vec<Cell> = (0..self.height)
            .flat_map(|row| (0..width).map(move |column| (row, column)))
            .map(|(row, column)| self.next_cell(rule, row, column))
            .collect();
        self.cells = next;
    }

    /// Advance one generation under `rule`, one rayon task per row
    pub fn tick_parallel_with(&mut self, rule: &dyn Rule) {
        let mut next = vec![Cell::Dead; self.cells.len()];
        next.par_chunks_mut(self.width as usize)
            .enumerate()
            .for_each(|(row, out)| {
                for (column, cell) in out.iter_mut().enumerate() {
                    *cell = self.next_cell(rule, row as u32, column as u32);
                }
            });
        self.cells = next;
    }

    fn next_cell(&self, rule: &dyn Rule, row: u32, column: u32) -> Cell {
        let current = self.cells[self.get_index(row, column)];
        rule.evolve(current, self.live_neighbor_count(row, column))
    }

    /// Flip the cell at (row, column)
    pub fn toggle_cell(&mut self, row: u32, column: u32) -> Result<()> {
        let idx = self.check_position(row, column)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Mark every listed cell alive
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) -> Result<()> {
        for &(row, column) in cells {
            let idx = self.check_position(row, column)?;
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Stamp `pattern` anchored at (row, column). The anchor must be inside
    /// the universe; offsets from it wrap around the edges.
    pub fn stamp(&mut self, pattern: &Pattern, row: u32, column: u32) -> Result<()> {
        self.check_position(row, column)?;
        for &(dr, dc) in pattern.offsets {
            let (r, c) = self.wrap(row, column, dr, dc);
            let idx = self.get_index(r, c);
            self.cells[idx] = Cell::Alive;
        }
        debug!(pattern = pattern.name, row, column, "stamped pattern");
        Ok(())
    }

    pub fn create_glider(&mut self, row: u32, column: u32) -> Result<()> {
        self.stamp(&presets::glider(), row, column)
    }

    pub fn create_spaceship(&mut self, row: u32, column: u32) -> Result<()> {
        self.stamp(&presets::spaceship(), row, column)
    }

    /// Kill every cell
    pub fn clean(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Replace every cell with a random state, alive with probability `density`.
    /// Densities outside [0, 1] are clamped; NaN counts as 0.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }

    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Iterate over all cells with their (row, column)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / width) as u32, (i % width) as u32, cell))
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
