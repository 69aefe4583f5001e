//! The world.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    config::Config,
    error::Error,
    rules::Ruleset,
};
use rand::Rng;
use std::mem;

/// The world of a Life-like cellular automaton on a square grid.
///
/// Generic over the dimensionality `D`; every axis has the same side
/// length, so the grid holds `n^D` cells. See [`World2`] and [`World3`]
/// for the usual instantiations.
#[derive(Clone, Debug)]
pub struct World<const D: usize> {
    /// Side length, shared by every axis.
    side: usize,

    /// Survival and birth thresholds.
    ruleset: Ruleset,

    /// The current generation, row-major with the last axis fastest.
    grid: Box<[State]>,

    /// Scratch buffer the next generation is written into
    /// before being swapped with `grid`.
    scratch: Box<[State]>,

    /// Number of generation advances since construction.
    generation: u64,
}

/// A two-dimensional world.
pub type World2 = World<2>;
/// A three-dimensional world.
pub type World3 = World<3>;

impl<const D: usize> World<D> {
    /// Creates a new world from the configuration.
    ///
    /// Same as [`Config::world`].
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.world()
    }

    /// Creates a new world from the configuration, filling each cell with
    /// an independent fifty-fifty draw from the given random source.
    ///
    /// Returns an error if the side length is zero or the ruleset's
    /// threshold ranges are inconsistent.
    pub fn new_with_rng<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, Error> {
        if config.n == 0 {
            return Err(Error::NonPositiveSize);
        }
        config.ruleset.validate()?;

        let len = config.n.pow(D as u32);
        let grid = (0..len)
            .map(|_| if rng.gen::<bool>() { ALIVE } else { DEAD })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let scratch = vec![DEAD; len].into_boxed_slice();

        Ok(World {
            side: config.n,
            ruleset: config.ruleset,
            grid,
            scratch,
            generation: 0,
        })
    }

    /// Side length of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// The ruleset of the world.
    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Number of generation advances since construction.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// A read-only view of the current generation, row-major with the
    /// last axis fastest.
    #[inline]
    pub fn grid(&self) -> &[State] {
        &self.grid
    }

    /// The state of the cell at `coord`.
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn get(&self, coord: Coord<D>) -> State {
        self.grid[self.index(coord)]
    }

    /// Sets the state of the cell at `coord`, e.g. to seed a known pattern.
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn set(&mut self, coord: Coord<D>, state: State) {
        let index = self.index(coord);
        self.grid[index] = state;
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.iter().filter(|state| state.is_alive()).count()
    }

    /// Counts the live cells in the Moore neighborhood of `coord`,
    /// i.e. the cells adjacent to it along every axis, diagonals included.
    ///
    /// The neighborhood is clamped at the grid boundary: positions outside
    /// `[0, n)` on any axis are excluded rather than wrapped around. The
    /// cell itself is never counted, so the result is at most `3^D - 1`.
    ///
    /// Panics if any index of `coord` is out of range.
    pub fn neighbor_count(&self, coord: Coord<D>) -> usize {
        self.index(coord);
        let mut count = 0;
        'offsets: for code in 0..3usize.pow(D as u32) {
            let mut offsets = code;
            let mut neighbor = [0; D];
            let mut is_center = true;
            for axis in 0..D {
                // Per-axis offset: 0, 1, 2 stand for -1, 0, +1.
                let delta = offsets % 3;
                offsets /= 3;
                if delta != 1 {
                    is_center = false;
                }
                let x = coord[axis] + delta;
                if x < 1 || x > self.side {
                    continue 'offsets;
                }
                neighbor[axis] = x - 1;
            }
            if is_center {
                continue;
            }
            if self.get(neighbor).is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advances the world by one generation.
    ///
    /// Every cell's next state is computed against the generation that was
    /// current on entry; the grid is replaced wholesale once the scan is
    /// complete.
    pub fn update(&mut self) {
        for index in 0..self.grid.len() {
            let count = self.neighbor_count(self.coord_at(index));
            self.scratch[index] = self.ruleset.next_state(self.grid[index], count);
        }
        mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// The flat index of `coord`.
    ///
    /// Panics if any index is out of range.
    fn index(&self, coord: Coord<D>) -> usize {
        let mut index = 0;
        for &x in coord.iter() {
            assert!(
                x < self.side,
                "coordinate {:?} out of range for side length {}",
                coord,
                self.side
            );
            index = index * self.side + x;
        }
        index
    }

    /// The coordinates of the cell at flat index `index`.
    fn coord_at(&self, mut index: usize) -> Coord<D> {
        let mut coord = [0; D];
        for axis in (0..D).rev() {
            coord[axis] = index % self.side;
            index /= self.side;
        }
        coord
    }
}

impl World<2> {
    /// Displays the world in a [Plaintext](https://conwaylife.com/wiki/Plaintext)-like
    /// format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Live** cells are represented by `o`;
    /// * Each row is ended with `$`;
    /// * The whole pattern is ended with `!`.
    pub fn plaintext(&self) -> String {
        let mut out = String::new();
        for row in 0..self.side {
            for col in 0..self.side {
                out.push(if self.get([row, col]).is_alive() { 'o' } else { '.' });
            }
            out.push(if row == self.side - 1 { '!' } else { '$' });
            out.push('\n');
        }
        out
    }
}

impl World<3> {
    /// Displays one layer of the world (a fixed index on the first axis)
    /// in the same `.`/`o` format as the 2D world's `plaintext`.
    ///
    /// Panics if `layer` is out of range.
    pub fn plaintext_layer(&self, layer: usize) -> String {
        let mut out = String::new();
        for row in 0..self.side {
            for col in 0..self.side {
                out.push(if self.get([layer, row, col]).is_alive() {
                    'o'
                } else {
                    '.'
                });
            }
            out.push(if row == self.side - 1 { '!' } else { '$' });
            out.push('\n');
        }
        out
    }
}
