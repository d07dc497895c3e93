//! Rotate the pipes until water reaches every cell
//!
//! A board is a grid of cells, each with pipe stubs on some of its four
//! sides. Boards are generated as a spanning tree: with every cell in the
//! right orientation there is exactly one path between any two cells. The
//! player turns cells a quarter turn at a time, and after every turn the
//! set of cells connected to the center is recomputed by flood fill.
//!
//! # Examples
//! ## Generated board is solved before scrambling
//! ```
//! use pipe_maze::{new_game, GameConfig};
//!
//! let config = GameConfig {
//!     width: 3,
//!     height: 3,
//!     seed: Some(7),
//!     scramble: false,
//! };
//! let session = new_game(config).unwrap();
//! assert_eq!(session.grid().bonds().count(), 8);
//! assert_eq!(session.reachable().len(), 9);
//! ```
//!
//! ## Turning cells
//! ```
//! use pipe_maze::{new_game, GameConfig, Rotation};
//!
//! let mut session = new_game(GameConfig {
//!     width: 4,
//!     height: 4,
//!     seed: Some(1),
//!     scramble: true,
//! })
//! .unwrap();
//! session.apply_rotation(0, 3, Rotation::Clockwise).unwrap();
//! session.apply_rotation(0, 3, Rotation::Counterclockwise).unwrap();
//! assert_eq!(session.moves(), 2);
//! assert!(session.apply_rotation(4, 0, Rotation::Clockwise).is_err());
//! println!("{}", session.draw());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use rand::Rng;

pub mod cell;
pub mod connectivity;
pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod random_set;
pub mod render;

pub use cell::Cell;
pub use error::MazeError;
pub use grid::{Coord, Direction, Grid};

use maze_generator::MazeGenerator;

/// Which way to turn a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cw" | "clockwise" => Ok(Rotation::Clockwise),
            "ccw" | "counterclockwise" => Ok(Rotation::Counterclockwise),
            other => Err(format!("Unknown rotation `{}`, expected `cw` or `ccw`", other)),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Clockwise => write!(f, "cw"),
            Rotation::Counterclockwise => write!(f, "ccw"),
        }
    }
}

/// Settings for a new game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Random seed, or `None` for a fresh one from the OS
    pub seed: Option<u64>,
    /// Turn every cell randomly after generation
    pub scramble: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            seed: None,
            scramble: true,
        }
    }
}

/// One board being played.
///
/// A session owns its grid outright; rotating a cell and asking for the
/// connected set both go through `&mut self` / `&self`, so a reader never
/// sees a half-applied turn.
pub struct Session {
    grid: Grid,
    config: GameConfig,
    generator: MazeGenerator,
    moves: usize,
}

impl Session {
    /// Generate a board according to `config`.
    ///
    /// Returns error, if either side of the board is zero.
    pub fn new(config: GameConfig) -> Result<Self, MazeError> {
        let mut grid = Grid::new(config.width, config.height)?;
        let mut generator = MazeGenerator::new(config.seed);
        generator.plumb(&mut grid)?;
        if config.scramble {
            scramble(&mut grid, generator.rng());
        }
        info!(
            "New {}x{} game (seed: {:?}, scrambled: {})",
            config.width, config.height, config.seed, config.scramble
        );
        Ok(Self {
            grid,
            config,
            generator,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of successful rotations so far
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Turn the cell at (`row`, `col`) a quarter turn.
    ///
    /// Returns error and leaves the board alone, if the cell is outside
    /// the board.
    pub fn apply_rotation(
        &mut self,
        row: usize,
        col: usize,
        rotation: Rotation,
    ) -> Result<(), MazeError> {
        apply_rotation(&mut self.grid, row, col, rotation)?;
        self.moves += 1;
        Ok(())
    }

    /// Coordinates of every cell connected to the center
    pub fn reachable(&self) -> BTreeSet<Coord> {
        reachable(&self.grid)
    }

    /// Turn every cell randomly, continuing this session's random sequence
    pub fn scramble(&mut self) {
        scramble(&mut self.grid, self.generator.rng());
    }

    /// Board as box-drawing text, connected cells in heavy lines
    pub fn draw(&self) -> String {
        render::draw(&self.grid, Some(&connectivity::reachable(&self.grid)))
    }
}

/// Build a new, already generated game
pub fn new_game(config: GameConfig) -> Result<Session, MazeError> {
    Session::new(config)
}

/// Turn the cell at (`row`, `col`) of `grid` a quarter turn.
///
/// Returns error and leaves `grid` unmodified, if the cell is outside it.
pub fn apply_rotation(
    grid: &mut Grid,
    row: usize,
    col: usize,
    rotation: Rotation,
) -> Result<(), MazeError> {
    let cell = grid.cell_mut(Coord::new(row, col))?;
    match rotation {
        Rotation::Clockwise => cell.rotate_clockwise(),
        Rotation::Counterclockwise => cell.rotate_counterclockwise(),
    }
    debug!("Rotated ({}, {}) {}", row, col, rotation);
    Ok(())
}

/// Coordinates of every cell connected to the center of `grid`
pub fn reachable(grid: &Grid) -> BTreeSet<Coord> {
    connectivity::reachable(grid)
        .iter()
        .map(|i| grid.coord(i))
        .collect()
}

/// Turn each cell clockwise by 0 to 3 quarter turns, uniformly at random.
pub fn scramble<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for index in 0..grid.size() {
        let cell = grid.cell_at_mut(index);
        for _ in 0..rng.gen_range(0..4) {
            cell.rotate_clockwise();
        }
    }
}
