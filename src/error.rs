//! Error type shared by the whole crate

use thiserror::Error;

use crate::grid::Coord;

/// Everything that can go wrong while building or playing a maze.
///
/// [MazeError::InvalidDimension] and [MazeError::OutOfBounds] are caller
/// input errors. [MazeError::NotAdjacent] and [MazeError::EmptyCollection]
/// are only raised when generation or flood fill break their own invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid grid dimensions {width}x{height}: both sides must be at least 1")]
    InvalidDimension { width: usize, height: usize },

    #[error("Cell row={row}, col={col} is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("Cells {a} and {b} are not neighbors")]
    NotAdjacent { a: Coord, b: Coord },

    #[error("Cannot pick a random member of an empty collection")]
    EmptyCollection,
}
