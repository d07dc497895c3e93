//! Spanning-tree maze generation

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::Grid;
use crate::random_set::{shuttle, uniform_random_member, CellSet};

/// Lays pipes into a grid so that every cell is connected to every other
/// by exactly one path.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Plumb `grid` with this generator's random source.
    pub fn plumb(&mut self, grid: &mut Grid) -> Result<(), MazeError> {
        plumb(grid, &mut self.random)
    }

    /// The random source, for follow-up steps such as scrambling that
    /// should continue the same seeded sequence.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.random
    }
}

/// Grow a random spanning tree over `grid`, starting from its center.
///
/// Every cell is in exactly one of three sets: `pristine` (untouched),
/// `frontier` (next to the tree) and `plumbed` (in the tree). Each round
/// takes a random frontier cell, bonds it to a random plumbed neighbor and
/// pulls its pristine neighbors into the frontier. The grid is assumed to
/// have all connectors closed beforehand.
///
/// Errors are only returned if that bookkeeping breaks, which would be a
/// bug here rather than bad input.
pub fn plumb<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), MazeError> {
    let size = grid.size();
    let mut pristine = CellSet::full(size);
    let mut frontier = CellSet::new(size);
    let mut plumbed = CellSet::new(size);

    let center = grid.index(grid.center());
    shuttle([center], &mut pristine, &mut plumbed);
    shuttle(grid.neighbor_indices(center), &mut pristine, &mut frontier);

    let mut bonds = 0;
    while !frontier.is_empty() {
        let target = frontier.pop_random(rng)?;
        let sponsors: Vec<usize> = grid
            .neighbor_indices(target)
            .filter(|n| plumbed.contains(*n))
            .collect();
        let sponsor = uniform_random_member(&sponsors, rng)?;

        grid.bond(grid.coord(sponsor), grid.coord(target))?;
        bonds += 1;
        plumbed.insert(target);
        shuttle(grid.neighbor_indices(target), &mut pristine, &mut frontier);
    }

    debug!(
        "Plumbed {}x{} grid with {} bonds",
        grid.width(),
        grid.height(),
        bonds
    );
    debug_assert!(pristine.is_empty());
    debug_assert_eq!(plumbed.len(), size);
    Ok(())
}
