//! Which cells are connected to the source right now

use log::trace;
use rand::Rng;

use crate::grid::Grid;
use crate::random_set::{shuttle, CellSet};

/// Cells connected to the grid center through bonds in the current,
/// possibly rotated, state of the grid.
///
/// Result is a set of flat cell indices; see [Grid::coord].
pub fn reachable(grid: &Grid) -> CellSet {
    flood_fill(grid, CellSet::pop_first)
}

/// Same as [reachable], but takes cells off the flowing set in random
/// order. The result does not depend on that order.
pub fn reachable_with<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> CellSet {
    flood_fill(grid, |flowing| flowing.pop_random(rng).ok())
}

fn flood_fill(grid: &Grid, mut take: impl FnMut(&mut CellSet) -> Option<usize>) -> CellSet {
    let size = grid.size();
    let mut empty = CellSet::full(size);
    let mut flowing = CellSet::new(size);
    let mut filled = CellSet::new(size);

    shuttle([grid.index(grid.center())], &mut empty, &mut flowing);
    while let Some(index) = take(&mut flowing) {
        let coord = grid.cell_at(index).coord();
        let next = grid.bonded_neighbors(coord).map(|c| grid.index(c));
        shuttle(next, &mut empty, &mut flowing);
        filled.insert(index);
    }

    trace!("Flood fill reached {}/{} cells", filled.len(), size);
    filled
}
