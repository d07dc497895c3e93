//! Rectangular grid of pipe cells

use std::fmt;

use crate::cell::Cell;
use crate::error::MazeError;

/// Location in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Side of `self` that faces `other`, if the two are grid neighbors.
    ///
    /// Exactly one of row/col must differ, and by exactly one.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        match (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        ) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four sides of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

/// Fixed-size grid owning all of its cells.
///
/// Cells live in one row-major `Vec`; cell `(row, col)` is at index
/// `row * width + col`. Everything outside the grid refers to cells by
/// [Coord] or by that flat index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width` x `height` grid with every connector closed.
    ///
    /// Returns error, if either side is zero (or the cell count does not
    /// fit in `usize`).
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let size = width.checked_mul(height).filter(|size| *size > 0);
        let Some(size) = size else {
            return Err(MazeError::InvalidDimension { width, height });
        };

        let mut cells = Vec::with_capacity(size);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(Coord::new(row, col)));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{coord} outside grid");
        coord.row * self.width + coord.col
    }

    pub fn coord(&self, index: usize) -> Coord {
        Coord::new(index / self.width, index % self.width)
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), MazeError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell at `coord`, or error if it lies outside the grid
    pub fn cell(&self, coord: Coord) -> Result<&Cell, MazeError> {
        self.check_bounds(coord)?;
        Ok(&self.cells[self.index(coord)])
    }

    /// Mutable cell at `coord`, or error if it lies outside the grid
    pub fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, MazeError> {
        self.check_bounds(coord)?;
        let idx = self.index(coord);
        Ok(&mut self.cells[idx])
    }

    pub(crate) fn cell_at(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn cell_at_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Every cell in row-major order
    pub fn all_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// The generation and flood fill source.
    ///
    /// For even sides this is the cell just above / left of the geometric
    /// center.
    pub fn center(&self) -> Coord {
        Coord::new(self.height.div_ceil(2) - 1, self.width.div_ceil(2) - 1)
    }

    /// Neighbor of `coord` on side `dir`, if both are inside the grid
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        if !self.contains(coord) {
            return None;
        }
        let Coord { row, col } = coord;
        let next = match dir {
            Direction::Up => Coord::new(row.checked_sub(1)?, col),
            Direction::Down => Coord::new(row + 1, col),
            Direction::Left => Coord::new(row, col.checked_sub(1)?),
            Direction::Right => Coord::new(row, col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// Grid-adjacent cells of `coord`: above, below, left, right, skipping
    /// any that fall outside the grid. Empty if `coord` itself is outside.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .filter_map(move |dir| self.neighbor(coord, dir))
    }

    pub(crate) fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors(self.coord(index)).map(|c| self.index(c))
    }

    /// Neighbors of `coord` that are bonded to it right now: the connector
    /// on each side facing the other is open. Empty if `coord` is outside
    /// the grid.
    pub fn bonded_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let cell = self.cell(coord).ok();
        Direction::ALL.into_iter().filter_map(move |dir| {
            if !cell?.is_open(dir) {
                return None;
            }
            let next = self.neighbor(coord, dir)?;
            self.cells[self.index(next)]
                .is_open(dir.opposite())
                .then_some(next)
        })
    }

    /// Every bonded pair of cells, each reported once
    pub fn bonds(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.iter().flat_map(move |cell| {
            let from = cell.coord();
            self.bonded_neighbors(from)
                .filter(move |to| {
                    matches!(
                        from.direction_to(*to),
                        Some(Direction::Right | Direction::Down)
                    )
                })
                .map(move |to| (from, to))
        })
    }

    /// Open the facing connectors of two adjacent cells.
    ///
    /// Returns error if either cell is outside the grid, or if they are not
    /// neighbors. The grid is left untouched on error.
    pub fn bond(&mut self, a: Coord, b: Coord) -> Result<(), MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        if a.direction_to(b).is_none() {
            return Err(MazeError::NotAdjacent { a, b });
        }
        let (ia, ib) = (self.index(a), self.index(b));
        let (cell_a, cell_b) = if ia < ib {
            let (lo, hi) = self.cells.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.cells.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        };
        cell_a.bond(cell_b)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::error::MazeError;
    use crate::grid::{Coord, Direction, Grid};

    #[test]
    fn new_grid_is_closed_and_indexed() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.size(), 12);
        for (i, cell) in grid.all_cells().enumerate() {
            assert_eq!(cell.coord(), Coord::new(i / 4, i % 4));
            assert_eq!(grid.index(cell.coord()), i);
            assert_eq!(cell.arms(), 0);
        }
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert_eq!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn center_rounds_towards_top_left() {
        let cases = [
            ((1, 1), Coord::new(0, 0)),
            ((3, 3), Coord::new(1, 1)),
            ((4, 4), Coord::new(1, 1)),
            ((5, 2), Coord::new(0, 2)),
            ((6, 7), Coord::new(3, 2)),
        ];
        for ((width, height), center) in cases {
            assert_eq!(Grid::new(width, height).unwrap().center(), center);
        }
    }

    #[test]
    fn neighbors_stay_inside() {
        let grid = Grid::new(3, 2).unwrap();
        let corner = grid.neighbors(Coord::new(0, 0)).sorted().collect_vec();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);

        let edge = grid.neighbors(Coord::new(1, 1)).sorted().collect_vec();
        assert_eq!(
            edge,
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );

        let single = Grid::new(1, 1).unwrap();
        assert_eq!(single.neighbors(Coord::new(0, 0)).count(), 0);
    }

    #[test]
    fn outside_coords_have_no_neighbors() {
        let mut grid = Grid::new(3, 3).unwrap();
        for row in 0..3 {
            grid.bond(Coord::new(row, 1), Coord::new(row, 2)).unwrap();
        }
        for outside in [Coord::new(0, 3), Coord::new(3, 0), Coord::new(5, 5)] {
            assert_eq!(grid.neighbors(outside).count(), 0);
            assert_eq!(grid.bonded_neighbors(outside).count(), 0);
            assert_eq!(grid.neighbor(outside, Direction::Left), None);
        }
    }

    #[test]
    fn bond_is_symmetric_and_local() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.bond(Coord::new(1, 1), Coord::new(1, 0)).unwrap();

        let a = grid.cell(Coord::new(1, 1)).unwrap();
        let b = grid.cell(Coord::new(1, 0)).unwrap();
        assert!(a.left && !a.up && !a.right && !a.down);
        assert!(b.right && !b.up && !b.down && !b.left);
        assert_eq!(grid.all_cells().map(|c| c.arms()).sum::<usize>(), 2);
        assert_eq!(
            grid.bonds().collect_vec(),
            vec![(Coord::new(1, 0), Coord::new(1, 1))]
        );
    }

    #[test]
    fn bond_errors_leave_grid_unchanged() {
        let mut grid = Grid::new(2, 2).unwrap();
        let before = grid.clone();
        assert!(matches!(
            grid.bond(Coord::new(0, 0), Coord::new(1, 1)),
            Err(MazeError::NotAdjacent { .. })
        ));
        assert!(matches!(
            grid.bond(Coord::new(1, 1), Coord::new(1, 2)),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn half_open_pair_is_not_bonded() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.cell_mut(Coord::new(0, 0)).unwrap().right = true;
        assert_eq!(grid.bonded_neighbors(Coord::new(0, 0)).count(), 0);
        assert_eq!(grid.bonds().count(), 0);

        grid.cell_mut(Coord::new(0, 1)).unwrap().left = true;
        assert_eq!(
            grid.bonded_neighbors(Coord::new(0, 1)).collect_vec(),
            vec![Coord::new(0, 0)]
        );
    }

    #[test]
    fn direction_between_coords() {
        let c = Coord::new(2, 2);
        assert_eq!(c.direction_to(Coord::new(1, 2)), Some(Direction::Up));
        assert_eq!(c.direction_to(Coord::new(2, 3)), Some(Direction::Right));
        assert_eq!(c.direction_to(Coord::new(3, 2)), Some(Direction::Down));
        assert_eq!(c.direction_to(Coord::new(2, 1)), Some(Direction::Left));
        assert_eq!(c.direction_to(Coord::new(3, 3)), None);
        assert_eq!(c.direction_to(c), None);
    }
}
