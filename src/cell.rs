//! A single pipe cell

use crate::error::MazeError;
use crate::grid::{Coord, Direction};

/// One square of the maze with a pipe stub on up to four sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl Cell {
    /// New cell at `coord` with every connector closed
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            up: false,
            right: false,
            down: false,
            left: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Whether the connector on side `dir` is open
    pub fn is_open(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    fn open(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.up = true,
            Direction::Right => self.right = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
        }
    }

    /// Number of open connectors
    pub fn arms(&self) -> usize {
        Direction::ALL.iter().filter(|d| self.is_open(**d)).count()
    }

    /// Turn the cell a quarter turn clockwise.
    ///
    /// Whatever pointed left now points up, up goes right, and so on.
    pub fn rotate_clockwise(&mut self) {
        (self.up, self.right, self.down, self.left) = (self.left, self.up, self.right, self.down);
    }

    /// Turn the cell a quarter turn counterclockwise, undoing
    /// [Self::rotate_clockwise].
    pub fn rotate_counterclockwise(&mut self) {
        (self.up, self.right, self.down, self.left) = (self.right, self.down, self.left, self.up);
    }

    /// Open the pair of connectors facing each other between `self` and
    /// `other`.
    ///
    /// Returns error, if the two cells are not grid neighbors. Nothing is
    /// modified in that case.
    pub fn bond(&mut self, other: &mut Cell) -> Result<(), MazeError> {
        let dir = self
            .coord
            .direction_to(other.coord)
            .ok_or(MazeError::NotAdjacent {
                a: self.coord,
                b: other.coord,
            })?;
        self.open(dir);
        other.open(dir.opposite());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::cell::Cell;
    use crate::error::MazeError;
    use crate::grid::Coord;

    fn cell_with(flags: [bool; 4]) -> Cell {
        let mut cell = Cell::new(Coord::new(0, 0));
        [cell.up, cell.right, cell.down, cell.left] = flags;
        cell
    }

    fn flags(cell: &Cell) -> [bool; 4] {
        [cell.up, cell.right, cell.down, cell.left]
    }

    #[test]
    fn clockwise_moves_left_arm_to_top() {
        let mut cell = cell_with([false, false, false, true]);
        cell.rotate_clockwise();
        assert_eq!(flags(&cell), [true, false, false, false]);
        cell.rotate_clockwise();
        assert_eq!(flags(&cell), [false, true, false, false]);
    }

    #[test]
    fn counterclockwise_moves_top_arm_to_left() {
        // Elbow ┘ (up + left) turns into ┐ (down + left)
        let mut cell = cell_with([true, false, false, true]);
        cell.rotate_counterclockwise();
        assert_eq!(flags(&cell), [false, false, true, true]);
    }

    #[test]
    fn bond_opens_facing_connectors_only() {
        let mut a = Cell::new(Coord::new(1, 1));
        let mut b = Cell::new(Coord::new(0, 1));
        a.bond(&mut b).unwrap();
        assert_eq!(flags(&a), [true, false, false, false]);
        assert_eq!(flags(&b), [false, false, true, false]);

        let mut c = Cell::new(Coord::new(1, 2));
        a.bond(&mut c).unwrap();
        assert_eq!(flags(&a), [true, true, false, false]);
        assert_eq!(flags(&c), [false, false, false, true]);
    }

    #[test]
    fn bond_rejects_distant_cells() {
        let mut a = Cell::new(Coord::new(0, 0));
        let mut diagonal = Cell::new(Coord::new(1, 1));
        let mut far = Cell::new(Coord::new(0, 2));
        let mut same = Cell::new(Coord::new(0, 0));

        for other in [&mut diagonal, &mut far, &mut same] {
            let b = other.coord();
            assert_eq!(
                a.bond(other),
                Err(MazeError::NotAdjacent {
                    a: Coord::new(0, 0),
                    b
                })
            );
            assert_eq!(other.arms(), 0);
        }
        assert_eq!(a.arms(), 0);
    }

    proptest! {
        #[test]
        fn opposite_rotations_cancel(f in any::<[bool; 4]>()) {
            let mut cell = cell_with(f);
            cell.rotate_clockwise();
            cell.rotate_counterclockwise();
            prop_assert_eq!(flags(&cell), f);

            cell.rotate_counterclockwise();
            cell.rotate_clockwise();
            prop_assert_eq!(flags(&cell), f);
        }

        #[test]
        fn four_turns_are_identity(f in any::<[bool; 4]>()) {
            let mut cw = cell_with(f);
            let mut ccw = cell_with(f);
            for _ in 0..4 {
                cw.rotate_clockwise();
                ccw.rotate_counterclockwise();
                prop_assert_eq!(cw.arms(), f.iter().filter(|b| **b).count());
            }
            prop_assert_eq!(flags(&cw), f);
            prop_assert_eq!(flags(&ccw), f);
        }
    }
}
