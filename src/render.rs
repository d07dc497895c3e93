//! Draw a grid with box-drawing characters
//!
//! Each cell becomes one glyph chosen from its four connectors. Cells that
//! are connected to the source are drawn with heavy lines.

use itertools::Itertools;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::random_set::CellSet;

/// Indexed by connector mask: up = 1, right = 2, down = 4, left = 8
const LIGHT: [char; 16] = [
    '·', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];
const HEAVY: [char; 16] = [
    '•', '╹', '╺', '┗', '╻', '┃', '┏', '┣', '╸', '┛', '━', '┻', '┓', '┫', '┳', '╋',
];

fn mask(cell: &Cell) -> usize {
    usize::from(cell.up)
        | (usize::from(cell.right) << 1)
        | (usize::from(cell.down) << 2)
        | (usize::from(cell.left) << 3)
}

/// Glyph for a single cell
pub fn glyph(cell: &Cell, connected: bool) -> char {
    let table = if connected { &HEAVY } else { &LIGHT };
    table[mask(cell)]
}

/// Render `grid` one text line per row.
///
/// Cells whose index is in `connected` use heavy glyphs.
pub fn draw(grid: &Grid, connected: Option<&CellSet>) -> String {
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let lit = connected.is_some_and(|set| set.contains(grid.index(cell.coord())));
                    glyph(cell, lit)
                })
                .join("")
        })
        .join("\n")
}

/// Build a grid from glyph art, light or heavy. Used for test fixtures.
#[cfg(test)]
pub(crate) fn from_glyphs(art: &str) -> Grid {
    use crate::grid::Coord;

    let rows: Vec<Vec<char>> = art
        .trim()
        .lines()
        .map(|line| line.trim().chars().collect())
        .collect();
    let mut grid = Grid::new(rows[0].len(), rows.len()).unwrap();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), grid.width(), "ragged glyph row {row}");
        for (col, c) in line.iter().enumerate() {
            let m = LIGHT
                .iter()
                .position(|g| g == c)
                .or_else(|| HEAVY.iter().position(|g| g == c))
                .unwrap_or_else(|| panic!("unknown glyph `{c}` at row={row}, col={col}"));
            let cell = grid.cell_mut(Coord::new(row, col)).unwrap();
            cell.up = m & 1 != 0;
            cell.right = m & 2 != 0;
            cell.down = m & 4 != 0;
            cell.left = m & 8 != 0;
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use crate::connectivity::reachable;
    use crate::grid::{Coord, Grid};
    use crate::render::{draw, from_glyphs, glyph};

    #[test]
    fn glyph_follows_connectors() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.bond(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        let cell = grid.cell(Coord::new(0, 0)).unwrap();
        assert_eq!(glyph(cell, false), '╶');
        assert_eq!(glyph(cell, true), '╺');
        assert_eq!(draw(&grid, None), "╶╴");
    }

    #[test]
    fn draw_highlights_connected_cells() {
        let art = "
┌╴╷
─╷│
└┴┘"
        .trim();
        let grid = from_glyphs(art);
        assert_eq!(draw(&grid, None), art);
        assert_eq!(draw(&grid, Some(&reachable(&grid))), "┌╴╻\n─╻┃\n┗┻┛");
    }

    #[test]
    fn heavy_art_parses_like_light_art() {
        assert_eq!(from_glyphs("┏━┓\n┗━┛"), from_glyphs("┌─┐\n└─┘"));
    }
}
