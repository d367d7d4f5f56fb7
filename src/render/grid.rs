//! Fixed-size character grid the rasterizer draws into.

use crate::core::color::Role;

/// One filled grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub role: Role,
}

/// `height × width` cells, row-major. Empty cells render as a space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Cell>>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Overwrite the cell at (`row`, `col`). Returns `false`, drawing nothing,
    /// when the position lies outside the grid.
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, glyph: char, role: Role) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = Some(Cell { glyph, role });
                true
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        self.index(row, col).and_then(|i| self.cells[i])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Cell>]> {
        // `max(1)` keeps `chunks` happy for a zero-width grid
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Row `row` as plain text, empty cells as spaces.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.rows()
            .nth(row)
            .map(|r| r.iter().map(|c| c.map_or(' ', |c| c.glyph)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_and_bounds() {
        let mut g = Grid::new(4, 2);
        assert!(g.set(1, 3, '*', Role::Point));
        assert!(!g.set(2, 0, '*', Role::Point));
        assert!(!g.set(0, -1, '*', Role::Point));
        assert!(!g.set(0, 4, '*', Role::Point));
        assert_eq!(
            g.get(1, 3),
            Some(Cell {
                glyph: '*',
                role: Role::Point
            })
        );
        assert_eq!(g.get(0, 0), None);
    }

    #[test]
    fn last_write_wins() {
        let mut g = Grid::new(2, 1);
        g.set(0, 0, '*', Role::Point);
        g.set(0, 0, '-', Role::Line);
        assert_eq!(g.get(0, 0).map(|c| c.role), Some(Role::Line));
        assert_eq!(g.row_text(0), "- ");
    }

    #[test]
    fn rows_cover_the_grid() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows().count(), 4);
        assert!(g.rows().all(|r| r.len() == 3));
    }
}
