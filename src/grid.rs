use std::fmt::{Display, Formatter};

use crate::errors::GridError;
use crate::GridCoord;

/// A (row, col) step from one cell to another.
pub type Offset = (isize, isize);

/// Up, down, left and right.
pub const ORTHOGONAL_OFFSETS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four corners around a cell.
pub const DIAGONAL_OFFSETS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The character used for empty cells when a grid is displayed.
pub const EMPTY_CELL_CHAR: char = '.';

/// A single square of the solution board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(letter) => Some(letter),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A square solution board. Every accessor is bounds-checked; coordinates outside the board are
/// reported as `None` rather than wrapping or panicking.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Grid {
        Grid { size, cells: vec![Cell::Empty; size * size] }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, (row, col): GridCoord) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// The cell at `coord`, or `None` if `coord` is off the board.
    pub fn cell(&self, coord: GridCoord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    pub fn letter(&self, coord: GridCoord) -> Option<char> {
        self.cell(coord).and_then(Cell::letter)
    }

    /// Is `coord` on the board and empty?
    pub fn is_empty(&self, coord: GridCoord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// Is `coord` empty or off the board? Off-board cells never block a word.
    pub fn is_vacant(&self, coord: GridCoord) -> bool {
        self.cell(coord).map_or(true, Cell::is_empty)
    }

    /// Is `coord` on the board and holding a letter?
    pub fn is_filled(&self, coord: GridCoord) -> bool {
        self.letter(coord).is_some()
    }

    /// The coordinate `offset` away from `coord`, if it is on the board.
    pub fn offset(&self, (row, col): GridCoord, (dr, dc): Offset) -> Option<GridCoord> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        self.index((row, col)).map(|_| (row, col))
    }

    /// Is the cell `offset` away from `coord` empty or off the board?
    pub fn is_vacant_at_offset(&self, coord: GridCoord, offset: Offset) -> bool {
        self.offset(coord, offset).map_or(true, |neighbor| self.is_empty(neighbor))
    }

    /// Write `letter` into `coord`. Rewriting a cell with the letter it already holds is a no-op;
    /// writing a different letter is refused and leaves the grid untouched.
    pub fn set(&mut self, coord: GridCoord, letter: char) -> Result<(), GridError> {
        let idx = self.index(coord).ok_or(GridError::OutOfBounds { coord, size: self.size })?;

        match self.cells[idx] {
            Cell::Letter(existing) if existing != letter => {
                Err(GridError::Conflict { coord, existing, attempted: letter })
            }
            _ => {
                self.cells[idx] = Cell::Letter(letter);
                Ok(())
            }
        }
    }

    /// Every filled cell, in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (GridCoord, char)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.letter().map(|letter| ((idx / size, idx % size), letter))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.letter().unwrap_or(EMPTY_CELL_CHAR))?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("filled", &self.filled_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(15);
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.is_empty((0, 0)));
        assert!(grid.is_empty((14, 14)));
        assert_eq!(grid.cell((15, 0)), None);
        assert!(!grid.is_empty((0, 15)));
        assert!(grid.is_vacant((0, 15)));
    }

    #[test]
    fn test_set_and_read_back() {
        let mut grid = Grid::new(5);
        grid.set((2, 3), 'Q').unwrap();
        assert_eq!(grid.letter((2, 3)), Some('Q'));
        assert_eq!(grid.cell((2, 3)), Some(Cell::Letter('Q')));
        assert!(grid.is_filled((2, 3)));
        assert!(!grid.is_vacant((2, 3)));

        // Same letter again is fine.
        grid.set((2, 3), 'Q').unwrap();
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_conflicting_write_is_refused() {
        let mut grid = Grid::new(5);
        grid.set((0, 0), 'A').unwrap();
        assert_eq!(
            grid.set((0, 0), 'B'),
            Err(GridError::Conflict { coord: (0, 0), existing: 'A', attempted: 'B' })
        );
        assert_eq!(grid.letter((0, 0)), Some('A'));
        assert_eq!(grid.set((5, 0), 'A'), Err(GridError::OutOfBounds { coord: (5, 0), size: 5 }));
    }

    #[test]
    fn test_offsets_are_bounds_checked() {
        let grid = Grid::new(3);
        assert_eq!(grid.offset((0, 0), (-1, 0)), None);
        assert_eq!(grid.offset((0, 0), (0, -1)), None);
        assert_eq!(grid.offset((2, 2), (1, 1)), None);
        assert_eq!(grid.offset((1, 1), (-1, 1)), Some((0, 2)));
        assert!(grid.is_vacant_at_offset((0, 0), (-1, -1)));

        let corners: Vec<_> = DIAGONAL_OFFSETS.iter().filter_map(|&d| grid.offset((1, 1), d)).collect();
        assert_eq!(corners, vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
        let sides: Vec<_> = ORTHOGONAL_OFFSETS.iter().filter_map(|&d| grid.offset((1, 1), d)).collect();
        assert_eq!(sides, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_filled_cells_are_row_major() {
        let mut grid = Grid::new(4);
        grid.set((3, 0), 'D').unwrap();
        grid.set((0, 2), 'A').unwrap();
        grid.set((1, 1), 'B').unwrap();
        grid.set((1, 3), 'C').unwrap();

        let filled: Vec<_> = grid.filled_cells().collect();
        assert_eq!(filled, vec![((0, 2), 'A'), ((1, 1), 'B'), ((1, 3), 'C'), ((3, 0), 'D')]);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3);
        grid.set((1, 0), 'C').unwrap();
        grid.set((1, 1), 'A').unwrap();
        grid.set((1, 2), 'T').unwrap();
        assert_eq!(grid.to_string(), "...\nCAT\n...");
    }
}
