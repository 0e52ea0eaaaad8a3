//! The 9×9 grid and its text format.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{
    Position,
    validate::{ValidateError, validate_rows},
};

/// A single cell: a digit 1-9, or `None` for empty.
///
/// Out-of-range values are representable (they arise from parsing text like
/// `0`) and are rejected by [`validate_rows`].
pub type Cell = Option<u8>;

/// A 9×9 sudoku grid of optional cell values, stored row-major.
///
/// A grid parses from puzzle text via [`FromStr`] (which runs the full
/// validator) and renders via [`Display`]. Cells are addressed by
/// [`Position`].
///
/// # Examples
///
/// ```
/// use gridlock_core::{Grid, Position};
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(1, 0)], Some(3));
/// assert!(!grid.is_complete());
/// # Ok::<(), gridlock_core::ValidateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; 9]; 9],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a grid from row data, validating it first.
    ///
    /// Accepts anything row-shaped (`Vec<Vec<Cell>>`, `[[Cell; 9]; 9]`, ...)
    /// so that shape errors can be detected here rather than by the type
    /// system.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidateError`] detected, in the validator's
    /// check order: row count, column counts, cell ranges, duplicates.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, ValidateError>
    where
        R: AsRef<[Cell]>,
    {
        validate_rows(rows)?;
        let mut grid = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.as_ref().iter().enumerate() {
                grid.cells[y][x] = *cell;
            }
        }
        Ok(grid)
    }

    /// Checks this grid against the sudoku placement rules.
    ///
    /// The shape is correct by construction; this re-checks cell ranges and
    /// duplicates, which can be violated after [`set`](Self::set) calls. Has
    /// no effect on the grid; validating twice yields the same result.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidateError`] detected.
    pub fn validate(&self) -> Result<(), ValidateError> {
        validate_rows(&self.cells)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Sets the cell at `pos`.
    ///
    /// No rule checking happens here; use [`validate`](Self::validate) to
    /// re-check a modified grid.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = cell;
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

impl FromStr for Grid {
    type Err = ValidateError;

    /// Parses puzzle text.
    ///
    /// Digit characters become filled cells and `.` becomes an empty cell;
    /// every other character is noise and is skipped. Lines containing no
    /// digit or `.` characters do not count as rows. `0` parses as a filled
    /// cell and is then rejected by range validation.
    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, ValidateError> {
        let mut rows = Vec::new();
        for line in s.lines() {
            let mut row = Vec::new();
            for c in line.chars() {
                if c.is_ascii_digit() {
                    row.push(Some(c as u8 - b'0'));
                } else if c == '.' {
                    row.push(None);
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }
}

impl Display for Grid {
    /// Renders the grid as an ASCII block diagram.
    ///
    /// Cells are space-separated with a `| ` separator after every 3rd
    /// column and a `------+-------+------` divider before rows 3 and 6.
    /// Empty cells render as `.`. No trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
                if y % 3 == 0 {
                    f.write_str("------+-------+------\n")?;
                }
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                    if x % 3 == 0 {
                        f.write_str("| ")?;
                    }
                }
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::House;

    #[test]
    fn test_parse_simple_puzzle() {
        let grid: Grid = "
            53. .7. ...
            6.. 195 ...
            .98 ... .6.
            8.. .6. ..3
            4.. 8.3 ..1
            7.. .2. ..6
            .6. ... 28.
            ... 419 ..5
            ... .8. .79
        "
        .parse()
        .unwrap();

        assert_eq!(grid[Position::new(0, 0)], Some(5));
        assert_eq!(grid[Position::new(4, 1)], Some(9));
        assert_eq!(grid[Position::new(2, 0)], None);
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_ignores_noise_characters() {
        // The block-diagram output format parses back: '|', '-', '+', and
        // spaces are all noise, and the divider lines hold no cells
        let text = "\
            5 3 . | . 7 . | . . .\n\
            6 . . | 1 9 5 | . . .\n\
            . 9 8 | . . . | . 6 .\n\
            ------+-------+------\n\
            8 . . | . 6 . | . . 3\n\
            4 . . | 8 . 3 | . . 1\n\
            7 . . | . 2 . | . . 6\n\
            ------+-------+------\n\
            . 6 . | . . . | 2 8 .\n\
            . . . | 4 1 9 | . . 5\n\
            . . . | . 8 . | . 7 9\n";

        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid[Position::new(0, 0)], Some(5));
        assert_eq!(grid[Position::new(8, 8)], Some(9));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let mut text = String::new();
        for _ in 0..9 {
            text.push_str("\n   \n"); // blank and whitespace-only lines
            text.push_str(".........\n");
        }

        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_parse_rejects_too_few_rows() {
        let text = ".........\n".repeat(8);
        assert_eq!(
            text.parse::<Grid>(),
            Err(ValidateError::RowCount { actual: 8 })
        );
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let mut text = ".........\n".repeat(9);
        text.replace_range(20..30, ".......\n"); // row 2 has 7 cells
        assert_eq!(
            text.parse::<Grid>(),
            Err(ValidateError::ColumnCount { row: 2, actual: 7 })
        );
    }

    #[test]
    fn test_parse_rejects_zero() {
        let mut text = ".........\n".repeat(9);
        text.replace_range(14..15, "0");
        assert_eq!(
            text.parse::<Grid>(),
            Err(ValidateError::OutOfRange {
                x: 4,
                y: 1,
                value: 0
            })
        );
    }

    #[test]
    fn test_parse_rejects_duplicate() {
        let text = "5...5....\n".to_string() + &".........\n".repeat(8);
        assert_eq!(
            text.parse::<Grid>(),
            Err(ValidateError::Duplicate {
                x: 4,
                y: 0,
                digit: 5,
                house: House::Row,
            })
        );
    }

    #[test]
    fn test_display_golden() {
        let grid: Grid = "
            53..7....
            6..195...
            .98....6.
            8...6...3
            4..8.3..1
            7...2...6
            .6....28.
            ...419..5
            ....8..79
        "
        .parse()
        .unwrap();

        let expected = "\
5 3 . | . 7 . | . . .
6 . . | 1 9 5 | . . .
. 9 8 | . . . | . 6 .
------+-------+------
8 . . | . 6 . | . . 3
4 . . | 8 . 3 | . . 1
7 . . | . 2 . | . . 6
------+-------+------
. 6 . | . . . | 2 8 .
. . . | 4 1 9 | . . 5
. . . | . 8 . | . 7 9";

        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let grid: Grid = "
            ..3 .2. 6..
            9.. 3.5 ..1
            ..1 8.6 4..
            ..8 1.2 9..
            7.. ... ..8
            ..6 7.8 2..
            ..2 6.9 5..
            8.. 2.3 ..9
            ..5 .1. 3..
        "
        .parse()
        .unwrap();

        let reparsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn test_from_rows_accepts_fixed_arrays() {
        let mut rows = [[None; 9]; 9];
        rows[4][4] = Some(5);
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid[Position::new(4, 4)], Some(5));
    }

    #[test]
    fn test_set_and_validate() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), Some(5));
        grid.set(Position::new(8, 0), Some(5));
        assert_eq!(
            grid.validate(),
            Err(ValidateError::Duplicate {
                x: 8,
                y: 0,
                digit: 5,
                house: House::Row,
            })
        );

        grid.set(Position::new(8, 0), None);
        assert_eq!(grid.validate(), Ok(()));
    }

    #[test]
    fn test_is_complete() {
        assert!(!Grid::empty().is_complete());

        let full: Grid = "
            534678912
            672195348
            198342567
            859761423
            426853791
            713924856
            961537284
            287419635
            345286179
        "
        .parse()
        .unwrap();
        assert!(full.is_complete());
    }
}
