//! Digit-usage masks per row, column, and block.

use crate::{DigitSet, Grid, House, Position};

/// Tracks which digits are already placed in each row, column, and 3×3 block.
///
/// This is the scratch state shared by validation and backtracking search:
/// one [`DigitSet`] per row, per column, and per block. It is rebuilt fresh
/// for each computation and owned exclusively by it, so independent runs
/// never interfere.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Position, UsedDigits};
///
/// let mut used = UsedDigits::new();
/// used.place(Position::new(0, 0), 5);
///
/// // 5 is now ruled out along row 0, column 0, and the top-left block
/// assert!(!used.allowed(Position::new(8, 0)).contains(5));
/// assert!(!used.allowed(Position::new(0, 8)).contains(5));
/// assert!(!used.allowed(Position::new(2, 2)).contains(5));
///
/// // ... but not elsewhere
/// assert!(used.allowed(Position::new(4, 4)).contains(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UsedDigits {
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    blocks: [DigitSet; 9],
}

impl UsedDigits {
    /// Creates masks with no digits used.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds masks from the filled cells of a grid in a single pass.
    ///
    /// The grid is trusted: this does not detect conflicts among the filled
    /// cells. Run the validator first.
    ///
    /// # Panics
    ///
    /// Panics if a filled cell holds a value outside 1-9.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut used = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = grid[pos] {
                used.place(pos, digit);
            }
        }
        used
    }

    /// Marks a digit as used in the row, column, and block of `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn place(&mut self, pos: Position, digit: u8) {
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.blocks[usize::from(pos.block_index())].insert(digit);
    }

    /// Clears a digit from the row, column, and block of `pos`.
    ///
    /// This is the backtrack step: it must mirror a previous
    /// [`place`](Self::place) of the same digit at the same position.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn unplace(&mut self, pos: Position, digit: u8) {
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.blocks[usize::from(pos.block_index())].remove(digit);
    }

    /// Returns the digits that can be placed at `pos` without conflicting
    /// with any already-placed digit.
    #[must_use]
    pub fn allowed(&self, pos: Position) -> DigitSet {
        !(self.rows[usize::from(pos.y())]
            | self.cols[usize::from(pos.x())]
            | self.blocks[usize::from(pos.block_index())])
    }

    /// Returns the house in which placing `digit` at `pos` would collide
    /// with an existing digit, if any.
    ///
    /// Houses are checked in row, column, block order; only the first
    /// conflict is reported.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn conflict(&self, pos: Position, digit: u8) -> Option<House> {
        if self.rows[usize::from(pos.y())].contains(digit) {
            Some(House::Row)
        } else if self.cols[usize::from(pos.x())].contains(digit) {
            Some(House::Column)
        } else if self.blocks[usize::from(pos.block_index())].contains(digit) {
            Some(House::Block)
        } else {
            None
        }
    }
}
