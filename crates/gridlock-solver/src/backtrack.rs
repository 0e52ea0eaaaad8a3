//! Depth-first backtracking search over the empty cells of a grid.
//!
//! The search visits the originally-empty cells in row-major order. At each
//! depth it tries the digits 1-9 in ascending order, skipping any digit whose
//! bit is set in the row, column, or block mask for that cell; the mask check
//! is the sole pruning mechanism. Placing a digit sets the three mask bits
//! and descends; exhausting the candidates at a depth backtracks, clearing
//! the cell and the mask bits before resuming the parent depth at the next
//! digit. When every empty cell is filled, the working grid is a solution.
//!
//! The recursive formulation becomes an explicit iterator state machine here:
//! the per-depth placement stack *is* the recursion, and yielding a solution
//! simply returns from [`Iterator::next`] with the stack intact. The next
//! call resumes by backtracking the deepest placement, which makes emission
//! order identical to the recursive generator's and keeps the native call
//! stack flat regardless of search depth.

use std::iter::FusedIterator;

use gridlock_core::{Grid, Position, UsedDigits};
use tinyvec::ArrayVec;

/// Starts a search over all solutions of `puzzle`.
///
/// The returned iterator yields every complete grid that satisfies the
/// placement rules and agrees with the puzzle's clues, in a deterministic
/// order (row-major over cells, ascending digit at each choice point). The
/// puzzle itself is never modified; the search works on its own copy, so
/// independent solves of independent inputs cannot interfere.
///
/// Each call starts a fresh search. Consuming only a prefix of the iterator
/// (for example, [`Iterator::next`] once for the first solution) is the
/// supported way to terminate early; dropping the iterator releases all
/// search state.
///
/// The input must already have passed validation
/// ([`Grid::validate`]); the search trusts its clues and does not re-check
/// them.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::solve;
///
/// let puzzle: Grid = "
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
/// let solution = solve(&puzzle).next().expect("puzzle is solvable");
/// assert!(solution.is_complete());
/// assert!(solution.validate().is_ok());
/// # Ok::<(), gridlock_core::ValidateError>(())
/// ```
#[must_use]
pub fn solve(puzzle: &Grid) -> Solutions {
    Solutions::new(puzzle)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Actively descending or backtracking.
    Searching,
    /// A solution was just returned; the next call must backtrack first.
    Yielded,
    /// The search tree is exhausted.
    Done,
}

/// Lazy iterator over all solutions of a puzzle.
///
/// Created by [`solve`]. Yields solutions one at a time, suspending the
/// search at each emission and resuming it on the next [`next`] call. Owns
/// all of its scratch state (working grid, usage masks, placement stack);
/// nothing is shared and nothing outlives the iterator.
///
/// [`next`]: Iterator::next
#[derive(Debug, Clone)]
pub struct Solutions {
    /// Working copy: clues plus the placements on the current search path.
    grid: Grid,
    used: UsedDigits,
    /// Originally-empty cells in row-major visit order.
    empties: ArrayVec<[Position; 81]>,
    /// Digit placed at `empties[d]` for each depth `d` on the current path.
    placed: ArrayVec<[u8; 81]>,
    /// First candidate digit to try at the current depth.
    next_digit: u8,
    state: State,
    backtracks: usize,
}

impl Solutions {
    fn new(puzzle: &Grid) -> Self {
        let grid = puzzle.clone();
        let used = UsedDigits::from_grid(&grid);
        let mut empties = ArrayVec::new();
        for pos in Position::ALL {
            if grid[pos].is_none() {
                empties.push(pos);
            }
        }
        Self {
            grid,
            used,
            empties,
            placed: ArrayVec::new(),
            next_digit: 1,
            state: State::Searching,
            backtracks: 0,
        }
    }

    /// Returns the number of backtrack steps taken so far.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Undoes the deepest placement and moves its depth to the next digit.
    ///
    /// Returns `false` if there is nothing left to undo (the search tree is
    /// exhausted).
    fn backtrack(&mut self) -> bool {
        let Some(digit) = self.placed.pop() else {
            return false;
        };
        let pos = self.empties[self.placed.len()];
        self.used.unplace(pos, digit);
        self.grid.set(pos, None);
        self.next_digit = digit + 1;
        self.backtracks += 1;
        true
    }
}

impl Iterator for Solutions {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        match self.state {
            State::Done => return None,
            State::Yielded => {
                // Resume exactly where the last solution was emitted.
                if !self.backtrack() {
                    // No placements means the puzzle had no empty cells; its
                    // single solution has already been emitted.
                    self.state = State::Done;
                    return None;
                }
                self.state = State::Searching;
            }
            State::Searching => {}
        }

        loop {
            if self.placed.len() == self.empties.len() {
                self.state = State::Yielded;
                return Some(self.grid.clone());
            }

            let pos = self.empties[self.placed.len()];
            let allowed = self.used.allowed(pos);
            if let Some(digit) = (self.next_digit..=9).find(|&d| allowed.contains(d)) {
                self.used.place(pos, digit);
                self.grid.set(pos, Some(digit));
                self.placed.push(digit);
                self.next_digit = 1;
            } else if !self.backtrack() {
                self.state = State::Done;
                return None;
            }
        }
    }
}

impl FusedIterator for Solutions {}
