//! Exhaustive backtracking solver for gridlock.
//!
//! [`solve`] takes a validated [`Grid`](gridlock_core::Grid) and returns
//! [`Solutions`], a lazy iterator over every completion of the puzzle that
//! satisfies the placement rules. See the module documentation of
//! [`backtrack`] for the search design.

pub use self::backtrack::*;

mod backtrack;
