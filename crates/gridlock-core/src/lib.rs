//! Core data structures for the gridlock sudoku tools.
//!
//! This crate provides the grid model, the rule validator, and the digit-usage
//! bitmasks shared by validation and search. It also owns the text format:
//! grids parse from the lenient puzzle-file syntax via [`FromStr`] and render
//! back via [`Display`].
//!
//! # Overview
//!
//! - [`grid`]: the 9×9 [`Grid`] of optional cell values, with parsing and
//!   formatting
//! - [`position`]: the [`Position`] coordinate type
//! - [`digit_set`]: [`DigitSet`], a 9-bit set of digits 1-9
//! - [`usage`]: [`UsedDigits`], digit-usage masks per row, column, and block
//! - [`validate`]: the rule validator and its [`ValidateError`] taxonomy
//!
//! [`FromStr`]: std::str::FromStr
//! [`Display`]: std::fmt::Display
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! assert_eq!(grid[Position::new(0, 0)], Some(5));
//! assert_eq!(grid[Position::new(2, 0)], None);
//! # Ok::<(), gridlock_core::ValidateError>(())
//! ```

pub mod digit_set;
pub mod grid;
pub mod position;
pub mod usage;
pub mod validate;

// Re-export commonly used types
pub use self::{
    digit_set::DigitSet,
    grid::{Cell, Grid},
    position::Position,
    usage::UsedDigits,
    validate::{House, ValidateError, validate_rows},
};
