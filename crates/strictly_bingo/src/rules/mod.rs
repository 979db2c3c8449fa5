//! Line rules for bingo.
//!
//! This module contains pure functions for evaluating a selection
//! according to bingo rules. Rules are separated from tile storage
//! so they can be composed into contracts and invariants.

pub mod detect;
pub mod line;

pub use detect::{count_lines, describe, detect, has_any_line, has_line};
pub use line::{LineKind, WinningLine};
