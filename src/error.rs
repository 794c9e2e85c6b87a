//! Error taxonomy for the board engine.
//!
//! Most error kinds here are not `Result`-worthy: an illegal move pushed by
//! the driver, or a `pop()` without a matching `push()`, are programming
//! errors and fail fast via `debug_assert!`/`assert!` rather than a
//! recoverable `Err`. The one genuinely recoverable case is parsing a move
//! name supplied by an external caller, which is what lives here.

use std::fmt;

/// A move name failed to parse as `"PASS"` or a legal coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The string was too short or otherwise not a coordinate shape.
    Malformed(String),
    /// The column letter was absent, lower-case, `'I'`, or off the board.
    BadColumn(char),
    /// The row number was non-numeric or out of `1..=N`.
    BadRow(String),
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::Malformed(s) => write!(f, "not a move: {s:?}"),
            ParseMoveError::BadColumn(c) => write!(f, "bad column letter: {c:?}"),
            ParseMoveError::BadRow(s) => write!(f, "bad row number: {s:?}"),
        }
    }
}

impl std::error::Error for ParseMoveError {}
