use std::fmt::Display;

use crate::grid::Point;
use crate::session::Phase;

/// Errors returned when a grid edit or a session command is refused.
///
/// None of these are fatal: a refused operation leaves the grid and the
/// session exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation is not allowed in the current phase of the session
    InvalidState { action: &'static str, phase: Phase },
    /// The point lies outside of the grid
    OutOfBounds(Point),
    /// The point lies on the fixed outer wall of a bordered grid
    Border(Point),
    /// The point is taken by the start or the end cell
    Occupied(Point),
    InvalidDimensions { rows: usize, columns: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidState { action, phase } => {
                write!(f, "cannot {} while the session is {}", action, phase)
            }
            Error::OutOfBounds(p) => write!(f, "{} is outside of the grid", p),
            Error::Border(p) => write!(f, "{} is part of the grid border", p),
            Error::Occupied(p) => write!(f, "{} is occupied by the start or end cell", p),
            Error::InvalidDimensions { rows, columns } => {
                write!(f, "a {}x{} grid cannot hold a start and an end cell", rows, columns)
            }
        }
    }
}

impl std::error::Error for Error {}
