use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Errors raised by the solvers and the matcher.
///
/// Every error indicates invalid input: the algorithms are deterministic (apart from the explicit
/// shuffle of the matcher), so retrying with the same input will fail in the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input violates a precondition (zero weight, mismatched lengths, ...).
    /// Nothing has been computed when this is returned.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The nuts and bolts do not form an exact one-to-one correspondence.
    /// The order of both sequences is unspecified afterwards.
    #[error("matching violation: {0}")]
    MatchingViolation(Violation),
}

/// Describes how the one-to-one correspondence between nuts and bolts was found to be broken.
/// Indices are absolute positions in the sequences passed to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// No element in `start..end` matches the pivot.
    MissingPivot { start: usize, end: usize },
    /// Both `first` and `second` match the pivot.
    DuplicatePivot { first: usize, second: usize },
    /// The pivot nut and its bolt ended up at different positions.
    PivotMismatch { nut: usize, bolt: usize },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::MissingPivot { start, end } => {
                write!(f, "no match for pivot in range {start}..{end}")
            }
            Violation::DuplicatePivot { first, second } => {
                write!(f, "pivot matched twice, at {first} and {second}")
            }
            Violation::PivotMismatch { nut, bolt } => {
                write!(f, "pivot nut settled at {nut} but its bolt at {bolt}")
            }
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::MatchingViolation(v)
    }
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
