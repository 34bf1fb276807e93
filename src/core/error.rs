//! Internal fatal-precondition errors (spec.md §7.1).
//!
//! The C original calls `fatal(msg)` and exits the process. A library
//! target instead returns a `Result`; the wrapper layer (`crate::error`)
//! converts these into the public error taxonomy.

use std::fmt;

/// A condition that the original implementation treats as unrecoverable:
/// malformed cube/descriptor state, non-orthogonal ON/OFF sets, or an
/// unravel expansion beyond the cube-count ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// ON-set and OFF-set intersect somewhere (spec.md §4.4 step 2).
    NotOrthogonal,
    /// `unravel_range` would exceed the 1,000,000-cube ceiling (§4.1).
    UnravelOverflow,
    /// A cube's bit width does not match the active descriptor's `size`.
    SizeMismatch { expected: usize, found: usize },
    /// The descriptor declares zero variables, or an output index outside
    /// `0..n_vars`.
    InvalidDescriptor(String),
    /// Post-minimization verification (spec.md §7 item 2) failed: the
    /// returned cover does not cover the original ON-set, or intersects
    /// the OFF-set.
    VerificationFailed(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::NotOrthogonal => {
                write!(f, "ON-set and OFF-set are not orthogonal")
            }
            CoreError::UnravelOverflow => {
                write!(f, "unravel expansion exceeded 1,000,000 cubes")
            }
            CoreError::SizeMismatch { expected, found } => write!(
                f,
                "cube size {found} does not match descriptor size {expected}"
            ),
            CoreError::InvalidDescriptor(msg) => write!(f, "invalid descriptor: {msg}"),
            CoreError::VerificationFailed(msg) => {
                write!(f, "minimization result failed verification: {msg}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

pub type CoreResult<T> = Result<T, CoreError>;
