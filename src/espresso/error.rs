//! Error types for cube validation and minimization.

use crate::core::error::CoreError;
use std::fmt;
use std::io;

/// Errors related to cube validation
///
/// These errors occur when invalid cube values are provided during cover creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Invalid cube value encountered
    ///
    /// Cube input values must be 0 (low), 1 (high), or 2 (don't care).
    InvalidValue {
        /// The invalid value that was encountered
        value: u8,
        /// The position in the input vector where the invalid value occurred
        position: usize,
    },
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::InvalidValue { value, position } => write!(
                f,
                "Invalid cube value {} at position {}. Expected 0 (low), 1 (high), or 2 (don't care).",
                value, position
            ),
        }
    }
}

impl std::error::Error for CubeError {}

impl From<CubeError> for io::Error {
    fn from(err: CubeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur during minimization operations
///
/// This error type is returned by `Cover::minimize()` and `BoolExpr::minimize()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// Cube validation error
    Cube(CubeError),
    /// The ON-set and OFF-set supplied to the algorithm overlap (spec §7.1's
    /// fatal precondition: a cube would need to be both on and off).
    NotOrthogonal,
    /// A multi-valued output variable's range explosion during UNWRAP
    /// exceeded the 10^6-cube cap (spec §7.1).
    UnravelOverflow,
    /// The minimized result failed the post-minimization check of spec §7.2:
    /// it does not cover the original ON-set under the don't-care set.
    VerificationFailed {
        covers_onset: bool,
        disjoint_from_offset: bool,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::Cube(e) => write!(f, "Cube error: {}", e),
            MinimizationError::NotOrthogonal => {
                write!(f, "ON-set and OFF-set are not orthogonal")
            }
            MinimizationError::UnravelOverflow => {
                write!(f, "multi-valued unwrap exceeded the cube cap")
            }
            MinimizationError::VerificationFailed {
                covers_onset,
                disjoint_from_offset,
            } => write!(
                f,
                "minimization result failed verification (covers_onset: {}, disjoint_from_offset: {})",
                covers_onset, disjoint_from_offset
            ),
        }
    }
}

impl std::error::Error for MinimizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizationError::Cube(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CubeError> for MinimizationError {
    fn from(err: CubeError) -> Self {
        MinimizationError::Cube(err)
    }
}

impl From<CoreError> for MinimizationError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotOrthogonal => MinimizationError::NotOrthogonal,
            CoreError::UnravelOverflow => MinimizationError::UnravelOverflow,
            CoreError::VerificationFailed(_) => MinimizationError::VerificationFailed {
                covers_onset: false,
                disjoint_from_offset: true,
            },
            CoreError::SizeMismatch { .. } | CoreError::InvalidDescriptor(_) => {
                MinimizationError::VerificationFailed {
                    covers_onset: false,
                    disjoint_from_offset: false,
                }
            }
        }
    }
}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        match err {
            MinimizationError::Cube(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            other => io::Error::other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_error_invalid_value_message() {
        let err = CubeError::InvalidValue {
            value: 5,
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid cube value 5"));
        assert!(msg.contains("position 2"));
    }

    #[test]
    fn minimization_error_from_cube_error() {
        let cube_err = CubeError::InvalidValue {
            value: 5,
            position: 2,
        };
        let min_err: MinimizationError = cube_err.into();
        assert!(matches!(min_err, MinimizationError::Cube(_)));
    }

    #[test]
    fn minimization_error_from_core_not_orthogonal() {
        let min_err: MinimizationError = CoreError::NotOrthogonal.into();
        assert_eq!(min_err, MinimizationError::NotOrthogonal);
    }

    #[test]
    fn minimization_error_to_io_error() {
        let err = MinimizationError::NotOrthogonal;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
    }
}
