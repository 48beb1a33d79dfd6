//! Error types for container construction and growth configuration.

use std::error::Error;
use std::fmt;

/// Errors arising from container construction or growth configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum MatrixError {
    /// Attempted to construct a container below the minimum
    /// dimensionality.
    InvalidDimension {
        /// The rejected dimensionality.
        dimension: usize,
    },
    /// Attempted to configure an expansion rate below zero. Shrink is
    /// representable but unsupported.
    NegativeRate {
        /// The rejected rate.
        rate: f32,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dimension } => {
                write!(f, "container dimensionality must be at least 2, got {dimension}")
            }
            Self::NegativeRate { rate } => {
                write!(f, "expansion rate {rate} is not supported: shrink is unimplemented")
            }
        }
    }
}

impl Error for MatrixError {}
