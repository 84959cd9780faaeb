//! Error handling for the cone solver.
//!
//! Both error kinds are pure validation gates: they are detected before any
//! computation happens, carry a human-readable reason, and are surfaced to the
//! presentation layer as user-facing messages. Nothing here is fatal or
//! retryable.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Solver error type
///
/// Represents validation failures of the geometric and machining inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Cone dimensions violate D > d and l > 0
    #[error("Invalid cone dimensions: {reason}")]
    InvalidDimensions {
        /// Why the dimensions were rejected.
        reason: String,
    },

    /// Reverse support-angle inputs violate their domain
    #[error("Invalid support input: {reason}")]
    InvalidSupportInput {
        /// Why the support inputs were rejected.
        reason: String,
    },
}

impl SolverError {
    /// Build an `InvalidDimensions` error from any displayable reason.
    pub fn dimensions(reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidSupportInput` error from any displayable reason.
    pub fn support(reason: impl Into<String>) -> Self {
        Self::InvalidSupportInput {
            reason: reason.into(),
        }
    }
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;
