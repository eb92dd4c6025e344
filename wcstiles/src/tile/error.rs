//! Error types for tile factory operations.

use std::fmt;

use thiserror::Error;

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The service address is empty.
    MissingServiceAddress,
    /// The coverage name is empty.
    MissingCoverage,
    /// The sector is empty.
    MissingCell,
    /// The level is empty.
    MissingLevel,
    /// A requested image width or height is zero.
    InvalidWidthOrHeight,
}

impl InvalidReason {
    /// Returns the stable reason code used in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            InvalidReason::MissingServiceAddress => "missingServiceAddress",
            InvalidReason::MissingCoverage => "missingCoverage",
            InvalidReason::MissingCell => "missingCell",
            InvalidReason::MissingLevel => "missingLevel",
            InvalidReason::InvalidWidthOrHeight => "invalidWidthOrHeight",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors that can occur while building tiles or tile URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileFactoryError {
    /// An argument failed validation. The call can be retried once the
    /// argument is corrected.
    #[error("{component}.{operation}: {reason}")]
    InvalidArgument {
        component: &'static str,
        operation: &'static str,
        reason: InvalidReason,
    },
}

impl TileFactoryError {
    /// Creates an `InvalidArgument` error and logs it.
    pub fn invalid_argument(
        component: &'static str,
        operation: &'static str,
        reason: InvalidReason,
    ) -> Self {
        tracing::error!(
            component,
            operation,
            reason = reason.code(),
            "Rejected invalid argument"
        );
        TileFactoryError::InvalidArgument {
            component,
            operation,
            reason,
        }
    }

    pub fn reason(&self) -> InvalidReason {
        match self {
            TileFactoryError::InvalidArgument { reason, .. } => *reason,
        }
    }
}

/// Result type for tile factory operations.
pub type TileFactoryResult<T> = Result<T, TileFactoryError>;
