use std::{error::Error, fmt};

use crate::core::actions::cancellation::Cancelled;

/// Validation failures raised before any computation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    UnknownColourScheme {
        name: String,
    },
}

impl FractalError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, reason } => {
                write!(f, "invalid parameter '{}': {}", parameter, reason)
            }
            Self::UnknownColourScheme { name } => {
                write!(f, "unknown colour scheme '{}'", name)
            }
        }
    }
}

impl Error for FractalError {}

/// Error type for the cancel-aware compute and render entry points.
///
/// Cancellation is expected control flow for interactive callers, so it is
/// kept apart from validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelableError {
    /// The operation was cancelled before completion.
    Cancelled(Cancelled),
    /// Inputs were rejected before any work started.
    Fractal(FractalError),
}

impl fmt::Display for CancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Fractal(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Fractal(err) => Some(err),
        }
    }
}

impl From<FractalError> for CancelableError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<Cancelled> for CancelableError {
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}
