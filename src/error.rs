//! Error types for distview

use thiserror::Error;

/// Engine error type.
///
/// User-facing parameter problems are reported through
/// [`ValidationErrors`](crate::validation::ValidationErrors) instead; this enum
/// covers integration mistakes, bad configuration and I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Lookup of a distribution name that is not in the registry
    #[error("Unknown distribution: {0}")]
    UnknownDistribution(String),

    /// Category filter other than all, continuous or discrete
    #[error("Unknown distribution category: {0}")]
    UnknownCategory(String),

    /// Function kind other than pdf or cdf
    #[error("Unknown function kind: {0}")]
    UnknownFunctionKind(String),

    /// Parameter name not defined for the selected distribution
    #[error("Unknown parameter `{parameter}` for distribution {family}")]
    UnknownParameter {
        family: &'static str,
        parameter: String,
    },

    /// Parameters rejected while constructing a distribution
    #[error("Invalid parameters for {family}: {reason}")]
    InvalidParameters {
        family: &'static str,
        reason: String,
    },

    /// Quantile window outside `0 <= low < high <= 1`
    #[error("Invalid quantile window [{low}, {high}]")]
    InvalidQuantileWindow { low: f64, high: f64 },

    /// Operation needs a selected distribution
    #[error("No distribution selected")]
    NoSelection,

    /// Session slot errors
    #[error("Session slot {0} does not exist")]
    SlotIndex(usize),

    #[error("Session already holds the maximum of {0} distributions")]
    SlotLimit(usize),

    #[error("Session must keep at least one distribution")]
    LastSlot,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(family: &'static str, reason: impl std::fmt::Display) -> Self {
        Error::InvalidParameters {
            family,
            reason: reason.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
