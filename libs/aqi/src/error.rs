//! Error types for the classification pipeline.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type AqiResult<T> = Result<T, AqiError>;

/// Errors raised at the edges of the pipeline.
///
/// Once a [`Concentration`](crate::Concentration) has been constructed every
/// calculation is total, so these only show up while converting raw input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// Concentration was negative, NaN or infinite.
    #[error("invalid PM2.5 concentration {value}: expected a finite, non-negative number")]
    InvalidInput {
        /// The rejected value, as received.
        value: f64,
    },

    /// A status label did not name any of the six tiers.
    #[error("unrecognized air quality status")]
    UnrecognizedTier,
}

/// Used by the derived `FromStr` impl on [`Tier`](crate::Tier).
pub(crate) fn unrecognized_tier(_label: &str) -> AqiError {
    AqiError::UnrecognizedTier
}
