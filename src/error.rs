//! Validation errors raised at the control/model boundary.
//!
//! None of these are fatal: a rejected update leaves the previous model in
//! place and the error is handed back to the host so it can surface feedback.
//! Numeric clamping is not an error and never shows up here.

use thiserror::Error;

use crate::models::{ColorField, EnumField};

/// Result alias for style-model operations.
pub type StyleResult<T> = std::result::Result<T, StyleError>;

/// Rejected style update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// Enum update named a variant outside the declared set.
    #[error("invalid variant '{variant}' for {field} (expected one of: {expected})")]
    InvalidVariant {
        /// Field the update targeted
        field: EnumField,
        /// Rejected variant name as received
        variant: String,
        /// Comma-separated list of accepted variant names
        expected: String,
    },

    /// Color value could not be accepted (bad hex or channel out of range).
    #[error("invalid color for {field}: {reason}")]
    InvalidColor {
        /// Field the update targeted
        field: ColorField,
        /// Human-readable cause
        reason: String,
    },
}

impl StyleError {
    /// Builds an `InvalidVariant` error listing the declared variants of `field`.
    pub fn invalid_variant(field: EnumField, variant: impl Into<String>) -> Self {
        Self::InvalidVariant {
            field,
            variant: variant.into(),
            expected: field.variants().join(", "),
        }
    }

    /// Builds an `InvalidColor` error.
    pub fn invalid_color(field: ColorField, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            field,
            reason: reason.into(),
        }
    }
}
