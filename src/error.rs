// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for parameter validation.

use alloc::{format, string::String};

use thiserror::Error;

use crate::{ParamKind, ValueKind};

/// Errors returned when a shape generator's parameters are rejected.
///
/// Every variant names the offending parameter and what was supplied, and its
/// `Display` output states the constraint that was violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A parameter has the wrong runtime type.
    #[error("`{param}` should be of type `{expected}`.\nYou've supplied a `{actual}` object.")]
    TypeMismatch {
        /// Name of the parameter.
        param: String,
        /// The accepted kind.
        expected: ParamKind,
        /// The kind that was supplied.
        actual: ValueKind,
    },

    /// A number that must be strictly positive is zero, negative, or NaN.
    #[error(
        "`{param}` must be a positive integer or float (number with decimals). You've supplied: `{value}`"
    )]
    NotPositive {
        /// Name of the parameter.
        param: String,
        /// The supplied value.
        value: f64,
    },

    /// A coordinate or length is NaN or infinite.
    #[error("`{param}` must be a finite number. You've supplied: `{value}`")]
    NotFinite {
        /// Name of the parameter.
        param: String,
        /// The supplied value.
        value: f64,
    },

    /// A count is smaller than the minimum for the shape it describes.
    #[error("`{param}` must be at least {minimum} for a {context}. You've supplied: `{actual}`")]
    BelowMinimum {
        /// Name of the parameter.
        param: String,
        /// The supplied count.
        actual: i64,
        /// Smallest accepted count.
        minimum: i64,
        /// What the minimum applies to, e.g. `circle`.
        context: String,
    },

    /// A count is too large to be represented on this platform.
    #[error("`{param}` must be at most {maximum}. You've supplied: `{actual}`")]
    AboveMaximum {
        /// Name of the parameter.
        param: String,
        /// The supplied count.
        actual: i64,
        /// Largest accepted count.
        maximum: i64,
    },

    /// A string is neither a hex color nor a known color name.
    #[error(
        "`{param}` must be a valid hex color (#RRGGBB or #RGB) or a named color. You've supplied: '{value}'"
    )]
    InvalidColor {
        /// Name of the parameter.
        param: String,
        /// The supplied string.
        value: String,
    },

    /// Grouping was requested without a usable label.
    #[error(
        "`{param}` must be a non-empty string when a group column is requested. You've supplied: {}",
        label_repr(.label)
    )]
    MissingRequiredLabel {
        /// Name of the parameter.
        param: String,
        /// The supplied label, if any.
        label: Option<String>,
    },
}

fn label_repr(label: &Option<String>) -> String {
    match label {
        Some(label) => format!("'{label}'"),
        None => String::from("no label"),
    }
}

impl ValidationError {
    /// Create a type mismatch error.
    #[must_use]
    pub fn type_mismatch(param: impl Into<String>, expected: ParamKind, actual: ValueKind) -> Self {
        Self::TypeMismatch {
            param: param.into(),
            expected,
            actual,
        }
    }

    /// Create a not positive error.
    #[must_use]
    pub fn not_positive(param: impl Into<String>, value: f64) -> Self {
        Self::NotPositive {
            param: param.into(),
            value,
        }
    }

    /// Create a not finite error.
    #[must_use]
    pub fn not_finite(param: impl Into<String>, value: f64) -> Self {
        Self::NotFinite {
            param: param.into(),
            value,
        }
    }

    /// Create a below minimum error.
    #[must_use]
    pub fn below_minimum(
        param: impl Into<String>,
        actual: i64,
        minimum: i64,
        context: impl Into<String>,
    ) -> Self {
        Self::BelowMinimum {
            param: param.into(),
            actual,
            minimum,
            context: context.into(),
        }
    }

    /// Create an above maximum error.
    #[must_use]
    pub fn above_maximum(param: impl Into<String>, actual: i64, maximum: i64) -> Self {
        Self::AboveMaximum {
            param: param.into(),
            actual,
            maximum,
        }
    }

    /// Create an invalid color error.
    #[must_use]
    pub fn invalid_color(param: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            param: param.into(),
            value: value.into(),
        }
    }

    /// Create a missing label error.
    #[must_use]
    pub fn missing_label(param: impl Into<String>, label: Option<&str>) -> Self {
        Self::MissingRequiredLabel {
            param: param.into(),
            label: label.map(String::from),
        }
    }

    /// The name of the offending parameter.
    pub fn param(&self) -> &str {
        match self {
            Self::TypeMismatch { param, .. }
            | Self::NotPositive { param, .. }
            | Self::NotFinite { param, .. }
            | Self::BelowMinimum { param, .. }
            | Self::AboveMaximum { param, .. }
            | Self::InvalidColor { param, .. }
            | Self::MissingRequiredLabel { param, .. } => param,
        }
    }

    /// Check if this is a type mismatch error.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a not positive error.
    #[must_use]
    pub fn is_not_positive(&self) -> bool {
        matches!(self, Self::NotPositive { .. })
    }

    /// Check if this is a not finite error.
    #[must_use]
    pub fn is_not_finite(&self) -> bool {
        matches!(self, Self::NotFinite { .. })
    }

    /// Check if this is a below minimum error.
    #[must_use]
    pub fn is_below_minimum(&self) -> bool {
        matches!(self, Self::BelowMinimum { .. })
    }

    /// Check if this is an above maximum error.
    #[must_use]
    pub fn is_above_maximum(&self) -> bool {
        matches!(self, Self::AboveMaximum { .. })
    }

    /// Check if this is an invalid color error.
    #[must_use]
    pub fn is_invalid_color(&self) -> bool {
        matches!(self, Self::InvalidColor { .. })
    }

    /// Check if this is a missing label error.
    #[must_use]
    pub fn is_missing_label(&self) -> bool {
        matches!(self, Self::MissingRequiredLabel { .. })
    }
}
