// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter validation shared by the shape generators.
//!
//! Each check is a pure function that returns `Ok(())` or the
//! [`ValidationError`] describing the first violated constraint. Type checks
//! are only needed for loosely-typed [`Value`] arguments; the remaining checks
//! cover what a Rust type cannot express.

use crate::{Color, ColorRegistry, ParamKind, ValidationError, Value};

/// Check that `value` is of the `expected` kind.
///
/// # Errors
///
/// [`ValidationError::TypeMismatch`] if `expected` does not accept the
/// value's kind.
///
/// ```
/// use artpack::{check_type, ParamKind, Value};
///
/// assert!(check_type("x", &Value::from(4), ParamKind::Real).is_ok());
/// assert!(check_type("x", &Value::from(4.5), ParamKind::Real).is_ok());
/// assert!(check_type("x", &Value::from("-4"), ParamKind::Real).is_err());
/// ```
pub fn check_type(param: &str, value: &Value, expected: ParamKind) -> Result<(), ValidationError> {
    let actual = value.kind();
    if expected.accepts(actual) {
        Ok(())
    } else {
        Err(ValidationError::type_mismatch(param, expected, actual))
    }
}

/// Check that `value` is strictly positive.
///
/// NaN is not positive.
///
/// # Errors
///
/// [`ValidationError::NotPositive`] if `value` is zero, negative, or NaN.
pub fn is_positive_number(param: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::not_positive(param, value))
    }
}

/// Check that `value` is neither NaN nor infinite.
///
/// # Errors
///
/// [`ValidationError::NotFinite`] for NaN and both infinities.
pub fn check_finite(param: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::not_finite(param, value))
    }
}

/// Check that a count is at least `minimum`.
///
/// `context` names what the minimum applies to and appears in the error
/// message, e.g. `"circle"`.
///
/// # Errors
///
/// [`ValidationError::BelowMinimum`] if `value < minimum`.
pub fn check_minimum_count(
    param: &str,
    value: i64,
    minimum: i64,
    context: &str,
) -> Result<(), ValidationError> {
    if value < minimum {
        Err(ValidationError::below_minimum(param, value, minimum, context))
    } else {
        Ok(())
    }
}

/// Check that a loosely-typed value is a valid color specification.
///
/// Anything other than a string is a type error; strings are checked with
/// [`validate_color`].
///
/// # Errors
///
/// [`ValidationError::TypeMismatch`] for non-strings, otherwise the errors of
/// [`validate_color`].
pub fn is_valid_color(
    param: &str,
    value: &Value,
    registry: &impl ColorRegistry,
) -> Result<(), ValidationError> {
    match value {
        Value::Str(s) => validate_color(param, s, registry),
        other => Err(ValidationError::type_mismatch(
            param,
            ParamKind::Text,
            other.kind(),
        )),
    }
}

/// Check that `value` is a `#RGB` or `#RRGGBB` hex color, or a name known to
/// `registry` (ignoring case).
///
/// # Errors
///
/// [`ValidationError::InvalidColor`] if `value` is neither.
///
/// ```
/// use artpack::{validate_color, Css4Colors};
///
/// assert!(validate_color("color", "#1a1a1a", &Css4Colors).is_ok());
/// assert!(validate_color("color", "Purple", &Css4Colors).is_ok());
/// assert!(validate_color("color", "A Cool Blue", &Css4Colors).is_err());
/// ```
pub fn validate_color(
    param: &str,
    value: &str,
    registry: &impl ColorRegistry,
) -> Result<(), ValidationError> {
    if Color::from_hex(value).is_some() || registry.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_color(param, value))
    }
}

/// Check that a group label is present and non-empty.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredLabel`] for `None` or an empty label.
pub fn check_group_label(param: &str, label: Option<&str>) -> Result<(), ValidationError> {
    match label {
        Some(label) if !label.is_empty() => Ok(()),
        _ => Err(ValidationError::missing_label(param, label)),
    }
}
