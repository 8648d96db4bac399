// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point data for circles.

use alloc::string::String;

use crate::{
    check_finite, check_group_label, check_minimum_count, check_type, is_positive_number,
    is_valid_color, validate_color, Circle, ColorRegistry, Css4Colors, ParamKind, Point,
    PointTable, ValidationError, Value,
};

/// The fewest perimeter points accepted for a circle.
///
/// Fewer points make the polygon approximation visibly faceted.
pub const MIN_CIRCLE_POINTS: usize = 100;

/// The number of perimeter points used when none is given.
pub const DEFAULT_N_POINTS: usize = 100;

/// Parameters for [`circle_data`].
///
/// With the `serde` feature this deserializes from configuration; every field
/// except `center` and `radius` may be omitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleData {
    /// The center of the circle.
    pub center: Point,
    /// The radius. Must be positive.
    pub radius: f64,
    /// Outline color, as a hex string or color name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
    /// Fill color, as a hex string or color name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: Option<String>,
    /// Number of points sampled around the perimeter.
    #[cfg_attr(feature = "serde", serde(default = "default_n_points"))]
    pub n_points: usize,
    /// Whether to add a group column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_var: bool,
    /// The group column's value. Required when `group_var` is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_label: Option<String>,
}

#[cfg(feature = "serde")]
fn default_n_points() -> usize {
    DEFAULT_N_POINTS
}

impl CircleData {
    /// Parameters for a circle with default point count and no annotations.
    pub fn new(center: impl Into<Point>, radius: f64) -> CircleData {
        CircleData {
            center: center.into(),
            radius,
            color: None,
            fill: None,
            n_points: DEFAULT_N_POINTS,
            group_var: false,
            group_label: None,
        }
    }

    /// Set the outline color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the number of perimeter points.
    #[must_use]
    pub fn with_n_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    /// Request a group column holding `label`.
    #[must_use]
    pub fn with_group(mut self, label: impl Into<String>) -> Self {
        self.group_var = true;
        self.group_label = Some(label.into());
        self
    }

    /// The circle these parameters describe.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Check every parameter, resolving color names with `registry`.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, in the order listed on
    /// [`circle_data`].
    pub fn validate(&self, registry: &impl ColorRegistry) -> Result<(), ValidationError> {
        let n_points = i64::try_from(self.n_points).unwrap_or(i64::MAX);
        check_geometry(self.center.x, self.center.y, self.radius, n_points)?;
        if let Some(color) = &self.color {
            validate_color("color", color, registry)?;
        }
        if let Some(fill) = &self.fill {
            validate_color("fill", fill, registry)?;
        }
        if self.group_var {
            check_group_label("group_label", self.group_label.as_deref())?;
        }
        Ok(())
    }

    /// Validate and generate the point table, resolving color names with
    /// `registry`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`CircleData::validate`]; no points are
    /// generated in that case.
    pub fn generate_with(&self, registry: &impl ColorRegistry) -> Result<PointTable, ValidationError> {
        if let Err(err) = self.validate(registry) {
            tracing::debug!(error = %err, "rejected circle parameters");
            return Err(err);
        }
        Ok(self.generate_unchecked())
    }

    /// Validate and generate the point table using the CSS4 color names.
    ///
    /// # Errors
    ///
    /// As [`CircleData::generate_with`].
    pub fn generate(&self) -> Result<PointTable, ValidationError> {
        self.generate_with(&Css4Colors)
    }

    fn generate_unchecked(&self) -> PointTable {
        let table = PointTable::from_points(self.circle().perimeter_points(self.n_points))
            .with_outline_color(self.color.clone())
            .with_fill_color(self.fill.clone())
            .with_group(if self.group_var {
                self.group_label.clone()
            } else {
                None
            });
        tracing::debug!(
            n_points = self.n_points,
            radius = self.radius,
            outline_color = table.outline_color().is_some(),
            fill_color = table.fill_color().is_some(),
            group = table.group().is_some(),
            "generated circle data"
        );
        table
    }
}

/// Generate a table of points outlining a circle.
///
/// The perimeter is sampled at `n_points` angles evenly spaced from 0 to 2π
/// inclusive, so the last row repeats the first and the rows trace a closed
/// path. Outline color, fill color and group columns are present only when
/// requested, and hold the same value on every row.
///
/// Color names are checked against the CSS4 named colors; use
/// [`CircleData::generate_with`] to supply another registry.
///
/// # Errors
///
/// Returns the first violated constraint, checked in this order: center
/// coordinates and radius are finite, radius is positive, `n_points` is at
/// least [`MIN_CIRCLE_POINTS`], `color` and `fill` are valid colors, and a
/// non-empty `group_label` is given when `group_var` is set.
///
/// # Examples
///
/// ```
/// use artpack::{circle_data, CircleData, Point};
///
/// let table = circle_data(&CircleData::new((0.0, 0.0), 5.0).with_color("purple")).unwrap();
/// assert_eq!(table.len(), 100);
/// assert!(table.row(0).unwrap().point().is_near(Point::new(5.0, 0.0), 1e-9));
/// assert_eq!(table.outline_color(), Some("purple"));
/// assert!(!table.has_column_named("fill_color"));
///
/// let err = circle_data(&CircleData::new((0.0, 0.0), -1.0)).unwrap_err();
/// assert_eq!(err.param(), "radius");
/// ```
pub fn circle_data(params: &CircleData) -> Result<PointTable, ValidationError> {
    params.generate()
}

/// Loosely-typed arguments for circle generation.
///
/// Each field carries a [`Value`] whose type is checked before any other
/// constraint, so a string center coordinate is reported as a type mismatch
/// rather than as an invalid number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleArgs {
    /// Center x coordinate; a real number.
    pub x: Value,
    /// Center y coordinate; a real number.
    pub y: Value,
    /// Radius; a positive real number.
    pub radius: Value,
    /// Outline color; a string, if given.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Value>,
    /// Fill color; a string, if given.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: Option<Value>,
    /// Point count; an integer.
    #[cfg_attr(feature = "serde", serde(default = "default_n_points_value"))]
    pub n_points: Value,
    /// Whether to add a group column.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_var: bool,
    /// The group column's value; a string, required when `group_var` is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_label: Option<Value>,
}

#[cfg(feature = "serde")]
fn default_n_points_value() -> Value {
    Value::Int(DEFAULT_N_POINTS as i64)
}

impl CircleArgs {
    /// Arguments for a circle with default point count and no annotations.
    pub fn new(x: impl Into<Value>, y: impl Into<Value>, radius: impl Into<Value>) -> CircleArgs {
        CircleArgs {
            x: x.into(),
            y: y.into(),
            radius: radius.into(),
            color: None,
            fill: None,
            n_points: Value::Int(DEFAULT_N_POINTS as i64),
            group_var: false,
            group_label: None,
        }
    }

    /// Set the outline color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<Value>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Value>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the point count.
    #[must_use]
    pub fn with_n_points(mut self, n_points: impl Into<Value>) -> Self {
        self.n_points = n_points.into();
        self
    }

    /// Set the grouping flag and label.
    #[must_use]
    pub fn with_group(mut self, group_var: bool, label: impl Into<Value>) -> Self {
        self.group_var = group_var;
        self.group_label = Some(label.into());
        self
    }

    /// Check every argument and convert to typed parameters.
    ///
    /// Absent and null optional arguments are treated alike. The group label
    /// is only checked when `group_var` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TypeMismatch`] when `x`, `y` or `radius` is
    /// not a number or `n_points` is not an integer, then the value errors of
    /// [`circle_data`] in the same order. A non-string `color`, `fill`, or
    /// (when grouping) `group_label` is also a type mismatch. A point count
    /// that does not fit in `usize` is [`ValidationError::AboveMaximum`].
    pub fn to_params(&self, registry: &impl ColorRegistry) -> Result<CircleData, ValidationError> {
        let x = typed_arg("x", &self.x, ParamKind::Real, Value::as_f64)?;
        let y = typed_arg("y", &self.y, ParamKind::Real, Value::as_f64)?;
        let radius = typed_arg("radius", &self.radius, ParamKind::Real, Value::as_f64)?;
        let n_points = typed_arg("n_points", &self.n_points, ParamKind::Integer, Value::as_i64)?;
        check_geometry(x, y, radius, n_points)?;
        let n_points = usize::try_from(n_points).map_err(|_| {
            ValidationError::above_maximum(
                "n_points",
                n_points,
                i64::try_from(usize::MAX).unwrap_or(i64::MAX),
            )
        })?;

        let color = supplied(self.color.as_ref());
        if let Some(color) = color {
            is_valid_color("color", color, registry)?;
        }
        let fill = supplied(self.fill.as_ref());
        if let Some(fill) = fill {
            is_valid_color("fill", fill, registry)?;
        }
        let group_label = if self.group_var {
            let label = supplied(self.group_label.as_ref());
            if let Some(label) = label {
                check_type("group_label", label, ParamKind::Text)?;
            }
            let label = label.and_then(Value::as_str);
            check_group_label("group_label", label)?;
            label.map(String::from)
        } else {
            supplied(self.group_label.as_ref())
                .and_then(Value::as_str)
                .map(String::from)
        };

        Ok(CircleData {
            center: Point::new(x, y),
            radius,
            color: color.and_then(Value::as_str).map(String::from),
            fill: fill.and_then(Value::as_str).map(String::from),
            n_points,
            group_var: self.group_var,
            group_label,
        })
    }

    /// Validate and generate the point table, resolving color names with
    /// `registry`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`CircleArgs::to_params`]; no points are
    /// generated in that case.
    pub fn generate_with(&self, registry: &impl ColorRegistry) -> Result<PointTable, ValidationError> {
        match self.to_params(registry) {
            Ok(params) => Ok(params.generate_unchecked()),
            Err(err) => {
                tracing::debug!(error = %err, "rejected circle arguments");
                Err(err)
            }
        }
    }

    /// Validate and generate the point table using the CSS4 color names.
    ///
    /// # Errors
    ///
    /// As [`CircleArgs::generate_with`].
    pub fn generate(&self) -> Result<PointTable, ValidationError> {
        self.generate_with(&Css4Colors)
    }
}

/// An optional argument counts as supplied unless it is absent or null.
fn supplied(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn typed_arg<T>(
    param: &str,
    value: &Value,
    expected: ParamKind,
    get: impl FnOnce(&Value) -> Option<T>,
) -> Result<T, ValidationError> {
    check_type(param, value, expected)?;
    get(value).ok_or_else(|| ValidationError::type_mismatch(param, expected, value.kind()))
}

fn check_geometry(x: f64, y: f64, radius: f64, n_points: i64) -> Result<(), ValidationError> {
    check_finite("x", x)?;
    check_finite("y", y)?;
    check_finite("radius", radius)?;
    is_positive_number("radius", radius)?;
    check_minimum_count("n_points", n_points, MIN_CIRCLE_POINTS as i64, "circle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Column, ValueKind};
    use alloc::collections::BTreeMap;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::TAU;

    #[test]
    fn row_count_matches_n_points() {
        for n in [100, 101, 250, 1000] {
            let table = circle_data(&CircleData::new((1.0, 2.0), 3.0).with_n_points(n)).unwrap();
            assert_eq!(table.len(), n);
            assert_eq!(table.rows().count(), n);
        }
    }

    #[test]
    fn five_radius_circle_at_origin() {
        let table = circle_data(&CircleData::new((0.0, 0.0), 5.0).with_n_points(100)).unwrap();
        assert_eq!(table.len(), 100);
        let first = table.row(0).unwrap().point();
        assert!(first.is_near(Point::new(5.0, 0.0), 1e-9));
        // Angles are spaced by 2π/99, so row 50 sits just past the half turn.
        let theta = 50.0 * TAU / 99.0;
        let mid = table.row(50).unwrap().point();
        assert!(mid.is_near(Point::new(5.0 * theta.cos(), 5.0 * theta.sin()), 1e-9));
        assert!(mid.x < -4.99);
    }

    #[test]
    fn middle_row_of_odd_count_is_the_half_turn() {
        let table = circle_data(&CircleData::new((0.0, 0.0), 5.0).with_n_points(101)).unwrap();
        let mid = table.row(50).unwrap().point();
        assert!(mid.is_near(Point::new(-5.0, 0.0), 1e-9));
    }

    #[test]
    fn first_and_last_points_coincide() {
        let table = circle_data(&CircleData::new((-2.5, 8.0), 0.5).with_n_points(137)).unwrap();
        let first = table.row(0).unwrap().point();
        let last = table.row(136).unwrap().point();
        assert!(first.is_near(last, 1e-9));
    }

    #[test]
    fn random_circles_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let center = Point::new(rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3));
            let radius = rng.random_range(1e-3..1e3);
            let n = rng.random_range(MIN_CIRCLE_POINTS..2000);
            let table = CircleData::new(center, radius)
                .with_n_points(n)
                .with_group("circle_")
                .generate()
                .unwrap();
            assert_eq!(table.len(), n);
            let tolerance = 1e-9 * (1.0 + radius + center.x.abs().max(center.y.abs()));
            assert!(table.row(0).unwrap().point().is_near(table.row(n - 1).unwrap().point(), tolerance));
            for p in table.points() {
                assert!((p.distance(center) - radius).abs() <= tolerance);
            }
            assert!(table.rows().all(|r| r.group == Some("circle_")));
        }
    }

    #[test]
    fn annotation_columns_only_when_requested() {
        let bare = circle_data(&CircleData::new((0.0, 0.0), 1.0)).unwrap();
        assert_eq!(bare.columns().collect::<Vec<_>>(), vec![Column::X, Column::Y]);

        let full = circle_data(
            &CircleData::new((0.0, 0.0), 1.0)
                .with_color("#1a1a1a")
                .with_fill("Purple")
                .with_group("circle_1"),
        )
        .unwrap();
        assert_eq!(full.columns().count(), 5);
        for row in full.rows() {
            assert_eq!(row.outline_color, Some("#1a1a1a"));
            assert_eq!(row.fill_color, Some("Purple"));
            assert_eq!(row.group, Some("circle_1"));
        }
    }

    #[test]
    fn label_without_group_var_is_ignored() {
        let mut params = CircleData::new((0.0, 0.0), 1.0);
        params.group_label = Some("unused".into());
        let table = circle_data(&params).unwrap();
        assert!(!table.has_column(Column::Group));
    }

    #[test]
    fn generation_is_deterministic() {
        let params = CircleData::new((0.3, -0.7), 2.2).with_n_points(333).with_color("red");
        let a = circle_data(&params).unwrap();
        let b = circle_data(&params).unwrap();
        assert_eq!(a, b);
        for (p, q) in a.points().zip(b.points()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn radius_must_be_positive() {
        for radius in [0.0, -5.0] {
            let err = circle_data(&CircleData::new((0.0, 0.0), radius)).unwrap_err();
            assert_eq!(err, ValidationError::not_positive("radius", radius));
        }
    }

    #[test]
    fn coordinates_must_be_finite() {
        let err = circle_data(&CircleData::new((f64::NAN, 0.0), 1.0)).unwrap_err();
        assert!(err.is_not_finite());
        assert_eq!(err.param(), "x");
        let err = circle_data(&CircleData::new((0.0, 0.0), f64::INFINITY)).unwrap_err();
        assert!(err.is_not_finite());
        assert_eq!(err.param(), "radius");
    }

    #[test]
    fn n_points_below_minimum() {
        let err = circle_data(&CircleData::new((0.0, 0.0), 1.0).with_n_points(99)).unwrap_err();
        assert_eq!(err, ValidationError::below_minimum("n_points", 99, 100, "circle"));
    }

    #[test]
    fn invalid_outline_color() {
        let err = circle_data(&CircleData::new((0.0, 0.0), 1.0).with_color("A Cool Blue")).unwrap_err();
        assert_eq!(err, ValidationError::invalid_color("color", "A Cool Blue"));
    }

    #[test]
    fn invalid_fill_color() {
        let err = circle_data(&CircleData::new((0.0, 0.0), 1.0).with_fill("#e7223")).unwrap_err();
        assert_eq!(err, ValidationError::invalid_color("fill", "#e7223"));
    }

    #[test]
    fn group_var_requires_label() {
        let mut params = CircleData::new((0.0, 0.0), 1.0);
        params.group_var = true;
        let err = circle_data(&params).unwrap_err();
        assert_eq!(err, ValidationError::missing_label("group_label", None));

        let err = circle_data(&CircleData::new((0.0, 0.0), 1.0).with_group("")).unwrap_err();
        assert_eq!(err, ValidationError::missing_label("group_label", Some("")));
    }

    #[test]
    fn validation_order() {
        // Radius is checked before the point count, the point count before colors.
        let params = CircleData::new((0.0, 0.0), -1.0)
            .with_n_points(3)
            .with_color("nope");
        assert!(circle_data(&params).unwrap_err().is_not_positive());
        let params = CircleData::new((0.0, 0.0), 1.0).with_n_points(3).with_color("nope");
        assert!(circle_data(&params).unwrap_err().is_below_minimum());
        let mut params = CircleData::new((0.0, 0.0), 1.0).with_color("nope");
        params.group_var = true;
        assert!(circle_data(&params).unwrap_err().is_invalid_color());
    }

    #[test]
    fn custom_registry() {
        let mut palette = BTreeMap::new();
        palette.insert(String::from("a cool blue"), Color::from_u32(0x3A7BD5));
        let params = CircleData::new((0.0, 0.0), 1.0).with_color("A Cool Blue");
        let table = params.generate_with(&palette).unwrap();
        assert_eq!(table.outline_color(), Some("A Cool Blue"));
        assert!(params.generate_with(&Css4Colors).is_err());
    }

    #[test]
    fn args_non_numeric_center_is_type_mismatch() {
        let err = CircleArgs::new("-4", 8, 5).generate().unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("x", ParamKind::Real, ValueKind::Str));
        assert!(err.to_string().contains("`x` should be of type `"));

        let err = CircleArgs::new(1, vec![8], 5).generate().unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("y", ParamKind::Real, ValueKind::List));

        let err = CircleArgs::new(1, 2, "5").generate().unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("radius", ParamKind::Real, ValueKind::Str));
    }

    #[test]
    fn args_type_errors_precede_value_errors() {
        // A negative radius and a float point count: the type error wins.
        let err = CircleArgs::new(0, 0, -1).with_n_points(100.0).generate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::type_mismatch("n_points", ParamKind::Integer, ValueKind::Float)
        );
    }

    #[test]
    fn args_accept_integers_for_reals() {
        let table = CircleArgs::new(0, 0, 5).generate().unwrap();
        assert_eq!(table.len(), 100);
        assert!(table.row(0).unwrap().point().is_near(Point::new(5.0, 0.0), 1e-9));
    }

    #[test]
    fn args_value_errors() {
        let err = CircleArgs::new(0, 0, 0).generate().unwrap_err();
        assert!(err.is_not_positive());
        let err = CircleArgs::new(0, 0, 1).with_n_points(-5).generate().unwrap_err();
        assert_eq!(err, ValidationError::below_minimum("n_points", -5, 100, "circle"));
        let err = CircleArgs::new(0, 0, 1).with_color(7).generate().unwrap_err();
        assert_eq!(err, ValidationError::type_mismatch("color", ParamKind::Text, ValueKind::Int));
        let err = CircleArgs::new(0, 0, 1).with_fill("A Cool Blue").generate().unwrap_err();
        assert!(err.is_invalid_color());
    }

    #[test]
    fn args_group_label() {
        let err = CircleArgs::new(0, 0, 1).with_group(true, Value::Null).generate().unwrap_err();
        assert_eq!(err, ValidationError::missing_label("group_label", None));
        let err = CircleArgs::new(0, 0, 1).with_group(true, 3).generate().unwrap_err();
        assert!(err.is_type_mismatch());
        let table = CircleArgs::new(0, 0, 1).with_group(true, "circle_").generate().unwrap();
        assert_eq!(table.group(), Some("circle_"));
        let table = CircleArgs::new(0, 0, 1).with_group(false, "circle_").generate().unwrap();
        assert_eq!(table.group(), None);
    }

    #[test]
    fn args_group_label_ignored_without_grouping() {
        // Any label is accepted, and dropped, when no group column is requested.
        for label in [Value::from(3), Value::from(vec![1, 2]), Value::Null, Value::from("")] {
            let table = CircleArgs::new(0, 0, 1).with_group(false, label).generate().unwrap();
            assert_eq!(table.len(), 100);
            assert_eq!(table.group(), None);
            assert!(!table.has_column(Column::Group));
        }
        let params = CircleArgs::new(0, 0, 1).with_group(false, 3).to_params(&Css4Colors).unwrap();
        assert_eq!(params.group_label, None);
    }

    #[test]
    fn args_null_colors_are_absent() {
        let args = CircleArgs::new(0, 0, 1)
            .with_color(None::<&str>)
            .with_fill(Value::Null);
        let params = args.to_params(&Css4Colors).unwrap();
        assert_eq!(params, CircleData::new((0.0, 0.0), 1.0));
        let table = args.generate().unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.outline_color(), None);
        assert_eq!(table.fill_color(), None);
        assert!(!table.has_column(Column::OutlineColor));
        assert!(!table.has_column(Column::FillColor));
        // A null label still counts as missing when grouping.
        let err = args.with_group(true, Value::Null).generate().unwrap_err();
        assert!(err.is_missing_label());
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn args_n_points_beyond_usize() {
        let err = CircleArgs::new(0, 0, 1).with_n_points(i64::MAX).generate().unwrap_err();
        assert!(err.is_above_maximum());
        assert_eq!(err.param(), "n_points");
    }

    #[test]
    fn args_and_typed_params_agree() {
        let args = CircleArgs::new(1.5, -2, 4).with_color("teal").with_n_points(150);
        let typed = CircleData::new((1.5, -2.0), 4.0).with_color("teal").with_n_points(150);
        assert_eq!(args.to_params(&Css4Colors).unwrap(), typed);
        assert_eq!(args.generate().unwrap(), circle_data(&typed).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_from_config() {
        let params: CircleData =
            serde_json::from_str(r#"{"center": {"x": 1.0, "y": 2.0}, "radius": 3.0, "fill": "gold"}"#)
                .unwrap();
        assert_eq!(params, CircleData::new((1.0, 2.0), 3.0).with_fill("gold"));

        let args: CircleArgs =
            serde_json::from_str(r#"{"x": "-4", "y": 8, "radius": 5}"#).unwrap();
        assert!(args.generate().unwrap_err().is_type_mismatch());
    }
}
