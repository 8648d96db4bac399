// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use core::{f64::consts::TAU, iter::FusedIterator};

use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// Is this circle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }

    /// Is this circle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.center.is_nan() || self.radius.is_nan()
    }

    /// The point on the circle at `angle` radians, measured counter-clockwise
    /// from the positive x axis.
    #[inline]
    pub fn point_at(&self, angle: f64) -> Point {
        point_on_circle(self.center, self.radius, angle)
    }

    /// Sample `n` points on the perimeter, evenly spaced by angle.
    ///
    /// The angles run from 0 to 2π with both ends included, so for `n >= 2`
    /// the first and last points coincide and the samples describe a closed
    /// path.
    ///
    /// ```
    /// use artpack::{Circle, Point};
    ///
    /// let circle = Circle::new((1.0, 1.0), 2.0);
    /// let points: Vec<Point> = circle.perimeter_points(5).collect();
    /// assert_eq!(points.len(), 5);
    /// assert!(points[0].is_near(Point::new(3.0, 1.0), 1e-12));
    /// assert!(points[2].is_near(Point::new(-1.0, 1.0), 1e-12));
    /// assert!(points[0].is_near(points[4], 1e-12));
    /// ```
    pub fn perimeter_points(&self, n: usize) -> PerimeterPoints {
        let step = if n > 1 { TAU / (n - 1) as f64 } else { 0.0 };
        PerimeterPoints {
            circle: *self,
            step,
            ix: 0,
            n,
        }
    }
}

/// Iterator over evenly spaced perimeter samples of a [`Circle`].
///
/// Created by [`Circle::perimeter_points`].
#[derive(Clone, Debug)]
pub struct PerimeterPoints {
    circle: Circle,
    step: f64,
    ix: usize,
    n: usize,
}

impl PerimeterPoints {
    fn angle(&self, ix: usize) -> f64 {
        // The last sample lands exactly on 2π rather than on an accumulated
        // product, so the path closes.
        if ix + 1 == self.n && ix > 0 {
            TAU
        } else {
            self.step * ix as f64
        }
    }
}

impl Iterator for PerimeterPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.ix >= self.n {
            return None;
        }
        let angle = self.angle(self.ix);
        self.ix += 1;
        Some(self.circle.point_at(angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n - self.ix;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PerimeterPoints {}

impl FusedIterator for PerimeterPoints {}

#[inline]
fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    let (angle_sin, angle_cos) = angle.sin_cos();
    Point::new(center.x + angle_cos * radius, center.y + angle_sin * radius)
}
