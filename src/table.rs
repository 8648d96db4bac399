// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular point data handed to plotting code.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::Point;

/// A column of a [`PointTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// x coordinates.
    X,
    /// y coordinates.
    Y,
    /// Constant outline color.
    OutlineColor,
    /// Constant fill color.
    FillColor,
    /// Constant group label.
    Group,
}

impl Column {
    /// Every column, in output order.
    pub const ALL: [Column; 5] = [
        Column::X,
        Column::Y,
        Column::OutlineColor,
        Column::FillColor,
        Column::Group,
    ];

    /// The column's name in the output schema.
    pub fn name(self) -> &'static str {
        match self {
            Column::X => "x",
            Column::Y => "y",
            Column::OutlineColor => "outline_color",
            Column::FillColor => "fill_color",
            Column::Group => "group",
        }
    }

    /// The column with the given schema name.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered `(x, y)` rows with optional constant annotation columns.
///
/// Coordinates are stored column-wise. An annotation column holds one value
/// that applies to every row; a column that was never set is absent from the
/// table rather than present and empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointTable {
    x: Vec<f64>,
    y: Vec<f64>,
    outline_color: Option<String>,
    fill_color: Option<String>,
    group: Option<String>,
}

impl PointTable {
    /// A table with one row per point and no annotation columns.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> PointTable {
        let (x, y) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        PointTable {
            x,
            y,
            ..PointTable::default()
        }
    }

    /// Set or clear the outline color column.
    #[must_use]
    pub fn with_outline_color(mut self, color: Option<String>) -> Self {
        self.outline_color = color;
        self
    }

    /// Set or clear the fill color column.
    #[must_use]
    pub fn with_fill_color(mut self, color: Option<String>) -> Self {
        self.fill_color = color;
        self
    }

    /// Set or clear the group label column.
    #[must_use]
    pub fn with_group(mut self, label: Option<String>) -> Self {
        self.group = label;
        self
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Is the table empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The x column.
    #[inline]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y column.
    #[inline]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The outline color shared by every row, if the column is present.
    #[inline]
    pub fn outline_color(&self) -> Option<&str> {
        self.outline_color.as_deref()
    }

    /// The fill color shared by every row, if the column is present.
    #[inline]
    pub fn fill_color(&self) -> Option<&str> {
        self.fill_color.as_deref()
    }

    /// The group label shared by every row, if the column is present.
    #[inline]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Is `column` present?
    pub fn has_column(&self, column: Column) -> bool {
        match column {
            Column::X | Column::Y => true,
            Column::OutlineColor => self.outline_color.is_some(),
            Column::FillColor => self.fill_color.is_some(),
            Column::Group => self.group.is_some(),
        }
    }

    /// Is a column with this schema name present?
    pub fn has_column_named(&self, name: &str) -> bool {
        Column::from_name(name).is_some_and(|c| self.has_column(c))
    }

    /// The present columns, in output order.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL.into_iter().filter(|&c| self.has_column(c))
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        Some(Row {
            x: *self.x.get(index)?,
            y: *self.y.get(index)?,
            outline_color: self.outline_color(),
            fill_color: self.fill_color(),
            group: self.group(),
        })
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            ix: 0,
        }
    }

    /// Iterate over the coordinates of each row.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }
}

/// One row of a [`PointTable`].
///
/// Annotation fields are `None` when the table lacks that column.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row<'a> {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The outline color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub outline_color: Option<&'a str>,
    /// The fill color.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fill_color: Option<&'a str>,
    /// The group label.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub group: Option<&'a str>,
}

impl Row<'_> {
    /// The row's coordinates.
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Iterator over the rows of a [`PointTable`].
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    table: &'a PointTable,
    ix: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        let row = self.table.row(self.ix)?;
        self.ix += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.len().saturating_sub(self.ix);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// Serialized as a sequence of row records; absent columns are omitted from
/// every record.
#[cfg(feature = "serde")]
impl serde::Serialize for PointTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> PointTable {
        PointTable::from_points([
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ])
    }

    #[test]
    fn bare_table_has_only_coordinates() {
        let t = square();
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.x(), &[0., 1., 1., 0.]);
        assert_eq!(t.y(), &[0., 0., 1., 1.]);
        assert_eq!(t.columns().collect::<Vec<_>>(), vec![Column::X, Column::Y]);
        assert!(!t.has_column_named("outline_color"));
        assert!(!t.has_column_named("fill_color"));
        assert!(!t.has_column_named("group"));
        assert_eq!(t.row(4), None);
    }

    #[test]
    fn annotation_columns_repeat_on_every_row() {
        let t = square()
            .with_outline_color(Some("black".into()))
            .with_group(Some("square_1".into()));
        assert_eq!(
            t.columns().collect::<Vec<_>>(),
            vec![Column::X, Column::Y, Column::OutlineColor, Column::Group]
        );
        assert!(t.has_column_named("group"));
        assert!(!t.has_column(Column::FillColor));
        for row in t.rows() {
            assert_eq!(row.outline_color, Some("black"));
            assert_eq!(row.fill_color, None);
            assert_eq!(row.group, Some("square_1"));
        }
        assert_eq!(t.rows().len(), 4);
    }

    #[test]
    fn points_follow_row_order() {
        let t = square();
        let from_rows: Vec<Point> = t.rows().map(|r| r.point()).collect();
        let points: Vec<Point> = t.points().collect();
        assert_eq!(from_rows, points);
        assert_eq!(points[2], Point::new(1., 1.));
    }

    #[test]
    fn column_names() {
        for c in Column::ALL {
            assert_eq!(Column::from_name(c.name()), Some(c));
        }
        assert_eq!(Column::from_name("color"), None);
        assert!(!square().has_column_named("z"));
    }

    #[test]
    fn empty_table() {
        let t = PointTable::from_points([]);
        assert!(t.is_empty());
        assert_eq!(t.rows().next(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_row_records() {
        let t = PointTable::from_points([Point::new(1., 2.)]).with_fill_color(Some("red".into()));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"x":1.0,"y":2.0,"fill_color":"red"}]"#);
    }
}
