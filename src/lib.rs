// Copyright 2024 the Artpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point data for shapes in generative art.
//!
//! The artpack library generates tables of points that trace simple shapes,
//! ready to be handed to a plotting library's path or polygon primitives. It
//! does no rendering itself. Each generator validates its parameters first and
//! either returns a [`ValidationError`] naming the offending parameter or a
//! complete [`PointTable`].
//!
//! # Examples
//!
//! A circle with a fill color and a group column:
//! ```
//! use artpack::{circle_data, CircleData, Column};
//!
//! let params = CircleData::new((10.0, 10.0), 2.5)
//!     .with_fill("#1a1a1a")
//!     .with_group("circle_1");
//! let table = circle_data(&params).unwrap();
//!
//! assert_eq!(table.len(), 100);
//! assert!(table.has_column(Column::FillColor));
//! assert!(!table.has_column(Column::OutlineColor));
//! for row in table.rows() {
//!     assert_eq!(row.group, Some("circle_1"));
//! }
//! ```
//!
//! Arguments without static types, for instance read from a configuration
//! document, go through [`CircleArgs`], which checks types before values:
//! ```
//! use artpack::{CircleArgs, ValidationError};
//!
//! let err = CircleArgs::new("-4", 8, 5).generate().unwrap_err();
//! assert!(matches!(err, ValidationError::TypeMismatch { .. }));
//! assert_eq!(err.param(), "x");
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate still uses the `alloc` crate regardless.
//!
//! The `serde` feature derives (de)serialization for the parameter types and
//! serializes a [`PointTable`] as a sequence of row records. The `schemars`
//! and `mint` features add JSON schemas and [`Point`] conversions.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("artpack requires either the `std` or `libm` feature");

extern crate alloc;

mod circle;
mod circle_data;
mod color;
mod common;
mod error;
mod point;
mod table;
mod validate;
mod value;

pub use crate::circle::*;
pub use crate::circle_data::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::point::*;
pub use crate::table::*;
pub use crate::validate::*;
pub use crate::value::*;
