// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-aligned layout geometry.
//!
//! Pixalign contains the small amount of arithmetic that user interface
//! layout needs on top of plain points and rectangles: snapping values to
//! the device pixel grid, fitting and filling with an aspect ratio, cutting
//! rectangles into pieces, and interpolating between layout states.
//!
//! All coordinates are logical points. A [`ScaleFactor`] says how many
//! device pixels make one point; snapping operations take anything that
//! implements [`ScaleFactorProvider`].
//!
//! # Examples
//!
//! Laying out a sidebar and a letterboxed video:
//!
//! ```
//! use pixalign::{
//!     AspectRatio, LayoutDirection, Position, Rect, RectEdge, ScaleFactor, Size,
//! };
//!
//! let scale = ScaleFactor::X2;
//! let window = Rect::from_origin_size((0.0, 0.0), (1000.0, 600.0));
//!
//! let (sidebar, content) = window.slice(RectEdge::MinX, 250.3);
//! assert_eq!(sidebar.width(), 250.3);
//! assert_eq!(content.min_x(), sidebar.max_x());
//!
//! let video = AspectRatio::WIDESCREEN.rect_to_fit(
//!     content.round_to_pixel(scale),
//!     Position::Center,
//!     LayoutDirection::LeftToRight,
//!     scale,
//! );
//! assert_eq!(video.size(), Size::new(749.5, 421.5));
//! assert!(content.round_to_pixel(scale).contains_rect(video));
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of Pixalign and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on various types.
//! - `schemars`: Add best-effort support for using Pixalign types in JSON schemas using [schemars][].
//! - `tracing`: Log degenerate inputs, such as zero-area bounds, at debug level with [tracing][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [tracing]: https://docs.rs/tracing

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::excessive_precision,
    reason = "golden ratio constant"
)]
// The following lint is part of the Linebender standard set,
// but resolving it has been deferred for now.
#![allow(clippy::use_self, reason = "value types are named in full, as in their constructors")]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("pixalign requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

#[cfg(test)]
use rand as _;

extern crate alloc;

mod aspect_ratio;
mod axis;
pub(crate) mod common;
mod distribute;
mod edge;
mod insets;
mod interpolation;
mod layout_direction;
mod log;
mod pixel;
mod point;
mod position;
mod rect;
mod scale;
mod size;
mod vec2;

pub use crate::aspect_ratio::*;
pub use crate::axis::*;
pub use crate::distribute::*;
pub use crate::edge::*;
pub use crate::insets::*;
pub use crate::interpolation::*;
pub use crate::layout_direction::*;
pub use crate::pixel::*;
pub use crate::point::*;
pub use crate::position::*;
pub use crate::rect::*;
pub use crate::scale::*;
pub use crate::size::*;
pub use crate::vec2::*;
