// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping values to the device pixel grid.
//!
//! A value on the grid is a whole number of device pixels, that is, a
//! multiple of `1 / scale`. Snapping is computed in pixel space as
//! `op(value * scale) / scale`. Multiplying and dividing by the scale is not
//! exact for every scale, so the floor and ceiling results are checked
//! against the input and moved by one pixel when rounding error pushed them
//! to the wrong side. This keeps `floor ≤ value ≤ ceil` and makes every
//! snapping operation idempotent.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{Insets, Point, ScaleFactorProvider, Size, Vec2};

/// The largest value on the pixel grid that is less than or equal to `value`.
///
/// Returns `value` unchanged when the scale is [`ScaleFactor::NONE`],
/// `value` is not finite, or `value` spans so many pixels that it has no
/// fractional part left to snap.
///
/// # Examples
///
/// ```
/// use pixalign::{floor_to_pixel, ScaleFactor};
///
/// assert_eq!(floor_to_pixel(1.75, ScaleFactor::X2), 1.5);
/// assert_eq!(floor_to_pixel(-0.2, ScaleFactor::X1), -1.0);
/// assert_eq!(floor_to_pixel(1.75, ScaleFactor::NONE), 1.75);
/// ```
///
/// [`ScaleFactor::NONE`]: crate::ScaleFactor::NONE
pub fn floor_to_pixel(value: f64, scale: impl ScaleFactorProvider) -> f64 {
    let scale = scale.scale_factor().get();
    let Some(pixels) = pixels(value, scale) else {
        return value;
    };
    let mut index = pixels.floor();
    // `value * scale` may have rounded down past a boundary that `value` sits on.
    if (index + 1.0) / scale <= value {
        index += 1.0;
    } else if index / scale > value {
        index -= 1.0;
    }
    index / scale
}

/// The smallest value on the pixel grid that is greater than or equal to `value`.
///
/// Returns `value` unchanged when the scale is [`ScaleFactor::NONE`],
/// `value` is not finite, or `value` spans so many pixels that it has no
/// fractional part left to snap.
///
/// # Examples
///
/// ```
/// use pixalign::{ceil_to_pixel, ScaleFactor};
///
/// assert_eq!(ceil_to_pixel(1.25, ScaleFactor::X3), 4.0 / 3.0);
/// assert_eq!(ceil_to_pixel(1.5, ScaleFactor::X2), 1.5);
/// ```
///
/// [`ScaleFactor::NONE`]: crate::ScaleFactor::NONE
pub fn ceil_to_pixel(value: f64, scale: impl ScaleFactorProvider) -> f64 {
    let scale = scale.scale_factor().get();
    let Some(pixels) = pixels(value, scale) else {
        return value;
    };
    let mut index = pixels.ceil();
    if (index - 1.0) / scale >= value {
        index -= 1.0;
    } else if index / scale < value {
        index += 1.0;
    }
    index / scale
}

/// The value on the pixel grid nearest to `value`.
///
/// A value exactly halfway between two pixel boundaries goes to the boundary
/// with the even pixel index.
///
/// # Examples
///
/// ```
/// use pixalign::{round_to_pixel, ScaleFactor};
///
/// assert_eq!(round_to_pixel(1.3, ScaleFactor::X2), 1.5);
/// assert_eq!(round_to_pixel(0.25, ScaleFactor::X2), 0.0);
/// assert_eq!(round_to_pixel(0.75, ScaleFactor::X2), 1.0);
/// ```
pub fn round_to_pixel(value: f64, scale: impl ScaleFactorProvider) -> f64 {
    let scale = scale.scale_factor().get();
    match pixels(value, scale) {
        Some(pixels) => pixels.round_ties_even() / scale,
        None => value,
    }
}

/// From 2^52 on every `f64` is a whole number, and past 2^53 a pixel index
/// plus one rounds back to itself.
const WHOLE_PIXELS: f64 = 4_503_599_627_370_496.0;

/// `value` measured in device pixels, if snapping applies.
#[inline]
fn pixels(value: f64, scale: f64) -> Option<f64> {
    if scale == 0.0 || !value.is_finite() {
        return None;
    }
    let pixels = value * scale;
    (pixels.abs() < WHOLE_PIXELS).then_some(pixels)
}

/// Snapping to the pixel grid, applied component-wise.
///
/// # Examples
///
/// ```
/// use pixalign::{PixelSnap, Point, ScaleFactor, Size};
///
/// let pt = Point::new(0.3, 1.8).floor_to_pixel(ScaleFactor::X2);
/// assert_eq!(pt, Point::new(0.0, 1.5));
///
/// let size = Size::new(10.1, 4.0).ceil_to_pixel(ScaleFactor::X1);
/// assert_eq!(size, Size::new(11.0, 4.0));
/// ```
pub trait PixelSnap: Sized {
    /// Snap down to the pixel grid.
    #[must_use]
    fn floor_to_pixel(self, scale: impl ScaleFactorProvider) -> Self;

    /// Snap up to the pixel grid.
    #[must_use]
    fn ceil_to_pixel(self, scale: impl ScaleFactorProvider) -> Self;

    /// Snap to the nearest pixel boundary, ties to even.
    #[must_use]
    fn round_to_pixel(self, scale: impl ScaleFactorProvider) -> Self;
}

impl PixelSnap for f64 {
    #[inline]
    fn floor_to_pixel(self, scale: impl ScaleFactorProvider) -> f64 {
        floor_to_pixel(self, scale)
    }

    #[inline]
    fn ceil_to_pixel(self, scale: impl ScaleFactorProvider) -> f64 {
        ceil_to_pixel(self, scale)
    }

    #[inline]
    fn round_to_pixel(self, scale: impl ScaleFactorProvider) -> f64 {
        round_to_pixel(self, scale)
    }
}

/// Implements `PixelSnap` for a struct of `f64` fields.
macro_rules! impl_pixel_snap {
    ($ty:ident { $($field:ident),+ }) => {
        impl PixelSnap for $ty {
            #[inline]
            fn floor_to_pixel(self, scale: impl ScaleFactorProvider) -> $ty {
                let scale = scale.scale_factor();
                $ty { $($field: floor_to_pixel(self.$field, scale)),+ }
            }

            #[inline]
            fn ceil_to_pixel(self, scale: impl ScaleFactorProvider) -> $ty {
                let scale = scale.scale_factor();
                $ty { $($field: ceil_to_pixel(self.$field, scale)),+ }
            }

            #[inline]
            fn round_to_pixel(self, scale: impl ScaleFactorProvider) -> $ty {
                let scale = scale.scale_factor();
                $ty { $($field: round_to_pixel(self.$field, scale)),+ }
            }
        }
    };
}

impl_pixel_snap!(Point { x, y });
impl_pixel_snap!(Vec2 { x, y });
impl_pixel_snap!(Size { width, height });
impl_pixel_snap!(Insets { top, left, bottom, right });
