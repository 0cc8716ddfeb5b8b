// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fractions of a range, and mapping them back into other ranges.
//!
//! An [`Interpolation`] measures where a value lies between two others, and
//! [`Interpolation::interpolate`] places the same fraction in any other
//! range. Together they map one range onto another:
//!
//! ```
//! use pixalign::{Interpolation, Rect};
//!
//! // How far the scroll offset has moved through the collapse range.
//! let progress = Interpolation::clamped_of(30.0, 0.0, 120.0).unwrap();
//! assert_eq!(progress.fraction(), 0.25);
//!
//! // The same fraction between the expanded and collapsed header frames.
//! let expanded = Rect::new(0.0, 0.0, 320.0, 200.0);
//! let collapsed = Rect::new(0.0, 0.0, 320.0, 40.0);
//! assert_eq!(
//!     progress.interpolate(expanded, collapsed),
//!     Rect::new(0.0, 0.0, 320.0, 160.0),
//! );
//! ```

use core::fmt;

use crate::{Insets, Point, Rect, Size, Vec2};

/// A position within a range, as a fraction of the range.
///
/// `0` is the start of the range and `1` the end. Values outside `[0, 1]`
/// describe positions before the start or past the end.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Interpolation {
    fraction: f64,
}

impl Interpolation {
    /// The start of the range.
    pub const START: Interpolation = Interpolation::new(0.0);
    /// Halfway through the range.
    pub const MIDDLE: Interpolation = Interpolation::new(0.5);
    /// The end of the range.
    pub const END: Interpolation = Interpolation::new(1.0);

    /// An interpolation at `fraction` of the range.
    #[inline]
    pub const fn new(fraction: f64) -> Interpolation {
        Interpolation { fraction }
    }

    /// Where `value` lies in the range from `from` to `to`, unclamped.
    ///
    /// Returns `None` when the range is empty (`from == to`) or the result is
    /// not finite. The endpoints of the range always map to exactly `0` and
    /// `1`, even when the range is wider than the largest `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixalign::Interpolation;
    ///
    /// let i = Interpolation::of(15.0, 10.0, 20.0).unwrap();
    /// assert_eq!(i.fraction(), 0.5);
    ///
    /// // Reversed ranges work too.
    /// let i = Interpolation::of(25.0, 20.0, 10.0).unwrap();
    /// assert_eq!(i.fraction(), -0.5);
    ///
    /// assert!(Interpolation::of(1.0, 3.0, 3.0).is_none());
    /// ```
    pub fn of(value: f64, from: f64, to: f64) -> Option<Interpolation> {
        if from == to || from.is_nan() || to.is_nan() {
            return None;
        }
        if value == from {
            return Some(Interpolation::START);
        }
        if value == to {
            return Some(Interpolation::END);
        }
        let (mut offset, mut span) = (value - from, to - from);
        if !offset.is_finite() || !span.is_finite() {
            // Halving keeps the difference of two finite values finite.
            offset = 0.5 * value - 0.5 * from;
            span = 0.5 * to - 0.5 * from;
        }
        let fraction = offset / span;
        fraction.is_finite().then_some(Interpolation { fraction })
    }

    /// Where `value` lies in the range from `from` to `to`, clamped to
    /// `[0, 1]`.
    ///
    /// Returns `None` under the same conditions as [`of`](Self::of).
    #[inline]
    pub fn clamped_of(value: f64, from: f64, to: f64) -> Option<Interpolation> {
        Interpolation::of(value, from, to).map(Interpolation::clamped)
    }

    /// The fraction of the range.
    #[inline]
    pub const fn fraction(self) -> f64 {
        self.fraction
    }

    /// This interpolation limited to the range itself.
    ///
    /// A NaN fraction clamps to the start.
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Interpolation {
        if self.fraction.is_nan() {
            return Interpolation::START;
        }
        Interpolation::new(self.fraction.clamp(0.0, 1.0))
    }

    /// The same position measured from the other end of the range.
    ///
    /// ```
    /// use pixalign::Interpolation;
    ///
    /// assert_eq!(Interpolation::new(0.25).inverse(), Interpolation::new(0.75));
    /// ```
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Interpolation {
        Interpolation::new(1.0 - self.fraction)
    }

    /// The value at this fraction of the range from `from` to `to`.
    ///
    /// This undoes [`of`](Self::of): `Interpolation::of(v, a, b)` then
    /// `interpolate(a, b)` gives back `v`, up to rounding.
    #[inline]
    pub fn interpolate<T: Interpolate>(self, from: T, to: T) -> T {
        T::interpolate(from, to, self.fraction)
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation({:?})", self.fraction)
    }
}

impl From<Interpolation> for f64 {
    #[inline]
    fn from(i: Interpolation) -> f64 {
        i.fraction
    }
}

/// Types that can be linearly interpolated field by field.
pub trait Interpolate: Sized {
    /// The value at fraction `t` from `from` to `to`.
    ///
    /// `t == 0` must give `from` and `t == 1` must give `to` exactly.
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn interpolate(from: f64, to: f64, t: f64) -> f64 {
        // `from + (to - from)` is not always exactly `to`.
        if t == 1.0 {
            return to;
        }
        let span = to - from;
        if span.is_finite() {
            from + span * t
        } else {
            from * (1.0 - t) + to * t
        }
    }
}

/// Implements `Interpolate` for a struct of `f64` fields.
macro_rules! impl_interpolate {
    ($ty:ident { $($field:ident),+ }) => {
        impl Interpolate for $ty {
            #[inline]
            fn interpolate(from: $ty, to: $ty, t: f64) -> $ty {
                $ty { $($field: f64::interpolate(from.$field, to.$field, t)),+ }
            }
        }
    };
}

impl_interpolate!(Point { x, y });
impl_interpolate!(Vec2 { x, y });
impl_interpolate!(Size { width, height });
impl_interpolate!(Rect { x0, y0, x1, y1 });
impl_interpolate!(Insets { top, left, bottom, right });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        for (from, to) in [(0.0, 1.0), (-3.5, 7.25), (10.0, -10.0), (0.1, 0.3)] {
            assert_eq!(Interpolation::of(from, from, to).unwrap().fraction(), 0.0);
            assert_eq!(Interpolation::of(to, from, to).unwrap().fraction(), 1.0);
        }
    }

    #[test]
    fn empty_range() {
        assert!(Interpolation::of(0.0, 2.0, 2.0).is_none());
        assert!(Interpolation::of(2.0, 2.0, 2.0).is_none());
        assert!(Interpolation::clamped_of(5.0, 2.0, 2.0).is_none());
        assert!(Interpolation::of(f64::NAN, 0.0, 1.0).is_none());
    }

    #[test]
    fn range_wider_than_f64() {
        let (from, to) = (-1e308, 1e308);
        assert_eq!(Interpolation::of(to, from, to), Some(Interpolation::END));
        assert_eq!(Interpolation::of(from, from, to), Some(Interpolation::START));
        assert_eq!(Interpolation::of(0.0, from, to), Some(Interpolation::MIDDLE));
        let three_quarters = Interpolation::of(5e307, from, to).unwrap().fraction();
        assert!((three_quarters - 0.75).abs() < 1e-12, "{three_quarters}");
        assert_eq!(
            Interpolation::of(f64::MAX, -f64::MAX, f64::MAX),
            Some(Interpolation::END)
        );
        assert_eq!(Interpolation::START.interpolate(from, to), from);
        assert_eq!(Interpolation::MIDDLE.interpolate(from, to), 0.0);
        assert_eq!(Interpolation::END.interpolate(from, to), to);
    }

    #[test]
    fn clamping() {
        let i = Interpolation::of(30.0, 0.0, 20.0).unwrap();
        assert_eq!(i.fraction(), 1.5);
        assert_eq!(i.clamped(), Interpolation::END);
        assert_eq!(
            Interpolation::clamped_of(-5.0, 0.0, 20.0),
            Some(Interpolation::START)
        );
        assert_eq!(Interpolation::new(f64::NAN).clamped(), Interpolation::START);
    }

    #[test]
    fn interpolate_exact_at_ends() {
        let (a, b) = (0.1, 0.7);
        assert_eq!(Interpolation::START.interpolate(a, b), a);
        assert_eq!(Interpolation::END.interpolate(a, b), b);
        assert_eq!(Interpolation::new(2.0).interpolate(1.0, 2.0), 3.0);
    }

    #[test]
    fn interpolate_structs() {
        let mid = Interpolation::MIDDLE;
        assert_eq!(
            mid.interpolate(Point::new(0., 0.), Point::new(2., 4.)),
            Point::new(1., 2.)
        );
        assert_eq!(
            mid.interpolate(Size::new(10., 0.), Size::new(20., 10.)),
            Size::new(15., 5.)
        );
        assert_eq!(
            mid.interpolate(Insets::uniform(0.), Insets::uniform(8.)),
            Insets::uniform(4.)
        );
        assert_eq!(
            Interpolation::new(0.25).interpolate(Rect::new(0., 0., 4., 4.), Rect::new(4., 4., 12., 8.)),
            Rect::new(1., 1., 6., 5.)
        );
    }

    #[test]
    fn round_trip_through_another_range() {
        let i = Interpolation::of(75.0, 50.0, 150.0).unwrap();
        assert_eq!(i.interpolate(0.0, 1000.0), 250.0);
        assert_eq!(i.inverse().interpolate(0.0, 1000.0), 750.0);
    }
}
