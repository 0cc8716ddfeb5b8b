// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distances from the edges of a rectangle.

use core::ops::{Add, Div, Mul, Neg};

use crate::Size;

/// Insets from the edges of a rectangle.
///
/// A positive inset moves an edge toward the center of the rectangle when
/// applied with [`Rect::inset_by`], and away from it with
/// [`Rect::outset_by`].
///
/// # Examples
///
/// ```
/// use pixalign::{Insets, Rect};
///
/// let rect = Rect::new(0., 0., 10., 10.);
/// let insets = Insets::uniform_xy(3., 0.);
///
/// let inset_rect = rect.inset_by(insets);
/// assert_eq!(inset_rect.width(), 4.0, "10.0 - 3.0 * 2");
/// assert_eq!(inset_rect.min_x(), 3.0);
///
/// let outset_rect = rect.outset_by(insets);
/// assert_eq!(outset_rect.width(), 16.0, "10.0 + 3.0 * 2");
/// ```
///
/// [`Rect::inset_by`]: crate::Rect::inset_by
/// [`Rect::outset_by`]: crate::Rect::outset_by
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Distance from the top edge (the minimum y edge).
    pub top: f64,
    /// Distance from the left edge (the minimum x edge).
    pub left: f64,
    /// Distance from the bottom edge (the maximum y edge).
    pub bottom: f64,
    /// Distance from the right edge (the maximum x edge).
    pub right: f64,
}

impl Insets {
    /// Zero'd insets.
    pub const ZERO: Insets = Insets::uniform(0.);

    /// New uniform insets.
    #[inline(always)]
    pub const fn uniform(d: f64) -> Insets {
        Insets {
            top: d,
            left: d,
            bottom: d,
            right: d,
        }
    }

    /// New insets with `x` on the left and right and `y` on the top and bottom.
    #[inline(always)]
    pub const fn uniform_xy(x: f64, y: f64) -> Insets {
        Insets {
            top: y,
            left: x,
            bottom: y,
            right: x,
        }
    }

    /// New insets. The ordering of the arguments is "top, left, bottom, right".
    #[inline(always)]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Insets {
        Insets {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The total inset along the x axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixalign::Insets;
    ///
    /// let insets = Insets::new(0., 5., 0., -12.);
    /// assert_eq!(insets.horizontal(), -7.);
    /// ```
    #[inline]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// The total inset along the y axis.
    #[inline]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    /// Returns the total inset as a [`Size`].
    ///
    /// This function may return a size with negative values.
    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Return `true` iff all values are nonnegative.
    pub fn are_nonnegative(self) -> bool {
        let Insets {
            top,
            left,
            bottom,
            right,
        } = self;
        top >= 0.0 && left >= 0.0 && bottom >= 0.0 && right >= 0.0
    }

    /// Return new `Insets` with all negative values replaced with `0.0`.
    ///
    /// ```
    /// use pixalign::Insets;
    ///
    /// let insets = Insets::new(-10., 3., -0.2, 4.);
    /// let nonnegative = insets.nonnegative();
    /// assert_eq!(nonnegative.horizontal(), 7.0);
    /// assert_eq!(nonnegative.vertical(), 0.0);
    /// ```
    pub fn nonnegative(self) -> Insets {
        Insets {
            top: self.top.max(0.0),
            left: self.left.max(0.0),
            bottom: self.bottom.max(0.0),
            right: self.right.max(0.0),
        }
    }

    /// Are these insets finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.bottom.is_finite()
            && self.right.is_finite()
    }
}

impl Neg for Insets {
    type Output = Insets;

    #[inline]
    fn neg(self) -> Insets {
        Insets::new(-self.top, -self.left, -self.bottom, -self.right)
    }
}

impl Add for Insets {
    type Output = Insets;

    #[inline]
    fn add(self, other: Insets) -> Insets {
        Insets::new(
            self.top + other.top,
            self.left + other.left,
            self.bottom + other.bottom,
            self.right + other.right,
        )
    }
}

impl Mul<f64> for Insets {
    type Output = Insets;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            top: self.top * rhs,
            left: self.left * rhs,
            bottom: self.bottom * rhs,
            right: self.right * rhs,
        }
    }
}

impl Div<f64> for Insets {
    type Output = Insets;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            top: self.top / rhs,
            left: self.left / rhs,
            bottom: self.bottom / rhs,
            right: self.right / rhs,
        }
    }
}

impl From<f64> for Insets {
    #[inline(always)]
    fn from(src: f64) -> Insets {
        Insets::uniform(src)
    }
}

impl From<(f64, f64)> for Insets {
    #[inline(always)]
    fn from(src: (f64, f64)) -> Insets {
        Insets::uniform_xy(src.0, src.1)
    }
}

impl From<(f64, f64, f64, f64)> for Insets {
    #[inline(always)]
    fn from(src: (f64, f64, f64, f64)) -> Insets {
        Insets::new(src.0, src.1, src.2, src.3)
    }
}
