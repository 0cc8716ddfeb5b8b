// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{
    ceil_to_pixel, floor_to_pixel, round_to_pixel, Axis, DirectionalEdge, Insets,
    Interpolation, LayoutDirection, Point, RectEdge, ScaleFactor, ScaleFactorProvider, Size, Vec2,
};

/// A rectangle.
///
/// The rectangle is stored as its minimum and maximum coordinates, so that
/// operations which move one edge leave the others bit-for-bit unchanged.
/// [`origin`](Rect::origin) and [`size`](Rect::size) give the
/// origin-and-size view of the same rectangle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from minimum and maximum coordinates.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y).abs()
    }

    /// A new rectangle from origin and size.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Rect {
        let origin = origin.into();
        Rect::from_points(origin, origin + size.into().to_vec2())
    }

    /// Create a new `Rect` with the same size as `self` and a new origin.
    #[inline]
    pub fn with_origin(self, origin: impl Into<Point>) -> Rect {
        Rect::from_origin_size(origin, self.size())
    }

    /// Create a new `Rect` with the same origin as `self` and a new size.
    #[inline]
    pub fn with_size(self, size: impl Into<Size>) -> Rect {
        Rect::from_origin_size(self.origin(), size)
    }

    /// The width of the rectangle.
    ///
    /// Note: nothing forbids negative width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    ///
    /// Note: nothing forbids negative height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The extent of the rectangle along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// Returns the minimum value for the x-coordinate of the rectangle.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x0.min(self.x1)
    }

    /// Returns the maximum value for the x-coordinate of the rectangle.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x0.max(self.x1)
    }

    /// Returns the minimum value for the y-coordinate of the rectangle.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y0.min(self.y1)
    }

    /// Returns the maximum value for the y-coordinate of the rectangle.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y0.max(self.y1)
    }

    /// The x-coordinate halfway between the left and right edges.
    #[inline]
    pub fn mid_x(&self) -> f64 {
        0.5 * (self.x0 + self.x1)
    }

    /// The y-coordinate halfway between the top and bottom edges.
    #[inline]
    pub fn mid_y(&self) -> f64 {
        0.5 * (self.y0 + self.y1)
    }

    /// The origin of the rectangle.
    ///
    /// This is the top left corner in a y-down space and with
    /// non-negative width and height.
    #[inline(always)]
    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The size of the rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether this rectangle has zero area.
    #[inline]
    pub fn is_zero_area(&self) -> bool {
        self.area() == 0.0
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Returns `true` if `point` lies within `self`.
    ///
    /// The minimum edges are inside and the maximum edges outside, so a
    /// plane tiled with rectangles has every point in exactly one of them.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Returns `true` if every point of `other` lies within `self`,
    /// edges included.
    ///
    /// ```
    /// use pixalign::Rect;
    ///
    /// let outer = Rect::new(0., 0., 10., 10.);
    /// assert!(outer.contains_rect(Rect::new(0., 2., 10., 3.)));
    /// assert!(!outer.contains_rect(Rect::new(-1., 2., 5., 3.)));
    /// ```
    #[inline]
    pub fn contains_rect(&self, other: Rect) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    pub fn abs(&self) -> Rect {
        Rect::new(self.min_x(), self.min_y(), self.max_x(), self.max_y())
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// The intersection of two rectangles.
    ///
    /// The result is zero-area if either input has negative width or
    /// height. The result always has non-negative width and height.
    #[inline]
    pub fn intersect(&self, other: Rect) -> Rect {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        Rect::new(x0, y0, x1.max(x0), y1.max(y0))
    }

    /// Move each edge toward the center by the matching inset.
    ///
    /// Negative insets move edges outward. If opposite edges would cross,
    /// that axis collapses to zero extent halfway between them.
    pub fn inset_by(&self, insets: Insets) -> Rect {
        let r = self.abs();
        let (x0, x1) = collapse_crossed(r.x0 + insets.left, r.x1 - insets.right);
        let (y0, y1) = collapse_crossed(r.y0 + insets.top, r.y1 - insets.bottom);
        Rect::new(x0, y0, x1, y1)
    }

    /// Move each edge away from the center by the matching inset.
    ///
    /// This is [`inset_by`](Rect::inset_by) with the insets negated.
    #[inline]
    pub fn outset_by(&self, insets: Insets) -> Rect {
        self.inset_by(-insets)
    }

    /// The rectangle moved by `delta`.
    #[inline]
    pub fn offset(&self, delta: Vec2) -> Rect {
        *self + delta
    }

    /// The smallest rectangle on the pixel grid that contains `self`.
    ///
    /// The minimum edges are floored and the maximum edges ceiled.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixalign::{Rect, ScaleFactor};
    ///
    /// let rect = Rect::new(0.3, 0.5, 2.2, 1.75);
    /// let expanded = rect.expand_to_pixel(ScaleFactor::X2);
    /// assert_eq!(expanded, Rect::new(0.0, 0.5, 2.5, 2.0));
    /// assert!(expanded.contains_rect(rect));
    /// ```
    pub fn expand_to_pixel(&self, scale: impl ScaleFactorProvider) -> Rect {
        let scale = scale.scale_factor();
        let r = self.abs();
        Rect::new(
            floor_to_pixel(r.x0, scale),
            floor_to_pixel(r.y0, scale),
            ceil_to_pixel(r.x1, scale),
            ceil_to_pixel(r.y1, scale),
        )
    }

    /// The largest rectangle on the pixel grid contained in `self`.
    ///
    /// The minimum edges are ceiled and the maximum edges floored. An axis
    /// with no pixel boundary inside it collapses to zero extent at its
    /// center, which keeps the result inside `self`. The edges of such an
    /// axis are generally not pixel-aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixalign::{Rect, ScaleFactor};
    ///
    /// let rect = Rect::new(0.3, 0.5, 2.2, 1.75);
    /// let contracted = rect.contract_to_pixel(ScaleFactor::X2);
    /// assert_eq!(contracted, Rect::new(0.5, 0.5, 2.0, 1.5));
    /// assert!(rect.contains_rect(contracted));
    /// ```
    pub fn contract_to_pixel(&self, scale: impl ScaleFactorProvider) -> Rect {
        let scale = scale.scale_factor();
        let r = self.abs();
        let (x0, x1) = contract_axis(r.x0, r.x1, scale);
        let (y0, y1) = contract_axis(r.y0, r.y1, scale);
        Rect::new(x0, y0, x1, y1)
    }

    /// The rectangle with each edge rounded to the nearest pixel boundary.
    ///
    /// Edges are rounded independently of each other, so two rectangles
    /// sharing an edge still share it after rounding.
    pub fn round_to_pixel(&self, scale: impl ScaleFactorProvider) -> Rect {
        let scale = scale.scale_factor();
        Rect::new(
            round_to_pixel(self.x0, scale),
            round_to_pixel(self.y0, scale),
            round_to_pixel(self.x1, scale),
            round_to_pixel(self.y1, scale),
        )
    }

    /// Split the rectangle into a slice of `amount` along `edge` and the
    /// remainder.
    ///
    /// The rectangle is made non-negative with [`abs`](Rect::abs) first.
    /// `amount` is clamped to the extent on the axis of `edge`; a NaN amount
    /// is treated as zero. The slice and the remainder share one computed
    /// coordinate, so they meet with no gap or overlap and together cover
    /// the rectangle exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixalign::{Rect, RectEdge};
    ///
    /// let rect = Rect::new(0., 0., 100., 40.);
    /// let (header, body) = rect.slice(RectEdge::MinY, 10.);
    /// assert_eq!(header, Rect::new(0., 0., 100., 10.));
    /// assert_eq!(body, Rect::new(0., 10., 100., 40.));
    ///
    /// let (sidebar, rest) = rect.slice(RectEdge::MaxX, 500.);
    /// assert_eq!(sidebar, rect);
    /// assert_eq!(rest, Rect::new(0., 0., 0., 40.));
    /// ```
    pub fn slice(&self, edge: RectEdge, amount: f64) -> (Rect, Rect) {
        let r = self.abs();
        let extent = r.extent(edge.axis());
        let amount = if amount > 0.0 { amount.min(extent) } else { 0.0 };
        match edge {
            RectEdge::MinX => {
                let cut = (r.x0 + amount).min(r.x1);
                (
                    Rect::new(r.x0, r.y0, cut, r.y1),
                    Rect::new(cut, r.y0, r.x1, r.y1),
                )
            }
            RectEdge::MaxX => {
                let cut = (r.x1 - amount).max(r.x0);
                (
                    Rect::new(cut, r.y0, r.x1, r.y1),
                    Rect::new(r.x0, r.y0, cut, r.y1),
                )
            }
            RectEdge::MinY => {
                let cut = (r.y0 + amount).min(r.y1);
                (
                    Rect::new(r.x0, r.y0, r.x1, cut),
                    Rect::new(r.x0, cut, r.x1, r.y1),
                )
            }
            RectEdge::MaxY => {
                let cut = (r.y1 - amount).max(r.y0);
                (
                    Rect::new(r.x0, cut, r.x1, r.y1),
                    Rect::new(r.x0, r.y0, r.x1, cut),
                )
            }
        }
    }

    /// [`slice`](Rect::slice) from an edge given relative to the layout
    /// direction.
    ///
    /// ```
    /// use pixalign::{DirectionalEdge, LayoutDirection, Rect};
    ///
    /// let rect = Rect::new(0., 0., 100., 40.);
    /// let (icon, _) = rect.slice_directional(
    ///     DirectionalEdge::Leading,
    ///     40.,
    ///     LayoutDirection::RightToLeft,
    /// );
    /// assert_eq!(icon, Rect::new(60., 0., 100., 40.));
    /// ```
    #[inline]
    pub fn slice_directional(
        &self,
        edge: DirectionalEdge,
        amount: f64,
        direction: LayoutDirection,
    ) -> (Rect, Rect) {
        self.slice(edge.resolve(direction), amount)
    }

    /// [`slice`](Rect::slice) off a fraction of the extent along `edge`.
    ///
    /// The fraction is clamped to `[0, 1]`.
    #[inline]
    pub fn slice_fraction(&self, edge: RectEdge, fraction: Interpolation) -> (Rect, Rect) {
        let extent = self.extent(edge.axis()).abs();
        self.slice(edge, fraction.clamped().interpolate(0.0, extent))
    }

    /// Is this rectangle finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.x1.is_finite() && self.y0.is_finite() && self.y1.is_finite()
    }

    /// Is this rectangle NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x0.is_nan() || self.y0.is_nan() || self.x1.is_nan() || self.y1.is_nan()
    }
}

/// Pull crossed edges together at their midpoint.
#[inline]
fn collapse_crossed(min: f64, max: f64) -> (f64, f64) {
    if min > max {
        let mid = 0.5 * (min + max);
        (mid, mid)
    } else {
        (min, max)
    }
}

fn contract_axis(min: f64, max: f64, scale: ScaleFactor) -> (f64, f64) {
    let inner_min = ceil_to_pixel(min, scale);
    let inner_max = floor_to_pixel(max, scale);
    if inner_min <= inner_max {
        (inner_min, inner_max)
    } else {
        let mid = 0.5 * (min + max);
        (mid, mid)
    }
}

impl From<(Point, Point)> for Rect {
    fn from(points: (Point, Point)) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}

impl From<(Point, Size)> for Rect {
    fn from(params: (Point, Size)) -> Rect {
        Rect::from_origin_size(params.0, params.1)
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect::new(self.x0 + v.x, self.y0 + v.y, self.x1 + v.x, self.y1 + v.y)
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        Rect::new(self.x0 - v.x, self.y0 - v.y, self.x1 - v.x, self.y1 - v.y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect {{ ")?;
        fmt::Display::fmt(&self.origin(), f)?;
        write!(f, " ")?;
        fmt::Display::fmt(&self.size(), f)?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_size() {
        let r = Rect::from_origin_size((10., 20.), (-4., 5.));
        assert_eq!(r, Rect::new(6., 20., 10., 25.));
        assert_eq!(r.origin(), Point::new(6., 20.));
        assert_eq!(r.size(), Size::new(4., 5.));
        assert_eq!(r.with_origin((0., 0.)), Rect::new(0., 0., 4., 5.));
    }

    #[test]
    fn negative_extents() {
        let r = Rect::new(5., 5., 1., 2.);
        assert_eq!(r.width(), -4.);
        assert_eq!(r.min_x(), 1.);
        assert_eq!(r.max_y(), 5.);
        assert_eq!(r.abs(), Rect::new(1., 2., 5., 5.));
        assert_eq!(r.center(), Point::new(3., 3.5));
    }

    #[test]
    fn contains_half_open() {
        let r = Rect::new(0., 0., 1., 1.);
        assert!(r.contains(Point::new(0., 0.)));
        assert!(!r.contains(Point::new(1., 0.5)));
    }

    #[test]
    fn insets() {
        let r = Rect::new(0., 0., 10., 4.);
        assert_eq!(
            r.inset_by(Insets::new(1., 2., 0.5, 3.)),
            Rect::new(2., 1., 7., 3.5)
        );
        // Vertical insets cross and collapse.
        assert_eq!(r.inset_by(Insets::uniform_xy(0., 3.)), Rect::new(0., 2., 10., 2.));
        assert_eq!(r.outset_by(Insets::uniform(1.)), Rect::new(-1., -1., 11., 5.));
    }

    #[test]
    fn expand_and_contract() {
        let r = Rect::new(-0.7, 0.25, 3.1, 0.75);
        let scale = ScaleFactor::X1;
        assert_eq!(r.expand_to_pixel(scale), Rect::new(-1., 0., 4., 1.));
        // Nothing on the grid between 0.25 and 0.75: collapse to the center.
        let contracted = r.contract_to_pixel(scale);
        assert_eq!(contracted, Rect::new(0., 0.5, 3., 0.5));
        assert!(!scale.is_pixel_aligned(contracted.y0));
        assert_eq!(contracted.contract_to_pixel(scale), contracted);
        assert_eq!(r.expand_to_pixel(ScaleFactor::NONE), r);
    }

    #[test]
    fn snapping_rects_is_idempotent() {
        let r = Rect::new(0.3, 1.1, 0.4, 7.9);
        for scale in [ScaleFactor::X1, ScaleFactor::X2, ScaleFactor::X3] {
            let contracted = r.contract_to_pixel(scale);
            assert_eq!(contracted.contract_to_pixel(scale), contracted);
            let rounded = r.round_to_pixel(scale);
            assert_eq!(rounded.round_to_pixel(scale), rounded);
            let expanded = r.expand_to_pixel(scale);
            assert_eq!(expanded.expand_to_pixel(scale), expanded);
        }
    }

    #[test]
    fn pixel_ops_standardize() {
        let r = Rect::new(3.1, 0.9, -0.7, 0.2);
        assert_eq!(r.expand_to_pixel(ScaleFactor::X1), Rect::new(-1., 0., 4., 1.));
    }

    #[test]
    fn round_keeps_shared_edges() {
        let scale = ScaleFactor::X2;
        let (a, b) = Rect::new(0.1, 0., 10.3, 1.).slice(RectEdge::MinX, 3.33);
        let (a, b) = (a.round_to_pixel(scale), b.round_to_pixel(scale));
        assert_eq!(a.x1, b.x0);
        assert_eq!(a, Rect::new(0., 0., 3.5, 1.));
    }

    #[test]
    fn slice_every_edge() {
        let r = Rect::new(0., 0., 10., 20.);
        let (s, rest) = r.slice(RectEdge::MinX, 3.);
        assert_eq!((s, rest), (Rect::new(0., 0., 3., 20.), Rect::new(3., 0., 10., 20.)));
        let (s, rest) = r.slice(RectEdge::MaxX, 3.);
        assert_eq!((s, rest), (Rect::new(7., 0., 10., 20.), Rect::new(0., 0., 7., 20.)));
        let (s, rest) = r.slice(RectEdge::MinY, 5.);
        assert_eq!((s, rest), (Rect::new(0., 0., 10., 5.), Rect::new(0., 5., 10., 20.)));
        let (s, rest) = r.slice(RectEdge::MaxY, 5.);
        assert_eq!((s, rest), (Rect::new(0., 15., 10., 20.), Rect::new(0., 0., 10., 15.)));
    }

    #[test]
    fn slice_zero_and_negative() {
        let r = Rect::new(0., 0., 10., 20.);
        for amount in [0.0, -4.0, f64::NAN] {
            let (s, rest) = r.slice(RectEdge::MaxY, amount);
            assert_eq!(s, Rect::new(0., 20., 10., 20.));
            assert_eq!(rest, r);
        }
    }

    #[test]
    fn slice_fraction() {
        let r = Rect::new(0., 0., 10., 20.);
        let (s, _) = r.slice_fraction(RectEdge::MinY, Interpolation::new(0.25));
        assert_eq!(s, Rect::new(0., 0., 10., 5.));
        let (s, _) = r.slice_fraction(RectEdge::MinX, Interpolation::new(3.0));
        assert_eq!(s, r);
    }

    #[test]
    fn display() {
        let r = Rect::new(1., 2., 4., 6.);
        assert_eq!(format!("{r}"), "Rect { (1, 2) (3×4) }");
    }
}
