// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor points within a rectangle.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{
    ceil_to_pixel, floor_to_pixel, Interpolation, LayoutDirection, Point, Rect,
    ScaleFactor, ScaleFactorProvider, Size,
};

/// One of the nine anchor points of a rectangle: its corners, the centers
/// of its edges, and its center.
///
/// The `Leading` and `Trailing` variants name the left or right side
/// depending on the [`LayoutDirection`]; [`resolve`](Position::resolve)
/// turns them into absolute positions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// The top left corner.
    TopLeft,
    /// The center of the top edge.
    TopCenter,
    /// The top right corner.
    TopRight,
    /// The center of the left edge.
    LeftCenter,
    /// The center of the rectangle.
    Center,
    /// The center of the right edge.
    RightCenter,
    /// The bottom left corner.
    BottomLeft,
    /// The center of the bottom edge.
    BottomCenter,
    /// The bottom right corner.
    BottomRight,
    /// The top corner on the leading side.
    TopLeading,
    /// The top corner on the trailing side.
    TopTrailing,
    /// The center of the leading edge.
    LeadingCenter,
    /// The center of the trailing edge.
    TrailingCenter,
    /// The bottom corner on the leading side.
    BottomLeading,
    /// The bottom corner on the trailing side.
    BottomTrailing,
}

impl Position {
    /// All nine absolute positions, row by row from the top left.
    pub const ABSOLUTE: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::LeftCenter,
        Position::Center,
        Position::RightCenter,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The absolute position this names under `direction`.
    ///
    /// Absolute positions are returned unchanged.
    ///
    /// ```
    /// use pixalign::{LayoutDirection, Position};
    ///
    /// let rtl = LayoutDirection::RightToLeft;
    /// assert_eq!(Position::TopLeading.resolve(rtl), Position::TopRight);
    /// assert_eq!(Position::TopLeft.resolve(rtl), Position::TopLeft);
    /// ```
    pub const fn resolve(self, direction: LayoutDirection) -> Position {
        use Position as P;
        match (self, direction.is_right_to_left()) {
            (P::TopLeading, false) | (P::TopTrailing, true) => P::TopLeft,
            (P::TopLeading, true) | (P::TopTrailing, false) => P::TopRight,
            (P::LeadingCenter, false) | (P::TrailingCenter, true) => P::LeftCenter,
            (P::LeadingCenter, true) | (P::TrailingCenter, false) => P::RightCenter,
            (P::BottomLeading, false) | (P::BottomTrailing, true) => P::BottomLeft,
            (P::BottomLeading, true) | (P::BottomTrailing, false) => P::BottomRight,
            (absolute, _) => absolute,
        }
    }

    /// How far across and down the rectangle this position lies.
    pub fn anchor(self, direction: LayoutDirection) -> (Interpolation, Interpolation) {
        use Interpolation as I;
        match self.resolve(direction) {
            Position::TopLeft => (I::START, I::START),
            Position::TopCenter => (I::MIDDLE, I::START),
            Position::TopRight => (I::END, I::START),
            Position::LeftCenter => (I::START, I::MIDDLE),
            Position::RightCenter => (I::END, I::MIDDLE),
            Position::BottomLeft => (I::START, I::END),
            Position::BottomCenter => (I::MIDDLE, I::END),
            Position::BottomRight => (I::END, I::END),
            // Only `Center` is left once resolved.
            _ => (I::MIDDLE, I::MIDDLE),
        }
    }

    /// The point at this position in `rect`.
    ///
    /// ```
    /// use pixalign::{LayoutDirection, Point, Position, Rect};
    ///
    /// let rect = Rect::new(0., 0., 10., 20.);
    /// let ltr = LayoutDirection::LeftToRight;
    /// assert_eq!(Position::BottomCenter.point_in(rect, ltr), Point::new(5., 20.));
    /// ```
    pub fn point_in(self, rect: Rect, direction: LayoutDirection) -> Point {
        let rect = rect.abs();
        let (fx, fy) = self.anchor(direction);
        Point::new(
            fx.interpolate(rect.x0, rect.x1),
            fy.interpolate(rect.y0, rect.y1),
        )
    }

    /// The origin that places a rectangle of `size` at this position in
    /// `bounds`.
    ///
    /// The offset from the origin of `bounds` is snapped to the pixel grid
    /// toward zero. A rectangle smaller than `bounds` therefore never leaves
    /// it, and one larger than `bounds` never uncovers any part of it.
    ///
    /// ```
    /// use pixalign::{LayoutDirection, Point, Position, Rect, ScaleFactor, Size};
    ///
    /// let bounds = Rect::new(0., 0., 10., 10.);
    /// let origin = Position::Center.origin_for(
    ///     Size::new(3., 3.),
    ///     bounds,
    ///     LayoutDirection::LeftToRight,
    ///     ScaleFactor::X1,
    /// );
    /// assert_eq!(origin, Point::new(3., 3.));
    /// ```
    pub fn origin_for(
        self,
        size: Size,
        bounds: Rect,
        direction: LayoutDirection,
        scale: impl ScaleFactorProvider,
    ) -> Point {
        let scale = scale.scale_factor();
        let bounds = bounds.abs();
        let (fx, fy) = self.anchor(direction);
        Point::new(
            bounds.x0 + snap_offset(fx.interpolate(0.0, bounds.width() - size.width), scale),
            bounds.y0 + snap_offset(fy.interpolate(0.0, bounds.height() - size.height), scale),
        )
    }

    /// A rectangle of `size` placed at this position in `bounds`.
    ///
    /// See [`origin_for`](Position::origin_for) for how the origin is snapped.
    pub fn rect_for(
        self,
        size: Size,
        bounds: Rect,
        direction: LayoutDirection,
        scale: impl ScaleFactorProvider,
    ) -> Rect {
        let size = Size::new(size.width.abs(), size.height.abs());
        Rect::from_origin_size(self.origin_for(size, bounds, direction, scale), size)
    }
}

/// Snap `offset` to the pixel grid toward zero.
#[inline]
fn snap_offset(offset: f64, scale: ScaleFactor) -> f64 {
    if offset >= 0.0 {
        floor_to_pixel(offset, scale)
    } else {
        ceil_to_pixel(offset, scale)
    }
}
