// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edges of a rectangle.

use crate::{Axis, LayoutDirection};

/// An edge of a rectangle in absolute terms.
///
/// In a y-down space [`MinY`](RectEdge::MinY) is the top edge.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RectEdge {
    /// The left edge.
    MinX,
    /// The top edge.
    MinY,
    /// The right edge.
    MaxX,
    /// The bottom edge.
    MaxY,
}

impl RectEdge {
    /// The axis this edge is perpendicular to, which is the axis a slice
    /// from this edge measures along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::MinX | Self::MaxX => Axis::Horizontal,
            Self::MinY | Self::MaxY => Axis::Vertical,
        }
    }

    /// Is this one of the minimum edges?
    #[inline]
    pub const fn is_min(self) -> bool {
        matches!(self, Self::MinX | Self::MinY)
    }

    /// The edge on the other side of the rectangle.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::MinX => Self::MaxX,
            Self::MinY => Self::MaxY,
            Self::MaxX => Self::MinX,
            Self::MaxY => Self::MinY,
        }
    }
}

/// An edge of a rectangle relative to the layout direction.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionalEdge {
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
    /// The edge content starts from.
    Leading,
    /// The edge content flows toward.
    Trailing,
}

impl DirectionalEdge {
    /// The absolute edge this corresponds to under `direction`.
    ///
    /// ```
    /// use pixalign::{DirectionalEdge, LayoutDirection, RectEdge};
    ///
    /// let edge = DirectionalEdge::Leading;
    /// assert_eq!(edge.resolve(LayoutDirection::LeftToRight), RectEdge::MinX);
    /// assert_eq!(edge.resolve(LayoutDirection::RightToLeft), RectEdge::MaxX);
    /// ```
    #[inline]
    pub const fn resolve(self, direction: LayoutDirection) -> RectEdge {
        match (self, direction) {
            (Self::Top, _) => RectEdge::MinY,
            (Self::Bottom, _) => RectEdge::MaxY,
            (Self::Leading, LayoutDirection::LeftToRight)
            | (Self::Trailing, LayoutDirection::RightToLeft) => RectEdge::MinX,
            (Self::Leading, LayoutDirection::RightToLeft)
            | (Self::Trailing, LayoutDirection::LeftToRight) => RectEdge::MaxX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes() {
        assert_eq!(RectEdge::MinX.axis(), Axis::Horizontal);
        assert_eq!(RectEdge::MaxY.axis(), Axis::Vertical);
        assert!(RectEdge::MinY.is_min());
        assert!(!RectEdge::MaxX.is_min());
        assert_eq!(RectEdge::MaxY.opposite(), RectEdge::MinY);
    }

    #[test]
    fn trailing_flips() {
        let rtl = LayoutDirection::RightToLeft;
        assert_eq!(DirectionalEdge::Trailing.resolve(rtl), RectEdge::MinX);
        assert_eq!(DirectionalEdge::Top.resolve(rtl), RectEdge::MinY);
        assert_eq!(
            DirectionalEdge::Trailing.resolve(LayoutDirection::LeftToRight),
            RectEdge::MaxX
        );
    }
}
