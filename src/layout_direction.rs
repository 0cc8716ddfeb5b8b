// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The horizontal direction in which content flows.
///
/// Leading and trailing positions and edges are relative to this direction:
/// leading is the left side for [`LeftToRight`] and the right side for
/// [`RightToLeft`]. The host toolkit decides which direction applies to a
/// given layout, usually from the user's locale.
///
/// [`LeftToRight`]: LayoutDirection::LeftToRight
/// [`RightToLeft`]: LayoutDirection::RightToLeft
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Content starts on the left.
    #[default]
    LeftToRight,
    /// Content starts on the right.
    RightToLeft,
}

impl LayoutDirection {
    /// Is this [`LayoutDirection::RightToLeft`]?
    #[inline]
    pub const fn is_right_to_left(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}
