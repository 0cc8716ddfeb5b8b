// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect ratios, and sizing rectangles to them.

use core::cmp::Ordering;
use core::fmt;

use crate::common::{gcd, is_exact_integer};
use crate::{
    ceil_to_pixel, floor_to_pixel, log, round_to_pixel, LayoutDirection, Position, Rect,
    ScaleFactorProvider, Size,
};

/// The ratio of a width to a height.
///
/// Both components are positive and finite. Whole-number components are
/// stored in lowest terms, so `AspectRatio::new(32.0, 18.0)` is `16:9`.
///
/// Ratios compare by value: `2:1` equals `4:2`, and a wider ratio is greater
/// than a narrower one.
///
/// # Examples
///
/// ```
/// use pixalign::{AspectRatio, ScaleFactor, Size};
///
/// let ratio = AspectRatio::new(1920.0, 1080.0).unwrap();
/// assert_eq!(ratio, AspectRatio::WIDESCREEN);
/// assert_eq!(ratio.to_string(), "16:9");
///
/// // A 16:9 video in a portrait box is limited by the box width.
/// let video = ratio.size_to_fit(Size::new(390.0, 844.0), ScaleFactor::X3);
/// assert_eq!(video.width, 390.0);
/// assert!(video.height <= 390.0 * 9.0 / 16.0);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// A 1:1 ratio.
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1.0,
        height: 1.0,
    };

    /// The golden ratio, φ:1.
    pub const GOLDEN: AspectRatio = AspectRatio {
        width: 1.618_033_988_749_895,
        height: 1.0,
    };

    /// A 16:9 ratio.
    pub const WIDESCREEN: AspectRatio = AspectRatio {
        width: 16.0,
        height: 9.0,
    };

    /// A new aspect ratio of `width` to `height`.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is zero, negative, NaN or
    /// infinite.
    pub fn new(width: f64, height: f64) -> Result<AspectRatio, AspectRatioError> {
        if !width.is_finite() || !height.is_finite() {
            log::debug!(width, height, "rejected non-finite aspect ratio");
            return Err(AspectRatioError::NotFinite);
        }
        if width <= 0.0 || height <= 0.0 {
            log::debug!(width, height, "rejected non-positive aspect ratio");
            return Err(AspectRatioError::NotPositive);
        }
        Ok(reduced(width, height))
    }

    /// The aspect ratio of `size`.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, negative, NaN or
    /// infinite.
    #[inline]
    pub fn from_size(size: Size) -> Result<AspectRatio, AspectRatioError> {
        AspectRatio::new(size.width, size.height)
    }

    /// The width component.
    #[inline]
    pub const fn width(self) -> f64 {
        self.width
    }

    /// The height component.
    #[inline]
    pub const fn height(self) -> f64 {
        self.height
    }

    /// The width divided by the height.
    #[inline]
    pub fn ratio(self) -> f64 {
        self.width / self.height
    }

    /// The ratio with width and height swapped.
    ///
    /// ```
    /// use pixalign::AspectRatio;
    ///
    /// let portrait = AspectRatio::WIDESCREEN.inverted();
    /// assert_eq!(portrait.to_string(), "9:16");
    /// ```
    #[inline]
    #[must_use]
    pub const fn inverted(self) -> AspectRatio {
        AspectRatio {
            width: self.height,
            height: self.width,
        }
    }

    /// The height matching `width`, rounded to the pixel grid.
    ///
    /// ```
    /// use pixalign::{AspectRatio, ScaleFactor};
    ///
    /// let ratio = AspectRatio::WIDESCREEN;
    /// assert_eq!(ratio.height_for_width(16.0, ScaleFactor::NONE), 9.0);
    /// assert_eq!(ratio.height_for_width(100.0, ScaleFactor::X1), 56.0);
    /// ```
    #[inline]
    pub fn height_for_width(self, width: f64, scale: impl ScaleFactorProvider) -> f64 {
        round_to_pixel(self.exact_height(width), scale)
    }

    /// The width matching `height`, rounded to the pixel grid.
    #[inline]
    pub fn width_for_height(self, height: f64, scale: impl ScaleFactorProvider) -> f64 {
        round_to_pixel(self.exact_width(height), scale)
    }

    /// A size with `width` and the matching height, rounded to the pixel grid.
    #[inline]
    pub fn size_for_width(self, width: f64, scale: impl ScaleFactorProvider) -> Size {
        Size::new(width, self.height_for_width(width, scale))
    }

    /// A size with `height` and the matching width, rounded to the pixel grid.
    #[inline]
    pub fn size_for_height(self, height: f64, scale: impl ScaleFactorProvider) -> Size {
        Size::new(self.width_for_height(height, scale), height)
    }

    /// The largest size with this ratio that fits within `bounds`.
    ///
    /// The dimension `bounds` limits is floored to the pixel grid, and the
    /// other is derived from the ratio and floored too, so both dimensions
    /// are no larger than those of `bounds`. Negative dimensions of `bounds`
    /// count as zero.
    ///
    /// ```
    /// use pixalign::{AspectRatio, ScaleFactor, Size};
    ///
    /// let size = AspectRatio::SQUARE.size_to_fit(Size::new(10.3, 20.0), ScaleFactor::X2);
    /// assert_eq!(size, Size::new(10.0, 10.0));
    /// ```
    pub fn size_to_fit(self, bounds: Size, scale: impl ScaleFactorProvider) -> Size {
        let scale = scale.scale_factor();
        let bounds = bounds.nonnegative();
        if bounds.is_zero_area() {
            log::debug!(
                width = bounds.width,
                height = bounds.height,
                "fitting aspect ratio into empty bounds"
            );
            return Size::ZERO;
        }
        if self.is_wider_than(bounds) {
            let width = floor_to_pixel(bounds.width, scale);
            let height = floor_to_pixel(self.exact_height(width), scale).min(bounds.height);
            Size::new(width, height)
        } else {
            let height = floor_to_pixel(bounds.height, scale);
            let width = floor_to_pixel(self.exact_width(height), scale).min(bounds.width);
            Size::new(width, height)
        }
    }

    /// The smallest size with this ratio that covers `bounds`.
    ///
    /// The dimension `bounds` limits is ceiled to the pixel grid, and the
    /// other is derived from the ratio and ceiled too, so both dimensions
    /// are at least those of `bounds`. Negative dimensions of `bounds` count
    /// as zero.
    ///
    /// ```
    /// use pixalign::{AspectRatio, ScaleFactor, Size};
    ///
    /// let size = AspectRatio::WIDESCREEN.size_to_fill(Size::new(100.0, 100.0), ScaleFactor::X1);
    /// assert_eq!(size, Size::new(178.0, 100.0));
    /// ```
    pub fn size_to_fill(self, bounds: Size, scale: impl ScaleFactorProvider) -> Size {
        let scale = scale.scale_factor();
        let bounds = bounds.nonnegative();
        if self.is_wider_than(bounds) {
            let height = ceil_to_pixel(bounds.height, scale);
            let width = ceil_to_pixel(self.exact_width(height), scale).max(bounds.width);
            Size::new(width, height)
        } else {
            let width = ceil_to_pixel(bounds.width, scale);
            let height = ceil_to_pixel(self.exact_height(width), scale).max(bounds.height);
            Size::new(width, height)
        }
    }

    /// [`size_to_fit`](Self::size_to_fit) `bounds`, placed at `position`.
    ///
    /// The origin is snapped as described in [`Position::origin_for`], so
    /// the result stays within `bounds`.
    ///
    /// ```
    /// use pixalign::{AspectRatio, LayoutDirection, Position, Rect, ScaleFactor};
    ///
    /// let bounds = Rect::new(0.0, 0.0, 300.0, 100.0);
    /// let rect = AspectRatio::SQUARE.rect_to_fit(
    ///     bounds,
    ///     Position::Center,
    ///     LayoutDirection::LeftToRight,
    ///     ScaleFactor::X2,
    /// );
    /// assert_eq!(rect, Rect::new(100.0, 0.0, 200.0, 100.0));
    /// ```
    pub fn rect_to_fit(
        self,
        bounds: Rect,
        position: Position,
        direction: LayoutDirection,
        scale: impl ScaleFactorProvider,
    ) -> Rect {
        let scale = scale.scale_factor();
        let bounds = bounds.abs();
        let size = self.size_to_fit(bounds.size(), scale);
        position.rect_for(size, bounds, direction, scale)
    }

    /// [`size_to_fill`](Self::size_to_fill) `bounds`, placed at `position`.
    ///
    /// The result extends past `bounds` on the axis where the ratios differ,
    /// and always covers `bounds`.
    pub fn rect_to_fill(
        self,
        bounds: Rect,
        position: Position,
        direction: LayoutDirection,
        scale: impl ScaleFactorProvider,
    ) -> Rect {
        let scale = scale.scale_factor();
        let bounds = bounds.abs();
        let size = self.size_to_fill(bounds.size(), scale);
        position.rect_for(size, bounds, direction, scale)
    }

    /// Is this ratio at least as wide as `size`?
    #[inline]
    fn is_wider_than(self, size: Size) -> bool {
        self.width * size.height >= size.width * self.height
    }

    #[inline]
    fn exact_height(self, width: f64) -> f64 {
        width * self.height / self.width
    }

    #[inline]
    fn exact_width(self, height: f64) -> f64 {
        height * self.width / self.height
    }
}

/// Lowest terms for whole-number components; other ratios are kept as given.
fn reduced(width: f64, height: f64) -> AspectRatio {
    if is_exact_integer(width) && is_exact_integer(height) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "both values are whole numbers no larger than 2^53"
        )]
        let divisor = gcd(width as u64, height as u64);
        if divisor > 1 {
            let divisor = divisor as f64;
            return AspectRatio {
                width: width / divisor,
                height: height / divisor,
            };
        }
    }
    AspectRatio { width, height }
}

impl PartialEq for AspectRatio {
    #[inline]
    fn eq(&self, other: &AspectRatio) -> bool {
        self.width * other.height == other.width * self.height
    }
}

impl PartialOrd for AspectRatio {
    #[inline]
    fn partial_cmp(&self, other: &AspectRatio) -> Option<Ordering> {
        (self.width * other.height).partial_cmp(&(other.width * self.height))
    }
}

impl Default for AspectRatio {
    fn default() -> AspectRatio {
        AspectRatio::SQUARE
    }
}

impl fmt::Debug for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AspectRatio({:?}:{:?})", self.width, self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.width, formatter)?;
        write!(formatter, ":")?;
        fmt::Display::fmt(&self.height, formatter)
    }
}

impl TryFrom<(f64, f64)> for AspectRatio {
    type Error = AspectRatioError;

    #[inline]
    fn try_from((width, height): (f64, f64)) -> Result<AspectRatio, AspectRatioError> {
        AspectRatio::new(width, height)
    }
}

impl TryFrom<Size> for AspectRatio {
    type Error = AspectRatioError;

    #[inline]
    fn try_from(size: Size) -> Result<AspectRatio, AspectRatioError> {
        AspectRatio::from_size(size)
    }
}

impl From<AspectRatio> for (f64, f64) {
    #[inline]
    fn from(ratio: AspectRatio) -> (f64, f64) {
        (ratio.width, ratio.height)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for AspectRatio {
    fn schema_name() -> alloc::string::String {
        "AspectRatio".into()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        <(f64, f64) as schemars::JsonSchema>::json_schema(r#gen)
    }
}

/// The reason a pair of values was rejected as an [`AspectRatio`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AspectRatioError {
    /// A component was zero or negative.
    NotPositive,
    /// A component was NaN or infinite.
    NotFinite,
}

impl fmt::Display for AspectRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatioError::NotPositive => {
                f.write_str("aspect ratio components must be greater than zero")
            }
            AspectRatioError::NotFinite => f.write_str("aspect ratio components must be finite"),
        }
    }
}

impl core::error::Error for AspectRatioError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScaleFactor;

    const LTR: LayoutDirection = LayoutDirection::LeftToRight;

    #[test]
    fn rejects_invalid() {
        assert_eq!(AspectRatio::new(0.0, 1.0), Err(AspectRatioError::NotPositive));
        assert_eq!(AspectRatio::new(1.0, -2.0), Err(AspectRatioError::NotPositive));
        assert_eq!(AspectRatio::new(f64::NAN, 1.0), Err(AspectRatioError::NotFinite));
        assert_eq!(
            AspectRatio::new(1.0, f64::INFINITY),
            Err(AspectRatioError::NotFinite)
        );
        assert!(AspectRatio::from_size(Size::new(3.0, 0.0)).is_err());
    }

    #[test]
    fn reduces_whole_numbers() {
        let r = AspectRatio::new(32.0, 18.0).unwrap();
        assert_eq!((r.width(), r.height()), (16.0, 9.0));
        let r = AspectRatio::new(1.5, 3.0).unwrap();
        assert_eq!((r.width(), r.height()), (1.5, 3.0));
        assert_eq!(r, AspectRatio::new(1.0, 2.0).unwrap());
    }

    #[test]
    fn ordering_by_value() {
        let tall = AspectRatio::new(3.0, 4.0).unwrap();
        assert!(AspectRatio::WIDESCREEN > AspectRatio::SQUARE);
        assert!(tall < AspectRatio::SQUARE);
        assert!(AspectRatio::GOLDEN > AspectRatio::SQUARE);
        assert!(AspectRatio::GOLDEN < AspectRatio::WIDESCREEN);
        assert_eq!(AspectRatio::SQUARE, AspectRatio::new(7.0, 7.0).unwrap());
    }

    #[test]
    fn derived_dimensions() {
        let r = AspectRatio::WIDESCREEN;
        assert_eq!(r.height_for_width(16.0, ScaleFactor::NONE), 9.0);
        assert_eq!(r.width_for_height(9.0, ScaleFactor::NONE), 16.0);
        assert_eq!(r.size_for_width(32.0, ScaleFactor::X1), Size::new(32.0, 18.0));
        // 1.5 * 16 / 9 is 5.33 device pixels at 2x, rounded to 5.
        assert_eq!(r.size_for_height(1.5, ScaleFactor::X2), Size::new(2.5, 1.5));
    }

    #[test]
    fn fit_limited_by_each_axis() {
        let r = AspectRatio::new(2.0, 1.0).unwrap();
        assert_eq!(r.size_to_fit(Size::new(100.0, 100.0), ScaleFactor::X1), Size::new(100.0, 50.0));
        assert_eq!(r.size_to_fit(Size::new(100.0, 20.0), ScaleFactor::X1), Size::new(40.0, 20.0));
        assert_eq!(r.size_to_fit(Size::new(0.0, 20.0), ScaleFactor::X1), Size::ZERO);
        assert_eq!(r.size_to_fit(Size::new(-5.0, 20.0), ScaleFactor::X1), Size::ZERO);
    }

    #[test]
    fn fill_limited_by_each_axis() {
        let r = AspectRatio::new(2.0, 1.0).unwrap();
        assert_eq!(r.size_to_fill(Size::new(100.0, 100.0), ScaleFactor::X1), Size::new(200.0, 100.0));
        assert_eq!(r.size_to_fill(Size::new(100.0, 20.0), ScaleFactor::X1), Size::new(100.0, 50.0));
        assert_eq!(r.size_to_fill(Size::ZERO, ScaleFactor::X1), Size::ZERO);
    }

    #[test]
    fn fit_and_fill_snap() {
        let r = AspectRatio::WIDESCREEN;
        let bounds = Size::new(100.3, 100.0);
        let fit = r.size_to_fit(bounds, ScaleFactor::X2);
        assert_eq!(fit, Size::new(100.0, 56.0));
        let fill = r.size_to_fill(bounds, ScaleFactor::X2);
        // 100 * 16 / 9 = 177.77..., ceiled to 178.
        assert_eq!(fill, Size::new(178.0, 100.0));
    }

    #[test]
    fn rects_at_positions() {
        let bounds = Rect::new(10.0, 10.0, 110.0, 60.0);
        let r = AspectRatio::SQUARE;
        let fit = r.rect_to_fit(bounds, Position::TopTrailing, LTR, ScaleFactor::X1);
        assert_eq!(fit, Rect::new(60.0, 10.0, 110.0, 60.0));
        let fit = r.rect_to_fit(
            bounds,
            Position::TopTrailing,
            LayoutDirection::RightToLeft,
            ScaleFactor::X1,
        );
        assert_eq!(fit, Rect::new(10.0, 10.0, 60.0, 60.0));
        let fill = r.rect_to_fill(bounds, Position::Center, LTR, ScaleFactor::X1);
        assert_eq!(fill, Rect::new(10.0, -15.0, 110.0, 85.0));
        assert!(fill.contains_rect(bounds));
    }

    #[cfg(feature = "schemars")]
    #[test]
    fn json_schema() {
        use schemars::schema::InstanceType;

        let root = schemars::schema_for!(AspectRatio);
        assert_eq!(root.schema.instance_type, Some(InstanceType::Array.into()));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(AspectRatio::new(4.0, 3.0).unwrap().to_string(), "4:3");
        assert_eq!(format!("{:?}", AspectRatio::SQUARE), "AspectRatio(1.0:1.0)");
        assert_eq!(
            AspectRatioError::NotPositive.to_string(),
            "aspect ratio components must be greater than zero"
        );
    }
}
