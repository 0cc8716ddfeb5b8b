// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spreading items out evenly along an axis.

use smallvec::SmallVec;

use crate::{log, round_to_pixel, Axis, Rect, ScaleFactorProvider};

/// The space before the first item and after the last one.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Margin {
    /// The outer margins are as wide as the gaps between items.
    Flexible,
    /// The outer margins are this wide; only the gaps between items vary.
    ///
    /// A single item is centered between the margins.
    Fixed(f64),
}

/// Start offsets that spread `items` out evenly over `extent`.
///
/// Each entry of `items` is the length of one item along the axis. The free
/// space is split into equal gaps as chosen by `margin`. Gaps never shrink
/// below zero: items that do not fit are laid end to end from the leading
/// margin. Offsets are measured from the start of the extent and rounded to
/// the pixel grid individually, so rounding error does not build up along
/// the row. Negative item lengths count as zero.
///
/// # Examples
///
/// ```
/// use pixalign::{spread_out, Margin, ScaleFactor};
///
/// let offsets = spread_out(100.0, &[10.0, 10.0, 10.0], Margin::Flexible, ScaleFactor::X1);
/// assert_eq!(offsets.as_slice(), &[18.0, 45.0, 72.0]);
///
/// let offsets = spread_out(100.0, &[10.0, 10.0, 10.0], Margin::Fixed(0.0), ScaleFactor::X1);
/// assert_eq!(offsets.as_slice(), &[0.0, 45.0, 90.0]);
/// ```
pub fn spread_out(
    extent: f64,
    items: &[f64],
    margin: Margin,
    scale: impl ScaleFactorProvider,
) -> SmallVec<[f64; 8]> {
    let scale = scale.scale_factor();
    let count = items.len();
    if count == 0 {
        return SmallVec::new();
    }
    let occupied: f64 = items.iter().map(|len| len.max(0.0)).sum();
    let free = extent - occupied;
    let (lead, gap) = match margin {
        Margin::Flexible => {
            let gap = free / (count + 1) as f64;
            (gap, gap)
        }
        Margin::Fixed(outer) if count == 1 => (outer + 0.5 * (free - 2.0 * outer), 0.0),
        Margin::Fixed(outer) => (outer, (free - 2.0 * outer) / (count - 1) as f64),
    };
    let (lead, gap) = if gap < 0.0 || lead < margin_floor(margin) {
        log::debug!(extent, occupied, count, "items overflow the extent");
        (margin_floor(margin), 0.0)
    } else {
        (lead, gap)
    };

    let mut offsets = SmallVec::with_capacity(count);
    let mut position = lead;
    for len in items {
        offsets.push(round_to_pixel(position, scale));
        position += len.max(0.0) + gap;
    }
    offsets
}

/// The smallest leading offset `margin` allows.
#[inline]
fn margin_floor(margin: Margin) -> f64 {
    match margin {
        Margin::Flexible => 0.0,
        Margin::Fixed(outer) => outer,
    }
}

/// Frames that spread `items` out evenly along `axis` inside `bounds`.
///
/// This applies [`spread_out`] to the extent of `bounds` on `axis`. Each
/// frame spans the full extent of `bounds` on the cross axis. Item lengths
/// are kept as given, so frames keep their sizes while their origins land on
/// the pixel grid relative to `bounds`.
///
/// ```
/// use pixalign::{spread_out_in, Axis, Margin, Rect, ScaleFactor};
///
/// let bounds = Rect::new(0.0, 0.0, 40.0, 100.0);
/// let frames = spread_out_in(bounds, Axis::Vertical, &[20.0, 20.0], Margin::Flexible, ScaleFactor::X1);
/// assert_eq!(frames[0], Rect::new(0.0, 20.0, 40.0, 40.0));
/// assert_eq!(frames[1], Rect::new(0.0, 60.0, 40.0, 80.0));
/// ```
pub fn spread_out_in(
    bounds: Rect,
    axis: Axis,
    items: &[f64],
    margin: Margin,
    scale: impl ScaleFactorProvider,
) -> SmallVec<[Rect; 8]> {
    let bounds = bounds.abs();
    let offsets = spread_out(bounds.extent(axis), items, margin, scale);
    let start = bounds.origin();
    let cross_start = start.get(axis.cross());
    let cross_extent = bounds.extent(axis.cross());
    offsets
        .iter()
        .zip(items)
        .map(|(offset, len)| {
            let origin = axis.pack_point(start.get(axis) + offset, cross_start);
            Rect::from_origin_size(origin, axis.pack_size(len.max(0.0), cross_extent))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScaleFactor;

    #[test]
    fn empty() {
        assert!(spread_out(100.0, &[], Margin::Flexible, ScaleFactor::X1).is_empty());
    }

    #[test]
    fn single_item() {
        let flexible = spread_out(100.0, &[20.0], Margin::Flexible, ScaleFactor::X1);
        assert_eq!(flexible.as_slice(), &[40.0]);
        let fixed = spread_out(100.0, &[20.0], Margin::Fixed(10.0), ScaleFactor::X1);
        assert_eq!(fixed.as_slice(), &[40.0]);
    }

    #[test]
    fn fixed_margins() {
        let offsets = spread_out(100.0, &[10.0, 20.0, 10.0], Margin::Fixed(5.0), ScaleFactor::X1);
        // 50 free after margins, 25 per gap.
        assert_eq!(offsets.as_slice(), &[5.0, 40.0, 85.0]);
    }

    #[test]
    fn overflow_lays_end_to_end() {
        let offsets = spread_out(25.0, &[10.0, 10.0, 10.0], Margin::Flexible, ScaleFactor::X1);
        assert_eq!(offsets.as_slice(), &[0.0, 10.0, 20.0]);
        let offsets = spread_out(25.0, &[10.0, 10.0], Margin::Fixed(4.0), ScaleFactor::X1);
        assert_eq!(offsets.as_slice(), &[4.0, 14.0]);
        let offsets = spread_out(10.0, &[20.0], Margin::Fixed(2.0), ScaleFactor::X1);
        assert_eq!(offsets.as_slice(), &[2.0]);
    }

    #[test]
    fn offsets_snap_without_drift() {
        // Gaps of 100 / 7 each: no offset is more than half a pixel off.
        let items = [0.0; 6];
        let offsets = spread_out(100.0, &items, Margin::Flexible, ScaleFactor::X2);
        for (i, offset) in offsets.iter().enumerate() {
            let exact = 100.0 / 7.0 * (i + 1) as f64;
            assert!((offset - exact).abs() <= 0.25, "{offset} vs {exact}");
            assert!(ScaleFactor::X2.is_pixel_aligned(*offset));
        }
    }

    #[test]
    fn frames_along_horizontal() {
        let bounds = Rect::new(10.0, 5.0, 110.0, 25.0);
        let frames = spread_out_in(
            bounds,
            Axis::Horizontal,
            &[30.0, 30.0],
            Margin::Fixed(0.0),
            ScaleFactor::X1,
        );
        assert_eq!(frames.as_slice(), &[
            Rect::new(10.0, 5.0, 40.0, 25.0),
            Rect::new(80.0, 5.0, 110.0, 25.0),
        ]);
    }
}
