// Copyright 2025 the Pixalign Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks of the layout invariants.

use pixalign::{
    ceil_to_pixel, floor_to_pixel, round_to_pixel, spread_out, AspectRatio, Interpolation,
    LayoutDirection, Margin, Position, Rect, RectEdge, ScaleFactor, Size,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ITERATIONS: usize = 2000;
const SCALES: [f64; 7] = [1.0, 2.0, 3.0, 1.5, 2.625, 1.75, 4.0];
const EDGES: [RectEdge; 4] = [RectEdge::MinX, RectEdge::MinY, RectEdge::MaxX, RectEdge::MaxY];

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_1a7e)
}

fn random_scale(rng: &mut StdRng) -> ScaleFactor {
    ScaleFactor::new(SCALES[rng.random_range(0..SCALES.len())]).unwrap()
}

fn random_rect(rng: &mut StdRng) -> Rect {
    Rect::new(
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
    )
}

#[test]
fn snapping_brackets_and_is_idempotent() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let scale = random_scale(&mut rng);
        let v = if rng.random_bool(0.9) {
            rng.random_range(-1e4..1e4)
        } else {
            rng.random_range(-1e300..1e300)
        };
        let (lo, hi, near) = (
            floor_to_pixel(v, scale),
            ceil_to_pixel(v, scale),
            round_to_pixel(v, scale),
        );
        assert!(lo <= v && v <= hi, "{lo} <= {v} <= {hi} at {scale}");
        assert!(lo <= near && near <= hi, "{near} outside [{lo}, {hi}]");
        assert_eq!(floor_to_pixel(lo, scale), lo);
        assert_eq!(ceil_to_pixel(hi, scale), hi);
        assert_eq!(round_to_pixel(near, scale), near);
    }
}

#[test]
fn expand_and_contract_nest() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let scale = random_scale(&mut rng);
        let rect = random_rect(&mut rng);
        let expanded = rect.expand_to_pixel(scale);
        let contracted = rect.contract_to_pixel(scale);
        assert!(expanded.contains_rect(rect), "{expanded:?} vs {rect:?}");
        assert!(rect.abs().contains_rect(contracted), "{contracted:?} vs {rect:?}");
        assert_eq!(expanded.expand_to_pixel(scale), expanded);
        assert_eq!(contracted.contract_to_pixel(scale), contracted);
        let rounded = rect.round_to_pixel(scale);
        assert_eq!(rounded.round_to_pixel(scale), rounded);
    }
}

#[test]
fn slices_tile_the_rect() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let rect = random_rect(&mut rng);
        let edge = EDGES[rng.random_range(0..EDGES.len())];
        let amount = rng.random_range(-100.0..1200.0);
        let (slice, rest) = rect.slice(edge, amount);
        assert_eq!(slice.union(rest), rect.abs());
        match edge {
            RectEdge::MinX => assert_eq!(slice.x1, rest.x0),
            RectEdge::MaxX => assert_eq!(slice.x0, rest.x1),
            RectEdge::MinY => assert_eq!(slice.y1, rest.y0),
            RectEdge::MaxY => assert_eq!(slice.y0, rest.y1),
        }
        assert!(slice.width() >= 0.0 && slice.height() >= 0.0);
        assert!(rest.width() >= 0.0 && rest.height() >= 0.0);
    }
}

/// A whole number of eighths, so sums of edges and power-of-two pixel sizes
/// are exact.
fn eighths(rng: &mut StdRng, lo: i32, hi: i32) -> f64 {
    f64::from(rng.random_range(lo..hi)) / 8.0
}

#[test]
fn fit_stays_inside_and_fill_covers() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let scale = random_scale(&mut rng);
        let ratio = AspectRatio::new(rng.random_range(0.1..10.0), rng.random_range(0.1..10.0))
            .unwrap();
        let bounds = Size::new(rng.random_range(0.0..800.0), rng.random_range(0.0..800.0));
        let fit = ratio.size_to_fit(bounds, scale);
        assert!(fit.fits_in(bounds), "{fit:?} in {bounds:?}");
        let fill = ratio.size_to_fill(bounds, scale);
        assert!(bounds.fits_in(fill), "{fill:?} over {bounds:?}");
    }
}

#[test]
fn placed_rects_respect_bounds() {
    let mut rng = rng();
    let ltr = LayoutDirection::LeftToRight;
    for _ in 0..ITERATIONS {
        let scale = ScaleFactor::new([1.0, 2.0, 4.0][rng.random_range(0..3)]).unwrap();
        let ratio = AspectRatio::new(rng.random_range(0.1..10.0), rng.random_range(0.1..10.0))
            .unwrap();
        let bounds = Rect::from_origin_size(
            (eighths(&mut rng, -800, 800), eighths(&mut rng, -800, 800)),
            (eighths(&mut rng, 8, 6400), eighths(&mut rng, 8, 6400)),
        );
        let position = Position::ABSOLUTE[rng.random_range(0..Position::ABSOLUTE.len())];

        let fitted = ratio.rect_to_fit(bounds, position, ltr, scale);
        assert!(bounds.contains_rect(fitted), "{fitted:?} in {bounds:?}");
        let filled = ratio.rect_to_fill(bounds, position, ltr, scale);
        assert!(filled.contains_rect(bounds), "{filled:?} over {bounds:?}");
    }
}

#[test]
fn interpolation_hits_its_endpoints() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let (from, to) = if rng.random_bool(0.9) {
            (rng.random_range(-1e3..1e3), rng.random_range(-1e3..1e3))
        } else {
            (rng.random_range(-f64::MAX..-1e307), rng.random_range(1e307..f64::MAX))
        };
        let Some(start) = Interpolation::of(from, from, to) else {
            continue;
        };
        assert_eq!(start, Interpolation::START);
        assert_eq!(Interpolation::of(to, from, to), Some(Interpolation::END));
        assert_eq!(Interpolation::START.interpolate(from, to), from);
        assert_eq!(Interpolation::END.interpolate(from, to), to);
        let t = Interpolation::new(rng.random_range(0.0..1.0));
        let v = t.interpolate(from, to);
        let slop = 1e-9 * from.abs() + 1e-9 * to.abs();
        assert!(
            v >= from.min(to) - slop && v <= from.max(to) + slop,
            "{v} outside {from}..{to}"
        );
    }
}

#[test]
fn spread_out_keeps_order() {
    let mut rng = rng();
    for _ in 0..ITERATIONS / 10 {
        let scale = random_scale(&mut rng);
        let items: Vec<f64> = (0..rng.random_range(1..12))
            .map(|_| rng.random_range(0.0..50.0))
            .collect();
        let extent = rng.random_range(0.0..600.0);
        let margin = if rng.random_bool(0.5) {
            Margin::Flexible
        } else {
            Margin::Fixed(rng.random_range(0.0..20.0))
        };
        let offsets = spread_out(extent, &items, margin, scale);
        assert_eq!(offsets.len(), items.len());
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "{offsets:?}");
        }
    }
}
