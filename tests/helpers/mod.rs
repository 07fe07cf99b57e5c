// Copyright 2025 Lars Brubaker
// Shared test utilities for rect-region tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use rand::Rng;
use rect_region::{Rect, Region};

/// Install a tracing subscriber that writes through the test harness.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Region holding exactly the given rectangles, bound computed, no sweep.
pub fn region(rects: &[Rect]) -> Region {
    let mut r = Region::new();
    r.rects_mut().extend_from_slice(rects);
    r.make_bound();
    r
}

/// Every unit cell covered by at least one rectangle of the region.
/// Only use with small coordinates.
pub fn covered_cells(region: &Region) -> BTreeSet<(i32, i32)> {
    let mut cells = BTreeSet::new();
    for r in region.iter() {
        for y in r.top..r.bottom {
            for x in r.left..r.right {
                cells.insert((x, y));
            }
        }
    }
    cells
}

/// Brute-force pairwise check that no two rectangles share a cell and that
/// none is degenerate.
pub fn verify_no_overlap(region: &Region) {
    let rects = region.rects();
    for (i, a) in rects.iter().enumerate() {
        assert!(!a.is_empty(), "rect {} is empty: {:?}", i, a);
        for (j, b) in rects.iter().enumerate().skip(i + 1) {
            assert!(
                !a.intersects(b),
                "rects {} and {} overlap: {} {} in {}",
                i,
                j,
                a,
                b,
                region
            );
        }
    }
}

/// Verify the cached bound is the envelope of the rectangles.
pub fn verify_bound(region: &Region) {
    if region.is_empty() {
        return;
    }
    let rects = region.rects();
    let left = rects.iter().map(|r| r.left).min().unwrap();
    let top = rects.iter().map(|r| r.top).min().unwrap();
    let right = rects.iter().map(|r| r.right).max().unwrap();
    let bottom = rects.iter().map(|r| r.bottom).max().unwrap();
    assert_eq!(region.bound(), Rect::new(left, top, right, bottom));
}

/// Random rectangles inside `[0, extent)^2`, possibly overlapping each other.
/// Roughly one in eight is degenerate.
pub fn random_rects<R: Rng>(rng: &mut R, count: usize, extent: i32) -> Vec<Rect> {
    (0..count)
        .map(|_| {
            let left = rng.gen_range(0..extent);
            let top = rng.gen_range(0..extent);
            if rng.gen_range(0..8) == 0 {
                return Rect::new(left, top, left, top + 1);
            }
            let right = rng.gen_range(left + 1..=extent);
            let bottom = rng.gen_range(top + 1..=extent);
            Rect::new(left, top, right, bottom)
        })
        .collect()
}

/// Random valid (non-overlapping) region built through a union sweep.
pub fn random_region<R: Rng>(rng: &mut R, count: usize, extent: i32) -> Region {
    Region::from_rects(random_rects(rng, count, extent))
}
