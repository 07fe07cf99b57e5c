// Copyright 2025 Lars Brubaker
// License: MIT
//
// Region: a set of mutually non-overlapping rectangles plus a cached bound.
//
// Every boolean operator runs one sweep (see region/op.rs) and produces a
// fresh rectangle list. Rectangles come out in the order the sweep finalized
// them, which is not a spatial sort.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::geom::Rect;
use crate::segtree::BoolOp;

mod op;


#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    rects: Vec<Rect>,
    bound: Rect,
}

impl Region {
    pub fn new() -> Self {
        Region {
            rects: Vec::new(),
            bound: Rect::EMPTY,
        }
    }

    /// Region covering `rect`. An empty `rect` yields an empty region whose
    /// bound is still `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let rects = if rect.is_empty() { Vec::new() } else { vec![rect] };
        Region { rects, bound: rect }
    }

    /// Region covering the union of arbitrary rectangles. Overlapping and
    /// degenerate inputs are fine; the result is normalized by one sweep.
    pub fn from_rects<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let raw: Vec<Rect> = rects.into_iter().collect();
        let mut region = Region::new();
        region.rects = op::region_op(&raw, &[], BoolOp::Or);
        region.make_bound();
        region
    }

    #[inline]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Direct access to the rectangle list. Callers that push overlapping
    /// rectangles break the no-overlap invariant until the next operator.
    #[inline]
    pub fn rects_mut(&mut self) -> &mut Vec<Rect> {
        &mut self.rects
    }

    /// Cached bounding rectangle. Only meaningful after `make_bound` or an
    /// operator call.
    #[inline]
    pub fn bound(&self) -> Rect {
        self.bound
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Recompute the bound as the envelope of all rectangles. An empty region
    /// keeps its previous bound.
    pub fn make_bound(&mut self) {
        let Some((first, rest)) = self.rects.split_first() else {
            return;
        };
        self.bound = rest.iter().fold(*first, |acc, r| acc.envelope(r));
    }

    /// Covered area. Exact while the no-overlap invariant holds.
    pub fn area(&self) -> i64 {
        self.rects.iter().map(Rect::area).sum()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// True if any covered cell lies inside `rect`.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.rects.iter().any(|r| r.intersects(rect))
    }

    /// Diagnostic form: `{ Region Size N: [l, t, w, h][l, t, w, h] }`.
    pub fn region_info(&self) -> String {
        self.to_string()
    }

    pub fn or(&self, other: &Region) -> Region {
        self.apply(other, BoolOp::Or)
    }

    pub fn and(&self, other: &Region) -> Region {
        self.apply(other, BoolOp::And)
    }

    /// Cells of `self` not covered by `other`.
    pub fn sub(&self, other: &Region) -> Region {
        self.apply(other, BoolOp::Sub)
    }

    pub fn xor(&self, other: &Region) -> Region {
        self.apply(other, BoolOp::Xor)
    }

    pub fn or_self(&mut self, other: &Region) {
        self.apply_self(other, BoolOp::Or);
    }

    pub fn and_self(&mut self, other: &Region) {
        self.apply_self(other, BoolOp::And);
    }

    pub fn sub_self(&mut self, other: &Region) {
        self.apply_self(other, BoolOp::Sub);
    }

    pub fn xor_self(&mut self, other: &Region) {
        self.apply_self(other, BoolOp::Xor);
    }

    fn apply(&self, other: &Region, op: BoolOp) -> Region {
        let mut result = Region::new();
        result.rects = run(&self.rects, &other.rects, op);
        result.make_bound();
        result
    }

    fn apply_self(&mut self, other: &Region, op: BoolOp) {
        let lhs = std::mem::take(&mut self.rects);
        self.rects = run(&lhs, &other.rects, op);
        self.make_bound();
    }
}

/// Operands are only read. Their bounds are measured into locals so that an
/// intersection of far-apart operands can skip the sweep.
fn run(a: &[Rect], b: &[Rect], op: BoolOp) -> Vec<Rect> {
    if op == BoolOp::And {
        match (envelope(a), envelope(b)) {
            (Some(ba), Some(bb)) if ba.intersects(&bb) => {}
            _ => return Vec::new(),
        }
    }
    op::region_op(a, b, op)
}

fn envelope(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    Some(rest.iter().fold(*first, |acc, r| acc.envelope(r)))
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::from_rect(rect)
    }
}

impl FromIterator<Rect> for Region {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Region::from_rects(iter)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ Region Size {}: ", self.rects.len())?;
        for r in &self.rects {
            write!(f, "{}", r)?;
        }
        write!(f, " }}")
    }
}

macro_rules! region_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl $trait<&Region> for &Region {
            type Output = Region;

            fn $method(self, rhs: &Region) -> Region {
                self.apply(rhs, BoolOp::$op)
            }
        }

        impl $assign_trait<&Region> for Region {
            fn $assign_method(&mut self, rhs: &Region) {
                self.apply_self(rhs, BoolOp::$op);
            }
        }
    };
}

region_operator!(BitOr, bitor, BitOrAssign, bitor_assign, Or);
region_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, And);
region_operator!(Sub, sub, SubAssign, sub_assign, Sub);
region_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, Xor);
