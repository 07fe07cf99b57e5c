// Copyright 2025 Lars Brubaker
// License: MIT
//
// Value types driven through the sweep in region/op.rs.
//
// An Event is one horizontal edge of an operand rectangle. Events are swept
// top to bottom; each toggles coverage of its x-interval in the segment tree.

/// Which operand an edge belongs to, and whether it opens or closes coverage.
///
/// The discriminants give the same-y tie-break order:
/// VoidClose < Close < Open < VoidOpen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum EventKind {
    VoidClose = -2,
    Close = -1,
    Open = 1,
    VoidOpen = 2,
}

impl EventKind {
    #[inline]
    pub fn value(self) -> i8 {
        self as i8
    }

    /// True for edges of the first operand.
    #[inline]
    pub fn is_positive_operand(self) -> bool {
        matches!(self, EventKind::Open | EventKind::Close)
    }

    /// +1 for an opening edge, -1 for a closing edge.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            EventKind::Open | EventKind::VoidOpen => 1,
            EventKind::Close | EventKind::VoidClose => -1,
        }
    }
}

/// A horizontal rectangle edge at `y` spanning raw x-coordinates `[left, right)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub y: i32,
    pub kind: EventKind,
    pub left: i32,
    pub right: i32,
}

impl Event {
    #[inline]
    pub fn new(y: i32, kind: EventKind, left: i32, right: i32) -> Self {
        Event {
            y,
            kind,
            left,
            right,
        }
    }

    /// Sweep order: y ascending, then kind value ascending.
    #[inline]
    pub fn sort_key(&self) -> (i32, i8) {
        (self.y, self.kind.value())
    }
}

/// `[start, end)` over compressed x indices. Never stored in a Region.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

impl Range {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Range { start, end }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Append `range` to `out`, merging with the last range when contiguous.
pub fn push_range(out: &mut Vec<Range>, range: Range) {
    if let Some(last) = out.last_mut() {
        if last.end == range.start {
            last.end = range.end;
            return;
        }
    }
    out.push(range);
}
