// Copyright 2025 Lars Brubaker
// License: MIT
//
// The region sweep: boolean operators over two rectangle lists.
//
// Horizontal edges of both operands become events, x coordinates are
// compressed to dense indices, and the events are swept top to bottom over a
// SegmentTree. Between two distinct event y values the tree is queried for
// the operator's coverage, and the resulting x intervals are stitched
// vertically onto the fragments of the band above.

use tracing::trace;

use crate::geom::Rect;
use crate::segtree::{BoolOp, SegmentTree};
use crate::sweep::{Event, EventKind, Range};

/// Run `op` over operand rectangle lists `a` (first) and `b` (second).
///
/// Operands may overlap internally or contain degenerate rectangles; the
/// output never contains overlapping or empty rectangles.
pub(crate) fn region_op(a: &[Rect], b: &[Rect], op: BoolOp) -> Vec<Rect> {
    let mut events = Vec::with_capacity(2 * (a.len() + b.len()));
    let mut xs = Vec::with_capacity(2 * (a.len() + b.len()));
    push_edges(a, EventKind::Open, EventKind::Close, &mut events, &mut xs);
    push_edges(b, EventKind::VoidOpen, EventKind::VoidClose, &mut events, &mut xs);

    if events.is_empty() {
        trace!(?op, "region sweep skipped: no events");
        return Vec::new();
    }

    xs.sort_unstable();
    xs.dedup();
    events.sort_by_key(Event::sort_key);

    let last_index = if xs.len() < 2 { 0 } else { (xs.len() - 1) as u32 };
    let mut tree = SegmentTree::new(0, last_index);
    let mut rows = RowState::new(events[0].y);
    let mut ranges = Vec::new();

    for event in &events {
        // All events of the previous y are applied; close out that band
        // before this event changes the tree.
        if event.y > rows.pre_y {
            ranges.clear();
            tree.query(op, &mut ranges);
            rows.update_rects(&ranges, &xs, event.y);
        }
        tree.update(compress(&xs, event.left), compress(&xs, event.right), event.kind);
    }

    let out = rows.finish();
    trace!(
        ?op,
        events = events.len(),
        distinct_x = xs.len(),
        nodes = tree.nodes.len(),
        rects = out.len(),
        "region sweep"
    );
    out
}

/// Emit an open/close event pair per non-empty rectangle and record its x edges.
fn push_edges(
    rects: &[Rect],
    open: EventKind,
    close: EventKind,
    events: &mut Vec<Event>,
    xs: &mut Vec<i32>,
) {
    for r in rects.iter().filter(|r| !r.is_empty()) {
        events.push(Event::new(r.top, open, r.left, r.right));
        events.push(Event::new(r.bottom, close, r.left, r.right));
        xs.push(r.left);
        xs.push(r.right);
    }
}

/// Index of `x` in the sorted, deduplicated coordinate table.
#[inline]
fn compress(xs: &[i32], x: i32) -> u32 {
    xs.partition_point(|&v| v < x) as u32
}

/// Row-merging state for one sweep.
///
/// `open` holds the fragments that reached the bottom of the previous band
/// (all end at `pre_y`), ascending by left edge. `done` collects finalized
/// fragments in the order they were closed.
struct RowState {
    pre_y: i32,
    open: Vec<Rect>,
    next: Vec<Rect>,
    done: Vec<Rect>,
}

impl RowState {
    fn new(first_y: i32) -> Self {
        RowState {
            pre_y: first_y,
            open: Vec::new(),
            next: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Merge the coverage of band `[pre_y, cur_y)` onto the open fragments.
    ///
    /// A fragment continues only if an interval has exactly its x extent;
    /// every other fragment is finalized and every other interval starts a
    /// new fragment.
    fn update_rects(&mut self, ranges: &[Range], xs: &[i32], cur_y: i32) {
        let pre_y = self.pre_y;
        self.next.clear();

        let mut i = 0;
        let mut j = 0;
        while i < self.open.len() && j < ranges.len() {
            let frag = self.open[i];
            let left = xs[ranges[j].start as usize];
            let right = xs[ranges[j].end as usize];

            if frag.left == left && frag.right == right {
                self.next.push(Rect { bottom: cur_y, ..frag });
                i += 1;
                j += 1;
            } else if frag.right < right {
                self.done.push(frag);
                i += 1;
            } else if right < frag.right {
                self.next.push(Rect::new(left, pre_y, right, cur_y));
                j += 1;
            } else {
                // Same right edge, different left edge: neither can match
                // anything further along.
                self.done.push(frag);
                self.next.push(Rect::new(left, pre_y, right, cur_y));
                i += 1;
                j += 1;
            }
        }
        self.done.extend_from_slice(&self.open[i..]);
        for range in &ranges[j..] {
            let left = xs[range.start as usize];
            let right = xs[range.end as usize];
            self.next.push(Rect::new(left, pre_y, right, cur_y));
        }

        std::mem::swap(&mut self.open, &mut self.next);
        self.pre_y = cur_y;
    }

    fn finish(mut self) -> Vec<Rect> {
        self.done.append(&mut self.open);
        self.done
    }
}
