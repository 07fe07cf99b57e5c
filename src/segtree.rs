// Copyright 2025 Lars Brubaker
// License: MIT
//
// Stabbing-count segment tree over compressed x indices.
//
// Nodes live in a Vec arena addressed by u32 index; the root is always at
// index 0 and children are materialized in pairs the first time an update
// does not exactly match a node's range. Dropping the tree drops every node.
//
// Counters are lazy: an update whose range equals a node's range bumps that
// node's counter and stops. A non-zero counter therefore means the whole
// node range is covered, and queries carry ancestor coverage down as flags.
//
// Precondition for every update: the range boundaries are indices into the
// same compressed coordinate table the tree was built over. Boundaries from
// another table would land strictly inside leaves and be silently lost.

use crate::sweep::{push_range, EventKind, Range};

/// Index into SegmentTree::nodes
pub type NodeIdx = u32;

pub const INVALID: NodeIdx = u32::MAX;

/// Index of the root node.
pub const ROOT: NodeIdx = 0;

/// Boolean operator applied by a region sweep. The first operand is the
/// "positive" side (Open/Close events), the second the "negative" side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoolOp {
    Or,
    And,
    /// First operand minus second.
    Sub,
    Xor,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub start: u32,
    pub end: u32,
    pub mid: u32,
    pub left: NodeIdx,
    pub right: NodeIdx,
    /// Net count of first-operand intervals applied exactly at this node.
    pub positive_count: i32,
    /// Net count of second-operand intervals applied exactly at this node.
    pub negative_count: i32,
}

impl Node {
    fn new(start: u32, end: u32) -> Self {
        Node {
            start,
            end,
            mid: start + (end - start) / 2,
            left: INVALID,
            right: INVALID,
            positive_count: 0,
            negative_count: 0,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left == INVALID
    }
}

pub struct SegmentTree {
    pub nodes: Vec<Node>,
}

impl SegmentTree {
    /// Tree over the index range `[start, end)`.
    pub fn new(start: u32, end: u32) -> Self {
        SegmentTree {
            nodes: vec![Node::new(start, end.max(start))],
        }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT as usize]
    }

    /// Apply an open or close edge over `[start, end)`.
    ///
    /// `start` and `end` must come from the coordinate table this tree was
    /// built over (see module docs). Empty ranges are ignored.
    pub fn update(&mut self, start: u32, end: u32, kind: EventKind) {
        self.update_node(ROOT, start, end, kind);
    }

    fn update_node(&mut self, idx: NodeIdx, start: u32, end: u32, kind: EventKind) {
        if start >= end {
            return;
        }
        let (node_start, node_end, mid) = {
            let n = &self.nodes[idx as usize];
            (n.start, n.end, n.mid)
        };
        if start == node_start && end == node_end {
            let n = &mut self.nodes[idx as usize];
            if kind.is_positive_operand() {
                n.positive_count += kind.delta();
            } else {
                n.negative_count += kind.delta();
            }
            return;
        }

        let (left, right) = self.children(idx, node_start, node_end, mid);
        self.update_node(left, start.max(node_start), end.min(mid), kind);
        self.update_node(right, start.max(mid), end.min(node_end), kind);
    }

    /// Materialize the child pair of `idx` if it does not exist yet.
    fn children(&mut self, idx: NodeIdx, start: u32, end: u32, mid: u32) -> (NodeIdx, NodeIdx) {
        let n = &self.nodes[idx as usize];
        if !n.is_leaf() {
            return (n.left, n.right);
        }
        let left = self.nodes.len() as NodeIdx;
        let right = left + 1;
        self.nodes.push(Node::new(start, mid));
        self.nodes.push(Node::new(mid, end));
        let n = &mut self.nodes[idx as usize];
        n.left = left;
        n.right = right;
        (left, right)
    }

    /// Collect the index ranges currently in the result of `op`, ascending,
    /// with contiguous ranges merged.
    pub fn query(&self, op: BoolOp, out: &mut Vec<Range>) {
        match op {
            BoolOp::Or => self.query_or(ROOT, false, false, out),
            BoolOp::And => self.query_and(ROOT, false, false, out),
            BoolOp::Sub => self.query_sub(ROOT, false, false, out),
            BoolOp::Xor => self.query_xor(ROOT, false, false, out),
        }
    }

    #[inline]
    fn flags(&self, idx: NodeIdx, parent_positive: bool, parent_negative: bool) -> (bool, bool) {
        let n = &self.nodes[idx as usize];
        (
            parent_positive || n.positive_count > 0,
            parent_negative || n.negative_count > 0,
        )
    }

    #[inline]
    fn emit(&self, idx: NodeIdx, out: &mut Vec<Range>) {
        let n = &self.nodes[idx as usize];
        push_range(out, Range::new(n.start, n.end));
    }

    fn query_or(&self, idx: NodeIdx, parent_positive: bool, parent_negative: bool, out: &mut Vec<Range>) {
        let (positive, negative) = self.flags(idx, parent_positive, parent_negative);
        if positive || negative {
            self.emit(idx, out);
            return;
        }
        let n = &self.nodes[idx as usize];
        if !n.is_leaf() {
            self.query_or(n.left, positive, negative, out);
            self.query_or(n.right, positive, negative, out);
        }
    }

    fn query_and(&self, idx: NodeIdx, parent_positive: bool, parent_negative: bool, out: &mut Vec<Range>) {
        let (positive, negative) = self.flags(idx, parent_positive, parent_negative);
        if positive && negative {
            self.emit(idx, out);
            return;
        }
        let n = &self.nodes[idx as usize];
        if !n.is_leaf() {
            self.query_and(n.left, positive, negative, out);
            self.query_and(n.right, positive, negative, out);
        }
    }

    fn query_sub(&self, idx: NodeIdx, parent_positive: bool, parent_negative: bool, out: &mut Vec<Range>) {
        let (positive, negative) = self.flags(idx, parent_positive, parent_negative);
        if negative {
            return;
        }
        let n = &self.nodes[idx as usize];
        if n.is_leaf() {
            if positive {
                self.emit(idx, out);
            }
            return;
        }
        // Negative coverage may still appear below a positive node.
        self.query_sub(n.left, positive, negative, out);
        self.query_sub(n.right, positive, negative, out);
    }

    fn query_xor(&self, idx: NodeIdx, parent_positive: bool, parent_negative: bool, out: &mut Vec<Range>) {
        let (positive, negative) = self.flags(idx, parent_positive, parent_negative);
        if positive && negative {
            return;
        }
        let n = &self.nodes[idx as usize];
        if n.is_leaf() {
            if positive != negative {
                self.emit(idx, out);
            }
            return;
        }
        self.query_xor(n.left, positive, negative, out);
        self.query_xor(n.right, positive, negative, out);
    }
}
