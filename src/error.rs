// Copyright 2025 Lars Brubaker
// License: MIT
//
// Error types. The region algebra itself is infallible; only parsing the
// diagnostic text form of a rectangle can fail.

use thiserror::Error;

/// Failure to parse a rectangle from its `"[left, top, width, height]"` form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRectError {
    #[error("rectangle must be enclosed in '[' and ']'")]
    MissingBrackets,
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid integer {0:?}")]
    InvalidInt(String),
    #[error("negative extent: width {width}, height {height}")]
    NegativeExtent { width: i32, height: i32 },
    #[error("right or bottom edge overflows i32")]
    Overflow,
}
