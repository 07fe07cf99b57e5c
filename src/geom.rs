// Copyright 2025 Lars Brubaker
// License: MIT
//
// Axis-aligned rectangle value type.
//
// Rectangles are half-open on both axes: [left, right) x [top, bottom).
// A rectangle with left >= right or top >= bottom covers nothing.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseRectError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// The all-zero rectangle. Also the bound of a region that has never
    /// been measured.
    pub const EMPTY: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from origin and size. Overflowing edges are the caller's problem.
    #[inline]
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Covered area; zero for empty (including inverted) rectangles.
    pub fn area(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (self.right as i64 - self.left as i64) * (self.bottom as i64 - self.top as i64)
    }

    /// True if the two rectangles share at least one unit cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Smallest rectangle enclosing both. Empty inputs are not skipped.
    pub(crate) fn envelope(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Diagnostic form: `[left, top, width, height]`.
    pub fn rect_info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}

impl FromStr for Rect {
    type Err = ParseRectError;

    /// Parses the `rect_info` form back into a rectangle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(ParseRectError::MissingBrackets)?;

        let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(ParseRectError::FieldCount(fields.len()));
        }
        let mut values = [0i32; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| ParseRectError::InvalidInt((*field).to_string()))?;
        }
        let [x, y, width, height] = values;
        if width < 0 || height < 0 {
            return Err(ParseRectError::NegativeExtent { width, height });
        }
        let right = x.checked_add(width).ok_or(ParseRectError::Overflow)?;
        let bottom = y.checked_add(height).ok_or(ParseRectError::Overflow)?;
        Ok(Rect::new(x, y, right, bottom))
    }
}
