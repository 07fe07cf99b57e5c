// rect-region: rectilinear region algebra for window management
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod error;
pub mod geom;
pub mod region;
pub mod segtree;
pub mod sweep;

pub use error::ParseRectError;
pub use geom::Rect;
pub use region::Region;
pub use segtree::BoolOp;
