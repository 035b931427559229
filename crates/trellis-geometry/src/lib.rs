//! Integer geometry primitives for Trellis layout
//!
//! Layout works in whole device pixels, so every type here is `i32` based.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
