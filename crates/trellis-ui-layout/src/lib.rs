//! Layout contracts & sizing primitives for Trellis

mod alignment;
mod arrangement;
mod axis;
mod container;
mod core;
mod diagnostics;
mod guide;
mod interpolator;
mod layout_size;
mod sandbox;

pub use alignment::*;
pub use arrangement::*;
pub use axis::*;
pub use container::*;
pub use core::*;
pub use diagnostics::*;
pub use guide::*;
pub use interpolator::*;
pub use layout_size::*;
pub use sandbox::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, Region};
    pub use crate::axis::{AxisEnd, Direction, Orientation};
    pub use crate::container::{AxisAnchor, ChildAttributes, Container, Offset};
    pub use crate::core::{LayoutChild, LayoutPolicy, LayoutResult, Placement};
    pub use crate::diagnostics::{Diagnostics, LayoutDiagnostic, LogDiagnostics};
    pub use crate::guide::{FixedGuide, GuideLevel, SizeGuide, UNBOUNDED};
    pub use crate::interpolator::{Checker, GuideChecker, Interpolation, Interpolator};
    pub use crate::layout_size::LayoutSize;
}
