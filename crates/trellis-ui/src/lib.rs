//! Layout strategies built on the Trellis sizing primitives.

pub mod layout;

pub use layout::{
    AbsoluteLayout, AbsoluteSizer, DirectionLayout, DirectionSizer, DirectionSpec, FlowContext,
    FlowLayout, FlowSizer, FlowSpec, FlowWrapOptimizer, RegionLayout, RegionSizer, RegionSpec,
    RowMetrics, WrapChange, WrapState,
};
pub use trellis_geometry::{EdgeInsets, Point, Rect, Size};
pub use trellis_ui_layout::*;

pub mod prelude {
    pub use crate::layout::{
        AbsoluteLayout, DirectionLayout, DirectionSpec, FlowLayout, FlowSpec, RegionLayout,
        RegionSpec,
    };
    pub use trellis_geometry::{EdgeInsets, Rect, Size};
    pub use trellis_ui_layout::prelude::*;
}
