//! Container layout strategies
//!
//! Each strategy comes as a [`LayoutPolicy`](trellis_ui_layout::LayoutPolicy)
//! that places children and a sizer that reports the container's own guide
//! to its parent before it has bounds.

mod absolute;
mod direction;
mod flow;
mod region;

pub use absolute::{AbsoluteLayout, AbsoluteSizer};
pub use direction::{DirectionLayout, DirectionSizer, DirectionSpec};
pub use flow::{
    max_row_length, FlowContext, FlowLayout, FlowSizer, FlowSpec, FlowWrapOptimizer, RowMetrics,
    WrapChange, WrapState,
};
pub use region::{RegionLayout, RegionSizer, RegionSpec};

use trellis_ui_layout::{
    saturating_extent, Alignment, Diagnostics, GuideChecker, Interpolator, SizeGuide, UNBOUNDED,
};

/// Cross-axis extent of a child placed in a slot `available` long.
///
/// Stretching alignments fill the slot within the guide's `Min`..`Max`
/// range; the others take the preferred size, shrinking toward `Min` when
/// the slot is too small.
pub(crate) fn cross_extent(
    guide: &dyn SizeGuide,
    index: usize,
    alignment: Alignment,
    available: i32,
    main_size: i32,
    diagnostics: &dyn Diagnostics,
) -> i32 {
    let interpolator = if alignment.stretches() {
        Interpolator::MIN_MAX
    } else {
        Interpolator::MIN_PREFERRED
    };
    GuideChecker::new(main_size, false, diagnostics)
        .with_guides([(index, guide)])
        .resolve(interpolator, available.max(0) as i64)
        .first()
        .copied()
        .unwrap_or(0)
}

/// Length left for children once `margin` is taken off `length`.
/// [`UNBOUNDED`] stays unbounded.
#[inline]
pub(crate) fn inner_length(length: i32, margin: i32) -> i32 {
    if length == UNBOUNDED {
        UNBOUNDED
    } else {
        length.saturating_sub(margin).max(0)
    }
}

/// `value` plus a non-negative extent such as margins or gaps.
#[inline]
pub(crate) fn with_extent(value: i32, extent: i64) -> i32 {
    saturating_extent(value.max(0), extent.clamp(0, i32::MAX as i64) as i32)
}
