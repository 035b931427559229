//! Per-pass attribute snapshots for containers and children

use trellis_geometry::{EdgeInsets, Rect, Size};

use crate::alignment::{Alignment, Region};
use crate::axis::Orientation;
use crate::layout_size::LayoutSize;

/// Geometry of the container being laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Container {
    /// Outer size assigned to the container.
    pub size: Size,
    /// Space between the container edges and its children.
    pub margin: EdgeInsets,
    /// Gap between adjacent children: `width` horizontally, `height`
    /// vertically.
    pub padding: Size,
}

impl Container {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Size) -> Self {
        self.padding = padding;
        self
    }

    /// The area children are placed in, in container-local coordinates.
    pub fn content_rect(&self) -> Rect {
        Rect::from_size(self.size.non_negative()).deflate(self.margin)
    }

    /// Gap between neighbours along `orientation`.
    #[inline]
    pub fn gap(&self, orientation: Orientation) -> i32 {
        orientation.length(self.padding).max(0)
    }

    /// Total gap length between `count` children along `orientation`.
    pub fn gaps(&self, orientation: Orientation, count: usize) -> i64 {
        self.gap(orientation) as i64 * count.saturating_sub(1) as i64
    }

    /// Margin extent along `orientation`.
    #[inline]
    pub fn margin_extent(&self, orientation: Orientation) -> i32 {
        orientation.inset_sum(self.margin)
    }
}

/// An offset of a child edge from one of the container edges.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub distance: LayoutSize,
    /// Measured from the opposite container edge instead of the near one.
    pub from_far_edge: bool,
}

impl Offset {
    pub fn near(distance: impl Into<LayoutSize>) -> Self {
        Self {
            distance: distance.into(),
            from_far_edge: false,
        }
    }

    pub fn far(distance: impl Into<LayoutSize>) -> Self {
        Self {
            distance: distance.into(),
            from_far_edge: true,
        }
    }
}

/// Absolute-position anchors for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisAnchor {
    /// Offset of the child's leading edge.
    pub lead: Option<Offset>,
    /// Offset of the child's trailing edge.
    pub trail: Option<Offset>,
    /// Explicit extent.
    pub size: Option<LayoutSize>,
}

impl AxisAnchor {
    pub fn lead(mut self, offset: Offset) -> Self {
        self.lead = Some(offset);
        self
    }

    pub fn trail(mut self, offset: Offset) -> Self {
        self.trail = Some(offset);
        self
    }

    pub fn size(mut self, size: impl Into<LayoutSize>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// Attribute values a child exposes to its container's layout.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ChildAttributes {
    /// Slot for the region layout. `None` is treated as `Center`.
    pub region: Option<Region>,
    /// Overrides the container's cross-axis alignment.
    pub alignment: Option<Alignment>,
    pub horizontal: AxisAnchor,
    pub vertical: AxisAnchor,
}

impl ChildAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn horizontal(mut self, anchor: AxisAnchor) -> Self {
        self.horizontal = anchor;
        self
    }

    pub fn vertical(mut self, anchor: AxisAnchor) -> Self {
        self.vertical = anchor;
        self
    }

    pub fn anchor(&self, orientation: Orientation) -> &AxisAnchor {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}
