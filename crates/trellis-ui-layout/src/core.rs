//! Core layout traits shared by the Trellis layout strategies.

use trellis_geometry::Rect;

use crate::axis::Orientation;
use crate::container::{ChildAttributes, Container};
use crate::diagnostics::Diagnostics;
use crate::guide::SizeGuide;

/// A child as seen by its container's layout.
///
/// Everything read from it is treated as a snapshot for the duration of a
/// pass; the only thing written back is the final bounds.
pub trait LayoutChild {
    /// The size policy along `orientation`.
    fn guide(&self, orientation: Orientation) -> &dyn SizeGuide;

    /// Attribute values relevant to the container's strategy.
    fn attributes(&self) -> ChildAttributes {
        ChildAttributes::default()
    }

    /// Assigns the final bounds, relative to the container's origin.
    fn place(&self, bounds: Rect);
}

/// Strategy responsible for sizing and placing a container's children.
pub trait LayoutPolicy {
    /// The container's own size policy along `orientation`, derived from the
    /// children's guides plus margin and padding. Never mutates state.
    fn sizer<'a>(
        &'a self,
        container: &'a Container,
        children: &'a [Box<dyn LayoutChild>],
        orientation: Orientation,
    ) -> Box<dyn SizeGuide + 'a>;

    /// Assigns bounds to every child. Repeated calls with identical inputs
    /// produce identical bounds.
    fn layout(
        &mut self,
        container: &Container,
        children: &[Box<dyn LayoutChild>],
        diagnostics: &dyn Diagnostics,
    ) -> LayoutResult;

    fn debug_name(&self) -> &str {
        "LayoutPolicy"
    }
}

/// Result of a layout pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutResult {
    /// One placement per child, in child order.
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.placements
            .iter()
            .find(|placement| placement.index == index)
            .map(|placement| placement.bounds)
    }
}

/// Bounds assigned to one child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub bounds: Rect,
}

impl Placement {
    pub fn new(index: usize, bounds: Rect) -> Self {
        Self { index, bounds }
    }
}

/// Places every child and records the placements, keeping child order.
pub fn commit(children: &[Box<dyn LayoutChild>], bounds: Vec<Rect>) -> LayoutResult {
    debug_assert_eq!(children.len(), bounds.len());
    let placements = children
        .iter()
        .zip(bounds)
        .enumerate()
        .map(|(index, (child, rect))| {
            child.place(rect);
            Placement::new(index, rect)
        })
        .collect();
    LayoutResult::new(placements)
}
