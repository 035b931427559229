//! Stand-in widgets and diagnostics sinks for layout tests

use std::cell::{Cell, RefCell};

use trellis_geometry::Rect;
use trellis_ui_layout::{
    ChildAttributes, Diagnostics, FixedGuide, LayoutChild, LayoutDiagnostic, Orientation,
    SizeGuide,
};

/// A widget with fixed guides that remembers where it was placed.
#[derive(Debug)]
pub struct TestWidget {
    horizontal: FixedGuide,
    vertical: FixedGuide,
    attributes: ChildAttributes,
    bounds: Cell<Option<Rect>>,
    placements: Cell<usize>,
}

impl TestWidget {
    pub fn new(horizontal: FixedGuide, vertical: FixedGuide) -> Self {
        Self {
            horizontal,
            vertical,
            attributes: ChildAttributes::default(),
            bounds: Cell::new(None),
            placements: Cell::new(0),
        }
    }

    /// A widget that prefers `width` x `height`, can shrink to nothing and
    /// grow without bound.
    pub fn preferred(width: i32, height: i32) -> Self {
        Self::new(FixedGuide::stretchy(0, width), FixedGuide::stretchy(0, height))
    }

    /// A widget that is exactly `width` x `height`.
    pub fn exact(width: i32, height: i32) -> Self {
        Self::new(FixedGuide::exact(width), FixedGuide::exact(height))
    }

    pub fn with_attributes(mut self, attributes: ChildAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Bounds from the last `place` call.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds.get()
    }

    /// Number of times the widget was placed.
    pub fn placement_count(&self) -> usize {
        self.placements.get()
    }
}

impl LayoutChild for TestWidget {
    fn guide(&self, orientation: Orientation) -> &dyn SizeGuide {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn attributes(&self) -> ChildAttributes {
        self.attributes
    }

    fn place(&self, bounds: Rect) {
        self.bounds.set(Some(bounds));
        self.placements.set(self.placements.get() + 1);
    }
}

/// Boxes widgets into the slice form layout policies take.
pub fn boxed<I>(widgets: I) -> Vec<Box<dyn LayoutChild>>
where
    I: IntoIterator<Item = TestWidget>,
{
    widgets
        .into_iter()
        .map(|widget| Box::new(widget) as Box<dyn LayoutChild>)
        .collect()
}

/// Diagnostics sink that keeps everything it receives.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    reports: RefCell<Vec<LayoutDiagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<LayoutDiagnostic> {
        self.reports.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, diagnostic: LayoutDiagnostic) {
        self.reports.borrow_mut().push(diagnostic);
    }
}
