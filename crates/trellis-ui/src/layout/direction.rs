//! Direction packing: children one after another along a single axis.

use trellis_geometry::Rect;
use trellis_ui_layout::{
    commit, saturating_extent, Alignment, Arrangement, Container, Diagnostics, Direction,
    GuideChecker, GuideLevel, Interpolator, LayoutChild, LayoutPolicy, LayoutResult, Orientation,
    SizeGuide,
};

use super::{cross_extent, inner_length, with_extent};

/// Configuration for [`DirectionLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionSpec {
    pub direction: Direction,
    /// Distribution of leftover main-axis space.
    pub alignment: Alignment,
    /// Default cross-axis placement; children may override it.
    pub cross_alignment: Alignment,
}

impl Default for DirectionSpec {
    fn default() -> Self {
        Self {
            direction: Direction::LeftToRight,
            alignment: Alignment::Begin,
            cross_alignment: Alignment::Begin,
        }
    }
}

impl DirectionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn cross_alignment(mut self, alignment: Alignment) -> Self {
        self.cross_alignment = alignment;
        self
    }
}

/// Packs children one after another along the configured direction.
///
/// Main-axis sizes are interpolated between `Min` and `Preferred`, or up to
/// `Max` when the alignment is `Justify`. Reversed directions mirror the
/// packed positions so the first child ends up at the trailing edge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectionLayout {
    spec: DirectionSpec,
}

impl DirectionLayout {
    pub fn new(spec: DirectionSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &DirectionSpec {
        &self.spec
    }
}

impl LayoutPolicy for DirectionLayout {
    fn sizer<'a>(
        &'a self,
        container: &'a Container,
        children: &'a [Box<dyn LayoutChild>],
        orientation: Orientation,
    ) -> Box<dyn SizeGuide + 'a> {
        Box::new(DirectionSizer {
            container,
            children,
            main: self.spec.direction.orientation(),
            orientation,
        })
    }

    fn layout(
        &mut self,
        container: &Container,
        children: &[Box<dyn LayoutChild>],
        diagnostics: &dyn Diagnostics,
    ) -> LayoutResult {
        let main = self.spec.direction.orientation();
        let cross = main.opposite();
        let content = container.content_rect();
        let (main_start, main_len) = main.span(content);
        let (cross_start, cross_len) = cross.span(content);
        let gap = container.gap(main);

        let interpolator = if self.spec.alignment.stretches() {
            Interpolator::MIN_MAX
        } else {
            Interpolator::MIN_PREFERRED
        };
        let sizes = GuideChecker::new(cross_len, true, diagnostics)
            .with_guides(
                children
                    .iter()
                    .enumerate()
                    .map(|(index, child)| (index, child.guide(main))),
            )
            .with_fixed_extent(container.gaps(main, children.len()))
            .resolve(interpolator, main_len as i64);

        let mut positions = vec![0; sizes.len()];
        self.spec
            .alignment
            .arrange(main_len, &sizes, gap, &mut positions);

        let reversed = self.spec.direction.is_reversed();
        let bounds: Vec<Rect> = children
            .iter()
            .enumerate()
            .map(|(index, child)| {
                let size = sizes[index];
                let position = if reversed {
                    main_len - positions[index] - size
                } else {
                    positions[index]
                };

                let alignment = child
                    .attributes()
                    .alignment
                    .unwrap_or(self.spec.cross_alignment);
                let extent = cross_extent(
                    child.guide(cross),
                    index,
                    alignment,
                    cross_len,
                    size,
                    diagnostics,
                );
                let offset = alignment.offset(cross_len, extent);

                main.rect(main_start + position, cross_start + offset, size, extent)
            })
            .collect();

        commit(children, bounds)
    }

    fn debug_name(&self) -> &str {
        "DirectionLayout"
    }
}

/// Guide of a direction-packed container.
///
/// Along the packing axis the children's values add up, with the gaps in
/// between; across it the largest child decides. Margins are added on top.
pub struct DirectionSizer<'a> {
    container: &'a Container,
    children: &'a [Box<dyn LayoutChild>],
    main: Orientation,
    orientation: Orientation,
}

impl SizeGuide for DirectionSizer<'_> {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        let margin = self.container.margin_extent(self.orientation) as i64;
        let cross_margin = self.container.margin_extent(self.orientation.opposite());
        let inner_cross = inner_length(cross_size, cross_margin);

        let content = if self.orientation == self.main {
            let sum = self.children.iter().fold(0, |total, child| {
                let value = child
                    .guide(self.main)
                    .get(level, inner_cross, cross_is_max)
                    .max(0);
                saturating_extent(total, value)
            });
            with_extent(sum, self.container.gaps(self.main, self.children.len()))
        } else {
            self.children
                .iter()
                .map(|child| {
                    child
                        .guide(self.orientation)
                        .get(level, inner_cross, true)
                        .max(0)
                })
                .max()
                .unwrap_or(0)
        };

        with_extent(content, margin)
    }

    fn baseline(&self, size: i32) -> Option<i32> {
        if self.orientation == self.main || self.orientation.is_horizontal() {
            return None;
        }
        let (leading, _) = self.orientation.insets(self.container.margin);
        let inner = inner_length(size, self.container.margin_extent(self.orientation));
        self.children
            .iter()
            .filter_map(|child| child.guide(self.orientation).baseline(inner))
            .max()
            .map(|baseline| baseline + leading)
    }
}

#[cfg(test)]
#[path = "tests/direction_tests.rs"]
mod tests;
