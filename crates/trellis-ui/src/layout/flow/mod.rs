//! Flowing containers: children run along rows and wrap onto new rows when
//! a row gets too long.

mod optimizer;
mod wrap_state;

pub use optimizer::{max_row_length, FlowContext, FlowWrapOptimizer, RowMetrics, WrapChange};
pub use wrap_state::WrapState;

use std::ops::Range;

use smallvec::SmallVec;
use trellis_geometry::Rect;
use trellis_ui_layout::{
    commit, saturating_extent, Alignment, Arrangement, Container, Diagnostics, GuideLevel,
    LayoutChild, LayoutPolicy, LayoutResult, Orientation, SizeGuide, Sizes, UNBOUNDED,
};

use super::{cross_extent, inner_length, with_extent};

/// Configuration for [`FlowLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowSpec {
    /// The axis rows run along.
    pub orientation: Orientation,
    /// Distribution of leftover space inside a row.
    pub alignment: Alignment,
    /// Default placement of a child across its row; children may override
    /// it.
    pub cross_alignment: Alignment,
    /// Distribution of the rows across the container.
    pub row_alignment: Alignment,
    /// Lets children grow up to `Max` to fill their row, instead of
    /// stopping at `MaxPreferred`.
    pub fill_container: bool,
    /// Lines children up on the row baseline when they report one.
    pub baseline_aligned: bool,
    /// Upper bound on optimizer steps per pass.
    pub max_iterations: usize,
}

impl Default for FlowSpec {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            alignment: Alignment::Begin,
            cross_alignment: Alignment::Begin,
            row_alignment: Alignment::Begin,
            fill_container: false,
            baseline_aligned: false,
            max_iterations: 64,
        }
    }
}

impl FlowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
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

    pub fn row_alignment(mut self, alignment: Alignment) -> Self {
        self.row_alignment = alignment;
        self
    }

    pub fn fill_container(mut self, fill: bool) -> Self {
        self.fill_container = fill;
        self
    }

    pub fn baseline_aligned(mut self, aligned: bool) -> Self {
        self.baseline_aligned = aligned;
        self
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }
}

/// What the last fit was computed from.
#[derive(Clone, Debug, PartialEq)]
struct FitInputs {
    main_length: i32,
    cross_length: i32,
    main_gap: i32,
    cross_gap: i32,
    /// Main-axis ladders at the cross length.
    ladders: Vec<[i32; 5]>,
    /// Cross-axis ladders at the main length.
    cross_ladders: Vec<[i32; 5]>,
}

#[derive(Clone, Debug)]
struct Fitted {
    inputs: FitInputs,
    revision: u64,
}

/// Lays children out in rows, keeping its wrap state between passes.
///
/// Each pass first fits the wrap state to the container, one optimizer
/// step at a time:
///
/// 1. wrap while the longest row at `Preferred` is longer than the
///    container, undoing a new row that would overflow the cross length;
/// 2. wrap while even `Min` lengths do not fit;
/// 3. unwrap while merged rows still fit at `Preferred`;
/// 4. unwrap while the rows overflow the cross length, as long as `Min`
///    lengths fit.
///
/// The fit is skipped when neither the inputs nor the wrap state changed
/// since the last pass, so repeated passes place children identically.
/// Any change of lengths, gaps or child ladders also drops the cached rows.
#[derive(Clone, Debug, Default)]
pub struct FlowLayout {
    spec: FlowSpec,
    optimizer: FlowWrapOptimizer,
    fitted: Option<Fitted>,
}

impl FlowLayout {
    pub fn new(spec: FlowSpec) -> Self {
        Self {
            spec,
            optimizer: FlowWrapOptimizer::default(),
            fitted: None,
        }
    }

    pub fn spec(&self) -> &FlowSpec {
        &self.spec
    }

    pub fn optimizer(&self) -> &FlowWrapOptimizer {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut FlowWrapOptimizer {
        &mut self.optimizer
    }

    pub fn state(&self) -> &WrapState {
        self.optimizer.state()
    }

    /// Forgets the last fit and the cached rows, e.g. after a child's guide
    /// changed in a way its ladders at the container lengths do not show.
    pub fn invalidate(&mut self) {
        self.fitted = None;
        self.optimizer.invalidate_rows();
    }

    fn fit(
        &mut self,
        context: &FlowContext<'_>,
        main_length: i32,
        cross_length: i32,
        cross_gap: i32,
    ) {
        let fill = self.spec.fill_container;
        let optimizer = &mut self.optimizer;
        let main_limit = main_length as i64;
        let mut budget = self.spec.max_iterations;
        let mut steps = 0;

        while budget > 0
            && optimizer.max_row_length(context, GuideLevel::Preferred, cross_length, true)
                > main_limit
        {
            budget -= 1;
            let snapshot = optimizer.snapshot();
            match optimizer.wrap_next(context, GuideLevel::Preferred, cross_length, true) {
                WrapChange::Unchanged => break,
                WrapChange::Inserted(gap) => {
                    let rows = optimizer.row_heights(context, main_length, fill);
                    if rows_extent(rows, cross_length, cross_gap) > cross_length as i64 {
                        log::trace!("flow: new row at gap {gap} overflows, undone");
                        optimizer.restore(&snapshot);
                        break;
                    }
                }
                _ => {}
            }
            steps += 1;
        }

        while budget > 0
            && optimizer.max_row_length(context, GuideLevel::Min, cross_length, true) > main_limit
        {
            budget -= 1;
            if !optimizer
                .wrap_next(context, GuideLevel::Min, cross_length, true)
                .is_changed()
            {
                break;
            }
            steps += 1;
        }

        while budget > 0 {
            budget -= 1;
            if !optimizer
                .unwrap_next(context, GuideLevel::Preferred, cross_length, true, main_limit)
                .is_changed()
            {
                break;
            }
            steps += 1;
        }

        while budget > 0 {
            let rows = optimizer.row_heights(context, main_length, fill);
            if rows_extent(rows, cross_length, cross_gap) <= cross_length as i64 {
                break;
            }
            budget -= 1;
            if !optimizer
                .unwrap_next(context, GuideLevel::Min, cross_length, true, main_limit)
                .is_changed()
            {
                break;
            }
            steps += 1;
        }

        if budget == 0 {
            log::debug!(
                "flow: fit stopped after {} iterations",
                self.spec.max_iterations
            );
        }
        log::trace!(
            "flow: fitted {} rows in {steps} steps",
            optimizer.state().row_count()
        );
    }
}

fn ladders(
    children: &[Box<dyn LayoutChild>],
    orientation: Orientation,
    cross_size: i32,
) -> Vec<[i32; 5]> {
    children
        .iter()
        .map(|child| {
            let guide = child.guide(orientation);
            GuideLevel::ALL.map(|level| guide.get(level, cross_size, true))
        })
        .collect()
}

/// Total cross extent of `rows` including the gaps between them.
fn rows_extent(rows: &[RowMetrics], cross_length: i32, cross_gap: i32) -> i64 {
    let heights: i64 = rows
        .iter()
        .map(|row| row.height.resolve(cross_length).max(0) as i64)
        .sum();
    heights + cross_gap as i64 * rows.len().saturating_sub(1) as i64
}

impl LayoutPolicy for FlowLayout {
    fn sizer<'a>(
        &'a self,
        container: &'a Container,
        children: &'a [Box<dyn LayoutChild>],
        orientation: Orientation,
    ) -> Box<dyn SizeGuide + 'a> {
        Box::new(FlowSizer {
            spec: &self.spec,
            container,
            children,
            orientation,
        })
    }

    fn layout(
        &mut self,
        container: &Container,
        children: &[Box<dyn LayoutChild>],
        diagnostics: &dyn Diagnostics,
    ) -> LayoutResult {
        let spec = self.spec;
        let main = spec.orientation;
        let cross = main.opposite();
        let content = container.content_rect();
        let (main_start, main_length) = main.span(content);
        let (cross_start, cross_length) = cross.span(content);
        let main_gap = container.gap(main);
        let cross_gap = container.gap(cross);

        if self.optimizer.child_count() != children.len() {
            self.optimizer.reset(children.len());
            self.fitted = None;
        }

        let context = FlowContext {
            children,
            orientation: main,
            gap: main_gap,
            cross_limit: cross_length,
            diagnostics,
        };

        let inputs = FitInputs {
            main_length,
            cross_length,
            main_gap,
            cross_gap,
            ladders: ladders(children, main, cross_length),
            cross_ladders: ladders(children, cross, main_length),
        };
        let current = match &self.fitted {
            Some(fitted) => {
                fitted.inputs == inputs && fitted.revision == self.optimizer.revision()
            }
            None => false,
        };
        if !current {
            if self
                .fitted
                .as_ref()
                .map_or(true, |fitted| fitted.inputs != inputs)
            {
                self.optimizer.invalidate_rows();
            }
            self.fit(&context, main_length, cross_length, cross_gap);
            self.fitted = Some(Fitted {
                inputs,
                revision: self.optimizer.revision(),
            });
        }

        let rows = self
            .optimizer
            .row_heights(&context, main_length, spec.fill_container)
            .to_vec();
        let heights: Sizes = rows
            .iter()
            .map(|row| row.height.resolve(cross_length).max(0))
            .collect();
        let mut row_positions = vec![0; rows.len()];
        spec.row_alignment
            .arrange(cross_length, &heights, cross_gap, &mut row_positions);

        let mut bounds = vec![Rect::ZERO; children.len()];
        for ((row, &row_position), &height) in rows.iter().zip(&row_positions).zip(&heights) {
            let mut positions = vec![0; row.main_sizes.len()];
            spec.alignment
                .arrange(main_length, &row.main_sizes, main_gap, &mut positions);

            for (offset, index) in row.range.clone().enumerate() {
                let child = &children[index];
                let size = row.main_sizes[offset];
                let alignment = child
                    .attributes()
                    .alignment
                    .unwrap_or(spec.cross_alignment);
                let extent = cross_extent(
                    child.guide(cross),
                    index,
                    alignment,
                    height,
                    size,
                    diagnostics,
                );
                let shift = spec
                    .baseline_aligned
                    .then(|| baseline_shift(row, child.guide(cross), extent, height))
                    .flatten()
                    .unwrap_or_else(|| alignment.offset(height, extent));

                bounds[index] = main.rect(
                    main_start + positions[offset],
                    cross_start + row_position + shift,
                    size,
                    extent,
                );
            }
        }

        commit(children, bounds)
    }

    fn debug_name(&self) -> &str {
        "FlowLayout"
    }
}

/// Offset that puts the child's baseline on the row baseline, kept inside
/// the row.
fn baseline_shift(
    row: &RowMetrics,
    guide: &dyn SizeGuide,
    extent: i32,
    height: i32,
) -> Option<i32> {
    let row_baseline = row.baseline?;
    let own = guide.baseline(extent)?;
    Some((row_baseline - own).clamp(0, (height - extent).max(0)))
}

/// Guide of a flowing container.
///
/// Along the rows the minimum is the widest child (everything wrapped) and
/// `MinPreferred` the widest preferred child; the upper levels lay all
/// children out in one row. Across the rows, children are wrapped greedily
/// at their preferred lengths into the given row length and the row
/// heights summed.
pub struct FlowSizer<'a> {
    spec: &'a FlowSpec,
    container: &'a Container,
    children: &'a [Box<dyn LayoutChild>],
    orientation: Orientation,
}

impl FlowSizer<'_> {
    fn along(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        let main = self.spec.orientation;
        let value = |child: &dyn LayoutChild, level: GuideLevel| {
            child.guide(main).get(level, cross_size, cross_is_max).max(0)
        };
        match level {
            GuideLevel::Min | GuideLevel::MinPreferred => {
                let widest = if level == GuideLevel::Min {
                    GuideLevel::Min
                } else {
                    GuideLevel::Preferred
                };
                self.children
                    .iter()
                    .map(|child| value(child.as_ref(), widest))
                    .max()
                    .unwrap_or(0)
            }
            _ => {
                let sum = self
                    .children
                    .iter()
                    .fold(0, |total, child| {
                        saturating_extent(total, value(child.as_ref(), level))
                    });
                with_extent(sum, self.container.gaps(main, self.children.len()))
            }
        }
    }

    fn across(&self, level: GuideLevel, row_length: i32) -> i32 {
        let main = self.spec.orientation;
        let cross = main.opposite();
        let lengths: Sizes = self
            .children
            .iter()
            .map(|child| {
                child
                    .guide(main)
                    .get(GuideLevel::Preferred, UNBOUNDED, true)
                    .max(0)
            })
            .collect();
        let rows = greedy_rows(&lengths, self.container.gap(main), row_length);

        let total = rows.iter().fold(0, |total, range| {
            let height = range
                .clone()
                .map(|index| {
                    self.children[index]
                        .guide(cross)
                        .get(level, lengths[index].min(row_length), false)
                        .max(0)
                })
                .max()
                .unwrap_or(0);
            saturating_extent(total, height)
        });
        with_extent(total, self.container.gaps(cross, rows.len()))
    }
}

/// Packs `lengths` into rows no longer than `row_length`, opening a new
/// row only when the next child does not fit.
fn greedy_rows(lengths: &[i32], gap: i32, row_length: i32) -> SmallVec<[Range<usize>; 8]> {
    let mut rows = SmallVec::new();
    let mut start = 0;
    let mut current = 0i64;
    for (index, &length) in lengths.iter().enumerate() {
        if index > start && current + gap as i64 + length as i64 > row_length as i64 {
            rows.push(start..index);
            start = index;
            current = 0;
        }
        if index > start {
            current += gap as i64;
        }
        current += length as i64;
    }
    if start < lengths.len() {
        rows.push(start..lengths.len());
    }
    rows
}

impl SizeGuide for FlowSizer<'_> {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        let margin = self.container.margin_extent(self.orientation) as i64;
        let inner_cross = inner_length(
            cross_size,
            self.container.margin_extent(self.orientation.opposite()),
        );
        let content = if self.orientation == self.spec.orientation {
            self.along(level, inner_cross, cross_is_max)
        } else {
            self.across(level, inner_cross)
        };
        with_extent(content, margin)
    }
}

#[cfg(test)]
#[path = "../tests/flow_tests.rs"]
mod tests;
