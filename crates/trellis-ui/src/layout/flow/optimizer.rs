//! Incremental row balancing for flowing containers
//!
//! The optimizer never searches for a globally balanced layout. Each call
//! makes one local change (move, add or remove a single boundary) and only
//! when that change helps, so repeated calls converge quickly and a call
//! that finds nothing to do leaves the state untouched.

use std::ops::Range;

use trellis_ui_layout::{
    Diagnostics, GuideChecker, GuideLevel, Interpolator, LayoutChild, LayoutSize, Orientation,
    Sizes,
};

use super::wrap_state::{row_ranges, WrapState};

/// What the children look like to the optimizer for one pass.
pub struct FlowContext<'a> {
    pub children: &'a [Box<dyn LayoutChild>],
    /// The axis rows run along.
    pub orientation: Orientation,
    /// Gap between neighbours inside a row.
    pub gap: i32,
    /// Upper bound for the rows' cross extent, handed to main-axis guides
    /// when sizing rows.
    pub cross_limit: i32,
    pub diagnostics: &'a dyn Diagnostics,
}

impl FlowContext<'_> {
    /// Main-axis length of every child at `level`.
    pub fn lengths(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> Sizes {
        self.children
            .iter()
            .map(|child| {
                child
                    .guide(self.orientation)
                    .get(level, cross_size, cross_is_max)
                    .max(0)
            })
            .collect()
    }
}

/// Outcome of a single optimizer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapChange {
    /// Nothing improved; the wrap state is exactly as before.
    Unchanged,
    /// The boundary at gap `from` now sits at gap `to`.
    Moved { from: usize, to: usize },
    /// A boundary was added at the gap.
    Inserted(usize),
    /// The boundary at the gap was removed.
    Removed(usize),
}

impl WrapChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, WrapChange::Unchanged)
    }
}

/// Sizing of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// Children in the row.
    pub range: Range<usize>,
    /// Main-axis size of each child in the row.
    pub main_sizes: Sizes,
    /// Cross extent of the row.
    pub height: LayoutSize,
    /// Largest child baseline at the row's height.
    pub baseline: Option<i32>,
}

#[derive(Clone, Debug)]
struct RowCache {
    revision: u64,
    child_count: usize,
    row_length: i32,
    gap: i32,
    cross_limit: i32,
    fill: bool,
    rows: Vec<RowMetrics>,
}

/// Longest row for the given boundaries and child lengths.
pub fn max_row_length(wraps: &[bool], lengths: &[i32], gap: i32) -> i64 {
    let mut longest = 0i64;
    let mut current = 0i64;
    for (index, &length) in lengths.iter().enumerate() {
        current += length as i64;
        let row_ends = index + 1 == lengths.len() || wraps.get(index).copied().unwrap_or(false);
        if row_ends {
            longest = longest.max(current);
            current = 0;
        } else {
            current += gap as i64;
        }
    }
    longest
}

/// Owns the wrap state of a flow container across passes.
#[derive(Clone, Debug, Default)]
pub struct FlowWrapOptimizer {
    state: WrapState,
    rows: Option<RowCache>,
}

impl FlowWrapOptimizer {
    pub fn new(child_count: usize) -> Self {
        Self {
            state: WrapState::new(child_count),
            rows: None,
        }
    }

    pub fn state(&self) -> &WrapState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    pub fn child_count(&self) -> usize {
        self.state.child_count()
    }

    /// Starts over with a single row of `child_count` children.
    pub fn reset(&mut self, child_count: usize) {
        log::debug!(
            "flow: resetting wrap state ({} -> {} children)",
            self.state.child_count(),
            child_count
        );
        self.state.reset(child_count);
    }

    /// Copy of the wrap state, for [`FlowWrapOptimizer::restore`].
    pub fn snapshot(&self) -> WrapState {
        self.state.clone()
    }

    /// Puts back a snapshot taken from this optimizer. Snapshots taken for
    /// a different child count are ignored.
    pub fn restore(&mut self, snapshot: &WrapState) {
        self.state.assign(snapshot.as_slice());
    }

    /// Drops cached row heights, e.g. after child guides changed.
    pub fn invalidate_rows(&mut self) {
        self.rows = None;
    }

    pub fn wrap_all(&mut self) {
        self.state.wrap_all();
    }

    pub fn unwrap_all(&mut self) {
        self.state.unwrap_all();
    }

    /// Longest row at `level`.
    pub fn max_row_length(
        &self,
        context: &FlowContext<'_>,
        level: GuideLevel,
        cross_size: i32,
        cross_is_max: bool,
    ) -> i64 {
        let lengths = context.lengths(level, cross_size, cross_is_max);
        max_row_length(self.state.as_slice(), &lengths, context.gap)
    }

    /// One step towards shorter rows.
    ///
    /// First tries to move an existing boundary by one child, accepting the
    /// first move that shortens the longest row. Failing that, adds a
    /// boundary at the first gap that shortens it.
    pub fn wrap_next(
        &mut self,
        context: &FlowContext<'_>,
        level: GuideLevel,
        cross_size: i32,
        cross_is_max: bool,
    ) -> WrapChange {
        let lengths = context.lengths(level, cross_size, cross_is_max);
        let current = max_row_length(self.state.as_slice(), &lengths, context.gap);

        if let Some(change) = self.try_move(&lengths, context.gap, current) {
            return change;
        }

        let mut trial = self.state.as_slice().to_vec();
        for gap in 0..trial.len() {
            if trial[gap] {
                continue;
            }
            trial[gap] = true;
            let longest = max_row_length(&trial, &lengths, context.gap);
            trial[gap] = false;
            if longest < current {
                self.state.set(gap, true);
                log::trace!("flow: wrap at gap {gap}, longest row {current} -> {longest}");
                return WrapChange::Inserted(gap);
            }
        }

        WrapChange::Unchanged
    }

    /// One step towards fewer rows.
    ///
    /// First tries the same boundary moves as [`wrap_next`]. Failing that,
    /// removes the boundary whose removal leaves the shortest longest row,
    /// provided that row is no longer than `limit`. Ties go to the earliest
    /// gap.
    ///
    /// [`wrap_next`]: FlowWrapOptimizer::wrap_next
    pub fn unwrap_next(
        &mut self,
        context: &FlowContext<'_>,
        level: GuideLevel,
        cross_size: i32,
        cross_is_max: bool,
        limit: i64,
    ) -> WrapChange {
        let lengths = context.lengths(level, cross_size, cross_is_max);
        let current = max_row_length(self.state.as_slice(), &lengths, context.gap);

        if let Some(change) = self.try_move(&lengths, context.gap, current) {
            return change;
        }

        let mut trial = self.state.as_slice().to_vec();
        let mut best: Option<(usize, i64)> = None;
        for gap in 0..trial.len() {
            if !trial[gap] {
                continue;
            }
            trial[gap] = false;
            let longest = max_row_length(&trial, &lengths, context.gap);
            trial[gap] = true;
            if longest <= limit && best.map_or(true, |(_, shortest)| longest < shortest) {
                best = Some((gap, longest));
            }
        }

        match best {
            Some((gap, longest)) => {
                self.state.set(gap, false);
                log::trace!("flow: unwrap gap {gap}, longest row {current} -> {longest}");
                WrapChange::Removed(gap)
            }
            None => WrapChange::Unchanged,
        }
    }

    /// Moves the first boundary whose one-child shift shortens the longest
    /// row. Boundaries are scanned in ascending order, left shift before
    /// right shift.
    fn try_move(&mut self, lengths: &[i32], gap: i32, current: i64) -> Option<WrapChange> {
        let mut trial = self.state.as_slice().to_vec();
        let boundaries: Vec<usize> = self.state.boundaries().collect();
        for from in boundaries {
            let candidates = [from.checked_sub(1), Some(from + 1)];
            for to in candidates.into_iter().flatten() {
                if to >= trial.len() || trial[to] {
                    continue;
                }
                trial[from] = false;
                trial[to] = true;
                let longest = max_row_length(&trial, lengths, gap);
                trial[to] = false;
                trial[from] = true;
                if longest < current {
                    self.state.set(from, false);
                    self.state.set(to, true);
                    log::trace!("flow: move boundary {from} -> {to}, longest row {current} -> {longest}");
                    return Some(WrapChange::Moved { from, to });
                }
            }
        }
        None
    }

    /// Row sizing for rows `row_length` long, from the cache when neither
    /// the wrap state nor the inputs changed.
    ///
    /// Each row's children are interpolated against `row_length` between
    /// `Min` and `Max` when `fill` is set, `Min` and `MaxPreferred`
    /// otherwise. The row height is the tallest child at its assigned main
    /// size. Cross-axis guides are not part of the cache key; call
    /// [`FlowWrapOptimizer::invalidate_rows`] when they change.
    pub fn row_heights(
        &mut self,
        context: &FlowContext<'_>,
        row_length: i32,
        fill: bool,
    ) -> &[RowMetrics] {
        let fresh = self.rows.as_ref().map_or(false, |cache| {
            cache.revision == self.state.revision()
                && cache.child_count == context.children.len()
                && cache.row_length == row_length
                && cache.gap == context.gap
                && cache.cross_limit == context.cross_limit
                && cache.fill == fill
        });

        if !fresh {
            let rows = compute_rows(context, self.state.as_slice(), row_length, fill);
            log::debug!(
                "flow: recomputed {} rows at length {} (revision {})",
                rows.len(),
                row_length,
                self.state.revision()
            );
            self.rows = Some(RowCache {
                revision: self.state.revision(),
                child_count: context.children.len(),
                row_length,
                gap: context.gap,
                cross_limit: context.cross_limit,
                fill,
                rows,
            });
        }

        self.rows
            .as_ref()
            .map(|cache| cache.rows.as_slice())
            .unwrap_or(&[])
    }
}

fn compute_rows(
    context: &FlowContext<'_>,
    wraps: &[bool],
    row_length: i32,
    fill: bool,
) -> Vec<RowMetrics> {
    let interpolator = if fill {
        Interpolator::MIN_MAX
    } else {
        Interpolator::MIN_MAX_PREFERRED
    };
    let cross = context.orientation.opposite();

    row_ranges(wraps, context.children.len())
        .into_iter()
        .map(|range| {
            let children = &context.children[range.clone()];
            let gaps = context.gap as i64 * (children.len() as i64 - 1).max(0);
            let main_sizes = GuideChecker::new(context.cross_limit, true, context.diagnostics)
                .with_guides(
                    children
                        .iter()
                        .enumerate()
                        .map(|(offset, child)| (range.start + offset, child.guide(context.orientation))),
                )
                .with_fixed_extent(gaps)
                .resolve(interpolator, row_length as i64);

            let height = children
                .iter()
                .zip(main_sizes.iter())
                .map(|(child, &main)| child.guide(cross).get(GuideLevel::Preferred, main, false).max(0))
                .max()
                .unwrap_or(0);
            let baseline = children
                .iter()
                .filter_map(|child| child.guide(cross).baseline(height))
                .max();

            RowMetrics {
                range,
                main_sizes,
                height: LayoutSize::px(height),
                baseline,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/optimizer_tests.rs"]
mod tests;
