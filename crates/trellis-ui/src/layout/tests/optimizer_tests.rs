use std::cell::Cell;
use std::rc::Rc;

use super::*;
use proptest::prelude::*;
use trellis_geometry::Rect;
use trellis_testing::{boxed, CollectingDiagnostics, TestWidget};
use trellis_ui_layout::{FixedGuide, SizeGuide};

fn hundreds(count: usize) -> Vec<Box<dyn LayoutChild>> {
    boxed((0..count).map(|_| TestWidget::preferred(100, 20)))
}

fn context<'a>(
    children: &'a [Box<dyn LayoutChild>],
    diagnostics: &'a CollectingDiagnostics,
) -> FlowContext<'a> {
    FlowContext {
        children,
        orientation: Orientation::Horizontal,
        gap: 0,
        cross_limit: 1000,
        diagnostics,
    }
}

#[test]
fn max_row_length_counts_gaps_inside_rows_only() {
    assert_eq!(max_row_length(&[false, true, false], &[10, 20, 30, 40], 5), 70 + 5);
    assert_eq!(max_row_length(&[], &[], 5), 0);
    assert_eq!(max_row_length(&[], &[12], 5), 12);
}

#[test]
fn unwrap_from_all_wrapped_converges_to_three_rows() {
    let children = hundreds(5);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(5);
    optimizer.wrap_all();

    let mut changes = Vec::new();
    loop {
        let change = optimizer.unwrap_next(&context, GuideLevel::Preferred, 1000, true, 250);
        if !change.is_changed() {
            break;
        }
        changes.push(change);
    }

    assert_eq!(changes, vec![WrapChange::Removed(0), WrapChange::Removed(2)]);
    assert_eq!(optimizer.state().boundaries().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(optimizer.state().row_count(), 3);
    assert!(optimizer.max_row_length(&context, GuideLevel::Preferred, 1000, true) <= 250);
}

#[test]
fn wrap_next_moves_before_inserting() {
    let children = hundreds(5);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(5);

    let mut step = || optimizer.wrap_next(&context, GuideLevel::Preferred, 1000, true);
    assert_eq!(step(), WrapChange::Inserted(0));
    assert_eq!(step(), WrapChange::Moved { from: 0, to: 1 });
    assert_eq!(step(), WrapChange::Inserted(2));
    assert_eq!(step(), WrapChange::Unchanged);
}

#[test]
fn unchanged_step_leaves_state_untouched() {
    let children = hundreds(3);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(3);
    optimizer.wrap_all();
    let before = optimizer.snapshot();

    let change = optimizer.wrap_next(&context, GuideLevel::Preferred, 1000, true);

    assert_eq!(change, WrapChange::Unchanged);
    assert_eq!(optimizer.snapshot(), before);
}

#[test]
fn removal_respects_the_limit() {
    let children = hundreds(2);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(2);
    optimizer.wrap_all();

    let change = optimizer.unwrap_next(&context, GuideLevel::Preferred, 1000, true, 150);
    assert_eq!(change, WrapChange::Unchanged);
    let change = optimizer.unwrap_next(&context, GuideLevel::Preferred, 1000, true, 200);
    assert_eq!(change, WrapChange::Removed(0));
}

#[test]
fn snapshot_restore_round_trips_boundaries() {
    let mut optimizer = FlowWrapOptimizer::new(4);
    let single_row = optimizer.snapshot();
    optimizer.wrap_all();
    optimizer.restore(&single_row);
    assert_eq!(optimizer.state().as_slice(), single_row.as_slice());
    assert!(optimizer.revision() > single_row.revision());

    optimizer.restore(&WrapState::new(7));
    assert_eq!(optimizer.child_count(), 4);
}

#[test]
fn rows_interpolate_within_their_length() {
    let children = hundreds(2);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(2);

    let rows = optimizer.row_heights(&context, 150, false).to_vec();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].range, 0..2);
    assert_eq!(rows[0].main_sizes.to_vec(), vec![75, 75]);
    assert_eq!(rows[0].height, LayoutSize::px(20));

    // Without fill, rows stop at MaxPreferred.
    let rows = optimizer.row_heights(&context, 300, false).to_vec();
    assert_eq!(rows[0].main_sizes.to_vec(), vec![100, 100]);
    let rows = optimizer.row_heights(&context, 300, true).to_vec();
    assert_eq!(rows[0].main_sizes.to_vec(), vec![150, 150]);
}

#[test]
fn rows_report_the_largest_baseline() {
    let children = boxed([
        TestWidget::new(FixedGuide::exact(10), FixedGuide::exact(20).with_baseline(14)),
        TestWidget::new(FixedGuide::exact(10), FixedGuide::exact(30).with_baseline(22)),
        TestWidget::new(FixedGuide::exact(10), FixedGuide::exact(5)),
    ]);
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(3);

    let rows = optimizer.row_heights(&context, 100, false);
    assert_eq!(rows[0].height.pixels, 30);
    assert_eq!(rows[0].baseline, Some(22));
}

/// Cross guide that counts how often it is asked.
struct CountingGuide {
    calls: Rc<Cell<usize>>,
}

impl SizeGuide for CountingGuide {
    fn get(&self, _level: GuideLevel, _cross_size: i32, _cross_is_max: bool) -> i32 {
        self.calls.set(self.calls.get() + 1);
        10
    }
}

struct CountingWidget {
    main: FixedGuide,
    cross: CountingGuide,
}

impl LayoutChild for CountingWidget {
    fn guide(&self, orientation: Orientation) -> &dyn SizeGuide {
        match orientation {
            Orientation::Horizontal => &self.main,
            Orientation::Vertical => &self.cross,
        }
    }

    fn place(&self, _bounds: Rect) {}
}

#[test]
fn row_cache_follows_state_and_inputs() {
    let counter = Rc::new(Cell::new(0));
    let children: Vec<Box<dyn LayoutChild>> = vec![Box::new(CountingWidget {
        main: FixedGuide::exact(10),
        cross: CountingGuide {
            calls: Rc::clone(&counter),
        },
    })];
    let diagnostics = CollectingDiagnostics::new();
    let context = context(&children, &diagnostics);
    let mut optimizer = FlowWrapOptimizer::new(1);
    let calls = || counter.get();

    optimizer.row_heights(&context, 100, false);
    let first = calls();
    assert!(first > 0);
    optimizer.row_heights(&context, 100, false);
    assert_eq!(calls(), first);

    optimizer.row_heights(&context, 90, false);
    assert!(calls() > first);
    let second = calls();
    optimizer.invalidate_rows();
    optimizer.row_heights(&context, 90, false);
    assert!(calls() > second);

    let third = calls();
    let spaced = FlowContext { gap: 5, ..context };
    optimizer.row_heights(&spaced, 90, false);
    assert!(calls() > third);

    let fourth = calls();
    let shorter = FlowContext {
        cross_limit: 40,
        ..spaced
    };
    optimizer.row_heights(&shorter, 90, false);
    assert!(calls() > fourth);
}

#[test]
fn reset_resizes_the_state() {
    let mut optimizer = FlowWrapOptimizer::new(3);
    optimizer.wrap_all();
    optimizer.reset(6);
    assert_eq!(optimizer.child_count(), 6);
    assert_eq!(optimizer.state().boundary_count(), 0);
}

fn exact_children(lengths: &[i32]) -> Vec<Box<dyn LayoutChild>> {
    boxed(
        lengths
            .iter()
            .map(|&length| TestWidget::new(FixedGuide::exact(length), FixedGuide::exact(10))),
    )
}

fn seeded(wraps: &[bool], count: usize) -> FlowWrapOptimizer {
    let mut state = WrapState::new(count);
    for (gap, &wrapped) in wraps.iter().take(state.gap_count()).enumerate() {
        state.set(gap, wrapped);
    }
    let mut optimizer = FlowWrapOptimizer::new(count);
    optimizer.restore(&state);
    optimizer
}

proptest! {
    #[test]
    fn wrap_next_never_worsens(
        lengths in prop::collection::vec(0i32..200, 1..12),
        wraps in prop::collection::vec(any::<bool>(), 11),
        gap in 0i32..10,
    ) {
        let children = exact_children(&lengths);
        let diagnostics = CollectingDiagnostics::new();
        let context = FlowContext { gap, ..context(&children, &diagnostics) };
        let mut optimizer = seeded(&wraps, lengths.len());
        let before = optimizer.snapshot();
        let longest = optimizer.max_row_length(&context, GuideLevel::Preferred, 1000, true);

        let change = optimizer.wrap_next(&context, GuideLevel::Preferred, 1000, true);

        if change.is_changed() {
            let after = optimizer.max_row_length(&context, GuideLevel::Preferred, 1000, true);
            prop_assert!(after < longest);
        } else {
            prop_assert_eq!(optimizer.snapshot(), before);
        }
    }

    #[test]
    fn unwrap_next_keeps_its_promises(
        lengths in prop::collection::vec(0i32..200, 1..12),
        wraps in prop::collection::vec(any::<bool>(), 11),
        limit in 0i64..1200,
    ) {
        let children = exact_children(&lengths);
        let diagnostics = CollectingDiagnostics::new();
        let context = context(&children, &diagnostics);
        let mut optimizer = seeded(&wraps, lengths.len());
        let before = optimizer.snapshot();
        let longest = optimizer.max_row_length(&context, GuideLevel::Preferred, 1000, true);

        let change = optimizer.unwrap_next(&context, GuideLevel::Preferred, 1000, true, limit);
        let after = optimizer.max_row_length(&context, GuideLevel::Preferred, 1000, true);

        match change {
            WrapChange::Unchanged => prop_assert_eq!(optimizer.snapshot(), before),
            WrapChange::Moved { .. } => prop_assert!(after < longest),
            WrapChange::Removed(_) => {
                prop_assert!(after <= limit);
                prop_assert_eq!(optimizer.state().row_count() + 1, before.row_count());
            }
            WrapChange::Inserted(_) => prop_assert!(false, "unwrap_next inserted a boundary"),
        }
    }
}
