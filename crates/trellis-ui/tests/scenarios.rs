//! End-to-end layout scenarios through the public API.

use std::cell::RefCell;

use trellis_testing::{assert_bounds, assert_total_length, boxed, CollectingDiagnostics, TestWidget};
use trellis_ui::*;

fn hundreds(count: usize) -> Vec<Box<dyn LayoutChild>> {
    boxed((0..count).map(|_| TestWidget::preferred(100, 20)))
}

#[test]
fn row_of_three_leaves_space_at_the_end() {
    let children = boxed([
        TestWidget::preferred(40, 20),
        TestWidget::preferred(60, 20),
        TestWidget::preferred(50, 20),
    ]);
    let container = Container::new(Size::new(300, 50));
    let mut layout = DirectionLayout::default();

    let result = layout.layout(&container, &children, &LogDiagnostics);

    assert_total_length(&result, Orientation::Horizontal, 150, "row");
    assert_eq!(result.bounds(0), Some(Rect::new(0, 0, 40, 20)));
}

#[test]
fn justified_row_spans_the_container() {
    let children = boxed([
        TestWidget::preferred(40, 20),
        TestWidget::preferred(60, 20),
        TestWidget::preferred(50, 20),
    ]);
    let container = Container::new(Size::new(180, 50)).with_padding(Size::new(30, 0));
    let mut layout = DirectionLayout::new(DirectionSpec::new().alignment(Alignment::Justify));

    let result = layout.layout(&container, &children, &LogDiagnostics);

    assert_total_length(&result, Orientation::Horizontal, 180 - 2 * 30, "justify");
    assert_eq!(result.bounds(0).map(|r| r.x), Some(0));
    assert_eq!(result.bounds(2).map(|r| r.right()), Some(180));
}

#[test]
fn flow_of_five_settles_on_three_rows() {
    let children = hundreds(5);
    let container = Container::new(Size::new(250, 200));
    let mut layout = FlowLayout::default();

    let first = layout.layout(&container, &children, &LogDiagnostics);
    let second = layout.layout(&container, &children, &LogDiagnostics);

    assert_eq!(layout.state().row_count(), 3);
    assert_eq!(layout.state().boundary_count(), 2);
    assert_eq!(first, second);
}

#[test]
fn unwrapping_from_one_child_per_row_reaches_three_rows() {
    let children = hundreds(5);
    let diagnostics = CollectingDiagnostics::new();
    let context = FlowContext {
        children: &children,
        orientation: Orientation::Horizontal,
        gap: 0,
        cross_limit: 200,
        diagnostics: &diagnostics,
    };
    let mut optimizer = FlowWrapOptimizer::new(children.len());
    optimizer.wrap_all();

    let mut steps = 0;
    while optimizer
        .unwrap_next(&context, GuideLevel::Preferred, 200, true, 250)
        .is_changed()
    {
        steps += 1;
        assert!(steps < 10, "unwrapping did not converge");
    }

    assert_eq!(optimizer.state().row_count(), 3);
    assert!(optimizer.max_row_length(&context, GuideLevel::Preferred, 200, true) <= 250);
}

#[test]
fn flow_sizer_predicts_the_wrapped_height() {
    let children = hundreds(5);
    let container = Container::new(Size::new(250, 200));
    let mut layout = FlowLayout::default();

    let height = layout
        .sizer(&container, &children, Orientation::Vertical)
        .get(GuideLevel::Preferred, 250, false);
    let result = layout.layout(&container, &children, &LogDiagnostics);

    let bottom = result.placements.iter().map(|p| p.bounds.bottom()).max();
    assert_eq!(height, 60);
    assert_eq!(bottom, Some(height));
}

#[test]
fn second_center_is_reported_once_through_a_closure_sink() {
    let children = boxed([
        TestWidget::preferred(10, 10),
        TestWidget::preferred(50, 20).with_attributes(ChildAttributes::new().region(Region::Top)),
        TestWidget::preferred(10, 10)
            .with_attributes(ChildAttributes::new().region(Region::Center)),
    ]);
    let container = Container::new(Size::new(200, 100));
    let seen = RefCell::new(Vec::new());
    let sink = |diagnostic: LayoutDiagnostic| seen.borrow_mut().push(diagnostic);
    let mut layout = RegionLayout::default();

    let result = layout.layout(&container, &children, &sink);

    assert_eq!(
        seen.into_inner(),
        vec![LayoutDiagnostic::DuplicateCenter { index: 2, first: 0 }]
    );
    assert_bounds(
        &result,
        &[
            Rect::new(0, 20, 200, 80),
            Rect::new(0, 0, 200, 20),
            Rect::new(0, 0, 0, 0),
        ],
        "region",
    );
}

#[test]
fn absolute_children_ignore_each_other() {
    let pinned = |x: i32, y: i32| {
        TestWidget::preferred(30, 30).with_attributes(
            ChildAttributes::new()
                .horizontal(AxisAnchor::default().lead(Offset::near(x)).size(30))
                .vertical(AxisAnchor::default().lead(Offset::near(y)).size(30)),
        )
    };
    let children = boxed([pinned(10, 10), pinned(20, 20)]);
    let container = Container::new(Size::new(100, 100));
    let diagnostics = CollectingDiagnostics::new();

    let result = AbsoluteLayout::new().layout(&container, &children, &diagnostics);

    assert_bounds(
        &result,
        &[Rect::new(10, 10, 30, 30), Rect::new(20, 20, 30, 30)],
        "absolute",
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn nested_containers_negotiate_through_sizers() {
    // A column holding a flow: the column asks the flow for its height at
    // the column's width, then lays the flow out in the slot it gets.
    let items = hundreds(5);
    let flow_container = Container::new(Size::new(0, 0));
    let flow = FlowLayout::default();
    let flow_height = flow
        .sizer(&flow_container, &items, Orientation::Vertical)
        .get(GuideLevel::Preferred, 250, false);

    let column = boxed([
        TestWidget::exact(250, flow_height),
        TestWidget::preferred(250, 40),
    ]);
    let mut layout = DirectionLayout::new(DirectionSpec::new().direction(Direction::TopToBottom));
    let result = layout.layout(
        &Container::new(Size::new(250, 300)),
        &column,
        &CollectingDiagnostics::new(),
    );

    assert_eq!(result.bounds(0), Some(Rect::new(0, 0, 250, 60)));
    assert_eq!(result.bounds(1), Some(Rect::new(0, 60, 250, 40)));
}
