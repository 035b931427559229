use super::*;
use trellis_geometry::{EdgeInsets, Size};
use trellis_testing::{assert_bounds, assert_no_overlap, boxed, CollectingDiagnostics, TestWidget};
use trellis_ui_layout::{FixedGuide, UNBOUNDED};

fn row_children() -> Vec<Box<dyn LayoutChild>> {
    boxed([
        TestWidget::preferred(40, 20),
        TestWidget::preferred(60, 20),
        TestWidget::preferred(50, 20),
    ])
}

#[test]
fn begin_packs_children_at_preferred_size() {
    let children = row_children();
    let container = Container::new(Size::new(300, 50));
    let diagnostics = CollectingDiagnostics::new();
    let mut layout = DirectionLayout::default();

    let result = layout.layout(&container, &children, &diagnostics);

    assert_bounds(
        &result,
        &[
            Rect::new(0, 0, 40, 20),
            Rect::new(40, 0, 60, 20),
            Rect::new(100, 0, 50, 20),
        ],
        "begin",
    );
    let last = result.bounds(2).unwrap();
    assert_eq!(300 - last.right(), 150);
    assert!(diagnostics.is_empty());
}

#[test]
fn justify_fills_the_container_exactly() {
    let children = row_children();
    let container = Container::new(Size::new(180, 50)).with_padding(Size::new(30, 0));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().alignment(Alignment::Justify));

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    // Preferred 150 plus 60 of gaps does not fit in 180: each child gives
    // up the same share of its Preferred - Min slack.
    let widths: Vec<i32> = result.placements.iter().map(|p| p.bounds.width).collect();
    assert_eq!(widths, vec![32, 48, 40]);
    let xs: Vec<i32> = result.placements.iter().map(|p| p.bounds.x).collect();
    assert_eq!(xs, vec![0, 62, 140]);
    assert_eq!(result.bounds(2).unwrap().right(), 180);
    assert_no_overlap(&result, Orientation::Horizontal, "justify");
}

#[test]
fn reversed_direction_starts_at_trailing_edge() {
    let children = row_children();
    let container = Container::new(Size::new(300, 50));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().direction(Direction::RightToLeft));

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    let xs: Vec<i32> = result.placements.iter().map(|p| p.bounds.x).collect();
    assert_eq!(xs, vec![260, 200, 150]);
}

#[test]
fn vertical_direction_uses_heights() {
    let children = boxed([TestWidget::preferred(10, 30), TestWidget::preferred(10, 25)]);
    let container = Container::new(Size::new(40, 200)).with_padding(Size::new(0, 5));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().direction(Direction::TopToBottom));

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    assert_bounds(
        &result,
        &[Rect::new(0, 0, 10, 30), Rect::new(0, 35, 10, 25)],
        "column",
    );
}

#[test]
fn child_alignment_overrides_cross_alignment() {
    use trellis_ui_layout::ChildAttributes;

    let children = boxed([
        TestWidget::preferred(40, 20),
        TestWidget::preferred(60, 20)
            .with_attributes(ChildAttributes::new().alignment(Alignment::End)),
        TestWidget::preferred(50, 20)
            .with_attributes(ChildAttributes::new().alignment(Alignment::Justify)),
    ]);
    let container = Container::new(Size::new(300, 50));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().cross_alignment(Alignment::Center));

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    assert_eq!(result.bounds(0).unwrap().y, 15);
    assert_eq!(result.bounds(1).unwrap().y, 30);
    let stretched = result.bounds(2).unwrap();
    assert_eq!((stretched.y, stretched.height), (0, 50));
}

#[test]
fn stretch_stops_at_cross_max() {
    let children = boxed([TestWidget::new(
        FixedGuide::exact(20),
        FixedGuide::new(5, 10, 30),
    )]);
    let container = Container::new(Size::new(100, 80));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().cross_alignment(Alignment::Justify));

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    assert_eq!(result.bounds(0).unwrap().height, 30);
}

#[test]
fn margin_offsets_content() {
    let children = row_children();
    let container = Container::new(Size::new(300, 50)).with_margin(EdgeInsets::uniform(5));
    let mut layout = DirectionLayout::default();

    let result = layout.layout(&container, &children, &CollectingDiagnostics::new());

    assert_eq!(result.bounds(0), Some(Rect::new(5, 5, 40, 20)));
    assert_eq!(result.bounds(1), Some(Rect::new(45, 5, 60, 20)));
}

#[test]
fn repeated_layout_is_stable() {
    let children = row_children();
    let container = Container::new(Size::new(123, 40)).with_padding(Size::new(7, 0));
    let mut layout =
        DirectionLayout::new(DirectionSpec::new().alignment(Alignment::Center));
    let diagnostics = CollectingDiagnostics::new();

    let first = layout.layout(&container, &children, &diagnostics);
    let second = layout.layout(&container, &children, &diagnostics);

    assert_eq!(first, second);
}

#[test]
fn empty_container_places_nothing() {
    let children: Vec<Box<dyn LayoutChild>> = Vec::new();
    let mut layout = DirectionLayout::default();
    let result = layout.layout(
        &Container::new(Size::new(100, 100)),
        &children,
        &CollectingDiagnostics::new(),
    );
    assert!(result.placements.is_empty());
}

#[test]
fn sizer_sums_along_and_maxes_across() {
    let children = boxed([
        TestWidget::preferred(40, 20),
        TestWidget::preferred(60, 30),
        TestWidget::preferred(50, 10),
    ]);
    let container = Container::new(Size::new(0, 0))
        .with_margin(EdgeInsets::symmetric(5, 2))
        .with_padding(Size::new(4, 0));
    let layout = DirectionLayout::default();

    let width = layout.sizer(&container, &children, Orientation::Horizontal);
    assert_eq!(width.get(GuideLevel::Preferred, UNBOUNDED, true), 150 + 8 + 10);
    assert_eq!(width.get(GuideLevel::Min, UNBOUNDED, true), 8 + 10);
    assert_eq!(width.get(GuideLevel::Max, UNBOUNDED, true), UNBOUNDED);

    let height = layout.sizer(&container, &children, Orientation::Vertical);
    assert_eq!(height.get(GuideLevel::Preferred, 200, false), 30 + 4);
}

#[test]
fn sizer_reports_tallest_baseline() {
    let children = boxed([
        TestWidget::new(FixedGuide::exact(10), FixedGuide::exact(20).with_baseline(12)),
        TestWidget::new(FixedGuide::exact(10), FixedGuide::exact(20).with_baseline(15)),
    ]);
    let container = Container::new(Size::new(0, 0)).with_margin(EdgeInsets::uniform(3));
    let layout = DirectionLayout::default();

    let height = layout.sizer(&container, &children, Orientation::Vertical);
    assert_eq!(height.baseline(26), Some(18));
    let width = layout.sizer(&container, &children, Orientation::Horizontal);
    assert_eq!(width.baseline(26), None);
}
