//! Assertion helpers for layout results

use trellis_geometry::Rect;
use trellis_ui_layout::{LayoutResult, Orientation};

/// Assert that the placements carry exactly the expected rectangles, in
/// child order.
pub fn assert_bounds(result: &LayoutResult, expected: &[Rect], msg: &str) {
    let actual: Vec<Rect> = result.placements.iter().map(|p| p.bounds).collect();
    assert_eq!(
        actual, expected,
        "{}: placements differ (actual left, expected right)",
        msg
    );
}

/// Assert that the extents along `orientation` sum to `expected`.
pub fn assert_total_length(
    result: &LayoutResult,
    orientation: Orientation,
    expected: i32,
    msg: &str,
) {
    let total: i32 = result
        .placements
        .iter()
        .map(|p| orientation.length(p.bounds.size()))
        .sum();
    assert_eq!(
        total, expected,
        "{}: expected total {:?} length {}, got {}",
        msg, orientation, expected, total
    );
}

/// Assert that no two placed children overlap along `orientation`.
pub fn assert_no_overlap(result: &LayoutResult, orientation: Orientation, msg: &str) {
    let mut spans: Vec<(i32, i32)> = result
        .placements
        .iter()
        .map(|p| orientation.span(p.bounds))
        .filter(|(_, length)| *length > 0)
        .collect();
    spans.sort_unstable();
    for pair in spans.windows(2) {
        let (start, length) = pair[0];
        assert!(
            start + length <= pair[1].0,
            "{}: span {:?} overlaps {:?}",
            msg,
            pair[0],
            pair[1]
        );
    }
}

/// Assert that every placement lies inside `area`.
pub fn assert_within(result: &LayoutResult, area: Rect, msg: &str) {
    for placement in &result.placements {
        let bounds = placement.bounds;
        assert!(
            bounds.x >= area.x
                && bounds.y >= area.y
                && bounds.right() <= area.right()
                && bounds.bottom() <= area.bottom(),
            "{}: child {} at {:?} escapes {:?}",
            msg,
            placement.index,
            bounds,
            area
        );
    }
}
