use super::{distribute, Arrangement, SpaceSpreader};
use crate::alignment::Alignment;

fn arrange(alignment: Alignment, total: i32, sizes: &[i32], gap: i32) -> Vec<i32> {
    let mut positions = vec![0; sizes.len()];
    alignment.arrange(total, sizes, gap, &mut positions);
    positions
}

#[test]
fn begin_packs_from_leading_edge() {
    assert_eq!(arrange(Alignment::Begin, 300, &[40, 60, 50], 0), vec![0, 40, 100]);
    assert_eq!(arrange(Alignment::Begin, 300, &[40, 60, 50], 5), vec![0, 45, 110]);
}

#[test]
fn end_packs_against_trailing_edge() {
    assert_eq!(arrange(Alignment::End, 300, &[40, 60, 50], 0), vec![150, 190, 250]);
}

#[test]
fn end_does_not_push_overflowing_content_before_origin() {
    assert_eq!(arrange(Alignment::End, 100, &[80, 80], 0), vec![0, 80]);
}

#[test]
fn center_spreads_remainder_over_later_slots() {
    let positions = arrange(Alignment::Center, 300, &[40, 60, 50], 0);
    assert_eq!(positions, vec![37, 114, 212]);
    // The trailing slot receives what is left: 300 - (212 + 50) = 38.
    assert_eq!(300 - (positions[2] + 50), 38);
}

#[test]
fn justify_fills_interior_gaps() {
    assert_eq!(arrange(Alignment::Justify, 100, &[10, 10, 10], 0), vec![0, 45, 90]);
    assert_eq!(arrange(Alignment::Justify, 180, &[33, 50, 37], 30), vec![0, 63, 143]);
}

#[test]
fn justify_centers_a_single_item() {
    assert_eq!(arrange(Alignment::Justify, 30, &[10], 0), vec![10]);
}

#[test]
fn justify_absorbs_rounding_overshoot_in_gaps() {
    // One pixel too many after rounding: the last gap gives it back.
    let positions = arrange(Alignment::Justify, 100, &[34, 34, 34], 0);
    assert_eq!(positions, vec![0, 34, 68]);
    let positions = arrange(Alignment::Justify, 105, &[34, 34, 34], 2);
    assert_eq!(positions, vec![0, 36, 71]);
    assert_eq!(positions[2] + 34, 105);
}

#[test]
fn spreader_hands_out_everything() {
    let mut spreader = SpaceSpreader::new(10, 3);
    let shares: Vec<i32> = (0..4).map(|_| spreader.next_share()).collect();
    assert_eq!(shares, vec![3, 3, 4, 0]);
    assert_eq!(spreader.remaining(), 0);
}

#[test]
fn empty_input_is_a_no_op() {
    let mut positions: Vec<i32> = Vec::new();
    Alignment::Center.arrange(100, &[], 4, &mut positions);
    assert!(positions.is_empty());
}

#[test]
fn distribute_reports_leading_offset_and_gap_shares() {
    let (start, mut spreader) = distribute(Alignment::Justify, 7, 3, 0);
    assert_eq!(start, 0);
    assert_eq!(spreader.next_share(), 3);
    assert_eq!(spreader.next_share(), 4);

    let (start, spreader) = distribute(Alignment::End, 20, 2, 4);
    assert_eq!(start, 20);
    assert_eq!(spreader.remaining(), 0);

    let (start, _) = distribute(Alignment::Center, 50, 0, 0);
    assert_eq!(start, 0);
}
