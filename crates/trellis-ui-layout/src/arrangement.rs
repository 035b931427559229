//! Distribution of leftover space along an axis

use crate::alignment::Alignment;

/// Trait implemented by strategies that position a run of items on an axis.
pub trait Arrangement {
    /// Computes the position of each item given the available length, the
    /// item sizes and the fixed gap inserted between neighbours.
    fn arrange(&self, total_size: i32, sizes: &[i32], gap: i32, out_positions: &mut [i32]);
}

/// Hands out leftover space one slot at a time.
///
/// The share of each slot is recomputed from what is still left, so the
/// integer remainder ends up spread over the last slots instead of piling up
/// in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceSpreader {
    remaining: i32,
    slots: i32,
}

impl SpaceSpreader {
    pub fn new(extra: i32, slots: usize) -> Self {
        Self {
            remaining: extra,
            slots: slots as i32,
        }
    }

    /// Takes the share for the next slot. Returns 0 once every slot is served.
    pub fn next_share(&mut self) -> i32 {
        if self.slots <= 0 {
            return 0;
        }
        let share = self.remaining / self.slots;
        self.remaining -= share;
        self.slots -= 1;
        share
    }

    /// Space not yet handed out.
    pub fn remaining(&self) -> i32 {
        self.remaining
    }
}

fn content_length(sizes: &[i32], gap: i32) -> i64 {
    let sum: i64 = sizes.iter().map(|&size| size as i64).sum();
    sum + gap as i64 * sizes.len().saturating_sub(1) as i64
}

fn fill_positions(
    start: i32,
    gap: i32,
    spreader: &mut SpaceSpreader,
    sizes: &[i32],
    out_positions: &mut [i32],
) {
    let mut cursor = start;
    for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
        *position = cursor;
        cursor = cursor.saturating_add(*size);
        if index + 1 < sizes.len() {
            cursor = cursor.saturating_add(gap + spreader.next_share());
        }
    }
}

/// Splits `extra` leftover pixels for `count` items under `alignment`.
///
/// Returns the offset of the first item and a spreader that hands out the
/// additional space for each following gap. Overshoot (negative `extra`)
/// is only absorbed by `Justify`, and never below zero-length gaps of
/// `gap` pixels.
pub fn distribute(alignment: Alignment, extra: i32, count: usize, gap: i32) -> (i32, SpaceSpreader) {
    let none = SpaceSpreader::new(0, 0);
    match alignment {
        _ if count == 0 => (0, none),
        Alignment::Begin => (0, none),
        Alignment::End => (extra.max(0), none),
        Alignment::Center => {
            let mut spreader = SpaceSpreader::new(extra.max(0), count + 1);
            let start = spreader.next_share();
            (start, spreader)
        }
        Alignment::Justify if count == 1 => ((extra / 2).max(0), none),
        Alignment::Justify => {
            // Gaps may give back rounding overshoot but never go negative.
            let floor = -(gap.max(0) as i64 * (count as i64 - 1));
            let extra = (extra as i64).max(floor) as i32;
            (0, SpaceSpreader::new(extra, count - 1))
        }
    }
}

impl Arrangement for Alignment {
    fn arrange(&self, total_size: i32, sizes: &[i32], gap: i32, out_positions: &mut [i32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        if sizes.is_empty() {
            return;
        }

        let extra = (total_size as i64 - content_length(sizes, gap))
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        let (start, mut spreader) = distribute(*self, extra, sizes.len(), gap);
        fill_positions(start, gap, &mut spreader, sizes, out_positions);
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
