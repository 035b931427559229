//! Row boundaries of a flowing container

use std::ops::Range;

use smallvec::SmallVec;

/// Per-gap row boundary flags.
///
/// `is_wrapped(i)` means a new row starts at child `i + 1`. Every mutation
/// that changes a flag bumps [`WrapState::revision`], which is what caches
/// derived from the state are keyed on.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WrapState {
    child_count: usize,
    wraps: Vec<bool>,
    revision: u64,
}

impl WrapState {
    /// A single row holding `child_count` children.
    pub fn new(child_count: usize) -> Self {
        Self {
            child_count,
            wraps: vec![false; child_count.saturating_sub(1)],
            revision: 0,
        }
    }

    /// Resizes for a new child count and clears every boundary.
    pub fn reset(&mut self, child_count: usize) {
        self.child_count = child_count;
        self.wraps.clear();
        self.wraps.resize(child_count.saturating_sub(1), false);
        self.revision += 1;
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Number of gaps between children.
    pub fn gap_count(&self) -> usize {
        self.wraps.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.wraps
    }

    pub fn is_wrapped(&self, gap: usize) -> bool {
        self.wraps.get(gap).copied().unwrap_or(false)
    }

    /// Sets the flag for `gap`. Returns true if it changed.
    pub fn set(&mut self, gap: usize, wrapped: bool) -> bool {
        match self.wraps.get_mut(gap) {
            Some(flag) if *flag != wrapped => {
                *flag = wrapped;
                self.revision += 1;
                true
            }
            _ => false,
        }
    }

    /// Replaces every flag at once. Ignored if the length does not match.
    pub fn assign(&mut self, wraps: &[bool]) -> bool {
        if wraps.len() != self.wraps.len() || wraps == self.wraps.as_slice() {
            return false;
        }
        self.wraps.copy_from_slice(wraps);
        self.revision += 1;
        true
    }

    pub fn wrap_all(&mut self) -> bool {
        self.fill(true)
    }

    pub fn unwrap_all(&mut self) -> bool {
        self.fill(false)
    }

    fn fill(&mut self, wrapped: bool) -> bool {
        if self.wraps.iter().all(|&flag| flag == wrapped) {
            return false;
        }
        self.wraps.iter_mut().for_each(|flag| *flag = wrapped);
        self.revision += 1;
        true
    }

    /// Gaps that currently hold a boundary, ascending.
    pub fn boundaries(&self) -> impl Iterator<Item = usize> + '_ {
        self.wraps
            .iter()
            .enumerate()
            .filter_map(|(gap, &wrapped)| wrapped.then_some(gap))
    }

    pub fn boundary_count(&self) -> usize {
        self.wraps.iter().filter(|&&wrapped| wrapped).count()
    }

    pub fn row_count(&self) -> usize {
        if self.child_count == 0 {
            0
        } else {
            self.boundary_count() + 1
        }
    }

    /// Child index ranges of each row, in order.
    pub fn rows(&self) -> SmallVec<[Range<usize>; 8]> {
        row_ranges(&self.wraps, self.child_count)
    }
}

pub(crate) fn row_ranges(wraps: &[bool], child_count: usize) -> SmallVec<[Range<usize>; 8]> {
    let mut rows = SmallVec::new();
    if child_count == 0 {
        return rows;
    }
    let mut start = 0;
    for (gap, &wrapped) in wraps.iter().enumerate() {
        if wrapped {
            rows.push(start..gap + 1);
            start = gap + 1;
        }
    }
    rows.push(start..child_count);
    rows
}
