//! Matching an available length against the guide ladder
//!
//! The [`Interpolator`] walks a sub-range of the ladder, asks a [`Checker`]
//! for the sizes at each level and stops at the first level whose aggregate
//! reaches the available length. The result blends the two bracketing levels
//! linearly. Each level is evaluated at most once, so a pass costs at most
//! five child-size computations per axis.

use smallvec::SmallVec;

use crate::diagnostics::{Diagnostics, LayoutDiagnostic};
use crate::guide::{GuideLevel, SizeGuide};

/// One size per child, in child order.
pub type Sizes = SmallVec<[i32; 8]>;

/// Supplies sizes at a guide level and reduces them to a total length.
pub trait Checker {
    type Values: Clone;

    /// Sizes at `level`. Called at most once per level, in ladder order.
    fn values_at(&mut self, level: GuideLevel) -> Self::Values;

    /// Total length the values occupy.
    fn aggregate(&self, values: &Self::Values) -> i64;
}

/// Values that can be mixed between two bracketing levels.
pub trait Blend: Sized {
    fn blend(lower: &Self, upper: &Self, proportion: f64) -> Self;
}

/// `lower + round(proportion * (upper - lower))`, saturated to `i32`.
#[inline]
pub fn blend_value(lower: i32, upper: i32, proportion: f64) -> i32 {
    let delta = upper as i64 - lower as i64;
    let value = lower as i64 + (proportion * delta as f64).round() as i64;
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Blend for i32 {
    fn blend(lower: &Self, upper: &Self, proportion: f64) -> Self {
        blend_value(*lower, *upper, proportion)
    }
}

impl Blend for i64 {
    fn blend(lower: &Self, upper: &Self, proportion: f64) -> Self {
        lower + (proportion * (upper - lower) as f64).round() as i64
    }
}

impl Blend for Sizes {
    fn blend(lower: &Self, upper: &Self, proportion: f64) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        lower
            .iter()
            .zip(upper.iter())
            .map(|(&lo, &hi)| blend_value(lo, hi, proportion))
            .collect()
    }
}

impl Blend for Vec<i32> {
    fn blend(lower: &Self, upper: &Self, proportion: f64) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        lower
            .iter()
            .zip(upper.iter())
            .map(|(&lo, &hi)| blend_value(lo, hi, proportion))
            .collect()
    }
}

/// Where an available length fell on the ladder.
///
/// `lower_level` and `upper_level` are equal when the length was at or below
/// the lowest level or beyond the highest; otherwise they are adjacent.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation<T> {
    pub lower_level: GuideLevel,
    pub upper_level: GuideLevel,
    /// Position between the two levels, always in `[0, 1]`.
    pub proportion: f64,
    pub lower: T,
    pub upper: T,
}

impl<T: Clone> Interpolation<T> {
    fn exact(level: GuideLevel, values: T) -> Self {
        Self {
            lower_level: level,
            upper_level: level,
            proportion: 0.0,
            lower: values.clone(),
            upper: values,
        }
    }

    /// Returns true if the result sits exactly on one level.
    pub fn is_exact(&self) -> bool {
        self.lower_level == self.upper_level
    }
}

impl<T: Blend> Interpolation<T> {
    /// Blends the bracketing values at the computed proportion.
    pub fn resolve(&self) -> T {
        T::blend(&self.lower, &self.upper, self.proportion)
    }
}

/// Finds where an available length falls on a sub-range of the ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interpolator {
    lower: GuideLevel,
    upper: GuideLevel,
}

impl Interpolator {
    pub const MIN_MAX: Interpolator = Interpolator {
        lower: GuideLevel::Min,
        upper: GuideLevel::Max,
    };

    pub const MIN_PREFERRED: Interpolator = Interpolator {
        lower: GuideLevel::Min,
        upper: GuideLevel::Preferred,
    };

    pub const MIN_MAX_PREFERRED: Interpolator = Interpolator {
        lower: GuideLevel::Min,
        upper: GuideLevel::MaxPreferred,
    };

    /// Creates an interpolator bracketed by `lower` and `upper`. The bounds
    /// are swapped if given in the wrong order.
    pub fn new(lower: GuideLevel, upper: GuideLevel) -> Self {
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }

    pub fn lower(&self) -> GuideLevel {
        self.lower
    }

    pub fn upper(&self) -> GuideLevel {
        self.upper
    }

    /// Brackets `available` between two adjacent levels.
    ///
    /// A level whose aggregate is smaller than the previous one is treated
    /// as equal to it, so the proportion stays in `[0, 1]` even for broken
    /// guides.
    pub fn interpolate<C: Checker>(&self, available: i64, checker: &mut C) -> Interpolation<C::Values> {
        let mut lower_level = self.lower;
        let mut lower_values = checker.values_at(lower_level);
        let mut lower_aggregate = checker.aggregate(&lower_values);

        if available <= lower_aggregate {
            return Interpolation::exact(lower_level, lower_values);
        }

        for level in GuideLevel::range(self.lower, self.upper).skip(1) {
            let values = checker.values_at(level);
            let mut aggregate = checker.aggregate(&values);
            if aggregate < lower_aggregate {
                log::debug!(
                    "interpolator: aggregate at {level} ({aggregate}) below {lower_level} ({lower_aggregate})"
                );
                aggregate = lower_aggregate;
            }

            if available <= aggregate {
                let span = aggregate - lower_aggregate;
                let proportion = if span == 0 {
                    0.0
                } else {
                    ((available - lower_aggregate) as f64 / span as f64).clamp(0.0, 1.0)
                };
                return Interpolation {
                    lower_level,
                    upper_level: level,
                    proportion,
                    lower: lower_values,
                    upper: values,
                };
            }

            lower_level = level;
            lower_values = values;
            lower_aggregate = aggregate;
        }

        Interpolation::exact(lower_level, lower_values)
    }
}

/// The standard checker over a list of child guides.
///
/// Sizes are one guide value per entry. Negative values become 0 and values
/// below the previously evaluated level are raised to it; both are reported.
/// The aggregate is the sum plus a fixed extent such as the gaps between
/// children.
pub struct GuideChecker<'a> {
    entries: SmallVec<[(usize, &'a dyn SizeGuide); 8]>,
    cross_size: i32,
    cross_is_max: bool,
    fixed_extent: i64,
    previous: Option<(GuideLevel, Sizes)>,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> GuideChecker<'a> {
    pub fn new(cross_size: i32, cross_is_max: bool, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            entries: SmallVec::new(),
            cross_size,
            cross_is_max,
            fixed_extent: 0,
            previous: None,
            diagnostics,
        }
    }

    /// Adds the guide of the child at `index`.
    pub fn push(&mut self, index: usize, guide: &'a dyn SizeGuide) {
        self.entries.push((index, guide));
    }

    pub fn with_guides<I>(mut self, guides: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a dyn SizeGuide)>,
    {
        self.entries.extend(guides);
        self
    }

    /// Adds a constant to every aggregate.
    pub fn with_fixed_extent(mut self, extent: i64) -> Self {
        self.fixed_extent = extent;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpolates against `available` and returns the blended sizes.
    pub fn resolve(mut self, interpolator: Interpolator, available: i64) -> Sizes {
        interpolator.interpolate(available, &mut self).resolve()
    }
}

impl Checker for GuideChecker<'_> {
    type Values = Sizes;

    fn values_at(&mut self, level: GuideLevel) -> Sizes {
        let previous = self
            .previous
            .as_ref()
            .filter(|(previous_level, _)| *previous_level < level)
            .map(|(_, values)| values);

        let mut values = Sizes::with_capacity(self.entries.len());
        for (position, (index, guide)) in self.entries.iter().enumerate() {
            let mut value = guide.get(level, self.cross_size, self.cross_is_max);
            if value < 0 {
                self.diagnostics.report(LayoutDiagnostic::NegativeGuide {
                    index: *index,
                    level,
                    value,
                });
                value = 0;
            }
            if let Some(&floor) = previous.and_then(|values| values.get(position)) {
                if value < floor {
                    self.diagnostics.report(LayoutDiagnostic::NonMonotoneGuide {
                        index: *index,
                        level,
                        value,
                        previous: floor,
                    });
                    value = floor;
                }
            }
            values.push(value);
        }

        self.previous = Some((level, values.clone()));
        values
    }

    fn aggregate(&self, values: &Sizes) -> i64 {
        values.iter().map(|&value| value as i64).sum::<i64>() + self.fixed_extent
    }
}

#[cfg(test)]
#[path = "tests/interpolator_tests.rs"]
mod tests;
