//! Size policies: the five-level guide ladder

use std::fmt;

/// Pixel value meaning "no upper bound".
pub const UNBOUNDED: i32 = i32::MAX;

/// One rung of the size-policy ladder, strictly ordered from `Min` to `Max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GuideLevel {
    Min,
    MinPreferred,
    Preferred,
    MaxPreferred,
    Max,
}

impl GuideLevel {
    /// Every level in ladder order.
    pub const ALL: [GuideLevel; 5] = [
        GuideLevel::Min,
        GuideLevel::MinPreferred,
        GuideLevel::Preferred,
        GuideLevel::MaxPreferred,
        GuideLevel::Max,
    ];

    /// Position on the ladder, `Min` is 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next level up, `None` above `Max`.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The next level down, `None` below `Min`.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Levels from `lower` to `upper`, both inclusive, in ladder order.
    /// Empty if `lower` is above `upper`.
    pub fn range(lower: GuideLevel, upper: GuideLevel) -> impl Iterator<Item = GuideLevel> {
        Self::ALL
            .into_iter()
            .filter(move |level| *level >= lower && *level <= upper)
    }
}

impl fmt::Display for GuideLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuideLevel::Min => "min",
            GuideLevel::MinPreferred => "min-preferred",
            GuideLevel::Preferred => "preferred",
            GuideLevel::MaxPreferred => "max-preferred",
            GuideLevel::Max => "max",
        };
        f.write_str(name)
    }
}

/// Per-widget, per-axis size policy.
///
/// `cross_size` is the widget's extent on the other axis. When
/// `cross_is_max` is true it is only an upper bound the widget may end up
/// below; otherwise it is the length actually assigned.
///
/// Implementations return [`UNBOUNDED`] from `Max` when there is no upper
/// bound, never return negative values, and are non-decreasing along the
/// ladder for a fixed cross size. The layout strategies assume this and only
/// clamp (with a diagnostic) when an implementation gets it wrong.
pub trait SizeGuide {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32;

    /// Distance from the leading edge to the content baseline when laid out
    /// at `size` along the cross axis of a text line.
    fn baseline(&self, _size: i32) -> Option<i32> {
        None
    }
}

impl<G: SizeGuide + ?Sized> SizeGuide for &G {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        (**self).get(level, cross_size, cross_is_max)
    }

    fn baseline(&self, size: i32) -> Option<i32> {
        (**self).baseline(size)
    }
}

impl<G: SizeGuide + ?Sized> SizeGuide for Box<G> {
    fn get(&self, level: GuideLevel, cross_size: i32, cross_is_max: bool) -> i32 {
        (**self).get(level, cross_size, cross_is_max)
    }

    fn baseline(&self, size: i32) -> Option<i32> {
        (**self).baseline(size)
    }
}

/// A guide whose values do not depend on the cross size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedGuide {
    values: [i32; 5],
    baseline: Option<i32>,
}

impl FixedGuide {
    /// Creates a guide from `min`, `preferred` and `max`. `MinPreferred`
    /// equals `min` and `MaxPreferred` equals `preferred`.
    pub fn new(min: i32, preferred: i32, max: i32) -> Self {
        Self::ladder([min, min, preferred, preferred, max])
    }

    /// Creates a guide from all five levels in ladder order.
    pub fn ladder(values: [i32; 5]) -> Self {
        Self {
            values,
            baseline: None,
        }
    }

    /// A guide that is `size` on every level.
    pub fn exact(size: i32) -> Self {
        Self::ladder([size; 5])
    }

    /// A guide that can shrink to `min` and grow without bound.
    pub fn stretchy(min: i32, preferred: i32) -> Self {
        Self::new(min, preferred, UNBOUNDED)
    }

    /// Sets a baseline that sits `offset` pixels from the leading edge.
    pub fn with_baseline(mut self, offset: i32) -> Self {
        self.baseline = Some(offset);
        self
    }

    pub fn values(&self) -> [i32; 5] {
        self.values
    }
}

impl SizeGuide for FixedGuide {
    fn get(&self, level: GuideLevel, _cross_size: i32, _cross_is_max: bool) -> i32 {
        self.values[level.index()]
    }

    fn baseline(&self, _size: i32) -> Option<i32> {
        self.baseline
    }
}

/// Adds `a` and `b`, pinning at [`UNBOUNDED`] so an unbounded operand stays
/// unbounded.
#[inline]
pub fn saturating_extent(a: i32, b: i32) -> i32 {
    if a == UNBOUNDED || b == UNBOUNDED {
        UNBOUNDED
    } else {
        a.saturating_add(b)
    }
}
