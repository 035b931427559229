//! Alignment and region anchors

use crate::axis::{AxisEnd, Orientation};

/// Alignment of content along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Flush against the leading edge.
    #[default]
    Begin,
    /// Flush against the trailing edge.
    End,
    /// Centered; leftover space is spread evenly around the content.
    Center,
    /// Stretched to fill; leftover space is spread between the items.
    Justify,
}

impl Alignment {
    /// Computes the offset of a `child`-long item inside `available`.
    ///
    /// `Justify` behaves like `Begin` here; stretching is the caller's job.
    /// Items longer than `available` are clipped at the trailing edge.
    pub fn offset(self, available: i32, child: i32) -> i32 {
        match self {
            Alignment::Begin | Alignment::Justify => 0,
            Alignment::Center => ((available - child) / 2).max(0),
            Alignment::End => (available - child).max(0),
        }
    }

    /// Returns true if the item should be stretched to the available length.
    #[inline]
    pub fn stretches(self) -> bool {
        matches!(self, Alignment::Justify)
    }
}

/// Anchor slot used by the region layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl Region {
    /// The axis an edge region consumes space along, `None` for `Center`.
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            Region::Left | Region::Right => Some(Orientation::Horizontal),
            Region::Top | Region::Bottom => Some(Orientation::Vertical),
            Region::Center => None,
        }
    }

    /// The end of the remaining area an edge region attaches to.
    pub fn end(self) -> Option<AxisEnd> {
        match self {
            Region::Left | Region::Top => Some(AxisEnd::Leading),
            Region::Right | Region::Bottom => Some(AxisEnd::Trailing),
            Region::Center => None,
        }
    }

    pub fn is_center(self) -> bool {
        matches!(self, Region::Center)
    }
}
