use trellis_geometry::{EdgeInsets, Point, Rect, Size};

/// Represents one of the two layout axes.
///
/// Strategies are written once against a "main" orientation and read or
/// write geometry through the accessors below, so the same code handles rows
/// and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Orientation {
    /// Returns the perpendicular orientation.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Extent of `size` along this orientation.
    #[inline]
    pub fn length(self, size: Size) -> i32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Coordinate of `point` along this orientation.
    #[inline]
    pub fn coordinate(self, point: Point) -> i32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Builds a size from a length along this orientation and one across it.
    #[inline]
    pub fn size(self, main: i32, cross: i32) -> Size {
        match self {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// Builds a rectangle from main/cross positions and extents.
    pub fn rect(self, main_pos: i32, cross_pos: i32, main_len: i32, cross_len: i32) -> Rect {
        match self {
            Orientation::Horizontal => Rect::new(main_pos, cross_pos, main_len, cross_len),
            Orientation::Vertical => Rect::new(cross_pos, main_pos, cross_len, main_len),
        }
    }

    /// Returns `(start, length)` of `rect` along this orientation.
    #[inline]
    pub fn span(self, rect: Rect) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (rect.x, rect.width),
            Orientation::Vertical => (rect.y, rect.height),
        }
    }

    /// Returns the `(leading, trailing)` insets along this orientation.
    #[inline]
    pub fn insets(self, insets: EdgeInsets) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (insets.left, insets.right),
            Orientation::Vertical => (insets.top, insets.bottom),
        }
    }

    /// Sum of the leading and trailing insets along this orientation.
    #[inline]
    pub fn inset_sum(self, insets: EdgeInsets) -> i32 {
        let (leading, trailing) = self.insets(insets);
        leading + trailing
    }
}

/// Which end of an axis something starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisEnd {
    /// The left or top end.
    Leading,
    /// The right or bottom end.
    Trailing,
}

/// Packing direction for one-by-one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    /// The axis children are packed along.
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::LeftToRight | Direction::RightToLeft => Orientation::Horizontal,
            Direction::TopToBottom | Direction::BottomToTop => Orientation::Vertical,
        }
    }

    /// The end the first child is placed at.
    pub fn start(self) -> AxisEnd {
        match self {
            Direction::LeftToRight | Direction::TopToBottom => AxisEnd::Leading,
            Direction::RightToLeft | Direction::BottomToTop => AxisEnd::Trailing,
        }
    }

    /// Recomposes a direction from its orientation and starting end.
    pub fn from_parts(orientation: Orientation, start: AxisEnd) -> Self {
        match (orientation, start) {
            (Orientation::Horizontal, AxisEnd::Leading) => Direction::LeftToRight,
            (Orientation::Horizontal, AxisEnd::Trailing) => Direction::RightToLeft,
            (Orientation::Vertical, AxisEnd::Leading) => Direction::TopToBottom,
            (Orientation::Vertical, AxisEnd::Trailing) => Direction::BottomToTop,
        }
    }

    pub fn is_reversed(self) -> bool {
        self.start() == AxisEnd::Trailing
    }
}
