//! Lengths with a pixel and a percent component

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A length made of a fixed pixel part and a fraction of some reference
/// length.
///
/// The percent part is stored as a fraction (`0.5` is half) and only gets a
/// pixel value when [`LayoutSize::resolve`] is given the reference length it
/// is relative to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutSize {
    pub pixels: i32,
    pub percent: f32,
}

impl LayoutSize {
    pub const ZERO: LayoutSize = LayoutSize {
        pixels: 0,
        percent: 0.0,
    };

    pub const fn new(pixels: i32, percent: f32) -> Self {
        Self { pixels, percent }
    }

    /// A purely pixel based size.
    pub const fn px(pixels: i32) -> Self {
        Self::new(pixels, 0.0)
    }

    /// A purely relative size, `fraction` of the reference length.
    pub const fn fraction(fraction: f32) -> Self {
        Self::new(0, fraction)
    }

    pub fn is_zero(&self) -> bool {
        self.pixels == 0 && self.percent == 0.0
    }

    /// Returns true if the value does not depend on a reference length.
    pub fn is_pixel_exact(&self) -> bool {
        self.percent == 0.0
    }

    /// Resolves to pixels: `pixels + round(percent * reference)`.
    pub fn resolve(&self, reference: i32) -> i32 {
        let relative = (self.percent as f64 * reference as f64).round();
        let total = self.pixels as f64 + relative;
        total.clamp(i32::MIN as f64, i32::MAX as f64) as i32
    }
}

impl Add for LayoutSize {
    type Output = LayoutSize;

    fn add(self, rhs: Self) -> Self::Output {
        LayoutSize {
            pixels: self.pixels.saturating_add(rhs.pixels),
            percent: self.percent + rhs.percent,
        }
    }
}

impl Sub for LayoutSize {
    type Output = LayoutSize;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for LayoutSize {
    type Output = LayoutSize;

    fn neg(self) -> Self::Output {
        LayoutSize {
            pixels: self.pixels.saturating_neg(),
            percent: -self.percent,
        }
    }
}

impl From<i32> for LayoutSize {
    fn from(pixels: i32) -> Self {
        LayoutSize::px(pixels)
    }
}

impl fmt::Display for LayoutSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pixels, self.percent) {
            (pixels, percent) if percent == 0.0 => write!(f, "{pixels}px"),
            (0, percent) => write!(f, "{}%", percent * 100.0),
            (pixels, percent) => write!(f, "{pixels}px{:+}%", percent * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_combine_independently() {
        let a = LayoutSize::new(10, 0.25);
        let b = LayoutSize::new(4, 0.5);
        assert_eq!(a + b, LayoutSize::new(14, 0.75));
        assert_eq!(a - b, LayoutSize::new(6, -0.25));
        assert_eq!(-a, LayoutSize::new(-10, -0.25));
    }

    #[test]
    fn resolve_rounds_the_relative_part() {
        assert_eq!(LayoutSize::new(10, 0.5).resolve(301), 161);
        assert_eq!(LayoutSize::fraction(0.333).resolve(100), 33);
        assert_eq!(LayoutSize::px(-7).resolve(1000), -7);
    }

    #[test]
    fn resolution_depends_on_the_reference() {
        let size = LayoutSize::fraction(0.1);
        assert_eq!(size.resolve(200), 20);
        assert_eq!(size.resolve(50), 5);
    }

    #[test]
    fn display_shows_both_parts() {
        assert_eq!(LayoutSize::px(12).to_string(), "12px");
        assert_eq!(LayoutSize::fraction(0.5).to_string(), "50%");
        assert_eq!(LayoutSize::new(3, -0.25).to_string(), "3px-25%");
    }
}
