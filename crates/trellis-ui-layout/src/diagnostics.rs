//! Reporting of configuration errors found during layout
//!
//! Nothing here aborts a pass. Strategies report what they found and carry
//! on with a degraded but stable result.

use std::fmt;

use crate::axis::Orientation;
use crate::guide::GuideLevel;

/// A configuration problem detected while sizing or placing children.
///
/// `index` always refers to the child's position in the slice handed to the
/// layout call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDiagnostic {
    /// A second child claimed the unique center region. It is not placed.
    DuplicateCenter { index: usize, first: usize },
    /// The child's anchors form a cycle; it was placed at the origin.
    SandboxCycle {
        index: usize,
        orientation: Orientation,
    },
    /// Part of the child's anchors could not be tied to the container; the
    /// detached edges were resolved from position 0.
    UnresolvedEdge {
        index: usize,
        orientation: Orientation,
    },
    /// An anchor referenced a container edge from the wrong side.
    InvalidAnchor {
        index: usize,
        orientation: Orientation,
    },
    /// A guide returned less at `level` than at the level below; the value
    /// was raised to `previous`.
    NonMonotoneGuide {
        index: usize,
        level: GuideLevel,
        value: i32,
        previous: i32,
    },
    /// A guide returned a negative size; it was treated as 0.
    NegativeGuide {
        index: usize,
        level: GuideLevel,
        value: i32,
    },
}

impl fmt::Display for LayoutDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDiagnostic::DuplicateCenter { index, first } => {
                write!(
                    f,
                    "child {index} claims the center region already held by child {first}"
                )
            }
            LayoutDiagnostic::SandboxCycle { index, orientation } => {
                write!(f, "child {index} has cyclic {orientation:?} anchors")
            }
            LayoutDiagnostic::UnresolvedEdge { index, orientation } => {
                write!(
                    f,
                    "child {index} has {orientation:?} edges not tied to the container"
                )
            }
            LayoutDiagnostic::InvalidAnchor { index, orientation } => {
                write!(
                    f,
                    "child {index} anchors a container edge from the wrong side ({orientation:?})"
                )
            }
            LayoutDiagnostic::NonMonotoneGuide {
                index,
                level,
                value,
                previous,
            } => write!(
                f,
                "child {index} guide decreases at {level}: {value} < {previous}"
            ),
            LayoutDiagnostic::NegativeGuide {
                index,
                level,
                value,
            } => write!(f, "child {index} guide is negative at {level}: {value}"),
        }
    }
}

impl std::error::Error for LayoutDiagnostic {}

/// Sink for configuration diagnostics.
pub trait Diagnostics {
    fn report(&self, diagnostic: LayoutDiagnostic);
}

impl<F> Diagnostics for F
where
    F: Fn(LayoutDiagnostic),
{
    fn report(&self, diagnostic: LayoutDiagnostic) {
        self(diagnostic)
    }
}

/// Default sink: forwards every diagnostic to `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, diagnostic: LayoutDiagnostic) {
        log::warn!("layout: {diagnostic}");
    }
}

/// Sink that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreDiagnostics;

impl Diagnostics for IgnoreDiagnostics {
    fn report(&self, _diagnostic: LayoutDiagnostic) {}
}
