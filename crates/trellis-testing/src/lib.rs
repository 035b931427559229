//! Testing utilities for Trellis layout

pub mod assertions;
pub mod widgets;

pub use assertions::*;
pub use widgets::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::widgets::{boxed, CollectingDiagnostics, TestWidget};
}
