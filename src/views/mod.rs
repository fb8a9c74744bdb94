//! Derived view structures handed to the presentation layer.
//!
//! Each file covers one view concern. View types borrow from the
//! immutable catalog; they are rebuilt wholesale on every qualifying
//! state change and discarded after the render that consumes them.

pub mod detail;
pub mod eligibility;
pub mod groups;
pub mod results;
pub mod schools;
