//! Domain models for the roadmap catalog.
//!
//! # Core Concepts
//!
//! - [`Story`]: The atomic planning unit. Carries its size in points, the
//!   sprint it is scheduled for, who owns it and how it is classified.
//! - [`Epic`]: A themed, ordered group of stories. Its point total is derived
//!   from its stories and never stored.
//! - [`Phase`]: A project stage grouping epics, with a declared point total,
//!   a duration label and a list of milestones.
//!
//! Every entity is loaded once and never mutated afterwards. The `status`
//! fields are annotations describing plan intent, not live state.

mod phase;
mod story;

pub use phase::*;
pub use story::*;

/// Ordered sequence of known sprint labels.
///
/// Every story's `sprint` must be one of these. Position in this slice is the
/// sprint's schedule order.
pub const SPRINTS: [&str; 14] = [
    "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10", "S11", "S12", "S13", "S14",
];

/// Position of a sprint label in [`SPRINTS`], or `None` for unknown labels.
pub fn sprint_index(label: &str) -> Option<usize> {
    SPRINTS.iter().position(|s| *s == label)
}
