//! Augmenting table-returning functions with column pipelines.
//!
//! [`WithColumns`] wires a group of elementary column operations into a
//! dependency-ordered node set: the configured columns are extracted from
//! the injected table (or the pipeline reads an existing table input), the
//! operations are collected, and a single merge node reattaches the
//! selected outputs with assign-with-override semantics. The resulting
//! [`AugmentPlan`] is handed to the host graph engine; nothing here
//! executes.

mod config;
mod extract;
mod merge;
mod namespace;
mod plan;
mod resolve;
mod target;

pub use config::{ImplicitTableInputs, WithColumns, WithColumnsBuilder};
pub use merge::MERGE_NODE_NAME;
pub use plan::AugmentPlan;
pub use target::{Parameter, TargetFunction};
