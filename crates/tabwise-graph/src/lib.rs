#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod augment;
mod error;
pub mod graph;
pub mod op;

#[doc(hidden)]
pub mod prelude;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{GraphError, GraphResult};

/// Tracing target for graph construction.
pub const TRACING_TARGET: &str = "tabwise_graph";
