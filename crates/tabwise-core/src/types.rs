//! Semantic type identities.

use derive_more::{Debug, Display};

/// Statically declared identity of a semantic type.
///
/// Semantic types mark what a node produces or a parameter expects: a whole
/// table, a single column, or a scalar kind. Identity is by name; a table
/// type is associated with its column type through the
/// [`CapabilityRegistry`](crate::CapabilityRegistry) rather than inferred
/// from runtime values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Debug, Display)]
#[debug("{_0}")]
#[display("{_0}")]
pub struct SemanticType(&'static str);

impl SemanticType {
    /// Declares a semantic type with the given name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the type name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}
