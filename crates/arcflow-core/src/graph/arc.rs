//! Arcs: directed, labeled connections between state vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::label::ArcLabel;

/// A state vertex identifier. Ordering is numeric; ids carry no meaning
/// beyond identity.
pub type Vertex = u64;

/// A directed arc `(from, to, label)`.
///
/// Arcs compare and hash by value, and the derived order is lexicographic
/// on `(from, to, label)`, so collections of arcs can be deduplicated as
/// sets and sorted deterministically. Direction matters: `(u, v)` and
/// `(v, u)` are distinct arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Arc<L = u64> {
    /// Source vertex.
    pub from: Vertex,
    /// Target vertex.
    pub to: Vertex,
    /// The arc's label.
    pub label: ArcLabel<L>,
}

impl<L> Arc<L> {
    /// Create a new arc.
    pub fn new(from: Vertex, to: Vertex, label: ArcLabel<L>) -> Self {
        Self { from, to, label }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<L: fmt::Display> fmt::Display for Arc<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.from, self.to, self.label)
    }
}
