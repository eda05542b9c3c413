//! Arc label types.
//!
//! Every arc carries a label decided once at parse time: either the loss
//! sentinel, a resolved external id, or a user-supplied opaque label looked
//! up through an external table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The label attached to an arc.
///
/// The variant is fixed when the graph is read and never re-resolved.
/// Variant order gives labels a total order (loss first, then ids, then
/// named labels) so arc triples can be sorted deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArcLabel<L = u64> {
    /// The distinguished non-productive (slack) sentinel.
    Loss,
    /// A resolved external id, used when no label table is supplied.
    Id(u64),
    /// An opaque label resolved through a user-supplied table.
    Named(L),
}

impl<L> ArcLabel<L> {
    /// Whether this is the loss sentinel.
    pub fn is_loss(&self) -> bool {
        matches!(self, ArcLabel::Loss)
    }
}

impl<L: fmt::Display> fmt::Display for ArcLabel<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcLabel::Loss => write!(f, "LOSS"),
            ArcLabel::Id(id) => write!(f, "{id}"),
            ArcLabel::Named(label) => write!(f, "{label}"),
        }
    }
}
