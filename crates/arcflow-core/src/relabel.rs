//! Graph relabeling: a many-to-one folding of vertices and arc labels.
//!
//! Relabeling merges distinct vertices (the map need not be injective;
//! that is the point), drops any arc whose mapped endpoints coincide, and
//! collapses duplicate vertices and arcs under set semantics. Both outputs
//! come back sorted so results are deterministic regardless of input order.

use std::collections::BTreeSet;

use crate::graph::arc::{Arc, Vertex};
use crate::graph::label::ArcLabel;

/// Relabel vertices, keeping arc labels unchanged.
///
/// Equivalent to [`relabel_with`] with the identity label map.
pub fn relabel<L, FV>(
    vertices: &[Vertex],
    arcs: &[Arc<L>],
    fv: FV,
) -> (Vec<Vertex>, Vec<Arc<L>>)
where
    L: Clone + Ord,
    FV: Fn(Vertex) -> Vertex,
{
    relabel_with(vertices, arcs, fv, |label| label.clone())
}

/// Relabel vertices and arc labels.
///
/// Applies `fv` to every vertex and to both endpoints of every arc, and
/// `fa` to every arc label. Arcs whose mapped endpoints are equal are
/// dropped unconditionally: the self-loop check happens after mapping, so
/// arcs between vertices that the map merges disappear. The remaining
/// vertices and arcs are deduplicated and returned in sorted order
/// (numeric for vertices, lexicographic on `(from, to, label)` for arcs).
///
/// A map function that panics propagates its panic unchanged; relabeling
/// itself has no failure modes.
pub fn relabel_with<L, M, FV, FA>(
    vertices: &[Vertex],
    arcs: &[Arc<L>],
    fv: FV,
    fa: FA,
) -> (Vec<Vertex>, Vec<Arc<M>>)
where
    M: Ord,
    FV: Fn(Vertex) -> Vertex,
    FA: Fn(&ArcLabel<L>) -> ArcLabel<M>,
{
    let mapped_vertices: BTreeSet<Vertex> = vertices.iter().map(|&v| fv(v)).collect();

    let mut mapped_arcs: BTreeSet<Arc<M>> = BTreeSet::new();
    for arc in arcs {
        let from = fv(arc.from);
        let to = fv(arc.to);
        if from == to {
            continue;
        }
        mapped_arcs.insert(Arc::new(from, to, fa(&arc.label)));
    }

    (
        mapped_vertices.into_iter().collect(),
        mapped_arcs.into_iter().collect(),
    )
}
