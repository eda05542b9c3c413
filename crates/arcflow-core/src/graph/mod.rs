//! The graph container for arc-flow graphs.
//!
//! A graph bundles the arc list with the header data from the `.afg` file:
//! the start vertex, one terminal vertex per item type, and the raw loss
//! label value. The vertex set is derived from the arcs: a declared vertex
//! that appears in no arc is not part of the set, which is what lets callers
//! detect isolated vertices.

pub mod arc;
pub mod label;

use serde::{Deserialize, Serialize};

use self::arc::{Arc, Vertex};
use self::label::ArcLabel;
use crate::relabel;

/// An arc-flow graph.
///
/// Vertices are kept numerically sorted and deduplicated; arcs stay in the
/// order the source supplied them. Construction is the only mutation; a
/// graph is read once, transformed into new graphs, and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<L = u64> {
    vertices: Vec<Vertex>,
    arcs: Vec<Arc<L>>,
    start: Vertex,
    terminals: Vec<Vertex>,
    loss: u64,
}

impl<L> Graph<L> {
    /// Build a graph from its arcs, deriving the vertex set from the arc
    /// endpoints. The start and terminal vertices are recorded as header
    /// data but are not added to the vertex set unless an arc touches them.
    pub fn from_arcs(arcs: Vec<Arc<L>>, start: Vertex, terminals: Vec<Vertex>, loss: u64) -> Self {
        let mut vertices: Vec<Vertex> = arcs.iter().flat_map(|a| [a.from, a.to]).collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self {
            vertices,
            arcs,
            start,
            terminals,
            loss,
        }
    }

    /// Build a graph from an explicit vertex set and arc list.
    ///
    /// The vertex set is sorted and deduplicated but otherwise taken as
    /// given; use this when the vertex set is not derivable from the arcs,
    /// e.g. after a relabeling that dropped all arcs of some vertex.
    pub fn from_parts(
        mut vertices: Vec<Vertex>,
        arcs: Vec<Arc<L>>,
        start: Vertex,
        terminals: Vec<Vertex>,
        loss: u64,
    ) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self {
            vertices,
            arcs,
            start,
            terminals,
            loss,
        }
    }

    /// The vertex set, numerically sorted.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The arcs, in source order.
    pub fn arcs(&self) -> &[Arc<L>] {
        &self.arcs
    }

    /// The start vertex.
    pub fn start(&self) -> Vertex {
        self.start
    }

    /// Terminal vertices, one per item type, in type-index order.
    pub fn terminals(&self) -> &[Vertex] {
        &self.terminals
    }

    /// The raw loss label value from the file header.
    pub fn loss(&self) -> u64 {
        self.loss
    }

    /// Number of item types (length of the terminal list).
    pub fn type_count(&self) -> usize {
        self.terminals.len()
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the given vertex appears in the vertex set.
    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.vertices.binary_search(&v).is_ok()
    }
}

impl<L: Clone + Ord> Graph<L> {
    /// Relabel vertices, producing a reduced graph.
    ///
    /// Applies `fv` to every vertex and both arc endpoints, keeping labels
    /// unchanged. Self-loops produced by the mapping are dropped and
    /// duplicate vertices/arcs collapse. The start and terminal vertices are
    /// mapped through `fv` as well; the loss value is carried over.
    pub fn relabel<FV>(&self, fv: FV) -> Graph<L>
    where
        FV: Fn(Vertex) -> Vertex,
    {
        self.relabel_with(&fv, |label| label.clone())
    }

    /// Relabel vertices and arc labels, producing a reduced graph.
    pub fn relabel_with<M, FV, FA>(&self, fv: FV, fa: FA) -> Graph<M>
    where
        M: Clone + Ord,
        FV: Fn(Vertex) -> Vertex,
        FA: Fn(&ArcLabel<L>) -> ArcLabel<M>,
    {
        let (vertices, arcs) = relabel::relabel_with(&self.vertices, &self.arcs, &fv, fa);
        Graph::from_parts(
            vertices,
            arcs,
            fv(self.start),
            self.terminals.iter().map(|&t| fv(t)).collect(),
            self.loss,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let arcs = vec![
            Arc::new(0, 1, ArcLabel::Id(5)),
            Arc::new(1, 3, ArcLabel::Loss),
        ];
        Graph::from_arcs(arcs, 0, vec![3], 99)
    }

    #[test]
    fn empty_graph() {
        let g: Graph = Graph::from_arcs(Vec::new(), 0, vec![0], 0);
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn vertices_derived_from_arc_endpoints() {
        let g = sample_graph();
        assert_eq!(g.vertices(), &[0, 1, 3]);
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn declared_but_unused_vertices_stay_out() {
        // Start vertex 7 touches no arc, so it is not in the vertex set.
        let arcs = vec![Arc::<u64>::new(0, 1, ArcLabel::Loss)];
        let g = Graph::from_arcs(arcs, 7, vec![1], 2);
        assert!(!g.contains_vertex(7));
        assert_eq!(g.start(), 7);
    }

    #[test]
    fn duplicate_endpoints_deduplicated() {
        let arcs = vec![
            Arc::<u64>::new(0, 1, ArcLabel::Id(0)),
            Arc::new(0, 1, ArcLabel::Id(1)),
            Arc::new(1, 0, ArcLabel::Id(2)),
        ];
        let g = Graph::from_arcs(arcs, 0, vec![1], 9);
        assert_eq!(g.vertices(), &[0, 1]);
    }

    #[test]
    fn header_accessors() {
        let g = sample_graph();
        assert_eq!(g.start(), 0);
        assert_eq!(g.terminals(), &[3]);
        assert_eq!(g.loss(), 99);
        assert_eq!(g.type_count(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let g = sample_graph();
        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn relabel_method_maps_header_vertices() {
        let g = sample_graph();
        // Collapse 1 into 0; terminal 3 maps to itself.
        let reduced = g.relabel(|v| if v == 1 { 0 } else { v });
        assert_eq!(reduced.start(), 0);
        assert_eq!(reduced.terminals(), &[3]);
        assert_eq!(reduced.loss(), 99);
        // (0,1,5) became a self-loop and is gone; (1,3,LOSS) became (0,3,LOSS).
        assert_eq!(reduced.arcs(), &[Arc::new(0, 3, ArcLabel::Loss)]);
        assert_eq!(reduced.vertices(), &[0, 3]);
    }
}
