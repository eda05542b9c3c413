//! Core data model for arc-flow graphs.
//!
//! An arc-flow graph is a directed multigraph encoding feasible assignments
//! over discretized capacity: each arc consumes one unit of an item type (or
//! represents a non-productive "loss" transition) between two state vertices.
//! This crate provides the graph container, the arc/label value types, and
//! the relabeling operation used to produce reduced views of a graph.

pub mod graph;
pub mod relabel;

pub use graph::arc::{Arc, Vertex};
pub use graph::label::ArcLabel;
pub use graph::Graph;
pub use relabel::{relabel, relabel_with};
