//! Renderer-facing structures for arc-flow graphs.
//!
//! This crate prepares everything an external graph renderer needs (an
//! abstract edge list with styles, directions, and a deterministic color per
//! distinct label) without performing any layout, opening any files, or
//! depending on a graph-drawing library. Loss arcs come out dashed and
//! uncolored; every other arc is colored by its label.

pub mod color;
pub mod plan;

pub use color::{unique_colors, Rgb};
pub use plan::{EdgeDirection, EdgeStyle, RenderEdge, RenderOptions, RenderPlan};
