//! Render plans: the abstract edge list handed to an external renderer.
//!
//! A plan classifies every arc as loss-styled (dashed, uncolored) or
//! labeled (colored deterministically by label), applies caller-requested
//! direction reversal for back-edges, and drops ignored edges. Layout and
//! actual drawing are someone else's job.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use arcflow_core::{Arc, ArcLabel, Vertex};

use crate::color::{unique_colors, Rgb};

/// Value/pale scalars for the arc-coloring palette.
const PALETTE_VALUE: f64 = 0.5;
const PALETTE_PALE: f64 = 0.0;

/// Drawing direction of an edge relative to its stored endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Arrowhead at `to` (normal orientation).
    Front,
    /// Endpoints were swapped for layout; arrowhead drawn at the swapped end.
    Back,
}

/// How an edge should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeStyle {
    /// Loss arc: dashed, no label color.
    Loss,
    /// Productive arc: colored by its label.
    Labeled {
        color: Rgb,
        /// Label text, present only when the plan was built with
        /// `show_labels`.
        label: Option<String>,
    },
}

/// One edge of a render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub from: Vertex,
    pub to: Vertex,
    pub direction: EdgeDirection,
    pub style: EdgeStyle,
}

/// Options controlling plan construction.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Attach each labeled edge's label text.
    pub show_labels: bool,
    /// Edges to leave out entirely, keyed by original `(from, to)`.
    pub ignore: HashSet<(Vertex, Vertex)>,
    /// Edges to draw reversed, keyed by original `(from, to)`.
    pub back: HashSet<(Vertex, Vertex)>,
}

/// A renderer-consumable edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    edges: Vec<RenderEdge>,
}

impl RenderPlan {
    /// Build a plan from an arc list.
    ///
    /// Color assignment is deterministic: the distinct non-loss labels are
    /// sorted and label `i` takes the `i`-th entry of the generated
    /// palette, so the same arc set always yields the same colors no matter
    /// the iteration order. Self-loops are skipped; a relabeled graph has
    /// none, and un-relabeled input should not break the renderer.
    pub fn build<L>(arcs: &[Arc<L>], options: &RenderOptions) -> RenderPlan
    where
        L: Ord + fmt::Display,
    {
        let mut labels: Vec<&ArcLabel<L>> = arcs
            .iter()
            .map(|arc| &arc.label)
            .filter(|label| !label.is_loss())
            .collect();
        labels.sort();
        labels.dedup();

        let colors = unique_colors(labels.len() + 1, PALETTE_VALUE, PALETTE_PALE);

        let mut edges = Vec::new();
        for arc in arcs {
            if options.ignore.contains(&(arc.from, arc.to)) || arc.is_self_loop() {
                continue;
            }
            let (from, to, direction) = if options.back.contains(&(arc.from, arc.to)) {
                (arc.to, arc.from, EdgeDirection::Back)
            } else {
                (arc.from, arc.to, EdgeDirection::Front)
            };
            let style = match &arc.label {
                ArcLabel::Loss => EdgeStyle::Loss,
                label => {
                    let idx = labels
                        .binary_search(&label)
                        .expect("every non-loss label was collected above");
                    EdgeStyle::Labeled {
                        color: colors[idx % colors.len()],
                        label: options.show_labels.then(|| label.to_string()),
                    }
                }
            };
            edges.push(RenderEdge {
                from,
                to,
                direction,
                style,
            });
        }
        RenderPlan { edges }
    }

    /// The planned edges, in arc order.
    pub fn edges(&self) -> &[RenderEdge] {
        &self.edges
    }

    /// Number of planned edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Machine-readable form of the plan.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
