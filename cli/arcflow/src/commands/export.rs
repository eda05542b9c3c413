//! `arcflow export` — emit a render plan as DOT text or JSON.
//!
//! DOT output is plain text describing edges with their colors and styles;
//! layout is left to whatever consumes it.

use std::path::Path;

use anyhow::{bail, Context, Result};

use arcflow_afg::read_path;
use arcflow_render::{EdgeDirection, EdgeStyle, RenderOptions, RenderPlan};

pub fn run(input: &Path, format: &str, show_labels: bool) -> Result<()> {
    let graph = read_path(input).with_context(|| format!("reading {}", input.display()))?;
    let options = RenderOptions {
        show_labels,
        ..Default::default()
    };
    let plan = RenderPlan::build(graph.arcs(), &options);

    match format {
        "dot" => print!("{}", to_dot(&plan)),
        "json" => println!("{}", serde_json::to_string_pretty(&plan.to_json())?),
        other => bail!("unknown format '{other}' (expected dot or json)"),
    }
    Ok(())
}

/// Serialize a plan as a graphviz digraph.
pub(crate) fn to_dot(plan: &RenderPlan) -> String {
    let mut out = String::new();
    out.push_str("digraph arcflow {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  ranksep=1.0;\n");
    out.push_str("  nodesep=0.10;\n");
    out.push_str("  node [shape=circle, color=black, penwidth=2.0];\n");
    for edge in plan.edges() {
        let dir = match edge.direction {
            EdgeDirection::Front => "forward",
            EdgeDirection::Back => "back",
        };
        match &edge.style {
            EdgeStyle::Loss => out.push_str(&format!(
                "  {} -> {} [color=black, style=dashed, penwidth=2, dir={}];\n",
                edge.from, edge.to, dir
            )),
            EdgeStyle::Labeled { color, label } => {
                let text = match label {
                    Some(text) => format!(", label=\"{}\"", text.replace('"', "\\\"")),
                    None => String::new(),
                };
                out.push_str(&format!(
                    "  {} -> {} [color=\"{}\", penwidth=2, dir={}{}];\n",
                    edge.from, edge.to, color, dir, text
                ));
            }
        }
    }
    out.push_str("}\n");
    out
}
