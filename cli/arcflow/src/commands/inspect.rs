//! `arcflow inspect` — summary statistics for an `.afg` file.

use std::path::Path;

use anyhow::{Context, Result};

use arcflow_afg::ReadOptions;

/// Parse a graph file and print its header data and counts.
pub fn run(input: &Path, strict: bool) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let options = ReadOptions {
        check_vertex_count: strict,
    };
    let graph = arcflow_afg::read_str_opts(&source, options)
        .with_context(|| format!("parsing {}", input.display()))?;

    let loss_arcs = graph.arcs().iter().filter(|a| a.label.is_loss()).count();
    let terminals: Vec<String> = graph.terminals().iter().map(u64::to_string).collect();

    println!("--- Graph ({}) ---", input.display());
    println!("  Vertices:  {}", graph.vertex_count());
    println!("  Arcs:      {} ({} loss)", graph.arc_count(), loss_arcs);
    println!("  Types:     {}", graph.type_count());
    println!("  Start:     {}", graph.start());
    println!("  Terminals: {}", terminals.join(" "));
    println!("  Loss:      {}", graph.loss());

    Ok(())
}
