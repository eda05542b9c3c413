//! Writing graphs back out as `.afg` text.
//!
//! The writer is the inverse of the reader for id-labeled graphs: it
//! rebuilds an id table from the labels in use and emits the keyword
//! sections in canonical order. Graphs whose labels were resolved through a
//! user table carry opaque values and cannot be written back; write the
//! id-labeled graph from before resolution instead.

use std::collections::HashMap;
use std::io::Write;

use arcflow_core::{ArcLabel, Graph};

use crate::error::{FormatError, Result};

/// Serialize a graph to a writer in `.afg` form.
///
/// The id table is the sorted set of distinct external ids appearing in the
/// graph's labels; each arc's raw label is its index in that table, or the
/// graph's loss value for loss arcs. `NV` is written as the derived vertex
/// count, so a written graph re-reads cleanly even in strict mode.
///
/// Fails with [`FormatError::LossIndexCollision`] if the loss value falls
/// inside the id table's index range: such a file would read every arc
/// with that raw label back as a loss arc.
pub fn write_graph<W: Write>(writer: &mut W, graph: &Graph<u64>) -> Result<()> {
    let mut ids: Vec<u64> = graph
        .arcs()
        .iter()
        .filter_map(|arc| match arc.label {
            ArcLabel::Loss => None,
            ArcLabel::Id(id) | ArcLabel::Named(id) => Some(id),
        })
        .collect();
    ids.sort_unstable();
    ids.dedup();

    if graph.loss() < ids.len() as u64 {
        return Err(FormatError::LossIndexCollision {
            loss: graph.loss(),
            len: ids.len(),
        });
    }

    let index: HashMap<u64, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    write!(writer, "IDS:")?;
    for id in &ids {
        write!(writer, " {id}")?;
    }
    writeln!(writer)?;

    writeln!(writer, "#GRAPH_BEGIN#")?;
    writeln!(writer, "NBTYPES: {}", graph.type_count())?;
    writeln!(writer, "S: {}", graph.start())?;
    write!(writer, "Ts:")?;
    for t in graph.terminals() {
        write!(writer, " {t}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "LOSS: {}", graph.loss())?;
    writeln!(writer, "NV: {}", graph.vertex_count())?;
    writeln!(writer, "NA: {}", graph.arc_count())?;
    for arc in graph.arcs() {
        let raw = match arc.label {
            ArcLabel::Loss => graph.loss(),
            ArcLabel::Id(id) | ArcLabel::Named(id) => index[&id] as u64,
        };
        writeln!(writer, "{} {} {}", arc.from, arc.to, raw)?;
    }
    writeln!(writer, "#GRAPH_END#")?;

    Ok(())
}

/// Serialize a graph to an `.afg` string.
pub fn to_string(graph: &Graph<u64>) -> Result<String> {
    let mut buf = Vec::new();
    write_graph(&mut buf, graph)?;
    Ok(String::from_utf8(buf).expect(".afg output is always ASCII"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::{read_str, read_str_opts, ReadOptions};
    use arcflow_core::Arc;

    fn sample_graph() -> Graph {
        Graph::from_arcs(
            vec![
                Arc::new(0, 1, ArcLabel::Id(5)),
                Arc::new(0, 2, ArcLabel::Id(7)),
                Arc::new(1, 3, ArcLabel::Loss),
                Arc::new(2, 3, ArcLabel::Id(5)),
            ],
            0,
            vec![3],
            99,
        )
    }

    #[test]
    fn round_trip_preserves_graph() {
        let graph = sample_graph();
        let text = to_string(&graph).unwrap();
        let reread = read_str(&text).unwrap();
        assert_eq!(reread, graph);
    }

    #[test]
    fn round_trip_survives_strict_mode() {
        let text = to_string(&sample_graph()).unwrap();
        let options = ReadOptions {
            check_vertex_count: true,
        };
        assert!(read_str_opts(&text, options).is_ok());
    }

    #[test]
    fn written_form_is_canonical() {
        let graph = Graph::from_arcs(
            vec![
                Arc::new(0, 1, ArcLabel::Id(5)),
                Arc::new(1, 3, ArcLabel::Loss),
            ],
            0,
            vec![3],
            99,
        );
        let text = to_string(&graph).unwrap();
        assert_eq!(
            text,
            "IDS: 5\n\
             #GRAPH_BEGIN#\n\
             NBTYPES: 1\n\
             S: 0\n\
             Ts: 3\n\
             LOSS: 99\n\
             NV: 3\n\
             NA: 2\n\
             0 1 0\n\
             1 3 99\n\
             #GRAPH_END#\n"
        );
    }

    #[test]
    fn empty_graph_writes_and_rereads() {
        let graph: Graph = Graph::from_arcs(Vec::new(), 0, vec![0], 1);
        let text = to_string(&graph).unwrap();
        let reread = read_str(&text).unwrap();
        assert_eq!(reread.vertex_count(), 0);
        assert_eq!(reread.arc_count(), 0);
    }

    #[test]
    fn all_loss_graph_has_empty_id_table() {
        let graph: Graph = Graph::from_arcs(
            vec![Arc::new(0, 1, ArcLabel::Loss)],
            0,
            vec![1],
            0,
        );
        let text = to_string(&graph).unwrap();
        assert!(text.starts_with("IDS:\n"));
    }

    #[test]
    fn loss_inside_index_range_rejected() {
        // Two distinct ids occupy indices 0 and 1; loss value 1 collides.
        let graph = Graph::from_arcs(
            vec![
                Arc::new(0, 1, ArcLabel::Id(5)),
                Arc::new(1, 2, ArcLabel::Id(6)),
            ],
            0,
            vec![2],
            1,
        );
        let err = to_string(&graph).unwrap_err();
        assert!(matches!(
            err,
            FormatError::LossIndexCollision { loss: 1, len: 2 }
        ));
    }
}
