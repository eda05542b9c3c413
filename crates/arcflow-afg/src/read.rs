//! Reading `.afg` graph descriptions.
//!
//! The reader is a small recursive-descent pass over an indexed token
//! sequence: a cursor advances through the tokens with `expect_*`
//! operations that fail with a descriptive [`FormatError`] on mismatch.
//! The whole source is tokenized up front; there is no streaming parse.

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::path::Path;

use arcflow_core::{Arc, ArcLabel, Graph};

use crate::error::{FormatError, Result};

const IDS: &str = "IDS:";
const GRAPH_BEGIN: &str = "#GRAPH_BEGIN#";
const GRAPH_END: &str = "#GRAPH_END#";

/// Options controlling optional strictness of the reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Cross-check the declared `NV` field against the derived vertex set
    /// and fail on mismatch. Off by default: `NV` is informational and the
    /// original tooling ignores it.
    pub check_vertex_count: bool,
}

/// Read a graph from `.afg` source text, leaving labels as external ids.
pub fn read_str(source: &str) -> Result<Graph> {
    read_tokens::<u64>(source, None, ReadOptions::default())
}

/// Read a graph from `.afg` source text with explicit [`ReadOptions`].
pub fn read_str_opts(source: &str, options: ReadOptions) -> Result<Graph> {
    read_tokens::<u64>(source, None, options)
}

/// Read a graph, resolving external ids through the supplied label table.
///
/// Each non-loss arc label becomes `ArcLabel::Named(table[ids[raw]])`;
/// a resolved id missing from the table is a [`FormatError::UnknownLabelId`].
pub fn read_str_with<L>(source: &str, labels: &HashMap<u64, L>) -> Result<Graph<L>>
where
    L: Clone + Eq + Hash,
{
    read_tokens(source, Some(labels), ReadOptions::default())
}

/// Read a graph with a label table and explicit [`ReadOptions`].
pub fn read_str_with_opts<L>(
    source: &str,
    labels: &HashMap<u64, L>,
    options: ReadOptions,
) -> Result<Graph<L>>
where
    L: Clone + Eq + Hash,
{
    read_tokens(source, Some(labels), options)
}

/// Read a graph from an `.afg` file on disk.
///
/// Performs one bounded read of the whole file before tokenizing.
pub fn read_path(path: impl AsRef<Path>) -> Result<Graph> {
    let source = fs::read_to_string(path)?;
    read_str(&source)
}

/// Read a graph from disk, resolving labels through the supplied table.
pub fn read_path_with<L>(path: impl AsRef<Path>, labels: &HashMap<u64, L>) -> Result<Graph<L>>
where
    L: Clone + Eq + Hash,
{
    let source = fs::read_to_string(path)?;
    read_str_with(&source, labels)
}

/// Cursor over the token sequence of an `.afg` source.
struct Tokens<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            tokens: source.split_whitespace().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Skip tokens until `marker` has been consumed.
    fn scan_to(&mut self, marker: &'static str) -> Result<()> {
        while let Some(token) = self.advance() {
            if token == marker {
                return Ok(());
            }
        }
        Err(FormatError::MissingMarker(marker))
    }

    /// Consume exactly the given keyword at the current position.
    fn expect_keyword(&mut self, keyword: &'static str) -> Result<()> {
        match self.advance() {
            Some(token) if token == keyword => Ok(()),
            Some(token) => Err(FormatError::KeywordMismatch {
                expected: keyword,
                found: token.to_string(),
            }),
            None => Err(FormatError::UnexpectedEnd { field: keyword }),
        }
    }

    /// Consume one decimal integer.
    fn expect_int(&mut self, field: &'static str) -> Result<u64> {
        match self.advance() {
            Some(token) => token.parse().map_err(|_| FormatError::InvalidInteger {
                token: token.to_string(),
                field,
            }),
            None => Err(FormatError::UnexpectedEnd { field }),
        }
    }

    /// Consume exactly `n` decimal integers.
    fn expect_ints(&mut self, n: usize, field: &'static str) -> Result<Vec<u64>> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.expect_int(field)?);
        }
        Ok(values)
    }

    /// Consume the maximal run of integer tokens at the current position.
    ///
    /// The run ends at the first token containing a non-digit character; a
    /// digit-only token too large for `u64` is an error, not a terminator.
    fn take_int_run(&mut self, field: &'static str) -> Result<Vec<u64>> {
        let mut values = Vec::new();
        while let Some(token) = self.peek() {
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                break;
            }
            values.push(self.expect_int(field)?);
        }
        Ok(values)
    }
}

fn read_tokens<L>(
    source: &str,
    labels: Option<&HashMap<u64, L>>,
    options: ReadOptions,
) -> Result<Graph<L>>
where
    L: Clone + Eq + Hash,
{
    let mut cursor = Tokens::new(source);

    // ID table section: a maximal integer run after the IDS: marker,
    // mapping 0-based position to external id. May be empty.
    cursor.scan_to(IDS)?;
    let ids = cursor.take_int_run("id table")?;

    // Graph section: fixed keyword order, any deviation is fatal.
    cursor.scan_to(GRAPH_BEGIN)?;

    cursor.expect_keyword("NBTYPES:")?;
    let nbtypes = cursor.expect_int("NBTYPES")?;

    cursor.expect_keyword("S:")?;
    let start = cursor.expect_int("S")?;

    cursor.expect_keyword("Ts:")?;
    let terminals = cursor.expect_ints(nbtypes as usize, "Ts")?;

    cursor.expect_keyword("LOSS:")?;
    let loss = cursor.expect_int("LOSS")?;

    cursor.expect_keyword("NV:")?;
    let nv = cursor.expect_int("NV")?;

    cursor.expect_keyword("NA:")?;
    let na = cursor.expect_int("NA")?;

    // Arc triples run to the end marker; every token in between must be an
    // integer and the total must be exactly 3 * NA.
    let mut raw = Vec::with_capacity((na as usize).saturating_mul(3));
    loop {
        match cursor.advance() {
            Some(token) if token == GRAPH_END => break,
            Some(token) => raw.push(token.parse().map_err(|_| FormatError::InvalidInteger {
                token: token.to_string(),
                field: "arc list",
            })?),
            None => return Err(FormatError::MissingMarker(GRAPH_END)),
        }
    }
    let expected = (na as usize).saturating_mul(3);
    if raw.len() != expected {
        return Err(FormatError::ArcCountMismatch {
            expected,
            found: raw.len(),
        });
    }

    let mut arcs = Vec::with_capacity(na as usize);
    for triple in raw.chunks_exact(3) {
        let label = resolve_label(triple[2], loss, &ids, labels)?;
        arcs.push(Arc::new(triple[0], triple[1], label));
    }

    let graph = Graph::from_arcs(arcs, start, terminals, loss);
    if options.check_vertex_count && graph.vertex_count() != nv as usize {
        return Err(FormatError::VertexCountMismatch {
            declared: nv,
            derived: graph.vertex_count(),
        });
    }
    Ok(graph)
}

/// Resolve one raw arc label.
///
/// The loss check comes first: a raw value equal to `LOSS` is the sentinel
/// and is never used as an index into the id table, even when it would be a
/// valid one.
fn resolve_label<L>(
    raw: u64,
    loss: u64,
    ids: &[u64],
    labels: Option<&HashMap<u64, L>>,
) -> Result<ArcLabel<L>>
where
    L: Clone + Eq + Hash,
{
    if raw == loss {
        return Ok(ArcLabel::Loss);
    }
    let external = usize::try_from(raw)
        .ok()
        .and_then(|i| ids.get(i).copied())
        .ok_or(FormatError::LabelIndexOutOfRange {
            index: raw,
            len: ids.len(),
        })?;
    match labels {
        None => Ok(ArcLabel::Id(external)),
        Some(table) => table
            .get(&external)
            .cloned()
            .map(ArcLabel::Named)
            .ok_or(FormatError::UnknownLabelId { id: external }),
    }
}
