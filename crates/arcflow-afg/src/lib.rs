//! The `.afg` arc-flow graph text format.
//!
//! An `.afg` file is a whitespace-delimited token stream. Everything outside
//! the two sections below (instance data, comments from other tools) is
//! ignored.
//!
//! ```text
//! .afg layout (token stream):
//!
//! IDS: <id_0> <id_1> ... <id_k>     id table: position -> external id,
//!                                   run ends at the first non-integer token
//! #GRAPH_BEGIN#
//! NBTYPES: <n>                      number of item types
//! S: <start>                        start vertex
//! Ts: <t_0> ... <t_{n-1}>           one terminal vertex per type
//! LOSS: <loss>                      raw label value marking loss arcs
//! NV: <vertex count>                informational; checked in strict mode
//! NA: <arc count>
//! <u> <v> <raw>                     exactly NA triples, file order
//! ...
//! #GRAPH_END#
//! ```
//!
//! Reading resolves each arc's raw label once: a raw value equal to `LOSS`
//! is the loss sentinel (checked before any table lookup), otherwise the raw
//! value indexes the id table, optionally followed by a lookup in a
//! user-supplied label table. Any structural violation is a fatal
//! [`FormatError`]; no partial graph is ever returned.

mod error;
mod read;
mod write;

pub use error::{FormatError, Result};
pub use read::{
    read_path, read_path_with, read_str, read_str_opts, read_str_with, read_str_with_opts,
    ReadOptions,
};
pub use write::{to_string, write_graph};
