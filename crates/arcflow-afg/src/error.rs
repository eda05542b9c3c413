//! Errors for the `.afg` format.

use thiserror::Error;

/// Convenience alias for results within the format crate.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors that can occur while reading or writing an `.afg` file.
///
/// Every reader failure is fatal to the single read call; the reader never
/// recovers a partial graph.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A required section marker or keyword was never found.
    #[error("missing '{0}' marker")]
    MissingMarker(&'static str),

    /// A keyword appeared out of its expected position.
    #[error("expected keyword '{expected}', found '{found}'")]
    KeywordMismatch {
        expected: &'static str,
        found: String,
    },

    /// The token stream ended while a field still needed tokens.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEnd { field: &'static str },

    /// A token that had to be a decimal integer was not one (or overflowed).
    #[error("invalid integer '{token}' in {field}")]
    InvalidInteger { token: String, field: &'static str },

    /// An arc's raw label does not index into the id table.
    #[error("arc label {index} out of range for id table of length {len}")]
    LabelIndexOutOfRange { index: u64, len: usize },

    /// A resolved external id is absent from the supplied label table.
    #[error("external id {id} not present in the supplied label table")]
    UnknownLabelId { id: u64 },

    /// The arc section did not contain exactly `3 * NA` integers.
    #[error("arc section has {found} integers, expected {expected} (3 x NA)")]
    ArcCountMismatch { expected: usize, found: usize },

    /// Strict mode only: declared `NV` disagrees with the derived vertex set.
    #[error("declared vertex count {declared} does not match derived count {derived}")]
    VertexCountMismatch { declared: u64, derived: usize },

    /// Writing a graph whose loss value falls inside the id-table index
    /// range would produce arcs that read back as loss arcs.
    #[error("loss value {loss} collides with id table indices 0..{len}")]
    LossIndexCollision { loss: u64, len: usize },

    /// I/O error from the path-based readers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
