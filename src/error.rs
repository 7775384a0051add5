//! Error types for the compression pipeline and its collaborators.

/// Errors surfaced by the core pipeline, plus the ambient collaborators (ingest, CLI)
/// built around it in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller (or the ingest collaborator) fed more bytes than the configured limit.
    #[error("input of {size} bytes exceeds the {limit}-byte limit")]
    InputOversize {
        /// Size of the rejected input, in bytes.
        size: u64,
        /// The limit that was exceeded, in bytes.
        limit: u64,
    },

    /// `aggressiveness` outside `{-1, 0..=9}`, or an unrecognised profile string.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// `max_tokens` is so small that even the first sentence cannot fit.
    #[error("max_tokens too small to fit even the first sentence")]
    BudgetTooSmall,

    /// Output still exceeds `max_tokens` after heading-continuity repair.
    #[error("output exceeds max_tokens after heading-continuity repair")]
    BudgetUnsatisfiable,

    /// An invariant was violated; this should be unreachable in correct code.
    #[error("internal invariant violated: {0}")]
    Internal(String),

    /// File or stream I/O failure in a collaborator (CLI, ingest).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A decoder collaborator could not interpret its input.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type for pipeline and collaborator operations.
pub type Result<T> = std::result::Result<T, Error>;
