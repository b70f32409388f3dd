// ─────────────────────────────────────────────────────────────────────
// Algrid — Alignment Grid Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all alignment grid failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A sentence pair does not fit the fixed-capacity matrix.
    /// Recoverable: the caller skips or truncates the pair.
    #[error("sentence too long: f_len={f_len} e_len={e_len} (capacity {max})")]
    SentenceTooLong {
        e_len: usize,
        f_len: usize,
        max: usize,
    },

    /// Coordinate or span corner outside the current working rectangle.
    #[error("out of range: ({f}, {e}) outside working rectangle {f_len}x{e_len}")]
    OutOfRange {
        f: usize,
        e: usize,
        f_len: usize,
        e_len: usize,
    },

    /// Span with an inverted source or target range.
    #[error("invalid span: {0}")]
    InvalidSpan(String),

    /// Malformed word alignment input.
    #[error("alignment error: {0}")]
    Alignment(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type GridResult<T> = Result<T, GridError>;
