//! Error types for dynaform kernel operations.
//!
//! The ordering computation itself is total: schema and overlay documents
//! can be arbitrarily malformed and still produce a deterministic (if
//! useless) order. The only fallible surface is the strict field-path
//! lexer, which rejects paths it cannot tokenize instead of guessing.

/// Errors arising from malformed string field paths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A `[` segment was never closed.
    #[error("unterminated bracket segment starting at byte {0}")]
    UnterminatedBracket(usize),

    /// A quoted bracket key was never closed.
    #[error("unterminated quoted key starting at byte {0}")]
    UnterminatedQuote(usize),

    /// A bracket segment contained no key, as in `a[]`.
    #[error("empty bracket segment at byte {0}")]
    EmptyBracket(usize),
}
