//! Error types for parse ingestion and triple extraction.

use thiserror::Error;

/// Structural defects found while assembling a [`Sentence`](crate::types::Sentence)
/// arena from parser output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    #[error("token {token} has head {head}, but the sentence only has {len} tokens")]
    HeadOutOfRange { token: usize, head: usize, len: usize },

    #[error("token {token} lists conjunct {conjunct}, but the sentence only has {len} tokens")]
    ConjunctOutOfRange {
        token: usize,
        conjunct: usize,
        len: usize,
    },

    #[error("noun chunk {start}..{end} is outside the sentence ({len} tokens)")]
    ChunkOutOfRange { start: usize, end: usize, len: usize },

    #[error("noun chunk starting at {start} is empty")]
    EmptyChunk { start: usize },

    #[error("noun chunks {first_start}..{first_end} and {second_start}..{second_end} overlap")]
    OverlappingChunks {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },
}

/// Errors surfaced by [`extract_spo_triples`](crate::extract_spo_triples) and the
/// parser seam.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No token in the sentence is its own head. The parser broke its contract.
    #[error("sentence {sentence} has no root token")]
    MissingRoot { sentence: usize },

    #[error("sentence {sentence} is malformed: {source}")]
    InvalidSentence {
        sentence: usize,
        #[source]
        source: SentenceError,
    },

    #[error("no parse is registered for text {0:?}")]
    UnknownText(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_message() {
        let err = ExtractError::MissingRoot { sentence: 3 };
        assert_eq!(err.to_string(), "sentence 3 has no root token");
    }

    #[test]
    fn test_invalid_sentence_keeps_source() {
        let err = ExtractError::InvalidSentence {
            sentence: 1,
            source: SentenceError::HeadOutOfRange {
                token: 2,
                head: 9,
                len: 4,
            },
        };
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("token 2 has head 9, but the sentence only has 4 tokens")
        );
        assert!(err.to_string().starts_with("sentence 1 is malformed"));
    }
}
