//! Subject-predicate-object triple extraction over dependency parses.
//!
//! Parsing is delegated to a [`DependencyParser`]; this crate walks the
//! resulting trees, finds each clause's predicate, subjects and objects, and
//! expands them into readable phrases.
//!
//! ```rust,ignore
//! use spo_extract::{extract_spo_triples, JsonDocParser};
//!
//! let parser = JsonDocParser::new().with_json(&std::fs::read_to_string("obama.json")?)?;
//! for triple in extract_spo_triples(&parser, "Obama was born in Hawaii.")? {
//!     println!("{triple}");
//! }
//! ```

/// Enter a tracing span for an extraction stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("extract_stage", stage = $name $(, $key = $value)*).entered();
    };
}

/// Emit a tracing event at `$level` (when the `tracing` feature is enabled).
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)*);
    };
}

pub mod config;
pub mod error;
pub mod extract;
pub mod parse;
pub mod types;

pub use config::{ChunkFallback, ExtractorConfig, RootPolicy};
pub use error::{ExtractError, Result, SentenceError};
pub use extract::{extract_spo_triples, TripleAssembler};
pub use parse::{parse_doc_json, DependencyParser, DocJson, JsonDocParser};
pub use types::{ChunkSpan, DepLabel, ParsedDoc, Sentence, SpoTriple, Token};
