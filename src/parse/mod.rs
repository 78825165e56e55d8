//! Dependency-parser seam
//!
//! Sentence segmentation, tagging, dependency labelling and noun-chunk
//! detection happen outside this crate. A [`DependencyParser`] turns raw text
//! into a [`ParsedDoc`]; the extractor only ever sees that arena.

pub mod conjuncts;
pub mod json;

use rustc_hash::FxHashMap;

pub use conjuncts::derive_conjuncts;
pub use json::{DocJson, SentenceJson, TokenJson};

use crate::error::{ExtractError, Result};
use crate::types::ParsedDoc;

/// Produces dependency parses for raw text.
///
/// Implementations are passed explicitly to
/// [`extract_spo_triples`](crate::extract_spo_triples). Closures of the form
/// `Fn(&str) -> Result<ParsedDoc>` implement it too, which is handy for
/// supplying synthetic trees in tests.
pub trait DependencyParser {
    /// Parse `text` into sentences with noun chunks.
    fn parse(&self, text: &str) -> Result<ParsedDoc>;
}

impl<F> DependencyParser for F
where
    F: Fn(&str) -> Result<ParsedDoc>,
{
    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        self(text)
    }
}

/// Parse a single JSON document into a [`ParsedDoc`].
pub fn parse_doc_json(json: &str) -> Result<ParsedDoc> {
    DocJson::from_json(json)?.into_doc()
}

/// A parser backed by pre-computed parses, looked up by exact text.
///
/// Blank text always parses to an empty document.
#[derive(Debug, Clone, Default)]
pub struct JsonDocParser {
    docs: FxHashMap<String, ParsedDoc>,
}

impl JsonDocParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parse for `text`.
    pub fn insert(&mut self, text: impl Into<String>, doc: ParsedDoc) {
        self.docs.insert(text.into(), doc);
    }

    /// Register a JSON document under its source text, returning that text.
    pub fn insert_json(&mut self, json: &str) -> Result<String> {
        let raw = DocJson::from_json(json)?;
        let text = raw.source_text();
        let doc = raw.into_doc()?;
        self.docs.insert(text.clone(), doc);
        Ok(text)
    }

    /// Builder-style [`insert_json`](Self::insert_json).
    pub fn with_json(mut self, json: &str) -> Result<Self> {
        self.insert_json(json)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DependencyParser for JsonDocParser {
    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        if text.trim().is_empty() {
            return Ok(ParsedDoc::default());
        }
        self.docs
            .get(text)
            .cloned()
            .ok_or_else(|| ExtractError::UnknownText(text.to_string()))
    }
}
