//! Extractor configuration
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "chunk_fallback": "token_text",
//!   "missing_root": "fail",
//!   "include_auxiliaries": false,
//!   "parallel": false
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What noun-phrase expansion yields for a token no noun chunk covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkFallback {
    /// Use the bare token text.
    #[default]
    TokenText,
    /// Drop every triple whose subject or object has no covering chunk.
    Skip,
}

/// What to do with a sentence that has no root token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootPolicy {
    /// Abort the whole extraction with `ExtractError::MissingRoot`.
    #[default]
    Fail,
    /// Skip the sentence and keep going.
    SkipSentence,
}

/// Configuration for [`TripleAssembler`](crate::extract::TripleAssembler)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub chunk_fallback: ChunkFallback,

    #[serde(default)]
    pub missing_root: RootPolicy,

    /// Also fold `aux`/`auxpass` children into predicate phrases
    /// ("was born in" instead of "born in").
    #[serde(default)]
    pub include_auxiliaries: bool,

    /// Process sentences on the rayon pool. Output order is unaffected.
    #[serde(default)]
    pub parallel: bool,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_chunk_fallback(mut self, fallback: ChunkFallback) -> Self {
        self.chunk_fallback = fallback;
        self
    }

    pub fn with_missing_root(mut self, policy: RootPolicy) -> Self {
        self.missing_root = policy;
        self
    }

    pub fn with_include_auxiliaries(mut self, include: bool) -> Self {
        self.include_auxiliaries = include;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
