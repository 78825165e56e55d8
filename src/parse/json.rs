//! JSON parse documents
//!
//! The on-disk shape of a dependency parse, close to what a spaCy `Doc`
//! exports. All indices are sentence-local and chunk ends are exclusive.
//!
//! ```json
//! {
//!   "text": "Alice and Bob sleep.",
//!   "sents": [
//!     {
//!       "tokens": [
//!         { "text": "Alice", "dep": "nsubj", "head": 3 },
//!         { "text": "and",   "dep": "cc",    "head": 0 },
//!         { "text": "Bob",   "dep": "conj",  "head": 0 },
//!         { "text": "sleep", "dep": "ROOT",  "head": 3, "whitespace": "" },
//!         { "text": ".",     "dep": "punct", "head": 3, "whitespace": "" }
//!       ],
//!       "noun_chunks": [ { "start": 0, "end": 1 }, { "start": 2, "end": 3 } ]
//!     }
//!   ]
//! }
//! ```
//!
//! Extra per-token fields (`pos`, `lemma`, ...) are ignored. When `conjuncts`
//! is omitted it is derived from the `conj` arcs.

use serde::{Deserialize, Serialize};

use super::conjuncts::derive_conjuncts;
use crate::error::{ExtractError, Result};
use crate::types::{ChunkSpan, ParsedDoc, Sentence, Token};

/// A whole parsed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocJson {
    /// The text the parse was produced from
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub sents: Vec<SentenceJson>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceJson {
    pub tokens: Vec<TokenJson>,

    #[serde(default)]
    pub noun_chunks: Vec<ChunkSpan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenJson {
    pub text: String,
    pub dep: String,
    pub head: usize,

    #[serde(default = "default_whitespace")]
    pub whitespace: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjuncts: Option<Vec<usize>>,
}

fn default_whitespace() -> String {
    " ".to_string()
}

impl DocJson {
    /// Read a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The text this document is registered under: `text` when present,
    /// otherwise the sentences' surface text joined by single spaces.
    pub fn source_text(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        self.sents
            .iter()
            .map(|s| {
                let mut out = String::new();
                for (i, t) in s.tokens.iter().enumerate() {
                    out.push_str(&t.text);
                    if i + 1 < s.tokens.len() {
                        out.push_str(&t.whitespace);
                    }
                }
                out
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert into validated sentence arenas.
    pub fn into_doc(self) -> Result<ParsedDoc> {
        let sentences = self
            .sents
            .into_iter()
            .enumerate()
            .map(|(idx, sent)| sent.into_sentence(idx))
            .collect::<Result<Vec<_>>>()?;
        Ok(ParsedDoc::new(sentences))
    }
}

impl SentenceJson {
    fn into_sentence(self, sentence_idx: usize) -> Result<Sentence> {
        let mut explicit = Vec::with_capacity(self.tokens.len());
        let mut tokens: Vec<Token> = Vec::with_capacity(self.tokens.len());
        for t in self.tokens {
            explicit.push(t.conjuncts);
            tokens.push(Token::new(t.text, &t.dep, t.head).with_whitespace(t.whitespace));
        }

        if explicit.iter().any(Option::is_none) {
            let derived = derive_conjuncts(&tokens);
            for ((token, given), conj) in tokens.iter_mut().zip(explicit).zip(derived) {
                token.conjuncts = given.unwrap_or(conj);
            }
        } else {
            for (token, given) in tokens.iter_mut().zip(explicit) {
                token.conjuncts = given.unwrap_or_default();
            }
        }

        Sentence::new(tokens, self.noun_chunks).map_err(|source| ExtractError::InvalidSentence {
            sentence: sentence_idx,
            source,
        })
    }
}
