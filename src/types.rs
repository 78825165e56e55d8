//! Core data model
//!
//! A parsed document is a list of [`Sentence`] arenas. Each sentence owns its
//! tokens, and every relation between tokens (head, conjuncts, noun chunks) is
//! stored as a sentence-local index into that arena.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SentenceError;

// ============================================================================
// DepLabel
// ============================================================================

/// Dependency label, classified once when the parse is ingested.
///
/// Labels the extractor never inspects are kept verbatim in [`DepLabel::Other`].
/// Any unlisted label that names a subject relation (contains `subj`) is kept in
/// [`DepLabel::OtherSubject`] so it still matches as a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DepLabel {
    Root,
    Nsubj,
    NsubjPass,
    Csubj,
    CsubjPass,
    OtherSubject(String),
    Pobj,
    Dobj,
    Acomp,
    Attr,
    Oprd,
    Advmod,
    Neg,
    Prep,
    Prt,
    Agent,
    Aux,
    AuxPass,
    Conj,
    Cc,
    Other(String),
}

impl DepLabel {
    /// Classify a raw parser label.
    pub fn parse(label: &str) -> Self {
        match label {
            "ROOT" | "root" => DepLabel::Root,
            "nsubj" => DepLabel::Nsubj,
            "nsubjpass" | "nsubj:pass" => DepLabel::NsubjPass,
            "csubj" => DepLabel::Csubj,
            "csubjpass" | "csubj:pass" => DepLabel::CsubjPass,
            "pobj" => DepLabel::Pobj,
            "dobj" => DepLabel::Dobj,
            "acomp" => DepLabel::Acomp,
            "attr" => DepLabel::Attr,
            "oprd" => DepLabel::Oprd,
            "advmod" => DepLabel::Advmod,
            "neg" => DepLabel::Neg,
            "prep" => DepLabel::Prep,
            "prt" => DepLabel::Prt,
            "agent" => DepLabel::Agent,
            "aux" => DepLabel::Aux,
            "auxpass" | "aux:pass" => DepLabel::AuxPass,
            "conj" => DepLabel::Conj,
            "cc" => DepLabel::Cc,
            other if other.contains("subj") => DepLabel::OtherSubject(other.to_string()),
            other => DepLabel::Other(other.to_string()),
        }
    }

    /// Returns the normalized label. Aliases collapse to one spelling
    /// (`root` -> `ROOT`, `nsubj:pass` -> `nsubjpass`, `aux:pass` -> `auxpass`),
    /// which is also the serialized form.
    pub fn as_str(&self) -> &str {
        match self {
            DepLabel::Root => "ROOT",
            DepLabel::Nsubj => "nsubj",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::Csubj => "csubj",
            DepLabel::CsubjPass => "csubjpass",
            DepLabel::Pobj => "pobj",
            DepLabel::Dobj => "dobj",
            DepLabel::Acomp => "acomp",
            DepLabel::Attr => "attr",
            DepLabel::Oprd => "oprd",
            DepLabel::Advmod => "advmod",
            DepLabel::Neg => "neg",
            DepLabel::Prep => "prep",
            DepLabel::Prt => "prt",
            DepLabel::Agent => "agent",
            DepLabel::Aux => "aux",
            DepLabel::AuxPass => "auxpass",
            DepLabel::Conj => "conj",
            DepLabel::Cc => "cc",
            DepLabel::OtherSubject(s) | DepLabel::Other(s) => s,
        }
    }

    /// Subject relations (nominal or clausal, active or passive).
    pub fn is_subject(&self) -> bool {
        matches!(
            self,
            DepLabel::Nsubj
                | DepLabel::NsubjPass
                | DepLabel::Csubj
                | DepLabel::CsubjPass
                | DepLabel::OtherSubject(_)
        )
    }

    /// Direct-object relations: `pobj`, `dobj`, `acomp`, `attr`, `oprd`.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            DepLabel::Pobj | DepLabel::Dobj | DepLabel::Acomp | DepLabel::Attr | DepLabel::Oprd
        )
    }

    /// Verb modifiers folded into a predicate phrase: `advmod`, `neg`, `prep`,
    /// `prt`, `agent`.
    pub fn is_verb_modifier(&self) -> bool {
        matches!(
            self,
            DepLabel::Advmod | DepLabel::Neg | DepLabel::Prep | DepLabel::Prt | DepLabel::Agent
        )
    }

    /// Auxiliaries (`aux`, `auxpass`), optionally folded into predicate phrases.
    pub fn is_auxiliary(&self) -> bool {
        matches!(self, DepLabel::Aux | DepLabel::AuxPass)
    }
}

impl std::str::FromStr for DepLabel {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DepLabel::parse(value))
    }
}

impl From<String> for DepLabel {
    fn from(value: String) -> Self {
        DepLabel::parse(&value)
    }
}

impl From<DepLabel> for String {
    fn from(label: DepLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Token
// ============================================================================

/// A single token of a sentence arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Trailing whitespace in the source text ("" or " " in the common case)
    pub whitespace: String,
    /// Relation to the head token
    pub dep: DepLabel,
    /// Sentence-local index of the head; equal to the token's own index for a root
    pub head: usize,
    /// Sentence-local indices of coordinated tokens, in sentence order
    pub conjuncts: Vec<usize>,
}

impl Token {
    /// Create a token followed by a single space and with no conjuncts.
    pub fn new(text: impl Into<String>, dep: &str, head: usize) -> Self {
        Self {
            text: text.into(),
            whitespace: " ".to_string(),
            dep: DepLabel::parse(dep),
            head,
            conjuncts: Vec::new(),
        }
    }

    /// Set the trailing whitespace
    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    /// Set the conjunct indices
    pub fn with_conjuncts(mut self, conjuncts: Vec<usize>) -> Self {
        self.conjuncts = conjuncts;
        self
    }
}

// ============================================================================
// ChunkSpan
// ============================================================================

/// A noun chunk as a half-open token range `[start, end)` within one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkSpan {
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// One sentence: a token arena plus its noun chunks.
///
/// Construction validates every index, so accessors never go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
    chunks: Vec<ChunkSpan>,
    /// Token index -> index into `chunks`
    chunk_of: Vec<Option<usize>>,
}

impl Sentence {
    /// Build a sentence, checking heads, conjuncts, and chunk bounds.
    ///
    /// Chunks may be given in any order; they are stored sorted by start.
    pub fn new(tokens: Vec<Token>, mut chunks: Vec<ChunkSpan>) -> Result<Self, SentenceError> {
        let len = tokens.len();

        for (i, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(SentenceError::HeadOutOfRange {
                    token: i,
                    head: token.head,
                    len,
                });
            }
            if let Some(&bad) = token.conjuncts.iter().find(|&&c| c >= len) {
                return Err(SentenceError::ConjunctOutOfRange {
                    token: i,
                    conjunct: bad,
                    len,
                });
            }
        }

        chunks.sort_by_key(|c| (c.start, c.end));
        let mut chunk_of = vec![None; len];
        for (ci, chunk) in chunks.iter().enumerate() {
            if chunk.end > len || chunk.start > chunk.end {
                return Err(SentenceError::ChunkOutOfRange {
                    start: chunk.start,
                    end: chunk.end,
                    len,
                });
            }
            if chunk.is_empty() {
                return Err(SentenceError::EmptyChunk { start: chunk.start });
            }
            if ci > 0 && chunks[ci - 1].end > chunk.start {
                let prev = chunks[ci - 1];
                return Err(SentenceError::OverlappingChunks {
                    first_start: prev.start,
                    first_end: prev.end,
                    second_start: chunk.start,
                    second_end: chunk.end,
                });
            }
            for slot in &mut chunk_of[chunk.start..chunk.end] {
                *slot = Some(ci);
            }
        }

        Ok(Self {
            tokens,
            chunks,
            chunk_of,
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, idx: usize) -> &Token {
        &self.tokens[idx]
    }

    pub fn chunks(&self) -> &[ChunkSpan] {
        &self.chunks
    }

    /// Indices of tokens that are their own head, in sentence order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(i, t)| t.head == *i)
            .map(|(i, _)| i)
    }

    /// Syntactic children of `idx`, in sentence order.
    pub fn children(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == idx && *i != idx)
            .map(|(i, _)| i)
    }

    /// Children of `idx` that precede it.
    pub fn lefts(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.children(idx).filter(move |&c| c < idx)
    }

    /// Children of `idx` that follow it.
    pub fn rights(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.children(idx).filter(move |&c| c > idx)
    }

    /// The noun chunk covering `idx`, if any.
    pub fn chunk_of(&self, idx: usize) -> Option<&ChunkSpan> {
        self.chunk_of
            .get(idx)
            .copied()
            .flatten()
            .map(|ci| &self.chunks[ci])
    }

    /// Source text of a token range, keeping inner whitespace as parsed.
    pub fn span_text(&self, span: &ChunkSpan) -> String {
        let mut out = String::new();
        let tokens = &self.tokens[span.start..span.end];
        for (i, token) in tokens.iter().enumerate() {
            out.push_str(&token.text);
            if i + 1 < tokens.len() {
                out.push_str(&token.whitespace);
            }
        }
        out
    }

    /// Source text of the whole sentence.
    pub fn text(&self) -> String {
        if self.tokens.is_empty() {
            return String::new();
        }
        self.span_text(&ChunkSpan::new(0, self.tokens.len()))
    }
}

// ============================================================================
// ParsedDoc
// ============================================================================

/// Parser output for one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub sentences: Vec<Sentence>,
}

impl ParsedDoc {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn num_sentences(&self) -> usize {
        self.sentences.len()
    }
}

// ============================================================================
// SpoTriple
// ============================================================================

/// An extracted subject-predicate-object triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpoTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl SpoTriple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for SpoTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SPO_triple(subject={}, predicate={}, object={})",
            self.subject, self.predicate, self.object
        )
    }
}
