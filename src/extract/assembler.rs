//! Triple assembly: runs the finders and expanders over each sentence.
//!
//! For every sentence: find predicates; for every predicate, pair each of its
//! subjects with every object in the sentence and expand all three into
//! phrases. Triples keep discovery order (sentence, predicate, subject,
//! object) and are never deduplicated.
//!
//! Sentences are independent, so with [`ExtractorConfig::parallel`] they run
//! on the rayon pool and are concatenated back in sentence order.

use rayon::prelude::*;

use super::expand::{expand_noun, expand_verb};
use super::object::find_objects;
use super::predicate::find_predicates;
use super::subject::find_subjects;
use crate::config::{ChunkFallback, ExtractorConfig, RootPolicy};
use crate::error::{ExtractError, Result};
use crate::parse::DependencyParser;
use crate::types::{ParsedDoc, Sentence, SpoTriple};

/// Stateless triple extractor over parsed documents.
#[derive(Debug, Clone, Default)]
pub struct TripleAssembler {
    config: ExtractorConfig,
}

impl TripleAssembler {
    /// Create an assembler with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with custom config
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse `text` with `parser` and extract its triples.
    pub fn extract<P>(&self, parser: &P, text: &str) -> Result<Vec<SpoTriple>>
    where
        P: DependencyParser + ?Sized,
    {
        let doc = parser.parse(text)?;
        self.extract_doc(&doc)
    }

    /// Extract triples from an already parsed document.
    pub fn extract_doc(&self, doc: &ParsedDoc) -> Result<Vec<SpoTriple>> {
        trace_stage!("document", sentences = doc.num_sentences());

        let per_sentence: Vec<Vec<SpoTriple>> = if self.config.parallel {
            doc.sentences
                .par_iter()
                .enumerate()
                .map(|(idx, sent)| self.extract_sentence(idx, sent))
                .collect::<Result<_>>()?
        } else {
            doc.sentences
                .iter()
                .enumerate()
                .map(|(idx, sent)| self.extract_sentence(idx, sent))
                .collect::<Result<_>>()?
        };

        Ok(per_sentence.into_iter().flatten().collect())
    }

    /// Extract triples from one sentence. `sentence_idx` is only used for
    /// error reporting and tracing.
    pub fn extract_sentence(
        &self,
        sentence_idx: usize,
        sent: &Sentence,
    ) -> Result<Vec<SpoTriple>> {
        trace_stage!("sentence", sentence = sentence_idx);

        if sent.is_empty() {
            return Ok(Vec::new());
        }

        let Some(predicates) = find_predicates(sent) else {
            return match self.config.missing_root {
                RootPolicy::Fail => Err(ExtractError::MissingRoot {
                    sentence: sentence_idx,
                }),
                RootPolicy::SkipSentence => {
                    trace_event!(warn, sentence = sentence_idx, "skipping sentence without root");
                    Ok(Vec::new())
                }
            };
        };

        let mut triples = Vec::new();
        for &predicate in &predicates {
            let subjects = find_subjects(sent, predicate);
            if subjects.is_empty() {
                continue;
            }
            let objects = find_objects(sent);
            let predicate_text = expand_verb(sent, predicate, self.config.include_auxiliaries);

            for &subject in &subjects {
                let Some(subject_text) = self.noun_phrase(sent, subject) else {
                    continue;
                };
                for &object in &objects {
                    let Some(object_text) = self.noun_phrase(sent, object) else {
                        continue;
                    };
                    triples.push(SpoTriple::new(
                        subject_text.clone(),
                        predicate_text.clone(),
                        object_text,
                    ));
                }
            }
        }

        trace_event!(
            debug,
            sentence = sentence_idx,
            predicates = predicates.len(),
            triples = triples.len(),
            "sentence done"
        );
        Ok(triples)
    }

    /// Noun-phrase expansion with the configured fallback applied.
    fn noun_phrase(&self, sent: &Sentence, idx: usize) -> Option<String> {
        if let Some(text) = expand_noun(sent, idx) {
            return Some(text);
        }
        match self.config.chunk_fallback {
            ChunkFallback::TokenText => Some(sent.token(idx).text.clone()),
            ChunkFallback::Skip => {
                trace_event!(debug, token = idx, "no noun chunk, dropping candidate");
                None
            }
        }
    }
}

/// Extract subject-predicate-object triples from `text` with the default
/// configuration.
///
/// An empty text (or one the parser splits into no sentences) yields no
/// triples. A sentence without a root token fails the whole call with
/// [`ExtractError::MissingRoot`].
pub fn extract_spo_triples<P>(parser: &P, text: &str) -> Result<Vec<SpoTriple>>
where
    P: DependencyParser + ?Sized,
{
    TripleAssembler::new().extract(parser, text)
}
