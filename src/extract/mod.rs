//! Triple extraction
//!
//! Leaf components ([`predicate`], [`subject`], [`object`], [`expand`]) are
//! pure functions over a [`Sentence`](crate::types::Sentence) arena; the
//! [`assembler`] wires them together.

pub mod assembler;
pub mod expand;
pub mod object;
pub mod predicate;
pub mod subject;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assembler::{extract_spo_triples, TripleAssembler};
pub use expand::{expand_noun, expand_verb};
pub use object::find_objects;
pub use predicate::find_predicates;
pub use subject::find_subjects;
