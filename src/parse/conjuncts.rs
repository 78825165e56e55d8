//! Conjunct derivation
//!
//! Parsers that only emit `conj` arcs leave coordination implicit. The
//! conjuncts of a token are every other member of its coordination: climb
//! `conj` arcs to the first member, then walk `conj` children to the right.

use rustc_hash::FxHashSet;

use crate::types::{DepLabel, Token};

/// Compute the conjunct list of every token in a sentence.
///
/// Heads outside the sentence are treated as roots here; sentence validation
/// reports them afterwards.
pub fn derive_conjuncts(tokens: &[Token]) -> Vec<Vec<usize>> {
    (0..tokens.len())
        .map(|i| conjuncts_of(tokens, i))
        .collect()
}

fn conjuncts_of(tokens: &[Token], idx: usize) -> Vec<usize> {
    let start = coordination_start(tokens, idx);

    let mut members = vec![start];
    let mut seen = FxHashSet::default();
    seen.insert(start);
    let mut cursor = 0;
    while cursor < members.len() {
        let word = members[cursor];
        cursor += 1;
        for (child, token) in tokens.iter().enumerate() {
            if child > word
                && token.head == word
                && token.dep == DepLabel::Conj
                && seen.insert(child)
            {
                members.push(child);
            }
        }
    }

    members.retain(|&m| m != idx);
    members.sort_unstable();
    members
}

fn coordination_start(tokens: &[Token], idx: usize) -> usize {
    let mut start = idx;
    // bounded by the sentence length so cyclic heads cannot loop forever
    for _ in 0..tokens.len() {
        let token = &tokens[start];
        if token.dep != DepLabel::Conj || token.head == start || token.head >= tokens.len() {
            break;
        }
        start = token.head;
    }
    start
}
