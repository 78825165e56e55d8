//! Subject matching

use crate::types::Sentence;

/// Find the subjects bound to `predicate`, in sentence order.
///
/// A token matches when it is a subject headed by the predicate, or when one
/// of its conjuncts is. The second rule picks up "Bob" in "Alice and Bob
/// sleep", whose own head is "Alice". An empty result means the predicate has
/// no grammatical subject (an imperative, say) and yields no triples.
pub fn find_subjects(sent: &Sentence, predicate: usize) -> Vec<usize> {
    let bound = |idx: usize| {
        let token = sent.token(idx);
        token.dep.is_subject() && token.head == predicate
    };

    (0..sent.len())
        .filter(|&i| bound(i) || sent.token(i).conjuncts.iter().any(|&c| bound(c)))
        .collect()
}
