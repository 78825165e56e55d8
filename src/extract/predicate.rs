//! Predicate discovery
//!
//! The clause root is the primary predicate. Tokens coordinated with the root
//! ("sleeps and eats") are predicates too. Predicates that are not direct
//! conjuncts of the root are not detected.

use crate::types::Sentence;

/// Find the predicate tokens of a sentence: the root, then every token listing
/// the root among its conjuncts, in sentence order.
///
/// Returns `None` when no token is its own head. If several tokens are, the
/// first one in sentence order is taken as the root.
pub fn find_predicates(sent: &Sentence) -> Option<Vec<usize>> {
    let root = sent.roots().next()?;

    let mut predicates = vec![root];
    predicates.extend(
        sent.tokens()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.conjuncts.contains(&root))
            .map(|(i, _)| i),
    );
    Some(predicates)
}
