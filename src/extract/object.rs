//! Object candidates
//!
//! Objects are collected sentence-wide rather than per predicate, so every
//! predicate's subjects are paired with every object in the sentence. Clausal
//! complements are not object candidates.

use crate::types::Sentence;

/// Find all object tokens of a sentence.
///
/// Direct objects (`pobj`, `dobj`, `acomp`, `attr`, `oprd`) come first in
/// sentence order, followed by the conjuncts of each direct object
/// ("apples and pears"), grouped per direct object.
pub fn find_objects(sent: &Sentence) -> Vec<usize> {
    let direct: Vec<usize> = (0..sent.len())
        .filter(|&i| sent.token(i).dep.is_object())
        .collect();

    let conjuncts: Vec<usize> = direct
        .iter()
        .flat_map(|&d| {
            let conj = &sent.token(d).conjuncts;
            (0..sent.len()).filter(move |t| conj.contains(t))
        })
        .collect();

    let mut objects = direct;
    objects.extend(conjuncts);
    objects
}
