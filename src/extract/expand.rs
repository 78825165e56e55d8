//! Span expansion
//!
//! Turns single tokens into readable phrases: subjects and objects grow to
//! their noun chunk, predicates pick up their verb modifiers.

use crate::types::Sentence;

/// Text of the noun chunk covering `idx`, or `None` if no chunk covers it.
pub fn expand_noun(sent: &Sentence, idx: usize) -> Option<String> {
    sent.chunk_of(idx).map(|chunk| sent.span_text(chunk))
}

/// Expand a verb with the modifiers attached directly to it.
///
/// Modifiers are `advmod`, `neg`, `prep`, `prt` and `agent` children (plus
/// `aux`/`auxpass` when `include_auxiliaries` is set). Left modifiers, the
/// verb, then right modifiers are joined with single spaces, each side in
/// sentence order.
pub fn expand_verb(sent: &Sentence, verb: usize, include_auxiliaries: bool) -> String {
    let is_modifier = |idx: &usize| {
        let dep = &sent.token(*idx).dep;
        dep.is_verb_modifier() || (include_auxiliaries && dep.is_auxiliary())
    };

    sent.lefts(verb)
        .filter(is_modifier)
        .chain(std::iter::once(verb))
        .chain(sent.rights(verb).filter(is_modifier))
        .map(|i| sent.token(i).text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures;
    use crate::types::Token;

    #[test]
    fn test_noun_chunk_text() {
        let sent = fixtures::reef();
        assert_eq!(expand_noun(&sent, 3).as_deref(), Some("The great barrier reef"));
        assert_eq!(expand_noun(&sent, 8).as_deref(), Some("climate change"));
        // any member of the chunk expands to the whole chunk
        assert_eq!(expand_noun(&sent, 7).as_deref(), Some("climate change"));
    }

    #[test]
    fn test_noun_without_chunk() {
        let sent = fixtures::she_never_gave_up();
        assert_eq!(expand_noun(&sent, 0), None);
    }

    #[test]
    fn test_verb_with_right_preposition() {
        assert_eq!(expand_verb(&fixtures::obama(), 2, false), "born in");
        assert_eq!(expand_verb(&fixtures::reef(), 5, false), "endangered by");
    }

    #[test]
    fn test_verb_with_auxiliaries() {
        assert_eq!(expand_verb(&fixtures::obama(), 2, true), "was born in");
        assert_eq!(expand_verb(&fixtures::reef(), 5, true), "is endangered by");
    }

    #[test]
    fn test_verb_left_and_right_modifiers() {
        let sent = fixtures::she_never_gave_up();
        assert_eq!(expand_verb(&sent, 2, false), "never gave up quickly");
    }

    #[test]
    fn test_unlisted_labels_excluded() {
        // "He runs home" : npadvmod is not a verb modifier
        let sent = fixtures::sentence(
            vec![
                Token::new("He", "nsubj", 1),
                Token::new("runs", "ROOT", 1),
                Token::new("home", "npadvmod", 1),
            ],
            &[(0, 1)],
        );
        assert_eq!(expand_verb(&sent, 1, true), "runs");
    }

    #[test]
    fn test_grandchildren_not_included() {
        // "very" modifies "quickly", not the verb
        let sent = fixtures::sentence(
            vec![
                Token::new("Cats", "nsubj", 1),
                Token::new("run", "ROOT", 1),
                Token::new("very", "advmod", 3),
                Token::new("quickly", "advmod", 1),
            ],
            &[(0, 1)],
        );
        assert_eq!(expand_verb(&sent, 1, false), "run quickly");
    }
}
