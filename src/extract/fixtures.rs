//! Hand-built parses shared by the extractor tests.

use crate::parse::derive_conjuncts;
use crate::types::{ChunkSpan, Sentence, Token};

/// Build a sentence, deriving conjuncts from the `conj` arcs.
pub fn sentence(mut tokens: Vec<Token>, chunks: &[(usize, usize)]) -> Sentence {
    let derived = derive_conjuncts(&tokens);
    for (token, conj) in tokens.iter_mut().zip(derived) {
        token.conjuncts = conj;
    }
    let chunks = chunks.iter().map(|&(s, e)| ChunkSpan::new(s, e)).collect();
    Sentence::new(tokens, chunks).unwrap()
}

/// "Obama was born in Hawaii."
pub fn obama() -> Sentence {
    sentence(
        vec![
            Token::new("Obama", "nsubjpass", 2),
            Token::new("was", "auxpass", 2),
            Token::new("born", "ROOT", 2),
            Token::new("in", "prep", 2),
            Token::new("Hawaii", "pobj", 3).with_whitespace(""),
            Token::new(".", "punct", 2).with_whitespace(""),
        ],
        &[(0, 1), (4, 5)],
    )
}

/// "The great barrier reef is endangered by climate change."
pub fn reef() -> Sentence {
    sentence(
        vec![
            Token::new("The", "det", 3),
            Token::new("great", "amod", 3),
            Token::new("barrier", "compound", 3),
            Token::new("reef", "nsubjpass", 5),
            Token::new("is", "auxpass", 5),
            Token::new("endangered", "ROOT", 5),
            Token::new("by", "agent", 5),
            Token::new("climate", "compound", 8),
            Token::new("change", "pobj", 6).with_whitespace(""),
            Token::new(".", "punct", 5).with_whitespace(""),
        ],
        &[(0, 4), (7, 9)],
    )
}

/// "Alice and Bob sleep."
pub fn alice_and_bob() -> Sentence {
    sentence(
        vec![
            Token::new("Alice", "nsubj", 3),
            Token::new("and", "cc", 0),
            Token::new("Bob", "conj", 0),
            Token::new("sleep", "ROOT", 3).with_whitespace(""),
            Token::new(".", "punct", 3).with_whitespace(""),
        ],
        &[(0, 1), (2, 3)],
    )
}

/// "The cat eats fish and mice."
pub fn cat_eats() -> Sentence {
    sentence(
        vec![
            Token::new("The", "det", 1),
            Token::new("cat", "nsubj", 2),
            Token::new("eats", "ROOT", 2),
            Token::new("fish", "dobj", 2),
            Token::new("and", "cc", 3),
            Token::new("mice", "conj", 3).with_whitespace(""),
            Token::new(".", "punct", 2).with_whitespace(""),
        ],
        &[(0, 2), (3, 4), (5, 6)],
    )
}

/// "The dog sleeps and eats bones."
pub fn dog_sleeps_and_eats() -> Sentence {
    sentence(
        vec![
            Token::new("The", "det", 1),
            Token::new("dog", "nsubj", 2),
            Token::new("sleeps", "ROOT", 2),
            Token::new("and", "cc", 2),
            Token::new("eats", "conj", 2),
            Token::new("bones", "dobj", 4).with_whitespace(""),
            Token::new(".", "punct", 2).with_whitespace(""),
        ],
        &[(0, 2), (5, 6)],
    )
}

/// "Alice sleeps and Bob eats fish."
pub fn alice_sleeps_bob_eats() -> Sentence {
    sentence(
        vec![
            Token::new("Alice", "nsubj", 1),
            Token::new("sleeps", "ROOT", 1),
            Token::new("and", "cc", 1),
            Token::new("Bob", "nsubj", 4),
            Token::new("eats", "conj", 1),
            Token::new("fish", "dobj", 4).with_whitespace(""),
            Token::new(".", "punct", 1).with_whitespace(""),
        ],
        &[(0, 1), (3, 4), (5, 6)],
    )
}

/// "She never gave up quickly." with no noun chunks at all.
pub fn she_never_gave_up() -> Sentence {
    sentence(
        vec![
            Token::new("She", "nsubj", 2),
            Token::new("never", "neg", 2),
            Token::new("gave", "ROOT", 2),
            Token::new("up", "prt", 2),
            Token::new("quickly", "advmod", 2).with_whitespace(""),
            Token::new(".", "punct", 2).with_whitespace(""),
        ],
        &[],
    )
}
