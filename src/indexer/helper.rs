use crate::{query_parser::tokenizer::Token, utils::types::TermFrequencyCounter};

/// Counts raw occurrences of every distinct token.
pub(crate) fn count_terms(tokens: Vec<Token>) -> TermFrequencyCounter {
    let mut term_frequency = TermFrequencyCounter::default();
    for token in tokens {
        *term_frequency.entry(token.word).or_insert(0) += 1;
    }
    term_frequency
}
