use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::{
    indexer::helper::count_terms,
    query_parser::tokenizer::SearchTokenizer,
    scoring::tf_idf::compute_document_length,
    utils::types::{Documents, TermFrequencyCounter},
};

/// Per-document term counts and lengths plus corpus-wide document frequencies.
///
/// Built in a single ordered pass over the corpus. The raw text of each
/// document is dropped as soon as its counter has been derived.
#[derive(Debug, Default)]
pub struct CorpusStatistics {
    pub no_of_docs: usize,
    pub term_frequencies: BTreeMap<String, TermFrequencyCounter>,
    /// L2 norm of each document's raw term frequency vector.
    pub document_lengths: BTreeMap<String, f64>,
    /// Number of documents containing each term at least once.
    pub document_frequencies: FxHashMap<String, usize>,
}

impl CorpusStatistics {
    pub fn compute(documents: Documents, tokenizer: &SearchTokenizer) -> Self {
        let mut statistics = CorpusStatistics::default();

        for (doc_id, text) in documents {
            let tokens = tokenizer.tokenize(&text);
            let term_frequency = count_terms(tokens);
            let doc_length = compute_document_length(term_frequency.values().copied());

            // counter keys are the document's distinct term set
            for term in term_frequency.keys() {
                *statistics
                    .document_frequencies
                    .entry(term.clone())
                    .or_insert(0) += 1;
            }

            statistics.document_lengths.insert(doc_id.clone(), doc_length);
            statistics.term_frequencies.insert(doc_id, term_frequency);
            statistics.no_of_docs += 1;
        }

        statistics
    }

    pub fn get_document_length(&self, doc_id: &str) -> Option<f64> {
        self.document_lengths.get(doc_id).copied()
    }
}
