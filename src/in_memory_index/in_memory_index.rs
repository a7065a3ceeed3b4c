use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::{
    indexer::corpus_statistics::CorpusStatistics,
    scoring::cosine::TermVector,
    utils::posting::Posting,
};

/// Read-only TF-IDF index: document -> term -> weight, plus the corpus IDF.
#[derive(Debug)]
pub struct InMemoryIndex {
    pub no_of_docs: usize, // no of documents in the collection
    pub no_of_terms: usize, // no of distinct terms in the collection
    document_vectors: BTreeMap<String, TermVector>,
    document_frequencies: FxHashMap<String, usize>,
    idf: FxHashMap<String, f64>,
}

impl InMemoryIndex {
    pub fn new(
        statistics: CorpusStatistics,
        idf: FxHashMap<String, f64>,
        document_vectors: BTreeMap<String, TermVector>,
    ) -> Self {
        Self {
            no_of_docs: statistics.no_of_docs,
            no_of_terms: idf.len(),
            document_vectors,
            document_frequencies: statistics.document_frequencies,
            idf,
        }
    }

    /// IDF of `term`, or 0 for terms never seen in the corpus.
    pub fn get_idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    pub fn get_document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    pub fn get_document_vector(&self, doc_id: &str) -> Option<&TermVector> {
        self.document_vectors.get(doc_id)
    }

    /// Documents in ascending id order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &TermVector)> {
        self.document_vectors
            .iter()
            .map(|(doc_id, vector)| (doc_id.as_str(), vector))
    }

    pub fn get_all_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.idf.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// Inverts the document vectors into per-term posting lists.
    ///
    /// Terms are in ascending order and each list is sorted by document id.
    /// Empty documents have no terms and so appear in no list.
    pub fn build_posting_lists(&self) -> BTreeMap<&str, Vec<Posting>> {
        let mut posting_lists: BTreeMap<&str, Vec<Posting>> = BTreeMap::new();
        for (doc_id, doc_vector) in self.documents() {
            for (term, weight) in doc_vector {
                posting_lists
                    .entry(term.as_str())
                    .or_default()
                    .push(Posting::new(doc_id.to_string(), *weight));
            }
        }
        posting_lists
    }

    pub fn no_of_empty_docs(&self) -> usize {
        self.document_vectors
            .values()
            .filter(|vector| vector.is_empty())
            .count()
    }
}
