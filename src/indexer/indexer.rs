use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{info, instrument};

use crate::{
    in_memory_index::in_memory_index::InMemoryIndex,
    indexer::{corpus_statistics::CorpusStatistics, idf::compute_idf_map},
    query_parser::tokenizer::SearchTokenizer,
    scoring::{cosine::TermVector, tf_idf::compute_term_weight},
    utils::types::Documents,
};

/// Builds the in-memory TF-IDF index from raw documents.
///
/// Runs once per corpus: statistics, then IDF, then the normalized TF-IDF
/// vectors. The resulting index is read-only.
pub struct Indexer {
    search_tokenizer: SearchTokenizer,
}

impl Indexer {
    pub fn new(search_tokenizer: SearchTokenizer) -> Self {
        Self { search_tokenizer }
    }

    #[instrument(skip_all, fields(no_of_docs = documents.len()))]
    pub fn index(&self, documents: Documents) -> InMemoryIndex {
        let statistics = CorpusStatistics::compute(documents, &self.search_tokenizer);
        let idf = compute_idf_map(&statistics.document_frequencies, statistics.no_of_docs);
        let document_vectors = build_tf_idf_vectors(&statistics, &idf);

        info!(
            no_of_docs = statistics.no_of_docs,
            no_of_terms = idf.len(),
            "built tf-idf index"
        );

        InMemoryIndex::new(statistics, idf, document_vectors)
    }
}

/// Weights every term of every document by
/// `(1 + log10(tf)) * idf / document_length`.
///
/// Empty documents get an empty vector.
pub fn build_tf_idf_vectors(
    statistics: &CorpusStatistics,
    idf: &FxHashMap<String, f64>,
) -> BTreeMap<String, TermVector> {
    let mut document_vectors = BTreeMap::new();

    for (doc_id, term_frequency) in &statistics.term_frequencies {
        let doc_length = statistics.get_document_length(doc_id).unwrap_or(0.0);
        let mut doc_vector =
            TermVector::with_capacity_and_hasher(term_frequency.len(), Default::default());

        for (term, f_td) in term_frequency {
            let term_idf = idf.get(term).copied().unwrap_or(0.0);
            if let Some(weight) = compute_term_weight(*f_td, term_idf, doc_length) {
                doc_vector.insert(term.clone(), weight);
            }
        }

        document_vectors.insert(doc_id.clone(), doc_vector);
    }

    document_vectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tf_idf::{compute_idf, compute_tf};

    fn index(entries: &[(&str, &str)]) -> InMemoryIndex {
        let documents: Documents = entries
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect();
        Indexer::new(SearchTokenizer::new()).index(documents)
    }

    #[test]
    fn test_stored_weights_match_formula() {
        let index = index(&[
            ("d1", "cat dog"),
            ("d2", "cat cat dog dog"),
            ("d3", "fish"),
        ]);

        let idf_cat = compute_idf(3, 2);
        let d2_length = 8f64.sqrt();
        let expected = compute_tf(2) * idf_cat / d2_length;
        let stored = index.get_document_vector("d2").unwrap()["cat"];
        assert!((stored - expected).abs() < 1e-9);

        let expected = compute_idf(3, 1) / 1.0;
        let stored = index.get_document_vector("d3").unwrap()["fish"];
        assert!((stored - expected).abs() < 1e-9);
    }

    #[test]
    fn test_every_vector_key_has_idf() {
        let index = index(&[("a", "x y z x"), ("b", "y y"), ("c", "z q q q")]);

        for (_, vector) in index.documents() {
            for term in vector.keys() {
                assert!(index.contains_term(term));
            }
        }
    }

    #[test]
    fn test_empty_document_has_empty_vector() {
        let index = index(&[("d1", "cat"), ("empty", "")]);

        assert_eq!(index.no_of_docs, 2);
        assert!(index.get_document_vector("empty").unwrap().is_empty());
    }

    #[test]
    fn test_term_in_every_document_has_zero_weight() {
        let index = index(&[("a", "the cat"), ("b", "the dog")]);

        assert_eq!(index.get_idf("the"), 0.0);
        assert_eq!(index.get_document_vector("a").unwrap()["the"], 0.0);
    }
}
