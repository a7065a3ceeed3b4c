use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::debug;

use crate::{
    in_memory_index::in_memory_index::InMemoryIndex,
    indexer::helper::count_terms,
    query_parser::tokenizer::SearchTokenizer,
    query_processor::utils::{FloatDoc, RankedDocument},
    scoring::{
        cosine::{TermVector, cosine_similarity},
        tf_idf::compute_query_term_weight,
    },
};

/// Maximum number of documents returned for a query.
pub const MAX_RESULTS: usize = 10;

/// Ranks every document of an index against a free-text query.
///
/// The query is weighted like a document, `(1 + log10(tf)) * idf`, with the
/// corpus IDF and no length normalization. Documents are scored by cosine
/// similarity; the result holds at most [`MAX_RESULTS`] documents ordered by
/// descending score, then ascending document id.
pub struct QueryProcessor {
    search_tokenizer: SearchTokenizer,
}

impl QueryProcessor {
    pub fn new(search_tokenizer: SearchTokenizer) -> Self {
        Self { search_tokenizer }
    }

    /// Terms unknown to the corpus get weight 0, which leaves every score
    /// unchanged.
    pub fn build_query_vector(&self, query: &str, index: &InMemoryIndex) -> TermVector {
        count_terms(self.search_tokenizer.tokenize(query))
            .into_iter()
            .map(|(term, f_tq)| {
                let weight = compute_query_term_weight(f_tq, index.get_idf(&term));
                (term, weight)
            })
            .collect()
    }

    pub fn process_query(&self, query: &str, index: &InMemoryIndex) -> Vec<RankedDocument> {
        let query_vector = self.build_query_vector(query, index);
        debug!(query, no_of_terms = query_vector.len(), "processing query");

        let mut pq: BinaryHeap<Reverse<FloatDoc>> = BinaryHeap::with_capacity(MAX_RESULTS + 1);
        for (doc_id, doc_vector) in index.documents() {
            let score = cosine_similarity(&query_vector, doc_vector);
            pq.push(Reverse(FloatDoc(RankedDocument {
                doc_id: doc_id.to_string(),
                score,
            })));
            if pq.len() > MAX_RESULTS {
                pq.pop();
            }
        }

        pq.into_sorted_vec()
            .into_iter()
            .map(|Reverse(FloatDoc(ranked))| ranked)
            .collect()
    }
}
