use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

/// Raw document text keyed by document id.
///
/// Ordered so that every pass over the corpus visits documents in the same
/// order.
pub type Documents = BTreeMap<String, String>;

/// Raw occurrence count of every distinct term in one document.
pub type TermFrequencyCounter = FxHashMap<String, u32>;

#[derive(Clone, Debug, PartialEq)]
pub struct SearchEngineMetadata {
    pub no_of_docs: usize,
    pub no_of_terms: usize,
    pub no_of_empty_docs: usize,
}
