use rustc_hash::FxHashMap;

use crate::scoring::tf_idf::compute_idf;

/// Computes log10(N / df) for every term seen in the corpus.
///
/// Terms that appear in every document are kept with an IDF of 0.
pub fn compute_idf_map(
    document_frequencies: &FxHashMap<String, usize>,
    no_of_docs: usize,
) -> FxHashMap<String, f64> {
    document_frequencies
        .iter()
        .map(|(term, f_t)| (term.clone(), compute_idf(no_of_docs, *f_t)))
        .collect()
}
