use rustc_hash::FxHashMap;

/// Sparse term-weight vector.
pub type TermVector = FxHashMap<String, f64>;

/// L2 norm of a sparse vector.
pub fn vector_norm(vector: &TermVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity between a query vector and a document vector.
///
/// The dot product runs over the query terms; terms missing from the document
/// contribute 0. If either vector has norm 0 the similarity is 0.
pub fn cosine_similarity(query_vector: &TermVector, doc_vector: &TermVector) -> f64 {
    let query_norm = vector_norm(query_vector);
    let doc_norm = vector_norm(doc_vector);
    if query_norm == 0.0 || doc_norm == 0.0 {
        return 0.0;
    }

    let numerator: f64 = query_vector
        .iter()
        .map(|(term, weight)| weight * doc_vector.get(term).copied().unwrap_or(0.0))
        .sum();

    numerator / (query_norm * doc_norm)
}
