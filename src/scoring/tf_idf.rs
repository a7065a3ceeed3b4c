//! TF-IDF weighting
//!
//! Formula:
//! w_t,d = (1 + log10(f_t,d)) * log10(N / f_t) / ℓ_d
//!
//! where ℓ_d = sqrt(Σ(t∈d) f_t,d²) is the length of the raw frequency vector.
//! Queries use the same weight without the division by ℓ_d.

/// Compute IDF component for a term
/// IDF = log10(N / f_t)
///
/// No smoothing: a term that appears in every document gets an IDF of 0.
///
/// # Arguments
/// * `n` - Total number of documents (N)
/// * `f_t` - Number of documents containing term t (document frequency), at least 1
pub fn compute_idf(n: usize, f_t: usize) -> f64 {
    (n as f64 / f_t as f64).log10()
}

/// Compute the log-dampened TF component
/// TF = 1 + log10(f_t,d)
///
/// # Arguments
/// * `f_td` - Raw term frequency, at least 1 since the term is present
pub fn compute_tf(f_td: u32) -> f64 {
    1.0 + (f_td as f64).log10()
}

/// Compute the length of a raw term frequency vector
/// ℓ_d = sqrt(Σ f_t,d²)
pub fn compute_document_length<I>(frequencies: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    frequencies
        .into_iter()
        .map(|f_td| {
            let f_td = f_td as f64;
            f_td * f_td
        })
        .sum::<f64>()
        .sqrt()
}

/// Compute the unnormalized weight of a term, used for query vectors
pub fn compute_query_term_weight(f_tq: u32, idf: f64) -> f64 {
    compute_tf(f_tq) * idf
}

/// Compute the normalized TF-IDF weight of a term in a document
///
/// Returns `None` when the document length is 0. Only an empty document has
/// length 0, and it has no terms to weight.
pub fn compute_term_weight(f_td: u32, idf: f64, doc_len: f64) -> Option<f64> {
    if doc_len == 0.0 {
        return None;
    }
    Some(compute_tf(f_td) * idf / doc_len)
}
