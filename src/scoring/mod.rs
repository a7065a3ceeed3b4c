pub mod cosine;
pub mod tf_idf;
