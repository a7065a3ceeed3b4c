pub mod corpus_statistics;
pub(crate) mod helper;
pub mod idf;
#[allow(clippy::module_inception)]
pub mod indexer;
