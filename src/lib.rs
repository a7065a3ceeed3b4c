pub mod config;
pub mod corpus;
pub mod error;
pub mod in_memory_index;
pub mod indexer;
pub mod postings;
pub mod query_parser;
pub mod query_processor;
pub mod scoring;
pub mod search_engine;
pub mod utils;

pub use error::SearchEngineError;
pub use query_processor::{query_processor::MAX_RESULTS, utils::RankedDocument};
pub use search_engine::search_engine::SearchEngine;
