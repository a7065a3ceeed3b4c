use std::path::Path;

use crate::{
    corpus::corpus_loader::load_documents,
    error::SearchEngineError,
    in_memory_index::in_memory_index::InMemoryIndex,
    indexer::indexer::Indexer,
    postings::postings_writer::write_postings_to_file,
    query_parser::tokenizer::SearchTokenizer,
    query_processor::{query_processor::QueryProcessor, utils::RankedDocument},
    utils::types::{Documents, SearchEngineMetadata},
};

/// Vector space search over an in-memory corpus.
///
/// The index is built once on construction and never changes afterwards;
/// every query is answered from that immutable state.
pub struct SearchEngine {
    index: InMemoryIndex,
    query_processor: QueryProcessor,
}

impl SearchEngine {
    pub fn from_documents(documents: Documents) -> Self {
        let search_tokenizer = SearchTokenizer::new();
        let indexer = Indexer::new(search_tokenizer.clone());
        let index = indexer.index(documents);
        let query_processor = QueryProcessor::new(search_tokenizer);

        Self {
            index,
            query_processor,
        }
    }

    pub fn from_directory<P: AsRef<Path>>(dataset_directory: P) -> Result<Self, SearchEngineError> {
        let documents = load_documents(dataset_directory)?;
        Ok(Self::from_documents(documents))
    }

    pub fn handle_query(&self, query: &str) -> Vec<RankedDocument> {
        self.query_processor.process_query(query, &self.index)
    }

    pub fn write_postings<P: AsRef<Path>>(&self, path: P) -> Result<(), SearchEngineError> {
        write_postings_to_file(path, &self.index)
    }

    pub fn get_index_metadata(&self) -> SearchEngineMetadata {
        SearchEngineMetadata {
            no_of_docs: self.index.no_of_docs,
            no_of_terms: self.index.no_of_terms,
            no_of_empty_docs: self.index.no_of_empty_docs(),
        }
    }
}
