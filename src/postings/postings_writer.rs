use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{error::SearchEngineError, in_memory_index::in_memory_index::InMemoryIndex};

/// Writes a human readable dump of every indexed term: its document
/// frequency, IDF and posting list with per-document TF-IDF weights.
///
/// Terms are written in ascending order, postings by ascending document id.
pub fn write_postings<W: Write>(writer: &mut W, index: &InMemoryIndex) -> io::Result<()> {
    let posting_lists = index.build_posting_lists();

    for term in index.get_all_terms() {
        writeln!(writer, "Term: {}", term)?;
        writeln!(
            writer,
            "Document Frequency (df): {}",
            index.get_document_frequency(term)
        )?;
        writeln!(
            writer,
            "Inverse Document Frequency (idf): {:.6}",
            index.get_idf(term)
        )?;
        writeln!(writer, "Posting List:")?;
        for posting in posting_lists.get(term).into_iter().flatten() {
            writeln!(
                writer,
                "  Document ID: {}, TF-IDF: {:.6}",
                posting.doc_id, posting.tf_idf
            )?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

pub fn write_postings_to_file<P: AsRef<Path>>(
    path: P,
    index: &InMemoryIndex,
) -> Result<(), SearchEngineError> {
    let path = path.as_ref();
    let write_error = |source: io::Error| SearchEngineError::PostingsWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_postings(&mut writer, index).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    info!(?path, no_of_terms = index.no_of_terms, "wrote postings report");
    Ok(())
}
