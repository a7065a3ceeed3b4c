use std::{fs, io, path::Path};

use tracing::{debug, info, warn};

use crate::{error::SearchEngineError, utils::types::Documents};

/// Reads every file directly inside `dir_path` as one document.
///
/// The document id is the file name without its extension and the contents
/// are trimmed. Entries are visited in path order; when two files share a
/// stem the later one replaces the earlier. Subdirectories are skipped.
pub fn load_documents<P: AsRef<Path>>(dir_path: P) -> Result<Documents, SearchEngineError> {
    let dir_path = dir_path.as_ref();
    let directory_error = |source: io::Error| SearchEngineError::CorpusDirectory {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(directory_error)? {
        paths.push(entry.map_err(directory_error)?.path());
    }
    paths.sort();

    let mut documents = Documents::new();
    for path in paths {
        if !path.is_file() {
            debug!(?path, "skipping non-file corpus entry");
            continue;
        }

        let doc_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| SearchEngineError::InvalidDocumentName { path: path.clone() })?
            .to_string();

        let contents = fs::read_to_string(&path).map_err(|source| SearchEngineError::CorpusRead {
            path: path.clone(),
            source,
        })?;
        debug!(doc_id = %doc_id, bytes = contents.len(), "loaded document");

        if documents
            .insert(doc_id.clone(), contents.trim().to_string())
            .is_some()
        {
            warn!(doc_id = %doc_id, ?path, "duplicate document id, keeping the later file");
        }
    }

    info!(no_of_docs = documents.len(), ?dir_path, "loaded corpus");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_load_documents_strips_extension_and_trims() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("d1.txt"), "  cat dog \n").unwrap();
        fs::write(dir.path().join("d2"), "fish").unwrap();
        fs::write(dir.path().join("archive.tar.gz"), "x").unwrap();

        let documents = load_documents(dir.path()).unwrap();

        assert_eq!(documents.len(), 3);
        assert_eq!(documents["d1"], "cat dog");
        assert_eq!(documents["d2"], "fish");
        assert_eq!(documents["archive.tar"], "x");
    }

    #[test]
    fn test_load_documents_skips_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.txt"), "hidden").unwrap();
        fs::write(dir.path().join("top.txt"), "visible").unwrap();

        let documents = load_documents(dir.path()).unwrap();

        assert_eq!(documents.len(), 1);
        assert!(documents.contains_key("top"));
    }

    #[test]
    fn test_empty_file_is_an_empty_document() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blank.txt"), " \n\t ").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents["blank"], "");
    }

    #[test]
    fn test_duplicate_stem_keeps_later_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("doc.md"), "first").unwrap();
        fs::write(dir.path().join("doc.txt"), "second").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents["doc"], "second");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_documents(dir.path().join("does-not-exist"));

        assert!(matches!(
            result,
            Err(SearchEngineError::CorpusDirectory { .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        match load_documents(dir.path()) {
            Err(SearchEngineError::CorpusRead { source, .. }) => {
                assert_eq!(source.kind(), ErrorKind::InvalidData);
            }
            other => panic!("expected a read error, got {:?}", other),
        }
    }
}
