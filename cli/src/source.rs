use crate::strip::strip_python;
use dupdetect_core::Document;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read a file, substituting invalid UTF-8 instead of failing.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Number of lines in the file, blank lines and comments included.
pub fn line_count(path: &Path) -> Option<usize> {
    match read_lossy(path) {
        Ok(text) => Some(text.lines().count()),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to count lines");
            None
        }
    }
}

pub fn is_python(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("py")
}

/// Load every readable file as a document; unreadable files are skipped.
pub fn load_documents(paths: &[PathBuf], only_code: bool) -> Vec<Document> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = match read_lossy(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open file");
                continue;
            }
        };
        let text = if only_code && is_python(path) { strip_python(&text) } else { text };
        documents.push(Document::new(path.to_string_lossy(), text));
    }
    tracing::info!(loaded = documents.len(), requested = paths.len(), "loaded source files");
    documents
}
