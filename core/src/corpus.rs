use crate::error::{CorpusError, MIN_DOCUMENTS};
use crate::DocId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Stable identifier, usually the file path.
    pub identifier: String,
    pub text: String,
}

impl Document {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), text: text.into() }
    }
}

/// Ordered set of documents compared in one run.
///
/// Documents are sorted by identifier and identifiers are unique, so the
/// position of a document (its [`DocId`]) is the same on every run over the
/// same inputs.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Sort and deduplicate `documents` by identifier. The first document
    /// seen for an identifier wins.
    pub fn new(mut documents: Vec<Document>) -> Result<Self, CorpusError> {
        // stable sort keeps the first occurrence ahead of later duplicates
        documents.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        documents.dedup_by(|later, earlier| later.identifier == earlier.identifier);
        if documents.len() < MIN_DOCUMENTS {
            return Err(CorpusError::TooFewDocuments { found: documents.len() });
        }
        Ok(Self { documents })
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn get(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id as usize)
    }

    pub fn identifier(&self, doc_id: DocId) -> Option<&str> {
        self.get(doc_id).map(|d| d.identifier.as_str())
    }

    pub fn documents(&self) -> &[Document] { &self.documents }
}
