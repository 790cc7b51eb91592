use thiserror::Error;

/// Minimum number of documents a corpus must hold to be compared.
pub const MIN_DOCUMENTS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("too few documents to compare: found {found}, need at least {MIN_DOCUMENTS}")]
    TooFewDocuments { found: usize },
}
