pub mod corpus;
pub mod engine;
pub mod error;
pub mod index;
pub mod report;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub type TermId = u32;
pub type DocId = u32;

pub use corpus::{Corpus, Document};
pub use engine::{EngineConfig, SimilarityEngine};
pub use error::CorpusError;
pub use index::{Match, SimilarityIndex, SimilarityResult};
pub use report::{FileMetadata, FileReport, Report, SimilarityEntry, Thresholds};
pub use vector::{DocumentVector, IdfScheme, Vectorizer};
pub use vocabulary::Vocabulary;
