use crate::corpus::Corpus;
use crate::index::{SimilarityIndex, SimilarityResult};
use crate::report::{Report, Thresholds};
use crate::tokenizer::{Tokenizer, WordTokenizer};
use crate::vector::{DocumentVector, IdfScheme, Vectorizer};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub idf: IdfScheme,
    /// Answer queries on the rayon thread pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { idf: IdfScheme::Standard, parallel: true }
    }
}

/// Vocabulary and vectors for one corpus, ready to be queried.
pub struct SimilarityEngine<'c> {
    corpus: &'c Corpus,
    vocabulary: Vocabulary,
    index: SimilarityIndex,
    config: EngineConfig,
}

impl<'c> SimilarityEngine<'c> {
    pub fn build(corpus: &'c Corpus, config: &EngineConfig) -> Self {
        Self::build_with(corpus, config, &WordTokenizer)
    }

    pub fn build_with<T: Tokenizer>(corpus: &'c Corpus, config: &EngineConfig, tokenizer: &T) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.documents().iter().map(|d| tokenizer.tokenize(&d.text)).collect();
        let vocabulary = Vocabulary::build(&tokenized);
        tracing::info!(num_docs = corpus.len(), num_terms = vocabulary.len(), "built vocabulary");

        let vectorizer = Vectorizer::new(&vocabulary, config.idf);
        let vectors: Vec<DocumentVector> = tokenized.iter().map(|tokens| vectorizer.vectorize(tokens)).collect();
        let degenerate = vectors.iter().filter(|v| v.is_zero()).count();
        if degenerate > 0 {
            tracing::debug!(degenerate, "documents without weighted terms score zero against everything");
        }
        let index = SimilarityIndex::build(vectors);

        Self { corpus, vocabulary, index, config: *config }
    }

    pub fn corpus(&self) -> &Corpus { self.corpus }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn index(&self) -> &SimilarityIndex { &self.index }

    /// Query every document against the rest of the corpus.
    pub fn similarities(&self) -> Vec<SimilarityResult> {
        let results = self.index.query_all(self.config.parallel);
        tracing::debug!(queries = results.len(), parallel = self.config.parallel, "answered similarity queries");
        results
    }

    pub fn report(&self, thresholds: &Thresholds) -> Report {
        Report::build(self.corpus, &self.similarities(), thresholds)
    }
}
