use crate::vector::DocumentVector;
use crate::DocId;
use rayon::prelude::*;

/// Similarity of one stored document to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub doc_id: DocId,
    /// Cosine similarity in [0, 1].
    pub score: f32,
}

/// Every match for one query document, in corpus order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    pub query: DocId,
    pub matches: Vec<Match>,
}

/// Holds the vectors of a whole corpus, indexed by [`DocId`].
#[derive(Debug, Default, Clone)]
pub struct SimilarityIndex {
    vectors: Vec<DocumentVector>,
}

impl SimilarityIndex {
    pub fn build(vectors: Vec<DocumentVector>) -> Self {
        Self { vectors }
    }

    pub fn len(&self) -> usize { self.vectors.len() }

    pub fn is_empty(&self) -> bool { self.vectors.is_empty() }

    pub fn vector(&self, doc_id: DocId) -> Option<&DocumentVector> {
        self.vectors.get(doc_id as usize)
    }

    /// Score `vector` against every stored document except `exclude`.
    ///
    /// Results stay in corpus order; exclusion is by position, so a different
    /// document with identical content is still scored.
    pub fn query(&self, vector: &DocumentVector, exclude: DocId) -> Vec<Match> {
        self.vectors
            .iter()
            .enumerate()
            .filter(|(i, _)| *i as DocId != exclude)
            .map(|(i, stored)| Match { doc_id: i as DocId, score: vector.dot(stored).clamp(0.0, 1.0) })
            .collect()
    }

    /// Query every stored document against the rest of the index.
    pub fn query_all(&self, parallel: bool) -> Vec<SimilarityResult> {
        let run = |doc_id: usize| SimilarityResult {
            query: doc_id as DocId,
            matches: self.query(&self.vectors[doc_id], doc_id as DocId),
        };
        if parallel {
            // collect() on an indexed parallel iterator keeps the input order
            (0..self.vectors.len()).into_par_iter().map(run).collect()
        } else {
            (0..self.vectors.len()).map(run).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SimilarityIndex {
        SimilarityIndex::build(vec![
            DocumentVector::from_weights(vec![(0, 1.0), (1, 1.0)]),
            DocumentVector::from_weights(vec![(0, 1.0), (1, 1.0)]),
            DocumentVector::from_weights(vec![(2, 1.0)]),
            DocumentVector::default(),
        ])
    }

    #[test]
    fn query_excludes_by_position_and_keeps_corpus_order() {
        let idx = index();
        let matches = idx.query(idx.vector(0).unwrap(), 0);
        let ids: Vec<DocId> = matches.iter().map(|m| m.doc_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!((matches[0].score - 1.0).abs() < 1e-6);
        assert_eq!(matches[1].score, 0.0);
        assert_eq!(matches[2].score, 0.0);
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let idx = index();
        assert_eq!(idx.query_all(true), idx.query_all(false));
        let all = idx.query_all(true);
        assert_eq!(all.len(), 4);
        for (i, result) in all.iter().enumerate() {
            assert_eq!(result.query as usize, i);
            assert_eq!(result.matches.len(), 3);
            assert!(result.matches.iter().all(|m| m.doc_id != result.query));
        }
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let idx = index();
        for result in idx.query_all(false) {
            for m in result.matches {
                assert!((0.0..=1.0).contains(&m.score));
            }
        }
    }
}
