use crate::vocabulary::Vocabulary;
use crate::TermId;
use std::collections::BTreeMap;

/// Inverse document frequency weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfScheme {
    /// `log2(N / df)`
    #[default]
    Standard,
    /// `log2(1 + N / df)`; terms present in every document keep some weight.
    Smoothed,
}

impl IdfScheme {
    pub fn weight(self, num_docs: u32, df: u32) -> f32 {
        if df == 0 {
            return 0.0;
        }
        let ratio = num_docs as f32 / df as f32;
        match self {
            IdfScheme::Standard => ratio.log2(),
            IdfScheme::Smoothed => (1.0 + ratio).log2(),
        }
    }
}

/// Sparse, L2-normalized tf-idf vector.
///
/// Entries are sorted by term id and never hold a zero weight. A document
/// without any weighted term is the zero vector (no entries).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentVector {
    entries: Vec<(TermId, f32)>,
}

impl DocumentVector {
    /// Build from raw weights, dropping zeros and normalizing to unit length.
    pub fn from_weights(weights: impl IntoIterator<Item = (TermId, f32)>) -> Self {
        let sorted: BTreeMap<TermId, f32> = weights.into_iter().filter(|(_, w)| *w != 0.0).collect();
        let norm = sorted.values().map(|w| w * w).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Self::default();
        }
        Self { entries: sorted.into_iter().map(|(tid, w)| (tid, w / norm)).collect() }
    }

    pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn weight(&self, tid: TermId) -> f32 {
        self.entries
            .binary_search_by_key(&tid, |(t, _)| *t)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Dot product over the shared term ids. Both vectors are unit length,
    /// so this is their cosine similarity.
    pub fn dot(&self, other: &DocumentVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            if ta == tb {
                sum += wa * wb;
                i += 1;
                j += 1;
            } else if ta < tb {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// Turns token sequences into [`DocumentVector`]s against a frozen vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer<'a> {
    vocabulary: &'a Vocabulary,
    scheme: IdfScheme,
}

impl<'a> Vectorizer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, scheme: IdfScheme) -> Self {
        Self { vocabulary, scheme }
    }

    pub fn idf(&self, tid: TermId) -> f32 {
        self.scheme.weight(self.vocabulary.num_docs(), self.vocabulary.doc_frequency(tid))
    }

    pub fn vectorize<T: AsRef<str>>(&self, tokens: &[T]) -> DocumentVector {
        let mut tf: BTreeMap<TermId, u32> = BTreeMap::new();
        for token in tokens {
            // tokens outside the vocabulary carry no weight
            if let Some(tid) = self.vocabulary.id_of(token.as_ref()) {
                *tf.entry(tid).or_insert(0) += 1;
            }
        }
        DocumentVector::from_weights(tf.into_iter().map(|(tid, count)| (tid, count as f32 * self.idf(tid))))
    }
}

/// Vectorize with the standard `log2(N / df)` weighting.
pub fn vectorize<T: AsRef<str>>(tokens: &[T], vocabulary: &Vocabulary) -> DocumentVector {
    Vectorizer::new(vocabulary, IdfScheme::Standard).vectorize(tokens)
}
