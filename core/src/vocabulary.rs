use crate::TermId;
use std::collections::{HashMap, HashSet};

/// Token dictionary shared by every document of a corpus.
///
/// Ids are dense and handed out in the order tokens are first seen while
/// scanning documents in corpus order, so two builds over the same corpus
/// produce the same ids. Frozen once built.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    dictionary: HashMap<String, TermId>,
    tokens: Vec<String>,
    df: Vec<u32>,
    num_docs: u32,
}

impl Vocabulary {
    pub fn build<D, T>(documents: D) -> Self
    where
        D: IntoIterator,
        D::Item: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut vocab = Vocabulary::default();
        for doc in documents {
            let mut seen_in_doc: HashSet<TermId> = HashSet::new();
            for token in doc {
                let token = token.as_ref();
                let tid = match vocab.dictionary.get(token) {
                    Some(&tid) => tid,
                    None => {
                        let id = vocab.tokens.len() as TermId;
                        vocab.dictionary.insert(token.to_string(), id);
                        vocab.tokens.push(token.to_string());
                        vocab.df.push(0);
                        id
                    }
                };
                if seen_in_doc.insert(tid) {
                    vocab.df[tid as usize] += 1;
                }
            }
            vocab.num_docs += 1;
        }
        vocab
    }

    pub fn id_of(&self, token: &str) -> Option<TermId> {
        self.dictionary.get(token).copied()
    }

    pub fn token_of(&self, id: TermId) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Number of documents containing the token; 0 for unknown ids.
    pub fn doc_frequency(&self, id: TermId) -> u32 {
        self.df.get(id as usize).copied().unwrap_or(0)
    }

    /// Number of documents the vocabulary was built from.
    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn len(&self) -> usize { self.tokens.len() }

    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
}
