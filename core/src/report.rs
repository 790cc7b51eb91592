use crate::corpus::Corpus;
use crate::index::SimilarityResult;
use serde::Serialize;

/// Percentage thresholds applied when building a [`Report`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Similarities above this are violations and are displayed as 100.
    pub fail: f64,
    /// Similarities below this are dropped from the report.
    pub ignore: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { fail: 100.0, ignore: 0.0 }
    }
}

/// Extra per-file information attached by the caller, never by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    /// `None` when the file could not be read.
    pub line_count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityEntry {
    pub identifier: String,
    /// Percentage for display: `raw_similarity`, or 100 above the fail threshold.
    pub similarity: f64,
    /// Percentage rounded to two decimals.
    pub raw_similarity: f64,
    pub exceeds_threshold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FileMetadata>,
    pub entries: Vec<SimilarityEntry>,
}

/// Per-document similarity lists, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub files: Vec<FileReport>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Report {
    pub fn build(corpus: &Corpus, results: &[SimilarityResult], thresholds: &Thresholds) -> Self {
        let mut files = Vec::new();
        for result in results {
            let Some(identifier) = corpus.identifier(result.query) else { continue };
            let mut entries = Vec::new();
            for m in &result.matches {
                if m.doc_id == result.query {
                    continue;
                }
                let Some(other) = corpus.identifier(m.doc_id) else { continue };
                let percentage = (m.score as f64 * 100.0).clamp(0.0, 100.0);
                if percentage < thresholds.ignore {
                    continue;
                }
                let raw_similarity = round2(percentage);
                let exceeds_threshold = percentage > thresholds.fail;
                entries.push(SimilarityEntry {
                    identifier: other.to_string(),
                    similarity: if exceeds_threshold { 100.0 } else { raw_similarity },
                    raw_similarity,
                    exceeds_threshold,
                    metadata: None,
                });
            }
            if entries.is_empty() {
                continue;
            }
            files.push(FileReport { identifier: identifier.to_string(), metadata: None, entries });
        }
        Report { files }
    }

    pub fn len(&self) -> usize { self.files.len() }

    pub fn is_empty(&self) -> bool { self.files.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &FileReport> { self.files.iter() }

    pub fn get(&self, identifier: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.identifier == identifier)
    }

    /// Pairs whose similarity is above the fail threshold, as
    /// `(file, other, raw_similarity)`.
    pub fn violations(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.files.iter().flat_map(|f| {
            f.entries
                .iter()
                .filter(|e| e.exceeds_threshold)
                .map(move |e| (f.identifier.as_str(), e.identifier.as_str(), e.raw_similarity))
        })
    }

    pub fn threshold_exceeded(&self) -> bool {
        self.violations().next().is_some()
    }

    /// Attach metadata to every file and entry, looked up by identifier.
    pub fn attach_metadata<F>(&mut self, mut lookup: F)
    where
        F: FnMut(&str) -> FileMetadata,
    {
        for file in &mut self.files {
            file.metadata = Some(lookup(&file.identifier));
            for entry in &mut file.entries {
                entry.metadata = Some(lookup(&entry.identifier));
            }
        }
    }

    /// Rewrite every identifier, e.g. to shorten paths for display.
    pub fn relabel<F>(&mut self, mut label: F)
    where
        F: FnMut(&str) -> String,
    {
        for file in &mut self.files {
            file.identifier = label(&file.identifier);
            for entry in &mut file.entries {
                entry.identifier = label(&entry.identifier);
            }
        }
    }
}
