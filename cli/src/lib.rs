pub mod args;
pub mod discover;
pub mod output;
pub mod source;
pub mod strip;

use anyhow::{Context, Result};
use args::Args;
use dupdetect_core::{Corpus, FileMetadata, SimilarityEngine};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    BadInput = 1,
    ThresholdExceeded = 2,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("path does not exist or is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("too few files to compare, you need to supply at least 2")]
    TooFewFiles,
    #[error("supplied file does not exist: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("not enough source code files found")]
    NotEnoughSources,
    #[error("the project root directory does not exist or is not a directory: {}", .0.display())]
    BadProjectRoot(PathBuf),
}

/// Compare every selected file with every other one and write the report to
/// `out` (JSON or colored text), plus CSV when requested.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<ExitStatus> {
    let root = args.project_root_dir.as_deref().map(discover::project_root).transpose()?;
    let sources = discover::resolve_sources(args)?;
    let documents = source::load_documents(&sources, args.only_code);
    let corpus = Corpus::new(documents).map_err(|err| {
        tracing::error!(error = %err, "corpus rejected");
        InputError::NotEnoughSources
    })?;

    let engine = SimilarityEngine::build(&corpus, &args.engine_config());
    let mut report = engine.report(&args.thresholds());
    tracing::info!(files = report.len(), "built similarity report");

    if args.show_loc {
        let mut cache: HashMap<String, Option<usize>> = HashMap::new();
        report.attach_metadata(|id| FileMetadata {
            line_count: *cache.entry(id.to_string()).or_insert_with(|| source::line_count(Path::new(id))),
        });
    }
    report.relabel(|id| discover::display_name(id, root.as_deref()));

    if args.json {
        output::write_json(out, &report)?;
    } else {
        let name_width = corpus
            .documents()
            .iter()
            .map(|d| discover::display_name(&d.identifier, root.as_deref()).len())
            .max()
            .unwrap_or(0);
        output::write_text(out, &report, name_width, args.show_loc)?;
    }
    if let Some(path) = &args.csv_output {
        output::write_csv_file(path, &report, args.show_loc)
            .with_context(|| format!("failed to write csv output to {}", path.display()))?;
    }

    if report.threshold_exceeded() {
        for (file, other, similarity) in report.violations() {
            tracing::warn!(file, other, similarity, "similarity above fail threshold");
        }
        return Ok(ExitStatus::ThresholdExceeded);
    }
    Ok(ExitStatus::Success)
}
