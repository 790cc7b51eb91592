use crate::args::Args;
use crate::InputError;
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// All files under `dir` whose extension is one of `extensions`.
pub fn collect_from_directory(dir: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && has_extension(e.path(), extensions))
        .map(|e| e.into_path())
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => extensions.iter().any(|e| e.trim_start_matches('.') == ext),
        None => false,
    }
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

/// Resolve the files to compare: deduplicated, ignore lists removed, absolute
/// and sorted.
pub fn resolve_sources(args: &Args) -> Result<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if !args.directories.is_empty() {
        for dir in &args.directories {
            if !dir.is_dir() {
                return Err(InputError::NotADirectory(dir.clone()).into());
            }
            candidates.extend(collect_from_directory(dir, &args.file_extensions));
        }
    } else {
        if args.files.len() < 2 {
            return Err(InputError::TooFewFiles.into());
        }
        for file in &args.files {
            if !file.is_file() {
                return Err(InputError::MissingFile(file.clone()).into());
            }
        }
        candidates.extend(args.files.iter().cloned());
    }

    let mut ignored: BTreeSet<PathBuf> = BTreeSet::new();
    for dir in &args.ignore_directories {
        for file in collect_from_directory(dir, &args.file_extensions) {
            ignored.insert(absolute(&file)?);
        }
    }
    for file in &args.ignore_files {
        ignored.insert(absolute(file)?);
    }

    let mut sources: BTreeSet<PathBuf> = BTreeSet::new();
    for file in candidates {
        let abs = absolute(&file)?;
        if !ignored.contains(&abs) {
            sources.insert(abs);
        }
    }
    tracing::debug!(found = sources.len(), ignored = ignored.len(), "resolved source files");
    if sources.len() < 2 {
        return Err(InputError::NotEnoughSources.into());
    }
    Ok(sources.into_iter().collect())
}

/// Absolute project root with a trailing separator, ready for prefix stripping.
pub fn project_root(dir: &Path) -> Result<String> {
    if !dir.is_dir() {
        return Err(InputError::BadProjectRoot(dir.to_path_buf()).into());
    }
    let mut root = absolute(dir)?.to_string_lossy().into_owned();
    if !root.ends_with(std::path::MAIN_SEPARATOR) {
        root.push(std::path::MAIN_SEPARATOR);
    }
    Ok(root)
}

pub fn display_name(identifier: &str, root: Option<&str>) -> String {
    match root {
        Some(root) => identifier.strip_prefix(root).unwrap_or(identifier).to_string(),
        None => identifier.to_string(),
    }
}
