//! File system operations: enumeration of candidate configuration files.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ConfmeterError, Result};

/// Normalizes an extension allow-list entry to the matching form.
///
/// Entries may be written with or without the leading dot (`cfg` and `.cfg`
/// are equivalent); the empty string stands for "file without extension".
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Returns the dotted extension of `path` (`".cfg"`), or `""` when the file
/// has none.
fn dotted_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

/// Collects the candidate configuration files directly inside `dir`.
///
/// The listing is deliberately non-recursive: subdirectories (and anything
/// else that is not a regular file, dangling symlinks included) are skipped.
/// A file qualifies when its dotted extension is in `extensions`, where the
/// empty string admits extension-less files. The result is sorted by file
/// name, which fixes the enumeration order used everywhere downstream.
///
/// # Errors
///
/// - [`ConfmeterError::MissingDirectory`] when `dir` does not exist or is not
///   a directory.
/// - [`ConfmeterError::NoFilesFound`] when nothing qualifies.
pub fn collect_config_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ConfmeterError::missing_directory(dir));
    }

    let allowed: Vec<String> = extensions.iter().map(|e| normalize_extension(e)).collect();

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.into_path();
        if allowed.contains(&dotted_extension(&path)) {
            files.push(path);
        } else {
            tracing::debug!(file = %path.display(), "Extension not in allow-list, skipping");
        }
    }

    files.sort_by_key(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));

    if files.is_empty() {
        return Err(ConfmeterError::no_files_found(dir));
    }

    tracing::debug!(count = files.len(), dir = %dir.display(), "Collected candidate files");
    Ok(files)
}
