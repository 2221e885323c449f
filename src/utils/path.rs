//! Path utilities: expand ~, derive dataset identifiers and output file names.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Dataset identifier: the input file name without its extension.
pub fn dataset_id(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("dataset")
        .to_string()
}

/// `<dir>/<stem>.<ext>`
pub fn output_file(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}.{ext}"))
}

/// Scratch path next to `target`, keeping the extension so that backends
/// which pick the encoder from it still work.
pub fn staging_file(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("chart");
    let name = match target.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!(".{stem}.partial.{ext}"),
        None => format!(".{stem}.partial"),
    };
    target.with_file_name(name)
}
