//! Program source loading.
//!
//! The loader turns raw text into the trimmed instruction lines the parser
//! expects. Blank lines and lines starting with `#` are dropped.

use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Where program text comes from.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    Text(&'a str),
    File(&'a Path),
}

/// Load instruction lines from either inline text or a file.
pub fn load(source: Source<'_>) -> Result<Vec<String>, LoadError> {
    match source {
        Source::Text(text) => Ok(load_str(text)),
        Source::File(path) => load_file(path),
    }
}

/// Split source text into trimmed instruction lines.
pub fn load_str(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| is_code_line(line))
        .map(str::to_string)
        .collect()
}

/// Read a file and split it into trimmed instruction lines.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: PathBuf::from(path),
        source: e,
    })?;
    Ok(load_str(&content))
}

/// True if an already-trimmed line carries an instruction.
pub fn is_code_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('#')
}
