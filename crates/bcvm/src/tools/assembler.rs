//! Source normaliser.
//!
//! Assembling validates every instruction against the catalog and rewrites
//! it in canonical form (single spaces, no comments, no blank lines). Errors
//! report the line number in the input text, not the instruction index.

use std::path::{Path, PathBuf};

use bcvm_core::{ParseError, is_code_line, parse_line};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validate and normalise source text, one instruction per output line.
pub fn assemble(source: &str) -> Result<Vec<String>, AssembleError> {
    let mut output = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if !is_code_line(line) {
            continue;
        }
        let instr = parse_line(line, i + 1)?;
        output.push(instr.to_string());
    }
    Ok(output)
}

/// Assemble `input` and write the result to `output`.
pub fn assemble_file(input: &Path, output: &Path) -> Result<usize, AssembleError> {
    let source = std::fs::read_to_string(input).map_err(|e| AssembleError::Read {
        path: input.to_owned(),
        source: e,
    })?;

    let lines = assemble(&source)?;
    let mut text = lines.join("\n");
    text.push('\n');

    std::fs::write(output, text).map_err(|e| AssembleError::Write {
        path: output.to_owned(),
        source: e,
    })?;

    log::debug!("assembled {} instructions into {}", lines.len(), output.display());
    Ok(lines.len())
}
