//! Error types for loading and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing instruction lines.
///
/// `line` is the 1-based position of the offending line in the parser input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown opcode '{opcode}' at line {line}")]
    UnknownOpcode { line: usize, opcode: String },

    #[error("{opcode} at line {line} takes {expected} operand(s), found {found}")]
    OperandCount {
        line: usize,
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("empty instruction at line {line}")]
    Empty { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownOpcode { line, .. }
            | ParseError::OperandCount { line, .. }
            | ParseError::Empty { line } => *line,
        }
    }
}

/// Errors produced while reading program source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
