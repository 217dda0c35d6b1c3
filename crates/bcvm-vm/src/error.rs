//! Runtime error types.

use bcvm_core::Opcode;
use thiserror::Error;

use crate::namespace::NamespaceId;
use crate::native::{Arity, NativeError};
use crate::stack::StackError;

/// An error raised by a single instruction or runtime operation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum VmError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error("maximum call depth of {max} exceeded")]
    CallStackOverflow { max: usize },

    #[error("variable '{0}' is not defined")]
    VariableNotFound(String),

    #[error("jump target {target} is outside 0..{len}")]
    InvalidJumpTarget { target: i64, len: usize },

    #[error("{opcode} is missing operand {index}")]
    MissingOperand { opcode: Opcode, index: usize },

    #[error("{opcode} operand '{operand}' is not {expected}")]
    InvalidOperand {
        opcode: Opcode,
        operand: String,
        expected: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str },

    #[error("unsupported operand types for {op}: {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("{0} value is not callable")]
    NotCallable(&'static str),

    #[error("{name}() takes {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    #[error("{name}() failed: {source}")]
    Native {
        name: String,
        #[source]
        source: NativeError,
    },

    #[error("no active frame")]
    EmptyCallStack,

    #[error("namespace {0} has been released")]
    ReleasedNamespace(NamespaceId),

    #[error("string of {len} bytes exceeds the limit of {max}")]
    StringTooLong { len: usize, max: usize },
}

/// An error that aborted a run.
///
/// Instruction failures keep the position of the failing instruction and
/// the underlying cause.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RuntimeError {
    #[error("{opcode} at instruction {ip} (depth {depth}) failed: {source}")]
    Instruction {
        ip: usize,
        opcode: Opcode,
        depth: usize,
        #[source]
        source: VmError,
    },

    #[error("could not start execution: {0}")]
    Setup(#[source] VmError),
}

impl RuntimeError {
    /// The underlying cause.
    pub fn cause(&self) -> &VmError {
        match self {
            RuntimeError::Instruction { source, .. } => source,
            RuntimeError::Setup(source) => source,
        }
    }
}
