//! Core types for the bcvm text bytecode.
//!
//! This crate knows nothing about execution. It defines the instruction set
//! and turns source text into validated [`Instruction`]s:
//!
//! - [`opcode`]: the instruction catalog
//! - [`loader`]: source text to trimmed instruction lines
//! - [`parser`]: instruction lines to [`Instruction`]s
//!
//! ```
//! use bcvm_core::{Opcode, load_str, parse};
//!
//! let program = parse(load_str("LOAD_CONST 2\nLOAD_CONST 3\nADD")).unwrap();
//! assert_eq!(program[2].opcode, Opcode::Add);
//! ```

pub mod error;
pub mod instruction;
pub mod loader;
pub mod opcode;
pub mod parser;

pub use error::{LoadError, ParseError};
pub use instruction::{Instruction, Operands};
pub use loader::{Source, is_code_line, load, load_file, load_str};
pub use opcode::{CATALOG, Opcode, OpcodeInfo, StackEffect, is_known, lookup};
pub use parser::{parse, parse_line};
