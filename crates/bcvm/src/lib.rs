//! bcvm: a small stack-based bytecode interpreter.
//!
//! This crate ties the [`bcvm_core`] front end to the [`bcvm_vm`] runtime
//! and adds the pieces a host usually wants around them: a
//! [`VirtualMachine`] that goes straight from text to a finished run, a
//! TOML [`config`] loader, a [`stdlib`] of native functions and the
//! [`tools`] used by the `bcvm` binary.

pub mod config;
mod error;
pub mod stdlib;
pub mod tools;
mod vm;

pub use bcvm_core::{Instruction, Opcode, ParseError};
pub use bcvm_vm::{NativeFunction, RuntimeError, Value, VmConfig, VmError};
pub use config::{apply_run_flags, load_config, parse_config};
pub use error::{ConfigError, Error};
pub use vm::VirtualMachine;
