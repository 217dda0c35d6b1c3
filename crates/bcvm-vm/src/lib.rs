//! Execution runtime for bcvm programs.
//!
//! # Architecture
//!
//! - [`OperandStack`]: bounded per-frame value stack
//! - [`Namespaces`]: arena of variable scopes; index 0 holds the globals
//! - [`Code`] and [`Frame`]: an activation's instructions, instruction
//!   pointer, stack and scope
//! - [`CallStack`]: bounded stack of active frames
//! - [`Engine`]: fetch-decode-dispatch over the top frame
//! - [`Runtime`]: owns all of the above and runs programs to completion
//!
//! Host code is reached only through [`NativeFunction`]s bound in the
//! global namespace and invoked with `CALL_FUNC`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use bcvm_vm::{Code, Runtime, Value, VmConfig};
//!
//! let program = bcvm_core::parse([
//!     "LOAD_CONST 2",
//!     "LOAD_CONST 3",
//!     "ADD",
//!     "STORE_VAR result",
//!     "HALT",
//! ])
//! .unwrap();
//! let mut runtime = Runtime::new(VmConfig::default());
//! runtime.run_code(Arc::new(Code::new(program))).unwrap();
//! assert_eq!(runtime.globals().get_local("result"), Some(&Value::Int(5)));
//! ```

mod callstack;
mod code;
mod config;
mod engine;
mod error;
pub mod flow;
mod frame;
mod namespace;
mod native;
mod runtime;
mod stack;
mod value;

pub use callstack::CallStack;
pub use code::Code;
pub use config::{DEFAULT_MAX_CALL_DEPTH, DEFAULT_MAX_STACK_SIZE, VmConfig};
pub use engine::{Engine, EngineState};
pub use error::{RuntimeError, VmError};
pub use frame::Frame;
pub use namespace::{GLOBAL_NS, Namespace, NamespaceId, Namespaces};
pub use native::{Arity, NativeError, NativeFunction, NativeResult};
pub use runtime::Runtime;
pub use stack::{OperandStack, StackError};
pub use value::{MAX_STRING_LEN, Value};
