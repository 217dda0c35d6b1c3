//! The load, parse and run pipeline.

use std::path::Path;
use std::sync::Arc;

use bcvm_core::Instruction;
use bcvm_vm::{Code, Namespace, NativeFunction, Runtime, Value, VmConfig};

use crate::error::Error;
use crate::stdlib;

/// A runtime plus the text front end.
///
/// Top-level programs run in a frame whose locals are the globals, so
/// variables stored by one run are visible to the next.
///
/// # Example
///
/// ```
/// use bcvm::{Value, VirtualMachine};
///
/// let mut vm = VirtualMachine::default();
/// vm.run_str("LOAD_CONST 2\nLOAD_CONST 3\nADD\nSTORE_VAR result\nHALT").unwrap();
/// assert_eq!(vm.global("result"), Some(&Value::Int(5)));
/// ```
#[derive(Debug)]
pub struct VirtualMachine {
    runtime: Runtime,
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

impl VirtualMachine {
    /// Create a VM with empty globals.
    pub fn new(config: VmConfig) -> Self {
        Self {
            runtime: Runtime::new(config),
        }
    }

    /// Create a VM with the standard natives already bound.
    pub fn with_stdlib(config: VmConfig) -> Self {
        let mut vm = Self::new(config);
        stdlib::register_stdlib(&mut vm);
        vm
    }

    pub fn config(&self) -> &VmConfig {
        self.runtime.config()
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Bind a native function as a global.
    pub fn register(&mut self, function: NativeFunction) {
        self.runtime.define_native(function);
    }

    pub fn globals(&self) -> &Namespace {
        self.runtime.globals()
    }

    pub fn global(&self, name: &str) -> Option<&Value> {
        self.runtime.globals().get_local(name)
    }

    /// Load, parse and run program text.
    pub fn run_str(&mut self, source: &str) -> Result<Option<Value>, Error> {
        self.run_lines(bcvm_core::load_str(source))
    }

    /// Load, parse and run a program file.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<Option<Value>, Error> {
        let path = path.as_ref();
        log::debug!("loading {}", path.display());
        let lines = bcvm_core::load_file(path)?;
        self.run_lines(lines)
    }

    /// Parse and run already-loaded instruction lines.
    pub fn run_lines<I, S>(&mut self, lines: I) -> Result<Option<Value>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let instructions = bcvm_core::parse(lines)?;
        self.run_instructions(instructions)
    }

    /// Run parsed instructions as a top-level program.
    pub fn run_instructions(
        &mut self,
        instructions: Vec<Instruction>,
    ) -> Result<Option<Value>, Error> {
        let code = Arc::new(Code::new(instructions));
        Ok(self.runtime.run_code(code)?)
    }
}
