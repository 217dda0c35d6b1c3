//! The runtime: owns every piece of execution state and drives the engine.

use std::sync::Arc;

use crate::callstack::CallStack;
use crate::code::Code;
use crate::config::VmConfig;
use crate::engine::Engine;
use crate::error::RuntimeError;
use crate::frame::Frame;
use crate::namespace::{GLOBAL_NS, Namespace, NamespaceId, Namespaces};
use crate::native::NativeFunction;
use crate::value::Value;

/// Call stack, namespaces and engine, configured once.
///
/// Globals persist across runs; frames do not.
#[derive(Debug)]
pub struct Runtime {
    config: VmConfig,
    calls: CallStack,
    namespaces: Namespaces,
    engine: Engine,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

impl Runtime {
    pub fn new(config: VmConfig) -> Self {
        Self {
            config,
            calls: CallStack::new(config.max_call_depth),
            namespaces: Namespaces::new(),
            engine: Engine::new(&config),
        }
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    pub fn globals(&self) -> &Namespace {
        self.namespaces.global()
    }

    pub fn globals_mut(&mut self) -> &mut Namespace {
        self.namespaces.global_mut()
    }

    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    pub fn namespaces_mut(&mut self) -> &mut Namespaces {
        &mut self.namespaces
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.calls
    }

    /// Direct access for hosts that want to seed caller frames before a run.
    pub fn call_stack_mut(&mut self) -> &mut CallStack {
        &mut self.calls
    }

    /// Bind a native function in the global namespace under its own name.
    pub fn define_native(&mut self, function: NativeFunction) {
        let name = function.name().to_string();
        self.globals_mut().set(name, Value::native(function));
    }

    /// A frame whose locals are the globals.
    pub fn frame(&self, code: Arc<Code>) -> Frame {
        Frame::new(code, GLOBAL_NS, self.config.max_stack_size)
    }

    /// A frame with a fresh local scope that reads through to `parent`.
    pub fn scoped_frame(&mut self, code: Arc<Code>, parent: NamespaceId) -> Frame {
        let scope = self.namespaces.push(Some(parent));
        Frame::new(code, scope, self.config.max_stack_size)
    }

    /// Push `frame` and execute until the call stack is empty.
    ///
    /// On failure every active frame is discarded; changes already made to
    /// the globals stay.
    pub fn run(&mut self, frame: Frame) -> Result<Option<Value>, RuntimeError> {
        log::debug!(
            "running {} instructions at depth {}",
            frame.len(),
            self.calls.depth() + 1
        );

        if let Err(e) = self.calls.push(frame) {
            self.unwind();
            return Err(RuntimeError::Setup(e));
        }

        match self.engine.execute(&mut self.calls, &mut self.namespaces) {
            Ok(value) => {
                log::debug!("run finished");
                Ok(value)
            }
            Err(e) => {
                log::debug!("run aborted: {e}");
                self.unwind();
                Err(e)
            }
        }
    }

    /// Execute `code` as a top-level program.
    pub fn run_code(&mut self, code: Arc<Code>) -> Result<Option<Value>, RuntimeError> {
        let frame = self.frame(code);
        self.run(frame)
    }

    fn unwind(&mut self) {
        for frame in self.calls.drain() {
            self.namespaces.release(frame.namespace());
        }
    }
}
