//! Activation records.

use std::sync::Arc;

use crate::code::Code;
use crate::namespace::NamespaceId;
use crate::stack::OperandStack;

/// One activation: code, instruction pointer, operand stack and the
/// namespace its variables resolve in.
///
/// The instruction pointer always names the next instruction to fetch.
#[derive(Clone, Debug)]
pub struct Frame {
    code: Arc<Code>,
    ip: usize,
    stack: OperandStack,
    namespace: NamespaceId,
}

impl Frame {
    pub fn new(code: Arc<Code>, namespace: NamespaceId, max_stack_size: usize) -> Self {
        Self {
            code,
            ip: 0,
            stack: OperandStack::new(max_stack_size),
            namespace,
        }
    }

    pub fn code(&self) -> &Arc<Code> {
        &self.code
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn namespace(&self) -> NamespaceId {
        self.namespace
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }

    /// Number of instructions in this frame's code.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// True once the instruction pointer has run past the last instruction.
    pub fn is_finished(&self) -> bool {
        self.ip >= self.code.len()
    }

    /// Return the index of the next instruction and advance past it.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_finished() {
            return None;
        }
        let ip = self.ip;
        self.ip += 1;
        Some(ip)
    }

    /// Overwrite the instruction pointer. Bounds are checked by the caller.
    pub(crate) fn set_ip(&mut self, ip: usize) {
        self.ip = ip;
    }
}
