//! The fetch-decode-dispatch loop.
//!
//! The engine always executes the frame on top of the call stack. An
//! activation ends on `RETURN_VAL`, on `HALT`, or when its instruction
//! pointer runs past the end of its code; execution continues in the caller
//! until the call stack is empty.

use std::sync::Arc;

use bcvm_core::{Instruction, Opcode};

use crate::callstack::CallStack;
use crate::code::Code;
use crate::config::VmConfig;
use crate::error::{RuntimeError, VmError};
use crate::flow;
use crate::frame::Frame;
use crate::namespace::Namespaces;
use crate::value::Value;

/// Engine lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Halted,
}

type BinaryOp = fn(&Value, &Value) -> Result<Value, VmError>;

/// Executes instructions against a call stack and namespace arena.
#[derive(Debug)]
pub struct Engine {
    state: EngineState,
    trace: bool,
    // Set by a RETURN_VAL in the bottom frame.
    return_value: Option<Value>,
}

impl Engine {
    pub fn new(config: &VmConfig) -> Self {
        Self {
            state: EngineState::Halted,
            trace: config.trace,
            return_value: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run until the call stack is empty.
    ///
    /// Returns the value handed back by a `RETURN_VAL` in the bottom frame,
    /// if there was one. The first failing instruction aborts the run; frames
    /// are left as they were at the point of failure.
    pub fn execute(
        &mut self,
        calls: &mut CallStack,
        namespaces: &mut Namespaces,
    ) -> Result<Option<Value>, RuntimeError> {
        self.state = EngineState::Running;
        self.return_value = None;

        while self.step(calls, namespaces)? == EngineState::Running {}

        Ok(self.return_value.take())
    }

    /// Execute a single instruction of the top frame.
    pub fn step(
        &mut self,
        calls: &mut CallStack,
        namespaces: &mut Namespaces,
    ) -> Result<EngineState, RuntimeError> {
        let Some(frame) = calls.current_mut() else {
            self.state = EngineState::Halted;
            return Ok(self.state);
        };
        self.state = EngineState::Running;

        let Some(ip) = frame.advance() else {
            log::debug!("frame at depth {} reached end of code", calls.depth());
            end_activation(calls, namespaces);
            return Ok(self.settle(calls));
        };

        let code = Arc::clone(frame.code());
        let instr = &code.instructions()[ip];
        if self.trace {
            log::trace!("{ip:04}  {:<24} {}", instr.to_string(), render_stack(frame));
        }

        let depth = calls.depth();
        self.dispatch(instr, &code, ip, calls, namespaces)
            .map_err(|source| RuntimeError::Instruction {
                ip,
                opcode: instr.opcode,
                depth,
                source,
            })?;

        Ok(self.settle(calls))
    }

    fn settle(&mut self, calls: &CallStack) -> EngineState {
        if calls.is_empty() {
            self.state = EngineState::Halted;
        }
        self.state
    }

    fn dispatch(
        &mut self,
        instr: &Instruction,
        code: &Code,
        ip: usize,
        calls: &mut CallStack,
        namespaces: &mut Namespaces,
    ) -> Result<(), VmError> {
        match instr.opcode {
            Opcode::LoadConst => {
                let value = code
                    .constant_at(ip)
                    .cloned()
                    .ok_or_else(|| missing(instr, 0))?;
                current(calls)?.stack_mut().push(value)?;
            }
            Opcode::LoadVar => {
                let name = operand(instr, 0)?;
                let frame = current(calls)?;
                let value = namespaces.get(frame.namespace(), name)?.clone();
                frame.stack_mut().push(value)?;
            }
            Opcode::StoreVar => {
                let name = operand(instr, 0)?;
                let frame = current(calls)?;
                let value = frame.stack_mut().pop()?;
                namespaces.set(frame.namespace(), name, value)?;
            }
            Opcode::Add => binary(calls, Value::add)?,
            Opcode::Sub => binary(calls, Value::sub)?,
            Opcode::Mul => binary(calls, Value::mul)?,
            Opcode::Div => binary(calls, Value::div)?,
            Opcode::PopTop => {
                current(calls)?.stack_mut().pop()?;
            }
            Opcode::DupTop => current(calls)?.stack_mut().dup()?,
            Opcode::Jump => {
                let target = flow::parse_target(instr.opcode, operand(instr, 0)?)?;
                flow::jump(current(calls)?, target)?;
            }
            Opcode::JumpIfTrue => {
                let frame = current(calls)?;
                let condition = frame.stack_mut().pop()?;
                let target = flow::parse_target(instr.opcode, operand(instr, 0)?)?;
                flow::jump_if_true(frame, &condition, target)?;
            }
            Opcode::JumpIfFalse => {
                let frame = current(calls)?;
                let condition = frame.stack_mut().pop()?;
                let target = flow::parse_target(instr.opcode, operand(instr, 0)?)?;
                flow::jump_if_false(frame, &condition, target)?;
            }
            Opcode::CallFunc => call_native(instr, calls)?,
            Opcode::ReturnVal => {
                let value = current(calls)?.stack_mut().pop()?;
                end_activation(calls, namespaces);
                match calls.current_mut() {
                    Some(caller) => caller.stack_mut().push(value)?,
                    None => self.return_value = Some(value),
                }
            }
            Opcode::Halt => end_activation(calls, namespaces),
        }
        Ok(())
    }
}

fn current(calls: &mut CallStack) -> Result<&mut Frame, VmError> {
    calls.current_mut().ok_or(VmError::EmptyCallStack)
}

fn missing(instr: &Instruction, index: usize) -> VmError {
    VmError::MissingOperand {
        opcode: instr.opcode,
        index,
    }
}

fn operand(instr: &Instruction, index: usize) -> Result<&str, VmError> {
    instr.operand(index).ok_or_else(|| missing(instr, index))
}

/// Pop `b` then `a`, push `a op b`.
fn binary(calls: &mut CallStack, op: BinaryOp) -> Result<(), VmError> {
    let stack = current(calls)?.stack_mut();
    let rhs = stack.pop()?;
    let lhs = stack.pop()?;
    stack.push(op(&lhs, &rhs)?)?;
    Ok(())
}

/// Stack layout: `..., callee, arg1, ..., argN`.
fn call_native(instr: &Instruction, calls: &mut CallStack) -> Result<(), VmError> {
    let text = operand(instr, 0)?;
    let argc: usize = text.parse().map_err(|_| VmError::InvalidOperand {
        opcode: instr.opcode,
        operand: text.to_string(),
        expected: "a non-negative argument count",
    })?;

    let stack = current(calls)?.stack_mut();
    let mut args = stack.pop_many(argc)?;
    args.reverse();

    let function = match stack.pop()? {
        Value::Native(function) => function,
        other => return Err(VmError::NotCallable(other.type_name())),
    };
    let result = function.call(&args)?;
    stack.push(result)?;
    Ok(())
}

/// Pop the top frame and release its private namespace.
fn end_activation(calls: &mut CallStack, namespaces: &mut Namespaces) {
    if let Some(frame) = calls.pop() {
        namespaces.release(frame.namespace());
    }
}

fn render_stack(frame: &Frame) -> String {
    let items: Vec<String> = frame
        .stack()
        .as_slice()
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("[{}]", items.join(", "))
}
