//! Bounded operand stack.
//!
//! Each frame owns one. The stack never grows past its configured maximum;
//! a push that would exceed it fails and leaves the stack unchanged.

use thiserror::Error;

use crate::value::Value;

/// Error type for operand stack operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// Tried to pop or peek an empty stack (or pop more than it holds).
    #[error("stack underflow")]
    Underflow,
    /// A push would exceed the maximum size.
    #[error("stack overflow (max {max})")]
    Overflow { max: usize },
}

/// A LIFO of runtime values with a size limit.
#[derive(Clone, Debug)]
pub struct OperandStack {
    items: Vec<Value>,
    max_size: usize,
}

impl OperandStack {
    /// Create an empty stack holding at most `max_size` values.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            max_size,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push a value onto the stack.
    pub fn push(&mut self, value: Value) -> Result<(), StackError> {
        if self.items.len() >= self.max_size {
            return Err(StackError::Overflow { max: self.max_size });
        }
        self.items.push(value);
        Ok(())
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<Value, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Peek at the top of stack without removing it.
    pub fn peek(&self) -> Result<&Value, StackError> {
        self.items.last().ok_or(StackError::Underflow)
    }

    /// Duplicate the top item.
    pub fn dup(&mut self) -> Result<(), StackError> {
        let top = self.peek()?.clone();
        self.push(top)
    }

    /// Pop `n` values, returned top first. Nothing is removed on underflow.
    pub fn pop_many(&mut self, n: usize) -> Result<Vec<Value>, StackError> {
        if self.items.len() < n {
            return Err(StackError::Underflow);
        }
        let start = self.items.len() - n;
        let mut values = self.items.split_off(start);
        values.reverse();
        Ok(values)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All items, bottom to top.
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}
