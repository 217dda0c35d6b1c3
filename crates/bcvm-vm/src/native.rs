//! Host-provided functions callable through `CALL_FUNC`.

use std::fmt;

use thiserror::Error;

use crate::error::VmError;
use crate::value::Value;

/// Failure reported by a native callback.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NativeError {
    message: String,
}

impl NativeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type NativeResult = Result<Value, NativeError>;

type Callback = dyn Fn(&[Value]) -> NativeResult + Send + Sync;

/// Number of arguments a native accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A named host function with a declared arity.
pub struct NativeFunction {
    name: String,
    arity: Arity,
    callback: Box<Callback>,
}

impl NativeFunction {
    /// Create a native whose callback may fail.
    pub fn new<F>(name: impl Into<String>, arity: Arity, callback: F) -> Self
    where
        F: Fn(&[Value]) -> NativeResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            callback: Box::new(callback),
        }
    }

    /// Create a native whose callback always succeeds.
    pub fn infallible<F>(name: impl Into<String>, arity: Arity, callback: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::new(name, arity, move |args| Ok(callback(args)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Check the argument count and invoke the callback.
    pub fn call(&self, args: &[Value]) -> Result<Value, VmError> {
        if !self.arity.accepts(args.len()) {
            return Err(VmError::ArityMismatch {
                name: self.name.clone(),
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.callback)(args).map_err(|source| VmError::Native {
            name: self.name.clone(),
            source,
        })
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
