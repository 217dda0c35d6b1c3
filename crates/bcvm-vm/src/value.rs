//! Runtime values.

use std::fmt;
use std::sync::Arc;

use crate::error::VmError;
use crate::native::NativeFunction;

/// Longest string, in bytes, that string arithmetic may produce.
pub const MAX_STRING_LEN: usize = 1 << 24;

/// A value on an operand stack or bound in a namespace.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    /// A host function, callable with `CALL_FUNC`.
    Native(Arc<NativeFunction>),
}

/// Operand pair after numeric promotion.
enum Numeric {
    Int(i64, i64),
    Float(f64, f64),
}

impl Value {
    /// Decode a `LOAD_CONST` literal.
    ///
    /// All-digit text is an integer (falling back to a float when it does not
    /// fit in an `i64`), anything else that parses as a float is a float, and
    /// the rest is a string with surrounding double quotes stripped.
    pub fn parse_literal(text: &str) -> Value {
        if !text.is_empty()
            && text.bytes().all(|b| b.is_ascii_digit())
            && let Ok(i) = text.parse::<i64>()
        {
            return Value::Int(i);
        }
        if let Ok(f) = text.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(text.trim_matches('"').to_string())
    }

    pub fn native(function: NativeFunction) -> Value {
        Value::Native(Arc::new(function))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Native(_) => "native",
        }
    }

    /// Zero, `0.0` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Native(_) => true,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as a float, promoting integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_native(&self) -> Option<&Arc<NativeFunction>> {
        match self {
            Value::Native(f) => Some(f),
            _ => None,
        }
    }

    fn numeric(&self, rhs: &Value) -> Option<Numeric> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Some(Numeric::Int(*a, *b)),
            _ => Some(Numeric::Float(self.as_float()?, rhs.as_float()?)),
        }
    }

    fn mismatch(&self, op: &'static str, rhs: &Value) -> VmError {
        VmError::TypeMismatch {
            op,
            lhs: self.type_name(),
            rhs: rhs.type_name(),
        }
    }

    /// `self + rhs`. Strings concatenate.
    pub fn add(&self, rhs: &Value) -> Result<Value, VmError> {
        if let (Value::Str(a), Value::Str(b)) = (self, rhs) {
            check_string_len(a.len().saturating_add(b.len()))?;
            return Ok(Value::Str(format!("{a}{b}")));
        }
        match self.numeric(rhs).ok_or_else(|| self.mismatch("+", rhs))? {
            Numeric::Int(a, b) => checked(a.checked_add(b), "+"),
            Numeric::Float(a, b) => Ok(Value::Float(a + b)),
        }
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Value) -> Result<Value, VmError> {
        match self.numeric(rhs).ok_or_else(|| self.mismatch("-", rhs))? {
            Numeric::Int(a, b) => checked(a.checked_sub(b), "-"),
            Numeric::Float(a, b) => Ok(Value::Float(a - b)),
        }
    }

    /// `self * rhs`. A string times an integer repeats the string.
    pub fn mul(&self, rhs: &Value) -> Result<Value, VmError> {
        match (self, rhs) {
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
                let count = usize::try_from(*n).unwrap_or(0);
                check_string_len(s.len().saturating_mul(count))?;
                return Ok(Value::Str(s.repeat(count)));
            }
            _ => {}
        }
        match self.numeric(rhs).ok_or_else(|| self.mismatch("*", rhs))? {
            Numeric::Int(a, b) => checked(a.checked_mul(b), "*"),
            Numeric::Float(a, b) => Ok(Value::Float(a * b)),
        }
    }

    /// `self / rhs`. Always produces a float.
    pub fn div(&self, rhs: &Value) -> Result<Value, VmError> {
        let (a, b) = match self.numeric(rhs).ok_or_else(|| self.mismatch("/", rhs))? {
            Numeric::Int(a, b) => (a as f64, b as f64),
            Numeric::Float(a, b) => (a, b),
        };
        if b == 0.0 {
            return Err(VmError::DivisionByZero);
        }
        Ok(Value::Float(a / b))
    }
}

fn check_string_len(len: usize) -> Result<(), VmError> {
    if len > MAX_STRING_LEN {
        return Err(VmError::StringTooLong {
            len,
            max: MAX_STRING_LEN,
        });
    }
    Ok(())
}

fn checked(result: Option<i64>, op: &'static str) -> Result<Value, VmError> {
    result
        .map(Value::Int)
        .ok_or(VmError::IntegerOverflow { op })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                *i as f64 == *f
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) if x.is_nan() => f.write_str("nan"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
            }
            // Debug keeps the trailing ".0" on whole floats.
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => f.write_str(s),
            Value::Native(func) => write!(f, "<native {}>", func.name()),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NativeFunction> for Value {
    fn from(f: NativeFunction) -> Self {
        Value::native(f)
    }
}
