//! Native functions bound by [`VirtualMachine::with_stdlib`].

use std::cmp::Ordering;

use bcvm_vm::{Arity, NativeError, NativeFunction, NativeResult, Value};

use crate::vm::VirtualMachine;

/// Bind `abs`, `min`, `max`, `len`, `str`, `int`, `float` and `print`.
pub fn register_stdlib(vm: &mut VirtualMachine) {
    for function in natives() {
        vm.register(function);
    }
}

/// The standard natives, unbound.
pub fn natives() -> Vec<NativeFunction> {
    vec![
        NativeFunction::new("abs", Arity::Exact(1), abs),
        NativeFunction::new("min", Arity::AtLeast(1), |args| {
            extreme("min", args, Ordering::Less)
        }),
        NativeFunction::new("max", Arity::AtLeast(1), |args| {
            extreme("max", args, Ordering::Greater)
        }),
        NativeFunction::new("len", Arity::Exact(1), len),
        NativeFunction::infallible("str", Arity::Exact(1), |args| {
            Value::Str(args[0].to_string())
        }),
        NativeFunction::new("int", Arity::Exact(1), int),
        NativeFunction::new("float", Arity::Exact(1), float),
        NativeFunction::infallible("print", Arity::AtLeast(0), print),
    ]
}

fn unsupported(name: &str, value: &Value) -> NativeError {
    NativeError::new(format!("{name}() does not accept {}", value.type_name()))
}

fn abs(args: &[Value]) -> NativeResult {
    match &args[0] {
        Value::Int(i) => i
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| NativeError::new("abs() overflowed")),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        other => Err(unsupported("abs", other)),
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Str(x), Value::Str(y)) => Some(x.cmp(y)),
        _ => a.as_float()?.partial_cmp(&b.as_float()?),
    }
}

/// The first argument that no other argument beats in direction `wanted`.
fn extreme(name: &str, args: &[Value], wanted: Ordering) -> NativeResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(NativeError::new(format!("{name}() needs an argument")));
    };

    let mut best = first;
    for candidate in rest {
        let ordering = compare(candidate, best).ok_or_else(|| {
            NativeError::new(format!(
                "{name}() cannot compare {} and {}",
                candidate.type_name(),
                best.type_name()
            ))
        })?;
        if ordering == wanted {
            best = candidate;
        }
    }
    Ok(best.clone())
}

fn len(args: &[Value]) -> NativeResult {
    match &args[0] {
        Value::Str(s) => Ok(Value::Int(s.chars().count() as i64)),
        other => Err(unsupported("len", other)),
    }
}

fn int(args: &[Value]) -> NativeResult {
    match &args[0] {
        Value::Int(i) => Ok(Value::Int(*i)),
        // i64::MAX as f64 is 2^63, one past the largest convertible value.
        Value::Float(f) if f.trunc() >= i64::MIN as f64 && f.trunc() < i64::MAX as f64 => {
            Ok(Value::Int(f.trunc() as i64))
        }
        Value::Float(f) => Err(NativeError::new(format!("int() cannot convert {f}"))),
        Value::Str(s) => s
            .trim()
            .parse()
            .map(Value::Int)
            .map_err(|_| NativeError::new(format!("int() cannot parse '{s}'"))),
        other => Err(unsupported("int", other)),
    }
}

fn float(args: &[Value]) -> NativeResult {
    match &args[0] {
        Value::Str(s) => s
            .trim()
            .parse()
            .map(Value::Float)
            .map_err(|_| NativeError::new(format!("float() cannot parse '{s}'"))),
        other => other
            .as_float()
            .map(Value::Float)
            .ok_or_else(|| unsupported("float", other)),
    }
}

/// Write the arguments space-separated on one line; returns how many.
fn print(args: &[Value]) -> Value {
    let line: Vec<String> = args.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
    Value::Int(args.len() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Value]) -> Result<Value, bcvm_vm::VmError> {
        let function = natives()
            .into_iter()
            .find(|f| f.name() == name)
            .unwrap_or_else(|| panic!("no native named {name}"));
        function.call(args)
    }

    #[test]
    fn abs_values() {
        assert_eq!(call("abs", &[Value::Int(-4)]), Ok(Value::Int(4)));
        assert_eq!(call("abs", &[Value::Float(-1.5)]), Ok(Value::Float(1.5)));
        assert!(call("abs", &[Value::from("x")]).is_err());
        assert!(call("abs", &[Value::Int(i64::MIN)]).is_err());
    }

    #[test]
    fn min_and_max() {
        let args = [Value::Int(3), Value::Float(9.5), Value::Int(-2)];
        assert_eq!(call("max", &args), Ok(Value::Float(9.5)));
        assert_eq!(call("min", &args), Ok(Value::Int(-2)));
        assert_eq!(
            call("max", &[Value::from("pear"), Value::from("apple")]),
            Ok(Value::from("pear"))
        );
        assert!(call("min", &[Value::Int(1), Value::from("a")]).is_err());
        assert!(call("min", &[]).is_err());
    }

    #[test]
    fn ties_keep_the_first() {
        let args = [Value::Int(2), Value::Float(2.0)];
        assert!(matches!(call("max", &args), Ok(Value::Int(2))));
    }

    #[test]
    fn conversions() {
        assert_eq!(call("len", &[Value::from("héllo")]), Ok(Value::Int(5)));
        assert_eq!(call("str", &[Value::Float(2.0)]), Ok(Value::from("2.0")));
        assert_eq!(call("int", &[Value::Float(-3.7)]), Ok(Value::Int(-3)));
        assert_eq!(call("int", &[Value::from(" 42 ")]), Ok(Value::Int(42)));
        assert!(call("int", &[Value::from("4x")]).is_err());
        assert!(call("int", &[Value::Float(1e300)]).is_err());
        assert!(call("int", &[Value::Float(-1e19)]).is_err());
        assert!(call("int", &[Value::Float(f64::NAN)]).is_err());
        assert_eq!(
            call("int", &[Value::Float(-9.2e18)]),
            Ok(Value::Int(-9_200_000_000_000_000_000))
        );
        assert_eq!(call("float", &[Value::Int(2)]), Ok(Value::Float(2.0)));
        assert_eq!(call("float", &[Value::from("0.25")]), Ok(Value::Float(0.25)));
    }

    #[test]
    fn print_returns_count() {
        assert_eq!(
            call("print", &[Value::from("hello"), Value::Int(1)]),
            Ok(Value::Int(2))
        );
    }
}
