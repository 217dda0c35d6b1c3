//! Tests for native calls and return values.

use bcvm::{NativeFunction, Value, VirtualMachine, VmConfig};
use bcvm_vm::{Arity, NativeError};

use super::{assert_global, vm_with_stdlib};

#[test]
fn call_stdlib_max() {
    assert_global(
        "LOAD_VAR max\nLOAD_CONST 3\nLOAD_CONST 9\nLOAD_CONST 4\nCALL_FUNC 3\nSTORE_VAR m",
        "m",
        Value::Int(9),
    );
}

#[test]
fn call_with_zero_arguments() {
    let mut vm = VirtualMachine::new(VmConfig::default());
    vm.register(NativeFunction::infallible("answer", Arity::Exact(0), |_| {
        Value::Int(42)
    }));
    vm.run_str("LOAD_VAR answer\nCALL_FUNC 0\nSTORE_VAR a").unwrap();
    assert_eq!(vm.global("a"), Some(&Value::Int(42)));
}

#[test]
fn arguments_keep_push_order() {
    let mut vm = VirtualMachine::new(VmConfig::default());
    vm.register(NativeFunction::infallible("join", Arity::AtLeast(0), |args| {
        let parts: Vec<String> = args.iter().map(ToString::to_string).collect();
        Value::Str(parts.join("-"))
    }));
    vm.run_str("LOAD_VAR join\nLOAD_CONST a\nLOAD_CONST b\nLOAD_CONST c\nCALL_FUNC 3\nSTORE_VAR s")
        .unwrap();
    assert_eq!(vm.global("s"), Some(&Value::from("a-b-c")));
}

#[test]
fn native_result_feeds_arithmetic() {
    assert_global(
        "
        LOAD_VAR abs
        LOAD_CONST 0
        LOAD_CONST 6
        SUB
        CALL_FUNC 1
        LOAD_CONST 1
        ADD
        STORE_VAR r
        ",
        "r",
        Value::Int(7),
    );
}

#[test]
fn native_failure_propagates() {
    let mut vm = VirtualMachine::new(VmConfig::default());
    vm.register(NativeFunction::new("fail", Arity::Exact(0), |_| {
        Err(NativeError::new("nope"))
    }));
    let err = vm.run_str("LOAD_VAR fail\nCALL_FUNC 0").unwrap_err();
    assert!(err.to_string().contains("fail() failed: nope"));
}

#[test]
fn top_level_return_value() {
    let mut vm = vm_with_stdlib();
    let value = vm
        .run_str("LOAD_CONST 6\nLOAD_CONST 7\nMUL\nRETURN_VAL")
        .unwrap();
    assert_eq!(value, Some(Value::Int(42)));
}

#[test]
fn halt_returns_nothing() {
    let mut vm = vm_with_stdlib();
    assert_eq!(vm.run_str("LOAD_CONST 1\nHALT").unwrap(), None);
}

#[test]
fn globals_survive_between_runs() {
    let mut vm = vm_with_stdlib();
    vm.run_str("LOAD_CONST 10\nSTORE_VAR x").unwrap();
    vm.run_str("LOAD_VAR x\nLOAD_CONST 1\nADD\nSTORE_VAR x").unwrap();
    assert_eq!(vm.global("x"), Some(&Value::Int(11)));
}
