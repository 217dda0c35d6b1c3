//! Tests for load, parse and runtime failures.

use bcvm::{Error, Opcode, ParseError, RuntimeError, Value, VirtualMachine, VmConfig, VmError};
use bcvm_vm::StackError;

use super::{run_err, vm_with_stdlib};

fn cause(err: &Error) -> &VmError {
    match err {
        Error::Runtime(e) => e.cause(),
        other => panic!("expected runtime error, got {other}"),
    }
}

#[test]
fn unknown_opcode() {
    let err = run_err("LOAD_CONST 1\nFOO 1");
    assert!(matches!(
        err,
        Error::Parse(ParseError::UnknownOpcode { line: 2, .. })
    ));
}

#[test]
fn parse_failure_runs_nothing() {
    let mut vm = vm_with_stdlib();
    assert!(vm.run_str("LOAD_CONST 1\nSTORE_VAR x\nNOPE").is_err());
    assert_eq!(vm.global("x"), None);
}

#[test]
fn stack_underflow() {
    let err = run_err("ADD");
    assert_eq!(cause(&err), &VmError::Stack(StackError::Underflow));
}

#[test]
fn stack_overflow() {
    let mut vm = VirtualMachine::new(VmConfig::default().max_stack_size(3));
    let err = vm.run_str(&"LOAD_CONST 1\n".repeat(4)).unwrap_err();
    assert_eq!(cause(&err), &VmError::Stack(StackError::Overflow { max: 3 }));
}

#[test]
fn division_by_zero() {
    let err = run_err("LOAD_CONST 1\nLOAD_CONST 0\nDIV");
    assert_eq!(cause(&err), &VmError::DivisionByZero);
}

#[test]
fn undefined_variable() {
    let err = run_err("LOAD_VAR missing");
    assert_eq!(cause(&err), &VmError::VariableNotFound("missing".into()));
}

#[test]
fn jump_out_of_range() {
    let err = run_err("JUMP 7\nHALT");
    assert_eq!(
        cause(&err),
        &VmError::InvalidJumpTarget { target: 7, len: 2 }
    );
}

#[test]
fn untaken_bad_jump_is_not_checked() {
    // Targets are validated only when the jump is taken.
    let mut vm = vm_with_stdlib();
    vm.run_str("LOAD_CONST 1\nJUMP_IF_FALSE 99\nLOAD_CONST 2\nSTORE_VAR ok")
        .unwrap();
    assert_eq!(vm.global("ok"), Some(&Value::Int(2)));
}

#[test]
fn calling_a_number() {
    let err = run_err("LOAD_CONST 3\nLOAD_CONST 4\nCALL_FUNC 1");
    assert_eq!(cause(&err), &VmError::NotCallable("int"));
}

#[test]
fn type_mismatch() {
    let err = run_err("LOAD_CONST a\nLOAD_CONST 1\nSUB");
    assert!(matches!(cause(&err), VmError::TypeMismatch { op: "-", .. }));
}

#[test]
fn error_reports_failing_instruction() {
    let err = run_err("LOAD_CONST 1\nLOAD_CONST 0\nDIV\nHALT");
    match err {
        Error::Runtime(RuntimeError::Instruction { ip, opcode, .. }) => {
            assert_eq!(ip, 2);
            assert_eq!(opcode, Opcode::Div);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mutations_before_failure_remain() {
    let mut vm = vm_with_stdlib();
    let err = vm
        .run_str("LOAD_CONST 5\nSTORE_VAR before\nPOP_TOP")
        .unwrap_err();
    assert_eq!(cause(&err), &VmError::Stack(StackError::Underflow));
    assert_eq!(vm.global("before"), Some(&Value::Int(5)));
    assert!(vm.runtime().call_stack().is_empty());
}

#[test]
fn oversized_string_repeat() {
    let err = run_err("LOAD_CONST abc\nLOAD_CONST 9223372036854775807\nMUL\nSTORE_VAR s");
    assert!(matches!(cause(&err), VmError::StringTooLong { .. }));
}

#[test]
fn int_of_huge_float() {
    let err = run_err("LOAD_VAR int\nLOAD_CONST 1e300\nCALL_FUNC 1");
    assert!(matches!(cause(&err), VmError::Native { name, .. } if name == "int"));
}

#[test]
fn missing_file() {
    let mut vm = vm_with_stdlib();
    let err = vm.run_file("/no/such/program.bc").unwrap_err();
    assert!(matches!(err, Error::Load(_)));
}
