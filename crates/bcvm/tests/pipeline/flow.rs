//! Tests for jumps and conditional branches.

use bcvm::Value;

use super::{assert_global, run};

#[test]
fn jump_if_false_skips_assignment() {
    // 0 is falsy, so the 99 assignment is skipped
    assert_global(
        "
        LOAD_CONST 0
        JUMP_IF_FALSE 4
        LOAD_CONST 99
        STORE_VAR x
        LOAD_CONST 42
        STORE_VAR x
        HALT
        ",
        "x",
        Value::Int(42),
    );
}

#[test]
fn jump_if_false_falls_through_on_truthy() {
    let vm = run("
        LOAD_CONST 1
        JUMP_IF_FALSE 4
        LOAD_CONST 99
        STORE_VAR x
        HALT
    ");
    assert_eq!(vm.global("x"), Some(&Value::Int(99)));
}

#[test]
fn unconditional_jump() {
    assert_global(
        "
        LOAD_CONST 0
        JUMP 4
        LOAD_CONST 999
        STORE_VAR x
        LOAD_CONST 5
        STORE_VAR x
        HALT
        ",
        "x",
        Value::Int(5),
    );
}

#[test]
fn unconditional_jump_skips_instructions() {
    let vm = run("
        JUMP 3
        LOAD_CONST 999
        STORE_VAR skipped
        LOAD_CONST 5
        STORE_VAR x
        HALT
        ");
    assert_eq!(vm.global("skipped"), None);
    assert_eq!(vm.global("x"), Some(&Value::Int(5)));
}

#[test]
fn jump_if_true_on_string() {
    // non-empty string is truthy
    assert_global(
        "
        LOAD_CONST yes
        JUMP_IF_TRUE 5
        LOAD_CONST 0
        STORE_VAR branch
        HALT
        LOAD_CONST 1
        STORE_VAR branch
        ",
        "branch",
        Value::Int(1),
    );
}

#[test]
fn countdown_loop() {
    let vm = run("
        LOAD_CONST 3
        STORE_VAR n
        LOAD_CONST 0
        STORE_VAR steps
        LOAD_VAR n
        JUMP_IF_FALSE 15
        LOAD_VAR n
        LOAD_CONST 1
        SUB
        STORE_VAR n
        LOAD_VAR steps
        LOAD_CONST 1
        ADD
        STORE_VAR steps
        JUMP 4
        HALT
    ");
    assert_eq!(vm.global("n"), Some(&Value::Int(0)));
    assert_eq!(vm.global("steps"), Some(&Value::Int(3)));
}

#[test]
fn jump_backwards_to_start() {
    // Loops back until passes - 2 is falsy.
    assert_global(
        "
        LOAD_CONST 0
        STORE_VAR passes
        LOAD_VAR passes
        LOAD_CONST 1
        ADD
        STORE_VAR passes
        LOAD_VAR passes
        LOAD_CONST 2
        SUB
        JUMP_IF_FALSE 11
        JUMP 2
        HALT
        ",
        "passes",
        Value::Int(2),
    );
}
