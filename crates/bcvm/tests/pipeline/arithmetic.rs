//! Tests for arithmetic and stack manipulation.

use bcvm::Value;

use super::{assert_global, run};

#[test]
fn add_two_constants() {
    assert_global(
        "LOAD_CONST 2\nLOAD_CONST 3\nADD\nSTORE_VAR result\nHALT",
        "result",
        Value::Int(5),
    );
}

#[test]
fn variables_feed_arithmetic() {
    // x = 10; y = x * 5
    let vm = run("
        LOAD_CONST 10
        STORE_VAR x
        LOAD_VAR x
        LOAD_CONST 5
        MUL
        STORE_VAR y
        HALT
    ");
    assert_eq!(vm.global("x"), Some(&Value::Int(10)));
    assert_eq!(vm.global("y"), Some(&Value::Int(50)));
}

#[test]
fn subtraction_order() {
    // second-from-top minus top
    assert_global("LOAD_CONST 3\nLOAD_CONST 10\nSUB\nSTORE_VAR r", "r", Value::Int(-7));
}

#[test]
fn division_yields_float() {
    assert_global("LOAD_CONST 8\nLOAD_CONST 2\nDIV\nSTORE_VAR r", "r", Value::Float(4.0));
    let vm = run("LOAD_CONST 8\nLOAD_CONST 2\nDIV\nSTORE_VAR r");
    assert!(matches!(vm.global("r"), Some(Value::Float(_))));
}

#[test]
fn float_literals() {
    assert_global("LOAD_CONST 1.5\nLOAD_CONST 2\nMUL\nSTORE_VAR r", "r", Value::Float(3.0));
}

#[test]
fn string_concatenation() {
    assert_global(
        "LOAD_CONST \"foo\"\nLOAD_CONST bar\nADD\nSTORE_VAR s",
        "s",
        Value::from("foobar"),
    );
}

#[test]
fn dup_top_squares() {
    assert_global("LOAD_CONST 12\nDUP_TOP\nMUL\nSTORE_VAR sq", "sq", Value::Int(144));
}

#[test]
fn pop_top_discards() {
    assert_global(
        "LOAD_CONST 1\nLOAD_CONST 2\nPOP_TOP\nSTORE_VAR r",
        "r",
        Value::Int(1),
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_global(
        "# header\n\n   LOAD_CONST 4   \n# mid\nSTORE_VAR four\n\n",
        "four",
        Value::Int(4),
    );
}
