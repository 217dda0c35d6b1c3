//! Tests running the fixture programs under `tests/programs/`.

use std::path::PathBuf;

use bcvm::Value;

use super::vm_with_stdlib;

fn programs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/programs")
}

#[test]
fn factorial() {
    let mut vm = vm_with_stdlib();
    vm.run_str(include_str!("../programs/factorial.bc"))
        .expect("factorial failed");
    assert_eq!(vm.global("acc"), Some(&Value::Int(120)));
    assert_eq!(vm.global("n"), Some(&Value::Int(0)));
}

#[test]
fn sum_returns_total() {
    let mut vm = vm_with_stdlib();
    let value = vm
        .run_file(programs_dir().join("sum_to_ten.bc"))
        .expect("failed to run sum_to_ten.bc");
    assert_eq!(value, Some(Value::Int(55)));
}

#[test]
fn stdlib_natives() {
    let mut vm = vm_with_stdlib();
    vm.run_file(programs_dir().join("natives.bc"))
        .expect("failed to run natives.bc");
    assert_eq!(vm.global("biggest"), Some(&Value::Int(9)));
    assert_eq!(vm.global("size"), Some(&Value::Int(8)));
    assert_eq!(vm.global("distance"), Some(&Value::Int(5)));
}
