//! End-to-end load, parse and run tests.
//!
//! Tests are organized into modules by functionality.

use bcvm::{Value, VirtualMachine, VmConfig};

mod arithmetic;
mod calls;
mod errors;
mod flow;
mod programs;
mod tools;

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a VM with the standard natives registered.
pub fn vm_with_stdlib() -> VirtualMachine {
    VirtualMachine::with_stdlib(VmConfig::default())
}

/// Run source in a fresh VM and return it for inspection.
pub fn run(source: &str) -> VirtualMachine {
    let mut vm = vm_with_stdlib();
    vm.run_str(source)
        .unwrap_or_else(|e| panic!("run failed for '{}': {}", source, e));
    vm
}

/// Run source and check a global's final value.
pub fn assert_global(source: &str, name: &str, expected: Value) {
    let vm = run(source);
    assert_eq!(
        vm.global(name),
        Some(&expected),
        "unexpected value for '{}' after running:\n{}",
        name,
        source
    );
}

/// Run source and return the error it fails with.
pub fn run_err(source: &str) -> bcvm::Error {
    let mut vm = vm_with_stdlib();
    match vm.run_str(source) {
        Ok(value) => panic!("expected failure, got {:?} for '{}'", value, source),
        Err(e) => e,
    }
}
