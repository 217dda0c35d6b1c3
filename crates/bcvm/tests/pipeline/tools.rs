//! Tests for the assembler and disassembler on fixture programs.

use bcvm::tools::{assemble, disassemble_file, render};

use super::run;

#[test]
fn assembled_output_runs_the_same() {
    let source = include_str!("../programs/factorial.bc");
    let assembled = assemble(source).expect("factorial should assemble");
    assert_eq!(assembled.len(), 16);

    let vm = run(&assembled.join("\n"));
    assert_eq!(vm.global("acc"), Some(&bcvm::Value::Int(120)));
}

#[test]
fn listing_indexes_match_jump_targets() {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/programs/factorial.bc");
    let listing = disassemble_file(&path).expect("failed to disassemble");
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines[4], "0004  LOAD_VAR n");
    assert_eq!(lines[14], "0014  JUMP 4");
    assert_eq!(lines[15], "0015  HALT");
}

#[test]
fn render_parsed_source() {
    let program = bcvm_core::parse(bcvm_core::load_str("LOAD_CONST  1\nHALT")).unwrap();
    assert_eq!(render(&program), "0000  LOAD_CONST 1\n0001  HALT");
}
