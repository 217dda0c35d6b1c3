//! Text tools: assembler (normalise and validate) and disassembler (render).

pub mod assembler;
pub mod disassembler;

pub use assembler::{AssembleError, assemble, assemble_file};
pub use disassembler::{DisassembledInstr, disassemble, disassemble_file, render};
