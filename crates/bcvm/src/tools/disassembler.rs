//! Instruction listing.

use std::path::Path;

use bcvm_core::Instruction;

use crate::error::Error;

/// A rendered instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisassembledInstr {
    /// Instruction index (jump target).
    pub index: usize,
    /// Human-readable text (e.g. "LOAD_CONST 5").
    pub text: String,
}

impl DisassembledInstr {
    /// `NNNN  TEXT`.
    pub fn line(&self) -> String {
        format!("{:04}  {}", self.index, self.text)
    }
}

/// Disassemble a program into indexed entries.
pub fn disassemble(instructions: &[Instruction]) -> Vec<DisassembledInstr> {
    instructions
        .iter()
        .enumerate()
        .map(|(index, instr)| DisassembledInstr {
            index,
            text: instr.to_string(),
        })
        .collect()
}

/// Render a full listing, one instruction per line.
pub fn render(instructions: &[Instruction]) -> String {
    disassemble(instructions)
        .iter()
        .map(DisassembledInstr::line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load and parse a file, then render its listing.
pub fn disassemble_file(path: &Path) -> Result<String, Error> {
    let lines = bcvm_core::load_file(path)?;
    let instructions = bcvm_core::parse(lines)?;
    Ok(render(&instructions))
}
