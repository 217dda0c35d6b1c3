use std::fmt;

use smallvec::SmallVec;

use crate::opcode::Opcode;

/// Operand list. No opcode takes more than one operand, so this never spills.
pub type Operands = SmallVec<[String; 1]>;

/// A parsed instruction: an opcode plus its raw operand strings.
///
/// Operand values are kept as text; the runtime interprets them when the
/// instruction executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Operands,
}

impl Instruction {
    pub fn new<I, S>(opcode: Opcode, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            opcode,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// An instruction with no operands.
    pub fn bare(opcode: Opcode) -> Self {
        Self {
            opcode,
            operands: Operands::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.opcode.name()
    }

    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Get the operand at `index`, if present.
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(String::as_str)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}
