//! Executable code objects.

use bcvm_core::{Instruction, Opcode};

use crate::value::Value;

/// An immutable instruction list with its decoded constants.
///
/// `LOAD_CONST` literals are decoded once, when the code object is built,
/// and stored in a constants pool indexed per instruction.
#[derive(Clone, Debug, Default)]
pub struct Code {
    instructions: Vec<Instruction>,
    constants: Vec<Value>,
    // Constant index for each instruction, if it is a LOAD_CONST.
    slots: Vec<Option<usize>>,
}

impl Code {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let mut constants = Vec::new();
        let slots = instructions
            .iter()
            .map(|instr| match (instr.opcode, instr.operand(0)) {
                (Opcode::LoadConst, Some(literal)) => {
                    constants.push(Value::parse_literal(literal));
                    Some(constants.len() - 1)
                }
                _ => None,
            })
            .collect();

        Self {
            instructions,
            constants,
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, ip: usize) -> Option<&Instruction> {
        self.instructions.get(ip)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The constants pool, in instruction order.
    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// Decoded constant for the `LOAD_CONST` at `ip`.
    pub fn constant_at(&self, ip: usize) -> Option<&Value> {
        let index = (*self.slots.get(ip)?)?;
        self.constants.get(index)
    }
}

impl From<Vec<Instruction>> for Code {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}
