//! The instruction catalog.
//!
//! Every opcode the runtime understands is listed exactly once in
//! [`CATALOG`], in the same order as the [`Opcode`] enum. The table is the
//! single source of truth for opcode names, operand counts and stack effects.

use std::fmt;

/// An opcode from the closed instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push a literal constant.
    LoadConst,
    /// Push the value of a variable.
    LoadVar,
    /// Pop the top of stack into a variable.
    StoreVar,
    Add,
    Sub,
    Mul,
    Div,
    /// Discard the top of stack.
    PopTop,
    /// Duplicate the top of stack.
    DupTop,
    /// Unconditional jump to an instruction index.
    Jump,
    /// Pop a condition and jump if it is truthy.
    JumpIfTrue,
    /// Pop a condition and jump if it is falsy.
    JumpIfFalse,
    /// Call a native function with N arguments.
    CallFunc,
    /// Return the top of stack to the calling frame.
    ReturnVal,
    /// End the current activation.
    Halt,
}

/// Stack effect of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackEffect {
    /// Consumes and produces a fixed number of values.
    Fixed { consumes: u8, produces: u8 },
    /// Depends on the operand (CALL_FUNC) or moves values between frames.
    Dynamic,
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub opcode: Opcode,
    /// Exact (upper case) mnemonic.
    pub name: &'static str,
    /// Number of operands the instruction takes.
    pub operand_count: usize,
    pub effect: StackEffect,
    pub description: &'static str,
}

impl OpcodeInfo {
    const fn new(
        opcode: Opcode,
        name: &'static str,
        operand_count: usize,
        effect: StackEffect,
        description: &'static str,
    ) -> Self {
        Self {
            opcode,
            name,
            operand_count,
            effect,
            description,
        }
    }
}

const fn fixed(consumes: u8, produces: u8) -> StackEffect {
    StackEffect::Fixed { consumes, produces }
}

/// The complete instruction set, indexed by `Opcode as usize`.
pub static CATALOG: [OpcodeInfo; 15] = [
    OpcodeInfo::new(
        Opcode::LoadConst,
        "LOAD_CONST",
        1,
        fixed(0, 1),
        "Load a constant onto the stack",
    ),
    OpcodeInfo::new(Opcode::LoadVar, "LOAD_VAR", 1, fixed(0, 1), "Load a variable onto the stack"),
    OpcodeInfo::new(
        Opcode::StoreVar,
        "STORE_VAR",
        1,
        fixed(1, 0),
        "Store the top of stack into a variable",
    ),
    OpcodeInfo::new(Opcode::Add, "ADD", 0, fixed(2, 1), "Add the top two values"),
    OpcodeInfo::new(
        Opcode::Sub,
        "SUB",
        0,
        fixed(2, 1),
        "Subtract the top value from the one below it",
    ),
    OpcodeInfo::new(Opcode::Mul, "MUL", 0, fixed(2, 1), "Multiply the top two values"),
    OpcodeInfo::new(Opcode::Div, "DIV", 0, fixed(2, 1), "Divide the second value by the top value"),
    OpcodeInfo::new(Opcode::PopTop, "POP_TOP", 0, fixed(1, 0), "Discard the top of stack"),
    OpcodeInfo::new(Opcode::DupTop, "DUP_TOP", 0, fixed(1, 2), "Duplicate the top of stack"),
    OpcodeInfo::new(Opcode::Jump, "JUMP", 1, fixed(0, 0), "Jump to an instruction index"),
    OpcodeInfo::new(
        Opcode::JumpIfTrue,
        "JUMP_IF_TRUE",
        1,
        fixed(1, 0),
        "Jump if the popped value is truthy",
    ),
    OpcodeInfo::new(
        Opcode::JumpIfFalse,
        "JUMP_IF_FALSE",
        1,
        fixed(1, 0),
        "Jump if the popped value is falsy",
    ),
    OpcodeInfo::new(
        Opcode::CallFunc,
        "CALL_FUNC",
        1,
        StackEffect::Dynamic,
        "Call a native function with N arguments",
    ),
    OpcodeInfo::new(
        Opcode::ReturnVal,
        "RETURN_VAL",
        0,
        StackEffect::Dynamic,
        "Return the top of stack to the caller",
    ),
    OpcodeInfo::new(Opcode::Halt, "HALT", 0, fixed(0, 0), "End the current activation"),
];

impl Opcode {
    /// All opcodes in catalog order.
    pub const ALL: [Opcode; 15] = [
        Opcode::LoadConst,
        Opcode::LoadVar,
        Opcode::StoreVar,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::PopTop,
        Opcode::DupTop,
        Opcode::Jump,
        Opcode::JumpIfTrue,
        Opcode::JumpIfFalse,
        Opcode::CallFunc,
        Opcode::ReturnVal,
        Opcode::Halt,
    ];

    /// Look up an opcode by its exact mnemonic.
    pub fn from_name(name: &str) -> Option<Opcode> {
        lookup(name).map(|info| info.opcode)
    }

    pub fn info(self) -> &'static OpcodeInfo {
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn operand_count(self) -> usize {
        self.info().operand_count
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// True for the three opcodes that may rewrite the instruction pointer.
    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::Jump | Opcode::JumpIfTrue | Opcode::JumpIfFalse)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Find the catalog entry for a mnemonic. Names are case sensitive.
pub fn lookup(name: &str) -> Option<&'static OpcodeInfo> {
    CATALOG.iter().find(|info| info.name == name)
}

/// Check whether a mnemonic names a known opcode.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}
