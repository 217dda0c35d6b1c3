//! Line-oriented instruction parser.
//!
//! Each input line holds one instruction: a mnemonic followed by
//! whitespace-separated operands. Lines are expected to be trimmed with
//! blanks and comments already removed (see [`crate::loader`]).

use crate::error::ParseError;
use crate::instruction::Instruction;
use crate::opcode::lookup;

/// Parse a sequence of lines into instructions, one per line.
///
/// The first failing line aborts the parse.
pub fn parse<I, S>(lines: I) -> Result<Vec<Instruction>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_line(line.as_ref(), i + 1))
        .collect()
}

/// Parse a single line. `line` is the number reported in errors.
pub fn parse_line(text: &str, line: usize) -> Result<Instruction, ParseError> {
    let mut tokens = text.split_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Err(ParseError::Empty { line });
    };

    let info = lookup(mnemonic).ok_or_else(|| ParseError::UnknownOpcode {
        line,
        opcode: mnemonic.to_string(),
    })?;

    let instr = Instruction::new(info.opcode, tokens);
    if instr.operands.len() != info.operand_count {
        return Err(ParseError::OperandCount {
            line,
            opcode: info.name,
            expected: info.operand_count,
            found: instr.operands.len(),
        });
    }

    Ok(instr)
}
