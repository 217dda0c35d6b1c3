//! Jumps and conditional branches.

use bcvm_core::Opcode;

use crate::error::VmError;
use crate::frame::Frame;
use crate::value::Value;

/// Parse a jump operand into a (possibly out of range) target.
pub fn parse_target(opcode: Opcode, operand: &str) -> Result<i64, VmError> {
    operand.parse().map_err(|_| VmError::InvalidOperand {
        opcode,
        operand: operand.to_string(),
        expected: "an integer jump target",
    })
}

/// Move the instruction pointer to `target`, which must name an existing
/// instruction of the frame.
pub fn jump(frame: &mut Frame, target: i64) -> Result<(), VmError> {
    let len = frame.len();
    match usize::try_from(target) {
        Ok(ip) if ip < len => {
            frame.set_ip(ip);
            Ok(())
        }
        _ => Err(VmError::InvalidJumpTarget { target, len }),
    }
}

/// Jump if `condition` is truthy.
pub fn jump_if_true(frame: &mut Frame, condition: &Value, target: i64) -> Result<(), VmError> {
    if condition.is_truthy() {
        jump(frame, target)?;
    }
    Ok(())
}

/// Jump if `condition` is falsy.
pub fn jump_if_false(frame: &mut Frame, condition: &Value, target: i64) -> Result<(), VmError> {
    if !condition.is_truthy() {
        jump(frame, target)?;
    }
    Ok(())
}
