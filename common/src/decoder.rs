
use num_traits::FromPrimitive;

use crate::error::EmuError;
use crate::isa::{AluOp, Ins, Opcode, Reg};

/// Decode the instruction starting at `pc`. `input` holds the opcode byte
/// followed by whatever bytes remain in memory (at most two); operand
/// bytes an instruction does not call for are never touched.
pub fn decode(input: &[u8], pc: u16) -> Result<Ins, EmuError> {
    let op_byte = *input.first().ok_or(EmuError::OutOfBounds { addr: pc })?;
    let Some(op) = Opcode::from_u8(op_byte) else {
        // An unknown byte with the ALU-class bit set is the ALU's problem.
        if op_byte & Opcode::ALU_BIT != 0 {
            return Err(EmuError::UnsupportedOperation { op: op_byte });
        }
        return Err(EmuError::InvalidInstruction { op: op_byte, pc });
    };

    let operand = |idx: usize| -> Result<u8, EmuError> {
        input.get(idx).copied().ok_or(EmuError::OutOfBounds {
            addr: pc + idx as u16,
        })
    };
    let reg_operand = |idx: usize| -> Result<Reg, EmuError> { Reg::from_operand(operand(idx)?) };

    let ins = match op {
        Opcode::Hlt => Ins::Hlt,
        Opcode::Ret => Ins::Ret,
        Opcode::Push => Ins::Push { reg: reg_operand(1)? },
        Opcode::Pop => Ins::Pop { reg: reg_operand(1)? },
        Opcode::Prn => Ins::Prn { reg: reg_operand(1)? },
        Opcode::Call => Ins::Call { reg: reg_operand(1)? },
        Opcode::Jmp => Ins::Jmp { reg: reg_operand(1)? },
        Opcode::Jeq => Ins::Jeq { reg: reg_operand(1)? },
        Opcode::Jne => Ins::Jne { reg: reg_operand(1)? },
        Opcode::Ldi => Ins::Ldi {
            reg: reg_operand(1)?,
            imm: operand(2)?,
        },
        Opcode::Add | Opcode::Mul | Opcode::Cmp => Ins::Alu {
            op: AluOp::from_opcode(op)?,
            a: reg_operand(1)?,
            b: reg_operand(2)?,
        },
    };

    debug_assert_eq!(ins.encoded_len(), op.encoded_len());
    Ok(ins)
}
