
use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

use crate::error::EmuError;

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum Reg {
    R0 = 0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    SP,
}

pub const NUM_REGS: usize = 8;

impl Reg {
    pub fn from_operand(byte: u8) -> Result<Reg, EmuError> {
        Reg::from_u8(byte).ok_or(EmuError::RegisterOutOfBounds { reg: byte })
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

////////////////////////////////////////////////////////////////////////////////

// Opcode bytes pack their own shape: the high two bits are the operand
// count, bit 5 marks ALU-class instructions, and bit 4 marks instructions
// that set the PC directly.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq)]
pub enum Opcode {
    Hlt = 0b0000_0001,
    Ret = 0b0001_0001,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Call = 0b0101_0000,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    Ldi = 0b1000_0010,
    Add = 0b1010_0000,
    Mul = 0b1010_0010,
    Cmp = 0b1010_0111,
}

impl Opcode {
    pub const OPERAND_COUNT_SHIFT: u8 = 6;
    pub const ALU_BIT: u8 = 0b0010_0000;
    pub const SETS_PC_BIT: u8 = 0b0001_0000;

    pub fn num_operands(self) -> u16 {
        ((self as u8) >> Self::OPERAND_COUNT_SHIFT) as u16
    }

    // Total encoded length, opcode byte included.
    pub fn encoded_len(self) -> u16 {
        1 + self.num_operands()
    }

    pub fn is_alu(self) -> bool {
        (self as u8) & Self::ALU_BIT != 0
    }

    pub fn sets_pc(self) -> bool {
        (self as u8) & Self::SETS_PC_BIT != 0
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Mul,
    Cmp,
}

impl AluOp {
    pub fn from_opcode(op: Opcode) -> Result<AluOp, EmuError> {
        match op {
            Opcode::Add => Ok(AluOp::Add),
            Opcode::Mul => Ok(AluOp::Mul),
            Opcode::Cmp => Ok(AluOp::Cmp),
            _ => Err(EmuError::UnsupportedOperation { op: op as u8 }),
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "add",
            AluOp::Mul => "mul",
            AluOp::Cmp => "cmp",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ins {
    Hlt,
    Ldi { reg: Reg, imm: u8 },
    Prn { reg: Reg },
    Alu { op: AluOp, a: Reg, b: Reg },
    Push { reg: Reg },
    Pop { reg: Reg },
    Call { reg: Reg },
    Ret,
    Jmp { reg: Reg },
    Jeq { reg: Reg },
    Jne { reg: Reg },
}

impl Ins {
    pub fn encoded_len(&self) -> u16 {
        match self {
            Ins::Hlt | Ins::Ret => 1,
            Ins::Prn { .. }
            | Ins::Push { .. }
            | Ins::Pop { .. }
            | Ins::Call { .. }
            | Ins::Jmp { .. }
            | Ins::Jeq { .. }
            | Ins::Jne { .. } => 2,
            Ins::Ldi { .. } | Ins::Alu { .. } => 3,
        }
    }
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ins::Hlt => write!(f, "hlt"),
            Ins::Ret => write!(f, "ret"),
            Ins::Ldi { reg, imm } => write!(f, "ldi {reg}, {imm}"),
            Ins::Prn { reg } => write!(f, "prn {reg}"),
            Ins::Alu { op, a, b } => write!(f, "{} {a}, {b}", op.mnemonic()),
            Ins::Push { reg } => write!(f, "push {reg}"),
            Ins::Pop { reg } => write!(f, "pop {reg}"),
            Ins::Call { reg } => write!(f, "call {reg}"),
            Ins::Jmp { reg } => write!(f, "jmp {reg}"),
            Ins::Jeq { reg } => write!(f, "jeq {reg}"),
            Ins::Jne { reg } => write!(f, "jne {reg}"),
        }
    }
}
