use thiserror::Error;

/// Fatal execution errors. The run loop never continues past any of these.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmuError {
    #[error("memory address {addr:#x} out of bounds")]
    OutOfBounds { addr: u16 },

    #[error("register index {reg} out of bounds")]
    RegisterOutOfBounds { reg: u8 },

    #[error("unsupported ALU operation {op:#010b}")]
    UnsupportedOperation { op: u8 },

    #[error("invalid instruction {op:#010b} at pc {pc:#x}")]
    InvalidInstruction { op: u8, pc: u16 },
}
