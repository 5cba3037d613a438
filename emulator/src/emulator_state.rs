use common::constants::{MEM_SIZE, STACK_INIT};
use common::error::EmuError;
use common::isa::{NUM_REGS, Reg};

use log::trace;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    pub const EQUAL_SHIFT: u8 = 0;
    pub const GREATER_SHIFT: u8 = 1;
    pub const LESS_SHIFT: u8 = 2;

    pub const E: u8 = 0x1 << Self::EQUAL_SHIFT;
    pub const G: u8 = 0x1 << Self::GREATER_SHIFT;
    pub const L: u8 = 0x1 << Self::LESS_SHIFT;

    pub fn new() -> Flags {
        Default::default()
    }

    pub fn from_raw(raw: u8) -> Flags {
        Flags(raw)
    }

    pub fn to_raw(self) -> u8 {
        self.0
    }

    pub fn get_equal(&self) -> bool {
        (self.0 & Self::E) != 0
    }

    pub fn set_equal(&mut self, val: bool) {
        self.0 &= !Self::E;
        self.0 |= (val as u8) << Self::EQUAL_SHIFT;
    }

    pub fn get_greater(&self) -> bool {
        (self.0 & Self::G) != 0
    }

    pub fn set_greater(&mut self, val: bool) {
        self.0 &= !Self::G;
        self.0 |= (val as u8) << Self::GREATER_SHIFT;
    }

    pub fn get_less(&self) -> bool {
        (self.0 & Self::L) != 0
    }

    pub fn set_less(&mut self, val: bool) {
        self.0 &= !Self::L;
        self.0 |= (val as u8) << Self::LESS_SHIFT;
    }
}

pub struct EmulatorState {
    num_ins: usize,
    mem: Vec<u8>,
    regs: [u8; NUM_REGS],
    flags: Flags,
    pc: u16,
}

impl EmulatorState {
    pub fn new() -> Self {
        let mut state = EmulatorState {
            num_ins: 0usize,
            mem: vec![0; MEM_SIZE as usize],
            regs: [0; NUM_REGS],
            flags: Flags::new(),
            pc: 0,
        };
        state.reg_write(Reg::SP, STACK_INIT);
        state
    }

    pub fn inc_ins(&mut self) {
        self.num_ins += 1;
    }

    pub fn num_ins(&self) -> usize {
        self.num_ins
    }

    pub fn mem_read_byte(&self, addr: u16) -> Result<u8, EmuError> {
        self.mem
            .get(addr as usize)
            .copied()
            .ok_or(EmuError::OutOfBounds { addr })
    }

    pub fn mem_write_byte(&mut self, addr: u16, val: u8) -> Result<(), EmuError> {
        trace!("Mem: writing {val:#04x} to {addr:#04x}");
        let cell = self
            .mem
            .get_mut(addr as usize)
            .ok_or(EmuError::OutOfBounds { addr })?;
        *cell = val;
        Ok(())
    }

    pub fn reg_read(&self, reg: Reg) -> u8 {
        self.regs[reg.index()]
    }

    pub fn reg_write(&mut self, reg: Reg, val: u8) {
        trace!("Reg: writing {val:#04x} to {reg}");
        self.regs[reg.index()] = val;
    }

    pub fn regs(&self) -> &[u8; NUM_REGS] {
        &self.regs
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        trace!("PC: set to {pc:#04x}");
        self.pc = pc;
    }

    pub fn advance_pc(&mut self, by: u16) {
        self.pc += by;
    }

    // The opcode byte at PC plus however many bytes remain in memory
    // after it, at most two. The decoder only looks at the operand bytes
    // the opcode calls for.
    pub fn next_ins(&self) -> Result<&[u8], EmuError> {
        let pc = self.pc as usize;
        if pc >= self.mem.len() {
            return Err(EmuError::OutOfBounds { addr: self.pc });
        }
        let end = usize::min(pc + 3, self.mem.len());
        Ok(&self.mem[pc..end])
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }
}

impl Default for EmulatorState {
    fn default() -> Self {
        Self::new()
    }
}
