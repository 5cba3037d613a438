
use std::sync::Arc;

use common::decoder::decode;
use common::error::EmuError;
use common::isa::{AluOp, Ins, Reg};

use crate::EmulatorState;
use crate::alu;
use crate::io::{Printer, StdoutPrinter};

use log::{debug, log_enabled, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecRet {
    Ok,
    Halt,
}

pub struct Emulator {
    state: EmulatorState,
    printer: Arc<dyn Printer>,
}

impl Emulator {
    pub fn new() -> Emulator {
        Emulator {
            state: EmulatorState::new(),
            printer: Arc::new(StdoutPrinter::default()),
        }
    }

    pub fn set_printer(&mut self, printer: Arc<dyn Printer>) {
        self.printer = printer;
    }

    // Run until a halt or a fatal error.
    pub fn run(&mut self) -> Result<(), EmuError> {
        while self.run_ins()? != ExecRet::Halt {}
        Ok(())
    }

    // Run a single instruction.
    pub fn run_ins(&mut self) -> Result<ExecRet, EmuError> {
        self.state.inc_ins();
        self.trace_cycle();

        let ins = self.decode()?;
        debug!("PC {:#04x}: {ins}", self.state.pc());
        self.exec(&ins)
    }

    fn decode(&self) -> Result<Ins, EmuError> {
        decode(self.state.next_ins()?, self.state.pc())
    }

    pub fn load_image(&mut self, data: &[u8], start: u16) -> Result<(), EmuError> {
        for (i, byte) in data.iter().enumerate() {
            self.state.mem_write_byte(start + i as u16, *byte)?;
        }
        Ok(())
    }

    pub fn get_state(&self) -> &EmulatorState {
        &self.state
    }

    pub fn get_state_mut(&mut self) -> &mut EmulatorState {
        &mut self.state
    }

    pub fn reg_read(&self, reg: Reg) -> u8 {
        self.state.reg_read(reg)
    }

    pub fn reg_write(&mut self, reg: Reg, val: u8) {
        self.state.reg_write(reg, val);
    }

    pub fn mem_read_byte(&self, addr: u16) -> Result<u8, EmuError> {
        self.state.mem_read_byte(addr)
    }

    pub fn mem_write_byte(&mut self, addr: u16, val: u8) -> Result<(), EmuError> {
        self.state.mem_write_byte(addr, val)
    }

    // PC, the three bytes at PC, and the register file, once per cycle.
    fn trace_cycle(&self) {
        if !log_enabled!(log::Level::Trace) {
            return;
        }

        let pc = self.state.pc();
        let mut line = format!("cycle: {pc:02x} |");
        for addr in pc..pc + 3 {
            match self.state.mem_read_byte(addr) {
                Ok(byte) => line.push_str(&format!(" {byte:02x}")),
                Err(_) => line.push_str(" --"),
            }
        }
        line.push_str(" |");
        for val in self.state.regs() {
            line.push_str(&format!(" {val:02x}"));
        }
        trace!("{line}");
    }

    ///////////////////////////////////////////////////////////////////////////
    // Execute
    ///////////////////////////////////////////////////////////////////////////

    fn push_byte(&mut self, val: u8) -> Result<(), EmuError> {
        let sp = self.state.reg_read(Reg::SP).wrapping_sub(1);
        self.state.reg_write(Reg::SP, sp);
        self.state.mem_write_byte(sp as u16, val)
    }

    fn pop_byte(&mut self) -> Result<u8, EmuError> {
        let sp = self.state.reg_read(Reg::SP);
        let val = self.state.mem_read_byte(sp as u16)?;
        self.state.reg_write(Reg::SP, sp.wrapping_add(1));
        Ok(val)
    }

    fn exec_alu_ins(&mut self, op: AluOp, a: Reg, b: Reg) {
        let lhs = self.state.reg_read(a);
        let rhs = self.state.reg_read(b);
        match op {
            AluOp::Add => self.state.reg_write(a, alu::add(lhs, rhs)),
            AluOp::Mul => self.state.reg_write(a, alu::mul(lhs, rhs)),
            AluOp::Cmp => self.state.set_flags(alu::compare(lhs, rhs)),
        }
    }

    // Each arm owns its PC policy: advance by the instruction's encoded
    // length, or set the PC directly, never both.
    fn exec(&mut self, ins: &Ins) -> Result<ExecRet, EmuError> {
        match *ins {
            Ins::Hlt => {
                self.state.advance_pc(1);
                return Ok(ExecRet::Halt);
            }
            Ins::Ldi { reg, imm } => {
                self.state.reg_write(reg, imm);
                self.state.advance_pc(3);
            }
            Ins::Prn { reg } => {
                self.printer.print(self.state.reg_read(reg));
                self.state.advance_pc(2);
            }
            Ins::Alu { op, a, b } => {
                self.exec_alu_ins(op, a, b);
                self.state.advance_pc(3);
            }
            Ins::Push { reg } => {
                let val = self.state.reg_read(reg);
                self.push_byte(val)?;
                self.state.advance_pc(2);
            }
            Ins::Pop { reg } => {
                let val = self.pop_byte()?;
                self.state.reg_write(reg, val);
                self.state.advance_pc(2);
            }
            Ins::Call { reg } => {
                // Return address is the byte after the operand.
                let ret = (self.state.pc() + 2) as u8;
                self.push_byte(ret)?;
                self.state.set_pc(self.state.reg_read(reg) as u16);
            }
            Ins::Ret => {
                let ret = self.pop_byte()?;
                self.state.set_pc(ret as u16);
            }
            Ins::Jmp { reg } => {
                self.state.set_pc(self.state.reg_read(reg) as u16);
            }
            Ins::Jeq { reg } => {
                if self.state.flags().get_equal() {
                    self.state.set_pc(self.state.reg_read(reg) as u16);
                } else {
                    self.state.advance_pc(2);
                }
            }
            Ins::Jne { reg } => {
                if self.state.flags().get_equal() {
                    self.state.advance_pc(2);
                } else {
                    self.state.set_pc(self.state.reg_read(reg) as u16);
                }
            }
        }

        Ok(ExecRet::Ok)
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
