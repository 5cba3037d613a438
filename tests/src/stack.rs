use common::constants::STACK_INIT;
use common::isa::{Opcode, Reg};
use emu_lib::Emulator;

fn run(bin: &[u8]) -> Emulator {
    let mut emu = Emulator::new();
    emu.load_image(bin, 0).unwrap();
    emu.run().unwrap();
    emu
}

#[test]
fn push_writes_below_stack_init() {
    let bin = &[
        Opcode::Ldi as u8, 0, 0xaa, // ldi r0, 0xaa
        Opcode::Push as u8, 0,      // push r0
        Opcode::Hlt as u8,          // hlt
    ];
    let emu = run(bin);
    assert_eq!(emu.reg_read(Reg::SP), 0xf3);
    assert_eq!(emu.mem_read_byte(0xf3), Ok(0xaa));
    assert_eq!(STACK_INIT, 0xf4);
}

#[test]
fn push_pop_round_trip() {
    let bin = &[
        Opcode::Ldi as u8, 0, 42, // ldi r0, 42
        Opcode::Push as u8, 0,    // push r0
        Opcode::Ldi as u8, 0, 0,  // ldi r0, 0
        Opcode::Pop as u8, 0,     // pop r0
        Opcode::Hlt as u8,        // hlt
    ];
    let emu = run(bin);
    assert_eq!(emu.reg_read(Reg::R0), 42);
    assert_eq!(emu.reg_read(Reg::SP), STACK_INIT);
}

#[test]
fn pop_reads_memory_into_register() {
    // Popping into a different register than was pushed.
    let bin = &[
        Opcode::Ldi as u8, 0, 7, // ldi r0, 7
        Opcode::Push as u8, 0,   // push r0
        Opcode::Pop as u8, 1,    // pop r1
        Opcode::Hlt as u8,       // hlt
    ];
    let emu = run(bin);
    assert_eq!(emu.reg_read(Reg::R1), 7);
    assert_eq!(emu.reg_read(Reg::SP), STACK_INIT);
}

#[test]
fn lifo_order() {
    let bin = &[
        Opcode::Ldi as u8, 0, 1, // ldi r0, 1
        Opcode::Ldi as u8, 1, 2, // ldi r1, 2
        Opcode::Push as u8, 0,   // push r0
        Opcode::Push as u8, 1,   // push r1
        Opcode::Pop as u8, 2,    // pop r2
        Opcode::Pop as u8, 3,    // pop r3
        Opcode::Hlt as u8,       // hlt
    ];
    let emu = run(bin);
    assert_eq!(emu.reg_read(Reg::R2), 2);
    assert_eq!(emu.reg_read(Reg::R3), 1);
    assert_eq!(emu.reg_read(Reg::SP), STACK_INIT);
}
