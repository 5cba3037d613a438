use common::isa::{Opcode, Reg};
use emu_lib::Emulator;

fn run(bin: &[u8]) -> Emulator {
    let mut emu = Emulator::new();
    emu.load_image(bin, 0).unwrap();
    emu.run().unwrap();
    emu
}

#[test]
fn jmp_register_target() {
    let bin = &[
        Opcode::Ldi as u8, 1, 10, // ldi r1, taken
        Opcode::Jmp as u8, 1,     // jmp r1
        Opcode::Ldi as u8, 0, 1,  // ldi r0, 1 (skipped)
        Opcode::Hlt as u8,        // hlt
        Opcode::Hlt as u8,        // padding
        // taken:
        Opcode::Ldi as u8, 0, 2,  // ldi r0, 2
        Opcode::Hlt as u8,        // hlt
    ];
    assert_eq!(run(bin).reg_read(Reg::R0), 2);
}

// cmp r0, r1 then a conditional jump to `taken` which sets r3 to 1;
// falling through halts with r3 still 0.
fn run_cond(cond: Opcode, a: u8, b: u8) -> u8 {
    let bin = &[
        Opcode::Ldi as u8, 0, a,  // ldi r0, a
        Opcode::Ldi as u8, 1, b,  // ldi r1, b
        Opcode::Ldi as u8, 2, 15, // ldi r2, taken
        Opcode::Cmp as u8, 0, 1,  // cmp r0, r1
        cond as u8, 2,            // jeq/jne r2
        Opcode::Hlt as u8,        // hlt
        // taken:
        Opcode::Ldi as u8, 3, 1,  // ldi r3, 1
        Opcode::Hlt as u8,        // hlt
    ];
    run(bin).reg_read(Reg::R3)
}

#[test]
fn jeq_taken_iff_equal() {
    assert_eq!(run_cond(Opcode::Jeq, 5, 5), 1);
    assert_eq!(run_cond(Opcode::Jeq, 5, 6), 0);
    assert_eq!(run_cond(Opcode::Jeq, 6, 5), 0);
}

#[test]
fn jne_taken_iff_unequal() {
    assert_eq!(run_cond(Opcode::Jne, 5, 6), 1);
    assert_eq!(run_cond(Opcode::Jne, 6, 5), 1);
    assert_eq!(run_cond(Opcode::Jne, 5, 5), 0);
}

#[test]
fn not_taken_advances_past_operand() {
    let bin = &[
        Opcode::Ldi as u8, 0, 1, // ldi r0, 1
        Opcode::Ldi as u8, 1, 2, // ldi r1, 2
        Opcode::Cmp as u8, 0, 1, // cmp r0, r1
        Opcode::Jeq as u8, 0,    // jeq r0 (not taken)
        Opcode::Hlt as u8,       // hlt
    ];
    let emu = run(bin);
    assert_eq!(emu.get_state().pc(), 12);
}
