use common::isa::Reg;
use emu_lib::Emulator;
use loader::load_source;

#[test]
fn loaded_program_runs() {
    let src = r#"
# set r0 and halt
10000010 # LDI R0
00000000
00000101 # 5
00000001 # HLT
    "#;
    let image = load_source(src).unwrap();
    let mut emu = Emulator::new();
    emu.load_image(&image, 0).unwrap();
    emu.run().unwrap();
    assert_eq!(emu.reg_read(Reg::R0), 5);
}

#[test]
fn skipped_lines_do_not_leave_holes() {
    // The junk line is dropped entirely; the bytes around it stay
    // contiguous, so the program still decodes.
    let src = r#"
10000010 # LDI R0
00000000
this is not a byte
00101010 # 42
00000001 # HLT
    "#;
    let image = load_source(src).unwrap();
    assert_eq!(image.len(), 4);

    let mut emu = Emulator::new();
    emu.load_image(&image, 0).unwrap();
    emu.run().unwrap();
    assert_eq!(emu.reg_read(Reg::R0), 42);
}

#[test]
fn image_loads_at_address_zero() {
    let image = load_source("00000001").unwrap();
    let mut emu = Emulator::new();
    emu.load_image(&image, 0).unwrap();
    assert_eq!(emu.mem_read_byte(0), Ok(1));
    assert_eq!(emu.mem_read_byte(1), Ok(0));
}
