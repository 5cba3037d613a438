
use std::error::Error;

use emu_lib::Emulator;

use clap::Parser;

/// LS-8 Emulator
#[derive(Parser)]
#[command(about)]
struct Args {
    /// Program file, one binary-encoded byte per line
    program: String,
}

fn main() {
    env_logger::init();

    let opt = Args::parse();
    if let Err(e) = run(&opt) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(opt: &Args) -> Result<(), Box<dyn Error>> {
    let image = loader::load_file(&opt.program)?;

    let mut emu = Emulator::new();
    emu.load_image(&image, 0)?;
    emu.run()?;
    Ok(())
}
