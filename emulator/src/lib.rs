pub mod alu;
pub mod emulator;
pub mod emulator_state;
pub mod io;

pub use emulator::{Emulator, ExecRet};
pub use emulator_state::{EmulatorState, Flags};
pub use io::{PipePrinter, Printer};
