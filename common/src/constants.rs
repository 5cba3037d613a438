
pub const MEM_SIZE: u16 = 256; // Bytes; valid addresses are [0, MEM_SIZE)

// The stack grows downward from just under the top of memory.
pub const STACK_INIT: u8 = 0xF4;
