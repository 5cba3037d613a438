#![cfg(test)]

mod alu;
mod call;
mod errors;
mod jmp;
mod load;
mod progs;
mod stack;
