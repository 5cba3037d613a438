pub mod constants;
pub mod decoder;
pub mod error;
pub mod isa;
