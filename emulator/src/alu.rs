//! Pure arithmetic/logic over register values. The machine word is an
//! unsigned byte; arithmetic wraps modulo 256.

use std::cmp::Ordering;

use crate::Flags;

pub fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

pub fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}

// Flags are recomputed from scratch: exactly one of equal/greater/less
// is set per comparison.
pub fn compare(a: u8, b: u8) -> Flags {
    let mut flags = Flags::new();
    match a.cmp(&b) {
        Ordering::Equal => flags.set_equal(true),
        Ordering::Greater => flags.set_greater(true),
        Ordering::Less => flags.set_less(true),
    }
    flags
}
