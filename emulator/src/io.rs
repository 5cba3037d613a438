//! The PRN output device: one decimal value per line.

use std::collections::VecDeque;
use std::io::{Write, stdout};
use std::sync::Mutex;

pub trait Printer: Send + Sync {
    fn print(&self, val: u8);
}

#[derive(Default, Clone, Copy)]
pub struct StdoutPrinter();

impl Printer for StdoutPrinter {
    fn print(&self, val: u8) {
        let mut out = stdout().lock();
        writeln!(out, "{val}").unwrap();
        out.flush().unwrap();
    }
}

/// Captures printed values instead of writing them anywhere; for tests.
#[derive(Default)]
pub struct PipePrinter {
    buf: Mutex<VecDeque<u8>>,
}

impl Printer for PipePrinter {
    fn print(&self, val: u8) {
        self.buf.lock().unwrap().push_back(val);
    }
}

impl PipePrinter {
    pub fn take(&self) -> VecDeque<u8> {
        std::mem::take(&mut self.buf.lock().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().unwrap().is_empty()
    }

    pub fn pop_front(&self) -> Option<u8> {
        self.buf.lock().unwrap().pop_front()
    }
}
