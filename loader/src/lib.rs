//! Loads the line-oriented program encoding: one base-2 byte per line,
//! `#` starting a comment. Produces a flat byte image for the emulator.

use std::fs;
use std::path::Path;

use common::constants::MEM_SIZE;

use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("program of {len} bytes doesn't fit in {MEM_SIZE} bytes of memory")]
    TooLarge { len: usize },

    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse program text into a byte image. Lines that don't parse as a
/// binary byte are skipped with a warning; loading continues.
pub fn load_source(src: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (i, line) in src.lines().enumerate() {
        let code = match line.split_once('#') {
            Some((code, _comment)) => code,
            None => line,
        };
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        match u8::from_str_radix(code, 2) {
            Ok(byte) => image.push(byte),
            Err(e) => warn!("line {}: {code:?} is not a binary byte ({e}), skipping", i + 1),
        }
    }

    if image.len() > MEM_SIZE as usize {
        return Err(LoadError::TooLarge { len: image.len() });
    }
    Ok(image)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let src = fs::read_to_string(path)?;
    load_source(&src)
}
