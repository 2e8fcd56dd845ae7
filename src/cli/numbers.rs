//! `--range` mode: uniform integers, one per line.

use std::fs::OpenOptions;
use std::io::Write;

use crate::error::{Error, Result};
use crate::generator::PasswordGenerator;
use crate::pass::SecureBufWriter;
use crate::rand::SecureByteSource;

pub fn write_numbers<S: SecureByteSource, W: Write>(
    generator: &PasswordGenerator<S>,
    (min, max): (i64, i64),
    count: usize,
    out: W,
) -> Result<()> {
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let n = generator.get_random_number(min, max)?;
        writeln!(out, "{n}").map_err(|e| Error::Output(e.to_string()))?;
    }
    out.flush().map_err(|e| Error::Output(e.to_string()))
}

pub fn output<S: SecureByteSource>(
    generator: &PasswordGenerator<S>,
    range: (i64, i64),
    count: usize,
    file_path: Option<&str>,
) -> Result<()> {
    if let Some(path) = file_path {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::Output(format!("{path}: {e}")))?;
        write_numbers(generator, range, count, file)
    } else {
        let stdout = std::io::stdout();
        write_numbers(generator, range, count, stdout.lock())
    }
}
