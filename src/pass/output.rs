//! Writing generated passwords to a terminal, file or clipboard buffer.

use std::fs::OpenOptions;
use std::io::{self, Write};

use log::info;
use zeroize::Zeroize;

use super::charset::Keyspace;
use crate::error::{Error, Result};
use crate::generator::PasswordGenerator;
use crate::rand::SecureByteSource;
use crate::settings::Settings;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Generate `count` passwords from `keyspace`.
///
/// With `settings.to_clipboard` the passwords are collected and returned,
/// newline separated. Otherwise they are written to the settings' output file,
/// or stdout when none is set, and `None` is returned. Generation stops at the
/// first error; passwords already written stay written.
pub fn generate_batch<S: SecureByteSource>(
    generator: &PasswordGenerator<S>,
    keyspace: &Keyspace,
    settings: &Settings,
    count: usize,
) -> Result<Option<String>> {
    if settings.to_clipboard {
        let mut passwords = String::new();
        for _ in 0..count {
            match generator.get_random_string(settings.pass_length, keyspace) {
                Ok(mut pass) => {
                    passwords.push_str(&pass);
                    passwords.push('\n');
                    pass.zeroize();
                }
                Err(e) => {
                    passwords.zeroize();
                    return Err(e);
                }
            }
        }
        return Ok(Some(passwords));
    }

    if settings.output_to_terminal() {
        let stdout = io::stdout();
        write_batch(generator, keyspace, settings.pass_length, count, stdout.lock())?;
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.output_file_path)
            .map_err(|e| Error::Output(format!("{}: {e}", settings.output_file_path)))?;
        write_batch(generator, keyspace, settings.pass_length, count, file)?;
        info!("{count} password(s) appended to {}", settings.output_file_path);
    }

    Ok(None)
}

/// Write `count` newline-terminated passwords to `out`.
pub fn write_batch<S: SecureByteSource, W: Write>(
    generator: &PasswordGenerator<S>,
    keyspace: &Keyspace,
    length: usize,
    count: usize,
    out: W,
) -> Result<()> {
    let mut out = SecureBufWriter::new(out);
    for _ in 0..count {
        let mut pass = generator.get_random_string(length, keyspace)?;
        pass.push('\n');
        let res = out.write_all(pass.as_bytes());
        pass.zeroize();
        res.map_err(|e| Error::Output(e.to_string()))?;
    }
    out.flush().map_err(|e| Error::Output(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::OsRandom;
    use crate::rand::scripted::ScriptedSource;

    #[test]
    fn writer_passes_everything_through() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(b"abc\n").unwrap();
            w.write_all(&vec![b'x'; BUF_CAPACITY + 10]).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), 4 + BUF_CAPACITY + 10 + 4);
        assert!(sink.starts_with(b"abc\nxxx"));
        assert!(sink.ends_with(b"xtail"));
    }

    #[test]
    fn batch_writes_one_password_per_line() {
        let generator = PasswordGenerator::new(OsRandom);
        let ks = Keyspace::new("01").unwrap();
        let mut sink = Vec::new();
        write_batch(&generator, &ks, 12, 5, &mut sink).unwrap();

        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 12));
        assert!(text.chars().all(|c| c == '0' || c == '1' || c == '\n'));
    }

    #[test]
    fn clipboard_batch_is_collected() {
        let generator = PasswordGenerator::new(OsRandom);
        let settings = Settings {
            pass_length: 6,
            to_clipboard: true,
            ..Default::default()
        };
        let out = generate_batch(&generator, &Keyspace::default(), &settings, 3)
            .unwrap()
            .unwrap();
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn clipboard_batch_fails_atomically() {
        let src = ScriptedSource::words(&[0; 4]);
        let generator = PasswordGenerator::new(&src);
        let settings = Settings {
            pass_length: 4,
            to_clipboard: true,
            ..Default::default()
        };
        // enough entropy for one password of four, not two
        let res = generate_batch(&generator, &Keyspace::default(), &settings, 2);
        assert!(res.is_err());
    }
}
