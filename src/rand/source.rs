//! Secure byte sources.

use crate::error::{Error, Result};

/// Supplies cryptographically secure random bytes on demand.
///
/// An implementation must either fill the whole buffer or fail. It must never
/// fall back to a non-cryptographic generator.
pub trait SecureByteSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

impl<S: SecureByteSource + ?Sized> SecureByteSource for &S {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

impl<S: SecureByteSource + ?Sized> SecureByteSource for Box<S> {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }
}

/// The operating system CSPRNG (`getrandom(2)`, `BCryptGenRandom`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl OsRandom {
    pub fn name(&self) -> &'static str {
        "OS CSPRNG (getrandom)"
    }
}

impl SecureByteSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(|e| Error::EntropySource(e.to_string()))
    }
}
