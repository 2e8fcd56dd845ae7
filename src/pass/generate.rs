//! Random string generation over a keyspace.

use zeroize::Zeroize;

use super::charset::Keyspace;
use crate::error::{Error, Result};
use crate::rand::{SecureByteSource, UniformIntegerSampler};

const RESERVE_LIMIT: usize = 4096;

pub struct RandomStringGenerator<S> {
    sampler: UniformIntegerSampler<S>,
}

impl<S: SecureByteSource> RandomStringGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            sampler: UniformIntegerSampler::new(source),
        }
    }

    /// Draw `length` characters from `keyspace`, each position independent
    /// and uniform. On failure nothing is returned; the partial string is
    /// wiped.
    pub fn generate(&self, length: usize, keyspace: &Keyspace) -> Result<String> {
        if keyspace.is_empty() {
            return Err(Error::EmptyKeyspace);
        }

        // reserve at most a page up front; the string grows as draws succeed
        let mut out = String::with_capacity(length.min(RESERVE_LIMIT));
        if let Err(e) = self.fill(&mut out, length, keyspace) {
            out.zeroize();
            return Err(e);
        }
        Ok(out)
    }

    fn fill(&self, out: &mut String, length: usize, keyspace: &Keyspace) -> Result<()> {
        let max = keyspace.len() as i64 - 1;
        for _ in 0..length {
            let idx = self.sampler.sample(0, max)?;
            // idx in [0, len) by construction
            out.push(keyspace.chars()[idx as usize]);
        }
        Ok(())
    }
}
