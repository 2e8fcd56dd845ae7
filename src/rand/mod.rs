//! Secure randomness: byte sources and unbiased integer sampling.

mod sample;
mod source;

pub use sample::{MAX_ATTEMPTS, UniformIntegerSampler, WORD_BYTES, mask_for};
pub use source::{OsRandom, SecureByteSource};

#[cfg(test)]
pub(crate) use source::scripted;
