//! Unbiased integer sampling by bitmask-and-reject.
//!
//! Each attempt draws one fresh 8-byte word, reads it as a big-endian `u64`,
//! masks it down to the smallest all-ones mask covering the range and keeps it
//! only if it falls inside. Masking a uniform word leaves a uniform value over
//! `[0, 2^bits)`; rejecting the overflow leaves a uniform value over the range.
//! The mask is never more than twice the range, so an attempt is rejected with
//! probability below one half.

use log::{error, trace};
use zeroize::Zeroizing;

use super::source::SecureByteSource;
use crate::error::{Error, Result};

/// Bytes drawn per attempt.
pub const WORD_BYTES: usize = size_of::<i64>();

/// Upper bound on attempts per call. A healthy source exceeds it with
/// probability below 2^-128.
pub const MAX_ATTEMPTS: u32 = 128;

pub struct UniformIntegerSampler<S> {
    source: S,
}

impl<S: SecureByteSource> UniformIntegerSampler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// Returns `min` without touching the source when the range holds a single
    /// value.
    pub fn sample(&self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(Error::InvalidRange { min, max });
        }

        // max - min, exact for any pair of i64 values
        let span = max.abs_diff(min);
        if span == 0 {
            return Ok(min);
        }

        let mask = mask_for(span);
        for attempt in 1..=MAX_ATTEMPTS {
            let val = self.next_word()? & mask;
            if val <= span {
                return Ok(min.wrapping_add_unsigned(val));
            }
            trace!("sample: rejected {val:#x} > {span:#x} (attempt {attempt})");
        }

        error!("sample: no candidate accepted in {MAX_ATTEMPTS} attempts");
        Err(Error::RetryLimit(MAX_ATTEMPTS))
    }

    fn next_word(&self) -> Result<u64> {
        let mut buf = Zeroizing::new([0u8; WORD_BYTES]);
        self.source
            .fill_bytes(&mut buf[..])
            .inspect_err(|e| error!("sample: {e}"))?;
        Ok(u64::from_be_bytes(*buf))
    }
}

/// Smallest all-ones mask covering `0..=span`, i.e. `2^ceil(log2(span + 1)) - 1`.
///
/// `span` must be non-zero.
#[inline]
pub fn mask_for(span: u64) -> u64 {
    debug_assert!(span != 0);
    u64::MAX >> span.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::OsRandom;
    use crate::rand::source::scripted::{BrokenSource, ScriptedSource};

    #[test]
    fn mask_is_smallest_cover() {
        assert_eq!(mask_for(1), 0b1);
        assert_eq!(mask_for(6), 0b111);
        assert_eq!(mask_for(7), 0b111);
        assert_eq!(mask_for(8), 0b1111);
        assert_eq!(mask_for(93), 0x7f);
        // 7776 values -> 13 bits
        assert_eq!(mask_for(7775), 8191);
        assert_eq!(mask_for(u64::MAX), u64::MAX);
    }

    #[test]
    fn single_value_range_consumes_nothing() {
        let src = ScriptedSource::new(&[]);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(sampler.sample(42, 42).unwrap(), 42);
        assert_eq!(sampler.sample(i64::MIN, i64::MIN).unwrap(), i64::MIN);
        assert_eq!(src.calls(), 0);
    }

    #[test]
    fn inverted_range_is_rejected_before_sampling() {
        let src = ScriptedSource::new(&[]);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(
            sampler.sample(5, 4),
            Err(Error::InvalidRange { min: 5, max: 4 })
        );
        assert_eq!(src.calls(), 0);
    }

    #[test]
    fn word_is_read_big_endian() {
        // little-endian assembly would give 7
        let src = ScriptedSource::new(&[7, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(UniformIntegerSampler::new(&src).sample(0, 9).unwrap(), 0);

        let src = ScriptedSource::new(&[0, 0, 0, 0, 0, 0, 0, 7]);
        assert_eq!(UniformIntegerSampler::new(&src).sample(0, 9).unwrap(), 7);
    }

    #[test]
    fn high_bits_are_masked_off() {
        let src = ScriptedSource::words(&[0xffff_ffff_ffff_ff02]);
        assert_eq!(UniformIntegerSampler::new(&src).sample(0, 9).unwrap(), 2);
    }

    #[test]
    fn out_of_range_candidates_draw_fresh_bytes() {
        // range 10 -> mask 15; 15 and 10 are rejected, 3 accepted
        let src = ScriptedSource::words(&[15, 10, 3, 4]);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(sampler.sample(0, 9).unwrap(), 3);
        assert_eq!(src.calls(), 3);
        assert_eq!(src.remaining(), WORD_BYTES);
    }

    #[test]
    fn offset_by_min() {
        let src = ScriptedSource::words(&[1, 0]);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(sampler.sample(-1, 0).unwrap(), 0);
        assert_eq!(sampler.sample(-1, 0).unwrap(), -1);
    }

    #[test]
    fn full_i64_domain() {
        let src = ScriptedSource::words(&[0, u64::MAX, 1 << 63]);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(sampler.sample(i64::MIN, i64::MAX).unwrap(), i64::MIN);
        assert_eq!(sampler.sample(i64::MIN, i64::MAX).unwrap(), i64::MAX);
        assert_eq!(sampler.sample(i64::MIN, i64::MAX).unwrap(), 0);
    }

    #[test]
    fn source_failure_surfaces() {
        let sampler = UniformIntegerSampler::new(BrokenSource);
        assert!(matches!(sampler.sample(0, 9), Err(Error::EntropySource(_))));
    }

    #[test]
    fn failure_after_rejection_surfaces() {
        // one rejected word, then the script runs dry
        let src = ScriptedSource::words(&[12]);
        let sampler = UniformIntegerSampler::new(&src);
        assert!(matches!(sampler.sample(0, 9), Err(Error::EntropySource(_))));
        assert_eq!(src.calls(), 2);
    }

    #[test]
    fn stuck_source_hits_retry_limit() {
        let words = vec![u64::MAX; MAX_ATTEMPTS as usize];
        let src = ScriptedSource::words(&words);
        let sampler = UniformIntegerSampler::new(&src);
        assert_eq!(sampler.sample(0, 9), Err(Error::RetryLimit(MAX_ATTEMPTS)));
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn stays_within_bounds() {
        let sampler = UniformIntegerSampler::new(OsRandom);
        for (min, max) in [(0, 1), (-3, 3), (10, 17), (-1000, -999), (0, 93)] {
            for _ in 0..2_000 {
                let v = sampler.sample(min, max).unwrap();
                assert!((min..=max).contains(&v), "{v} outside [{min}, {max}]");
            }
        }
    }

    #[test]
    fn adjacent_pair_hits_both_values() {
        let sampler = UniformIntegerSampler::new(OsRandom);
        let mut seen = [false; 2];
        for _ in 0..200 {
            seen[(sampler.sample(7, 8).unwrap() - 7) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    fn chi_squared(counts: &[u64], expected: f64) -> f64 {
        counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    /// Generous bound: mean + 6 standard deviations of chi-squared(k - 1).
    fn chi_limit(bins: usize) -> f64 {
        let dof = (bins - 1) as f64;
        dof + 6.0 * (2.0 * dof).sqrt()
    }

    #[test]
    fn uniform_over_non_power_of_two_ranges() {
        let sampler = UniformIntegerSampler::new(OsRandom);
        for range in [3usize, 7, 10, 26, 94] {
            let trials = range * 2_000;
            let mut counts = vec![0u64; range];
            for _ in 0..trials {
                counts[sampler.sample(0, range as i64 - 1).unwrap() as usize] += 1;
            }
            let expected = (trials / range) as f64;
            let chi = chi_squared(&counts, expected);
            assert!(chi < chi_limit(range), "range {range}: chi^2 = {chi}");
        }
    }

    #[test]
    fn uniform_over_two_pow_32() {
        // bucket by the top four bits of a 32-bit draw
        let sampler = UniformIntegerSampler::new(OsRandom);
        let trials = 32_000;
        let mut counts = [0u64; 16];
        for _ in 0..trials {
            let v = sampler.sample(0, (1i64 << 32) - 1).unwrap();
            counts[(v >> 28) as usize] += 1;
        }
        let chi = chi_squared(&counts, (trials / 16) as f64);
        assert!(chi < chi_limit(16), "chi^2 = {chi}");
    }

    #[test]
    fn uniform_over_large_rejecting_range() {
        // 3 * 2^30 values under a 2^32 mask: a quarter of words are rejected.
        // Twelve buckets of 2^28 values each.
        let sampler = UniformIntegerSampler::new(OsRandom);
        let trials = 24_000;
        let mut counts = [0u64; 12];
        for _ in 0..trials {
            let v = sampler.sample(0, (3i64 << 30) - 1).unwrap();
            counts[(v >> 28) as usize] += 1;
        }
        let chi = chi_squared(&counts, (trials / 12) as f64);
        assert!(chi < chi_limit(12), "chi^2 = {chi}");
    }
}
