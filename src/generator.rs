//! Password generator: default rules plus a secure byte source.

use crate::error::Result;
use crate::pass::{Keyspace, PasswordRules, RandomStringGenerator, charset};
use crate::rand::{OsRandom, SecureByteSource, UniformIntegerSampler};

/// Password length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 16;

/// Generates passwords, random strings and random integers from one byte
/// source.
///
/// The default rules are fixed at construction. Holding no mutable state, a
/// generator can be shared across threads whenever its source can.
#[derive(Debug, Clone)]
pub struct PasswordGenerator<S = OsRandom> {
    source: S,
    default_rules: PasswordRules,
}

impl<S: SecureByteSource> PasswordGenerator<S> {
    /// Generator whose defaults enable every character class.
    pub fn new(source: S) -> Self {
        Self::with_default_rules(source, PasswordRules::default())
    }

    pub fn with_default_rules(source: S, default_rules: PasswordRules) -> Self {
        Self {
            source,
            default_rules,
        }
    }

    pub fn default_rules(&self) -> &PasswordRules {
        &self.default_rules
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Password of `length` characters drawn from the classes `rules`
    /// enables, or from the defaults when `rules` is `None`.
    pub fn create_password(&self, length: usize, rules: Option<&PasswordRules>) -> Result<String> {
        let rules = rules.unwrap_or(&self.default_rules);
        let keyspace = charset::build(rules)?;
        self.get_random_string(length, &keyspace)
    }

    pub fn get_random_string(&self, length: usize, keyspace: &Keyspace) -> Result<String> {
        RandomStringGenerator::new(&self.source).generate(length, keyspace)
    }

    /// Uniform integer in `[min, max]`.
    pub fn get_random_number(&self, min: i64, max: i64) -> Result<i64> {
        UniformIntegerSampler::new(&self.source).sample(min, max)
    }
}

impl Default for PasswordGenerator<OsRandom> {
    fn default() -> Self {
        Self::new(OsRandom)
    }
}
