//! Unbiased passwords, random strings and random integers from a
//! cryptographically secure byte source.
//!
//! ```no_run
//! use passgen::{CharacterClass, PasswordRules};
//!
//! let pw = passgen::create_password(16, None)?;
//! let pin = passgen::create_password(
//!     6,
//!     Some(&PasswordRules::none().with(CharacterClass::Digit, true)),
//! )?;
//! let roll = passgen::get_random_number(1, 6)?;
//! # Ok::<(), passgen::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
pub use generator::{DEFAULT_LENGTH, PasswordGenerator};
pub use pass::{CharacterClass, Keyspace, PasswordRules};
pub use rand::{OsRandom, SecureByteSource, UniformIntegerSampler};

/// Password from the OS CSPRNG. `None` enables every character class.
pub fn create_password(length: usize, rules: Option<&PasswordRules>) -> Result<String> {
    PasswordGenerator::default().create_password(length, rules)
}

pub fn get_random_string(length: usize, keyspace: &Keyspace) -> Result<String> {
    PasswordGenerator::default().get_random_string(length, keyspace)
}

pub fn get_random_number(min: i64, max: i64) -> Result<i64> {
    PasswordGenerator::default().get_random_number(min, max)
}
