//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::{CharacterClass, Keyspace, PasswordRules};
pub use generate::RandomStringGenerator;
pub use output::{SecureBufWriter, generate_batch};
