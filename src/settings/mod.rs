//! Persisted command-line settings.
//!
//! Read once at startup. The saved rules become the generator's default rules
//! for the rest of the process.

mod file;

use std::path::Path;

use crate::generator::DEFAULT_LENGTH;
use crate::pass::PasswordRules;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub rules: PasswordRules,
    pub output_file_path: String,
    pub cli_command: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::default_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn output_to_terminal(&self) -> bool {
        self.output_file_path.is_empty()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            rules: PasswordRules::default(),
            output_file_path: String::new(),
            cli_command: String::new(),
            to_clipboard: false,
        }
    }
}
