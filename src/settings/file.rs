//! Settings file persistence.
//!
//! One line of comma separated fields. `|` escapes the next character, so
//! paths and saved commands may contain commas.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;
use crate::pass::CharacterClass;

const FIELDS: usize = 8;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let rule = |c| settings.rules.is_enabled(c);
    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        rule(CharacterClass::Lower),
        rule(CharacterClass::Upper),
        rule(CharacterClass::Digit),
        rule(CharacterClass::Special),
        escape(&settings.output_file_path),
        escape(&settings.cli_command),
    );

    file.write_all(data.as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

/// Load into `settings`. A missing, empty or malformed file is rewritten from
/// the values already in `settings`.
pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} fields, expected {FIELDS}; resetting",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.number_of_passwords = parts[1].parse().unwrap_or(settings.number_of_passwords);
    for (class, field) in CharacterClass::ALL.into_iter().zip(&parts[2..6]) {
        let enabled = field.parse().unwrap_or(settings.rules.is_enabled(class));
        settings.rules.set(class, enabled);
    }
    settings.output_file_path = parts[6].clone();
    settings.cli_command = parts[7].clone();

    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgen/settings", home))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
