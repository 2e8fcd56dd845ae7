//! CLI context - bundles settings, flags, generator and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, CommandMode, numbers, prompts, quiet};
use crate::error::Error;
use crate::generator::PasswordGenerator;
use crate::pass::{self, CharacterClass, Keyspace, PasswordRules, charset};
use crate::rand::OsRandom;
use crate::settings::Settings;
use crate::terminal::{print_entropy, print_help};

const DEFAULT_OUTPUT_FILE: &str = "passwords.txt";

/// Why a run ended before (or instead of) generating passwords.
#[derive(Debug)]
pub enum Exit {
    /// Early exit, not an error.
    Done,
    Failed(Error),
}

impl From<Error> for Exit {
    fn from(e: Error) -> Self {
        Exit::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    generator: PasswordGenerator,
    args: Vec<String>,
}

impl Context {
    /// Parse arguments and read the settings file.
    ///
    /// The saved rules become the generator's default rules for the whole run.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                rules: saved_settings.rules,
                ..Default::default()
            }
        };

        let generator = PasswordGenerator::with_default_rules(OsRandom, saved_settings.rules);
        debug!(
            "default classes: {:?}",
            generator.default_rules().enabled_classes().collect::<Vec<_>>()
        );

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            generator,
            args,
        })
    }

    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.handle_command_mode()?;
        self.apply_flags()?;
        quiet::set(self.flags.quiet);
        self.handle_range()?;
        self.generate_output()?;
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Exit> {
        match self.flags.command {
            CommandMode::Get => {
                if self.settings.cli_command.is_empty() {
                    println!("(no saved command)");
                } else {
                    println!("{}", self.settings.cli_command);
                }
                Err(Exit::Done)
            }
            CommandMode::Unset => {
                self.saved_settings.cli_command.clear();
                if let Err(e) = self.saved_settings.save_to_file() {
                    prompts::warn(&format!("Failed to clear command: {}", e));
                }
                Err(Exit::Done)
            }
            CommandMode::Set | CommandMode::None => Ok(()),
        }
    }

    fn handle_range(&self) -> Result<(), Exit> {
        let Some(range) = self.flags.range else {
            return Ok(());
        };
        let count = self.flags.number.unwrap_or(1);
        let path = (!self.settings.output_to_terminal()).then_some(self.settings.output_file_path.as_str());
        numbers::output(&self.generator, range, count, path)?;
        if let Some(path) = path {
            prompts::numbers_written(count, path);
        }
        Err(Exit::Done)
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Exit> {
        if self.flags.command == CommandMode::Set {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.saved_settings.save_to_file() {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            info!("saved default command: {command}");
            self.settings.cli_command = command;
        }

        // Replay the saved command when no explicit args were given
        if !self.settings.cli_command.is_empty()
            && self.flags.command == CommandMode::None
            && !self.flags.has_explicit_args()
        {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            match super::parse(&combined_args) {
                Ok(saved_flags) => {
                    let quiet = self.flags.quiet;
                    self.flags = saved_flags;
                    self.flags.quiet |= quiet;
                }
                Err(e) => prompts::warn(&format!("Ignoring saved command: {e}")),
            }
        }

        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output_path(path);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        return Err(Exit::Done);
                    }
                }
            }
        }

        Ok(())
    }

    /// Rules from `--only` or `--no-*`, or `None` to use the defaults.
    fn rules_override(&self) -> Result<Option<PasswordRules>, Error> {
        if let Some(ref list) = self.flags.only {
            return PasswordRules::parse_list(list).map(Some);
        }
        if !self.flags.excludes_any_class() {
            return Ok(None);
        }

        let mut rules = self.settings.rules;
        for (class, off) in [
            (CharacterClass::Lower, self.flags.no_lower),
            (CharacterClass::Upper, self.flags.no_upper),
            (CharacterClass::Digit, self.flags.no_digits),
            (CharacterClass::Special, self.flags.no_special),
        ] {
            if off {
                rules.set(class, false);
            }
        }
        Ok(Some(rules))
    }

    fn keyspace(&self, rules: Option<&PasswordRules>) -> Result<Keyspace, Error> {
        match self.flags.keyspace {
            Some(ref chars) => Keyspace::new(chars),
            None => charset::build(rules.unwrap_or(&self.settings.rules)),
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Error> {
        let count = self.settings.number_of_passwords.max(1);
        let rules = self.rules_override()?;
        let keyspace = self.keyspace(rules.as_ref())?;

        if self.flags.entropy && !quiet::enabled() {
            let bits = keyspace.entropy_bits(self.settings.pass_length);
            print_entropy(bits, keyspace.len(), self.generator.source().name());
            println!();
        }

        if self.settings.to_clipboard {
            let passwords = pass::generate_batch(&self.generator, &keyspace, &self.settings, count)?;
            if let (Some(ctx), Some(mut passwords)) = (self.clipboard.as_mut(), passwords) {
                match ctx.set_contents(passwords.clone()) {
                    Ok(_) => {
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
                passwords.zeroize();
            }
        } else if !self.settings.output_to_terminal() {
            pass::generate_batch(&self.generator, &keyspace, &self.settings, count)?;
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        } else if count == 1 && self.flags.keyspace.is_none() {
            let mut pw = self
                .generator
                .create_password(self.settings.pass_length, rules.as_ref())?;
            println!("{pw}");
            pw.zeroize();
        } else {
            pass::generate_batch(&self.generator, &keyspace, &self.settings, count)?;
        }

        Ok(())
    }
}

/// Resolve `-o` argument: directories get the default file name, and a
/// `.txt` extension is added when missing.
fn output_path(path: &str) -> String {
    if path == "." {
        DEFAULT_OUTPUT_FILE.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_OUTPUT_FILE)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}
