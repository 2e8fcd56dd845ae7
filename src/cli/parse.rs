use thiserror::Error;

use super::{CliFlags, CommandMode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid range: {0} (expected MIN:MAX)")]
    InvalidRange(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "-c" | "--command" => {
                if args.get(i + 1).is_some_and(|a| a == "get") {
                    i += 1;
                    flags.command = CommandMode::Get;
                } else {
                    flags.command = CommandMode::Set;
                }
            }
            "-l" | "--length" => {
                let value = value_of(args, &mut i, arg)?;
                flags.length = Some(parse_count(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i, arg)?;
                flags.number = Some(parse_count(value)?);
            }
            "--only" => flags.only = Some(value_of(args, &mut i, arg)?.to_string()),
            "-k" | "--keyspace" => flags.keyspace = Some(value_of(args, &mut i, arg)?.to_string()),
            "-r" | "--range" => {
                let value = value_of(args, &mut i, arg)?;
                flags.range = Some(parse_range(value)?);
            }
            "-o" | "--output" => {
                // Path is optional; a following flag means "use the default"
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    if flags.command == CommandMode::Set && !flags.has_explicit_args() {
        flags.command = CommandMode::Unset;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn parse_count(s: &str) -> Result<usize, ParseError> {
    s.trim()
        .replace('_', "")
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// Parse `MIN:MAX`; either side may be negative.
pub fn parse_range(s: &str) -> Result<(i64, i64), ParseError> {
    let invalid = || ParseError::InvalidRange(s.to_string());
    let (min, max) = s.split_once(':').ok_or_else(invalid)?;
    let min = min.trim().parse().map_err(|_| invalid())?;
    let max = max.trim().parse().map_err(|_| invalid())?;
    Ok((min, max))
}
