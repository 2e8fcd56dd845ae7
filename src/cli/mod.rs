//! Command-line front end.

mod context;
mod flags;
mod numbers;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use log::error;

pub use context::{Context, Exit};
pub use flags::{CliFlags, CommandMode};
pub use numbers::write_numbers;
pub use parse::{ParseError, parse, parse_range};

pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try `passgen --help`.");
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Exit::Done) => ExitCode::SUCCESS,
        Err(Exit::Failed(e)) => {
            error!("generation failed: {e:?}");
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
