//! Shared terminal utilities.
//!
//! Box drawing, help text and entropy reporting.

mod help;
mod output;

pub use help::print_help;
pub use output::*;
