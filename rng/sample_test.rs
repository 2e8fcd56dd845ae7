//! Sampler test binary - streams sampled values to stdout for statistical testing.
//!
//! Usage:
//!   ./sample_test            # full 32-bit range, raw little-endian u32 words
//!   ./sample_test 94         # indices in [0, 94), one byte each
//!   ./sample_test 94 --text  # indices in [0, 94), one per line
//!
//! Pipe to test suites:
//!   ./sample_test | dieharder -a -g 200
//!   ./sample_test | RNG_test stdin32
//!   ./sample_test 10 --text | head -n 1000000 | sort | uniq -c

use std::io::{self, Write};
use std::process::ExitCode;

use passgen::{OsRandom, UniformIntegerSampler};

fn print_usage() {
    eprintln!("Usage: sample_test [RANGE] [OPTIONS]");
    eprintln!();
    eprintln!("Streams values from the rejection sampler to stdout.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  RANGE        Sample [0, RANGE) (default: 4294967296)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --text   One decimal value per line");
    eprintln!("  -h, --help   Show this help");
    eprintln!();
    eprintln!("Binary output is one byte per value for RANGE <= 256,");
    eprintln!("otherwise little-endian u32 words (RANGE <= 2^32).");
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let text = args.iter().any(|a| a == "--text" || a == "-t");
    let range: i64 = match args.iter().find(|a| !a.starts_with('-')) {
        Some(s) => match s.parse() {
            Ok(r) if (1..=1i64 << 32).contains(&r) => r,
            _ => {
                eprintln!("RANGE must be between 1 and 4294967296");
                return ExitCode::from(2);
            }
        },
        None => 1 << 32,
    };

    let sampler = UniformIntegerSampler::new(OsRandom);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut line = String::new();

    loop {
        let v = match sampler.sample(0, range - 1) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("sample_test: {e}");
                return ExitCode::FAILURE;
            }
        };

        let res = if text {
            line.clear();
            line.push_str(&v.to_string());
            line.push('\n');
            out.write_all(line.as_bytes())
        } else if range <= 256 {
            out.write_all(&[v as u8])
        } else {
            out.write_all(&(v as u32).to_le_bytes())
        };

        // Downstream closed the pipe
        if res.is_err() {
            return ExitCode::SUCCESS;
        }
    }
}
