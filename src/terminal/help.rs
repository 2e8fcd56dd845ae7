use super::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("Passgen");
    box_line_center("Unbiased password generator");
    box_line("");
    box_line("Every character is drawn with rejection sampling over bytes from");
    box_line("the operating system CSPRNG, so no character is favoured.");
    box_line("");
    box_line("USAGE:");
    box_line("  passgen [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many passwords (or numbers with --range)");
    box_opt("      --no-lower", "Exclude a-z");
    box_opt("      --no-upper", "Exclude A-Z");
    box_opt("      --no-digits", "Exclude 0-9");
    box_opt("      --no-special", "Exclude symbols");
    box_opt("      --only <CLASSES>", "Comma list of lower, upper, digits, special. Others are excluded.");
    box_opt("  -k, --keyspace <CHARS>", "Draw from exactly these characters");
    box_line("");
    box_line(" Numbers:");
    box_opt("  -r, --range <MIN:MAX>", "Print uniform integers in [MIN, MAX] instead of passwords");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passwords.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --entropy", "Show entropy of the chosen settings");
    box_opt("  -q, --quiet", "Suppress all output except passwords/numbers");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear, `-c get` to show.");
    box_opt("  -s, --saved", "Use saved length, count, classes and output");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passgen                  One password, 16 characters");
    box_line("  passgen -l 20 -n 3       Three passwords, 20 characters each");
    box_line("  passgen --only digits -l 6   Six digit PIN");
    box_line("  passgen -k 0123456789abcdef -l 32   32-character hex string");
    box_line("  passgen -r 1:6 -n 10     Ten dice rolls");
    box_line("  passgen -c -l 24         Save -l 24 as default");
    box_line("");
    box_line("Set RUST_LOG=debug for diagnostics on stderr.");
    box_bottom();
    println!();
}
