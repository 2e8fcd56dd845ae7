//! Terminal output utilities.
//!
//! Box drawing and entropy reporting.

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

enum Align {
    Left,
    Center,
}

/// One `│ … │` row. Content wider than the box overflows the right edge.
fn row(content: &str, align: Align) -> String {
    let slack = INNER_WIDTH.saturating_sub(console_width(content));
    let left = match align {
        Align::Left => 0,
        Align::Center => slack / 2,
    };
    format!(
        "│ {}{content}{} │",
        " ".repeat(left),
        " ".repeat(slack - left)
    )
}

fn rule(left: char, title: &str, right: char) -> String {
    let label = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let fill = (BOX_WIDTH - 2).saturating_sub(label.chars().count());
    format!("{left}{label}{}{right}", "─".repeat(fill))
}

pub fn box_top(title: &str) {
    println!("{}", rule('┌', title, '┐'));
}

pub fn box_line(content: &str) {
    println!("{}", row(content, Align::Left));
}

pub fn box_line_center(content: &str) {
    println!("{}", row(content, Align::Center));
}

pub fn box_bottom() {
    println!("{}", rule('└', "", '┘'));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = format!("{:<width$}", truncate(flag, flag_col), width = flag_col);
    let lines = wrap(desc, desc_col);

    let first = lines.first().map(String::as_str).unwrap_or("");
    println!("│ {}{:<width$} │", flag_padded, first, width = desc_col);

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        println!("│ {}{:<width$} │", indent, line, width = desc_col);
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Greedy word wrap to `width` columns.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy
// ============================================================================

/// Strength label for a password entropy in bits.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Box summarising entropy, keyspace size and source.
pub fn print_entropy(bits: f64, keyspace_len: usize, source: &str) {
    box_top("Entropy");
    box_line(&format!("{:.1} bits ({})", bits, entropy_strength(bits)));
    box_line(&format!("Source: {} • Charset: {} chars", source, keyspace_len));
    box_bottom();
}
