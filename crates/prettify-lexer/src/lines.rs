//! Line preparation.
//!
//! Standardizes line breaks, expands tabs, and trims per-line whitespace
//! before the scanner sees anything. Stateless and infallible; running the
//! pass over its own output is a no-op.

/// Split raw source text into prepared lines.
///
/// `tab_length` is the number of spaces substituted for each tab;
/// `trim_space` is the maximum number of leading space columns removed from
/// every line. Trailing spaces are always dropped. Empty lines pass through
/// as empty strings, including a trailing empty segment after a final `\n`.
pub fn prepare(source: &str, tab_length: usize, trim_space: usize) -> Vec<String> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .map(|line| prepare_line(line, tab_length, trim_space))
        .collect()
}

fn prepare_line(line: &str, tab_length: usize, trim_space: usize) -> String {
    let expanded = line.replace('\t', &" ".repeat(tab_length));
    let trimmed = expanded.trim_end_matches(' ');

    // Never cut into non-space content: remove at most the actual run.
    let leading = trimmed.chars().take_while(|c| *c == ' ').count();
    let cut = leading.min(trim_space);
    trimmed[cut..].to_string()
}
