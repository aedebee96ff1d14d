/// Fraction of printable characters required to classify content as text.
const TEXT_THRESHOLD: f64 = 0.7;

/// Decide whether file content is primarily text.
///
/// Empty content counts as text. Content that is not valid UTF-8 is judged by
/// the fraction of bytes that are printable ASCII or `\n`/`\r`/`\t`; valid
/// UTF-8 content is judged by the fraction of printable-or-whitespace
/// characters. Either fraction must reach the 0.7 threshold.
pub fn is_text(content: &[u8]) -> bool {
    if content.is_empty() {
        return true;
    }
    match std::str::from_utf8(content) {
        Ok(text) => printable_char_fraction(text) >= TEXT_THRESHOLD,
        Err(_) => printable_ascii_fraction(content) >= TEXT_THRESHOLD,
    }
}

fn printable_ascii_fraction(content: &[u8]) -> f64 {
    let printable = content
        .iter()
        .filter(|&&b| b <= 127 && (b >= 32 || b == b'\n' || b == b'\r' || b == b'\t'))
        .count();
    printable as f64 / content.len() as f64
}

fn printable_char_fraction(text: &str) -> f64 {
    let mut printable = 0usize;
    let mut total = 0usize;
    for c in text.chars() {
        total += 1;
        if !c.is_control() || c.is_whitespace() {
            printable += 1;
        }
    }
    printable as f64 / total as f64
}
