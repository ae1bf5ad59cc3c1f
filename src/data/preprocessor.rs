// ============================================================
// Layer 4 — Line Preprocessor
// ============================================================
// Turns raw file text into the ordered list of non-blank lines
// that the quote parser groups into records.
//
// Steps (applied per line, in order):
//   1. Normalise \r\n and lone \r (old Mac files) to \n, then split
//   2. Trim leading and trailing whitespace
//   3. Drop the line if nothing is left
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Every non-blank line of `text`, trimmed, in file order.
    pub fn non_blank_lines(&self, text: &str) -> Vec<String> {
        text.replace("\r\n", "\n")
            .replace('\r', "\n")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
