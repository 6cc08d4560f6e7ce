use std::fmt;

use regex::Regex;

/// A section boundary: a literal substring or a regular expression. Either
/// way, only the first occurrence in a file's raw text counts.
#[derive(Debug, Clone)]
pub enum Marker {
    Literal(String),
    Pattern(Regex),
}

impl Marker {
    /// Byte offset of the first occurrence in `text`, if any.
    pub fn find(&self, text: &str) -> Option<usize> {
        match self {
            Marker::Literal(s) => text.find(s.as_str()),
            Marker::Pattern(re) => re.find(text).map(|m| m.start()),
        }
    }

    /// Zero-based line index of the first occurrence. The marker is searched
    /// in the full unsplit text and the hit is mapped to a line by counting
    /// the newlines before it.
    pub fn find_line(&self, text: &str) -> Option<usize> {
        self.find(text).map(|pos| text[..pos].matches('\n').count())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Literal(s) => f.write_str(s),
            Marker::Pattern(re) => f.write_str(re.as_str()),
        }
    }
}

impl From<&str> for Marker {
    fn from(s: &str) -> Self {
        Marker::Literal(s.to_string())
    }
}

impl From<String> for Marker {
    fn from(s: String) -> Self {
        Marker::Literal(s)
    }
}

impl From<Regex> for Marker {
    fn from(re: Regex) -> Self {
        Marker::Pattern(re)
    }
}
