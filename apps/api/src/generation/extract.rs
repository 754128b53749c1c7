//! Brace-delimited extraction of the JSON object embedded in free-form model output.
//!
//! Two scanners:
//! - `Greedy`: first `{` to the LAST `}` in the text. Tolerates prose before and after a
//!   single object but swallows everything between two separate objects.
//! - `Balanced`: first `{` to its matching `}`, skipping braces inside string literals.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    #[default]
    Greedy,
    Balanced,
}

impl ExtractionMode {
    pub fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            ExtractionMode::Greedy => extract_greedy(text),
            ExtractionMode::Balanced => extract_balanced(text),
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(ExtractionMode::Greedy),
            "balanced" => Ok(ExtractionMode::Balanced),
            other => Err(format!("unknown extraction mode '{other}'")),
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Greedy => f.write_str("greedy"),
            ExtractionMode::Balanced => f.write_str("balanced"),
        }
    }
}

/// First `{` through the last `}` (inclusive).
pub fn extract_greedy(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// First `{` through its matching `}`. Returns `None` if the object never closes.
pub fn extract_balanced(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    // `{`, `}`, `"` and `\` are ASCII, so byte offsets are valid char boundaries.
    for (offset, byte) in text.as_bytes()[start..].iter().copied().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}
