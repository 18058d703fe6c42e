//! Frontmatter document parser.
//!
//! Agent definition documents carry a key-value header bounded by two
//! delimiter lines (`---`), followed by a free-text prompt body:
//!
//! ```text
//! ---
//! name: code-reviewer
//! description: Reviews code for quality issues
//! model: sonnet
//! ---
//! You are an expert code reviewer.
//! ```
//!
//! Lines are split on `'\n'` and trimmed before delimiter comparison, so
//! CRLF input still matches. Header lines without a `:` are ignored; a
//! duplicated key keeps its last value. Everything after the second
//! delimiter line is the body, even further `---` lines.

use crate::catalog::AgentRecord;
use std::collections::HashMap;

/// A line whose trimmed content equals this token bounds the header.
const DELIMITER: &str = "---";

/// Parse one document into an [`AgentRecord`].
///
/// Returns `None` when the content does not carry two delimiter lines.
/// That is a recognition failure, not an error: callers skip the document.
pub fn parse(content: &str) -> Option<AgentRecord> {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut header_start = None;
    let mut header_end = None;
    for (i, line) in lines.iter().enumerate() {
        if line.trim() == DELIMITER {
            if header_start.is_none() {
                header_start = Some(i);
            } else {
                header_end = Some(i);
                break;
            }
        }
    }
    let start = header_start?;
    let end = header_end?;

    let mut frontmatter: HashMap<String, String> = HashMap::new();
    for line in &lines[start + 1..end] {
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let prompt = lines[end + 1..].join("\n").trim().to_string();

    Some(AgentRecord {
        name: frontmatter.remove("name").unwrap_or_default(),
        description: frontmatter.remove("description").unwrap_or_default(),
        prompt,
        model: frontmatter.remove("model"),
        tools: frontmatter.remove("tools"),
    })
}
