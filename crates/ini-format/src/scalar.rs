//! Value quoting for INI output.
//!
//! Values are written as double-quoted strings with backslash escapes, the
//! same convention a generic string-quoting routine uses. The reader keeps
//! escapes verbatim, so only values without quotes, backslashes, or control
//! characters survive a write/read cycle byte for byte.

use std::borrow::Cow;
use std::fmt::Write;

/// Check if a value can be written without quotes and read back unchanged.
///
/// A bare value is valid when it:
/// 1. doesn't start with a space (leading spaces are dropped on read)
/// 2. contains no `"` (it would start a quoted string)
/// 3. contains no tab, line break, or other control character
pub fn can_be_bare(s: &str) -> bool {
    if s.starts_with(' ') {
        return false;
    }
    !s.chars().any(|c| c == '"' || c.is_control())
}

/// Escape a string for quoted output.
///
/// Returns the escaped content (without surrounding quotes).
pub fn escape_quoted(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| matches!(c, '"' | '\\') || c.is_control()) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\u{07}' => result.push_str("\\a"),
            '\u{08}' => result.push_str("\\b"),
            '\u{0c}' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\u{0b}' => result.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(result, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Quote a value: `"` + [`escape_quoted`] + `"`.
pub fn quote(s: &str) -> String {
    let escaped = escape_quoted(s);
    let mut out = String::with_capacity(escaped.len() + 2);
    out.push('"');
    out.push_str(&escaped);
    out.push('"');
    out
}
