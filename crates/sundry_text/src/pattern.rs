//! Regex-driven filtering and trimming.
//!
//! Character sets passed to the trimming and list helpers are spliced into a
//! regex character class, so ranges (`a-z`) and escapes (`\d`, `\x00`) work.

use regex::Regex;
use tracing::debug;

/// Control characters 0x00-0x1F and 0x7F.
const LOW_CHARS: &str = r"\x00-\x1F\x7F";

/// Control characters except `\n` and `\r`.
const LOW_CHARS_KEEP_NEWLINES: &str = r"\x00-\x09\x0B\x0C\x0E-\x1F\x7F";

/// Compiles `pattern`, or logs and returns `None` so callers take their
/// fallback branch.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            debug!(pattern, error = %err, "pattern failed to compile, using fallback");
            None
        }
    }
}

/// Replaces every match of `pattern` in `s`, or returns `s` unchanged if the
/// pattern does not compile.
fn replace_or_keep(s: &str, pattern: &str, replacement: &str) -> String {
    match compile(pattern) {
        Some(re) => re.replace_all(s, replacement).into_owned(),
        None => s.to_string(),
    }
}

/// True if `sub` occurs in `s`.
pub fn contains(s: &str, sub: &str) -> bool {
    s.contains(sub)
}

/// True if `pattern` matches anywhere in `s`. A malformed pattern never matches.
pub fn matches(s: &str, pattern: &str) -> bool {
    compile(pattern).is_some_and(|re| re.is_match(s))
}

/// Strips leading whitespace, or leading characters from the set `chars`.
pub fn left_trim(s: &str, chars: &str) -> String {
    if chars.is_empty() {
        return s.trim_start().to_string();
    }
    replace_or_keep(s, &format!("^[{chars}]+"), "")
}

/// Strips trailing whitespace, or trailing characters from the set `chars`.
pub fn right_trim(s: &str, chars: &str) -> String {
    if chars.is_empty() {
        return s.trim_end().to_string();
    }
    replace_or_keep(s, &format!("[{chars}]+$"), "")
}

/// [`left_trim`] applied to the result of [`right_trim`].
pub fn trim(s: &str, chars: &str) -> String {
    left_trim(&right_trim(s, chars), chars)
}

/// Removes every character that is not in the set `chars`.
pub fn white_list(s: &str, chars: &str) -> String {
    replace_or_keep(s, &format!("[^{chars}]+"), "")
}

/// Removes every character that is in the set `chars`.
pub fn black_list(s: &str, chars: &str) -> String {
    replace_or_keep(s, &format!("[{chars}]+"), "")
}

/// Removes control characters (0x00-0x1F and 0x7F).
///
/// With `keep_new_lines`, `\n` and `\r` survive; tab, vertical tab and form
/// feed are still removed.
pub fn strip_low(s: &str, keep_new_lines: bool) -> String {
    let chars = if keep_new_lines {
        LOW_CHARS_KEEP_NEWLINES
    } else {
        LOW_CHARS
    };
    black_list(s, chars)
}

/// Replaces every match of `pattern` with `replacement` (`$1` expands groups).
pub fn replace_pattern(s: &str, pattern: &str, replacement: &str) -> String {
    replace_or_keep(s, pattern, replacement)
}

/// Escapes `&`, `'`, `<`, `>` and `"` as HTML entities.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            c => out.push(c),
        }
    }
    out
}

/// Removes anything shaped like `<...>`. Not nesting-aware.
pub fn remove_tags(s: &str) -> String {
    replace_pattern(s, "<[^>]*>", "")
}
