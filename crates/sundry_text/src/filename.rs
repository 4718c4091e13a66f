//! File name sanitization.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::compile;

static SEPARATORS: LazyLock<Option<Regex>> = LazyLock::new(|| compile("[ &_=+:]"));
static ILLEGAL: LazyLock<Option<Regex>> = LazyLock::new(|| compile("[^[:alnum:].-]"));

/// Returns a lowercase name safe to use as a single file name.
///
/// Steps, in order:
/// 1. lowercase
/// 2. keep only the final `/`-separated segment (`.` and `..` become empty)
/// 3. trim surrounding spaces
/// 4. replace each of ` &_=+:` with `-`
/// 5. drop anything that is not ASCII alphanumeric, `-` or `.`
/// 6. collapse runs of `-`
pub fn safe_file_name(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut name = final_segment(&lowered).trim_matches(' ').to_string();
    if let Some(re) = SEPARATORS.as_ref() {
        name = re.replace_all(&name, "-").into_owned();
    }
    if let Some(re) = ILLEGAL.as_ref() {
        name = re.replace_all(&name, "").into_owned();
    }
    while name.contains("--") {
        name = name.replace("--", "-");
    }
    name
}

fn final_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    match segment {
        "." | ".." => "",
        other => other,
    }
}
