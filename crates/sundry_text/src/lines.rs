//! Line splitting.

use sundry_foundation::{Error, Result};

/// Splits `s` on `\n`. A trailing newline yields a trailing empty line.
pub fn get_lines(s: &str) -> Vec<&str> {
    s.split('\n').collect()
}

/// Returns line `index` (zero-based) of `s`.
///
/// # Errors
///
/// Returns an index error when `index` is past the last line.
pub fn get_line(s: &str, index: usize) -> Result<&str> {
    let lines = get_lines(s);
    lines
        .get(index)
        .copied()
        .ok_or_else(|| Error::index_out_of_bounds(index, lines.len()))
}
