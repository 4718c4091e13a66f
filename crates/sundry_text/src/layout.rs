//! Word-aware truncation and padding. Lengths are counted in codepoints.

use crate::pattern::trim;

/// Characters stripped from the cut point before the ending is appended.
const CUT_PUNCTUATION: &str = r#" /\.,"'#!?&@+-"#;

/// Shortens `s` to roughly `length` codepoints without splitting a word,
/// then appends `ending`.
///
/// Words are added one at a time. When a word pushes the text past
/// `length`, the cut lands on whichever side of that word is closer to
/// `length`; a tie keeps the word. Trailing punctuation and spaces at the
/// cut are removed. Strings already within `length` are returned unchanged.
pub fn truncate(s: &str, length: usize, ending: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let mut taken = String::new();
    let mut present = 0;
    for (i, word) in s.split_whitespace().enumerate() {
        let before_end = taken.len();
        let before = present;
        taken.push_str(word);
        taken.push(' ');
        present += word.chars().count() + 1;
        if present > length && i != 0 {
            let cut = if length * 2 < present + before {
                &taken[..before_end]
            } else {
                taken.as_str()
            };
            return format!("{}{ending}", trim(cut, CUT_PUNCTUATION));
        }
    }
    s.to_string()
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
    Both,
}

/// Pads the start of `s` with repetitions of `pad` up to `pad_len` codepoints.
pub fn pad_left(s: &str, pad: &str, pad_len: usize) -> String {
    pad_to(s, pad, pad_len, Side::Left)
}

/// Pads the end of `s` with repetitions of `pad` up to `pad_len` codepoints.
pub fn pad_right(s: &str, pad: &str, pad_len: usize) -> String {
    pad_to(s, pad, pad_len, Side::Right)
}

/// Pads both sides of `s`; the left side gets the smaller half of the
/// deficit when it is odd.
pub fn pad_both(s: &str, pad: &str, pad_len: usize) -> String {
    pad_to(s, pad, pad_len, Side::Both)
}

fn pad_to(s: &str, pad: &str, pad_len: usize, side: Side) -> String {
    let current = s.chars().count();
    if pad_len <= current || pad.is_empty() {
        return s.to_string();
    }
    let deficit = pad_len - current;
    let (left, right) = match side {
        Side::Left => (deficit, 0),
        Side::Right => (0, deficit),
        Side::Both => (deficit / 2, deficit - deficit / 2),
    };
    let mut out = String::with_capacity(s.len() + deficit * pad.len());
    out.extend(pad.chars().cycle().take(left));
    out.push_str(s);
    out.extend(pad.chars().cycle().take(right));
    out
}
