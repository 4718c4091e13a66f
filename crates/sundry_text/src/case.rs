//! Case-convention conversion and reversal.

/// Converts `snake_case` to `CamelCase`: `my_func` becomes `MyFunc`.
///
/// The input is lowercased first, underscores and whitespace are dropped, and
/// the first letter of every word is uppercased. Punctuation other than an
/// apostrophe also starts a new word (`foo-bar` becomes `Foo-Bar`).
pub fn underscore_to_camel_case(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut word_start = true;
    for c in lowered.chars() {
        if c == '_' || c.is_whitespace() {
            word_start = true;
            continue;
        }
        if word_start && c.is_alphanumeric() {
            push_title(&mut out, c);
        } else {
            out.push(c);
        }
        word_start = !c.is_alphanumeric() && c != '\'';
    }
    out
}

/// Titlecases one character: only the first char of its uppercase mapping
/// stays upper, so `ß` becomes `Ss` rather than `SS`.
fn push_title(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    out.extend(upper.flat_map(char::to_lowercase));
}

/// Converts `CamelCase` to `snake_case`: `MyFunc` becomes `my_func`.
///
/// A boundary is placed where a run of characters that are neither
/// lowercase, digits, nor `_` begins. Consecutive uppercase letters stay in
/// one segment, so `HTTPServer` becomes `httpserver`.
pub fn camel_case_to_underscore(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 4);
    let mut segment = String::new();
    let mut in_run = false;
    for c in s.chars() {
        let starts_segment = !c.is_lowercase() && c != '_' && !c.is_numeric();
        if starts_segment && !in_run {
            push_segment(&mut output, &segment);
            segment.clear();
        }
        in_run = starts_segment;
        segment.extend(c.to_lowercase());
    }
    push_segment(&mut output, &segment);
    output
}

fn push_segment(output: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !output.is_empty() {
        output.push('_');
    }
    output.push_str(segment);
}

/// Reverses `s` by codepoint, so multi-byte characters stay intact.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
