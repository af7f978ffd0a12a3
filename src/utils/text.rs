/// Title-case a field: a letter following a non-letter is uppercased, every
/// other letter is lowercased (`"SÃO JOÃO DEL-REI"` -> `"São João Del-Rei"`).
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}

/// Collapse runs of whitespace into single spaces and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character-indexed slice `[start, end)`, clamped to the text length.
/// `None` as end runs to the end of the text.
pub fn slice_chars(chars: &[char], start: usize, end: Option<usize>) -> String {
    let len = chars.len();
    let start = start.min(len);
    let end = end.map_or(len, |e| e.min(len)).max(start);
    chars[start..end].iter().collect()
}

/// Remove a trailing `\n` or `\r\n`
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
