//! String literal scanning and escape processing.
//!
//! Recognized escapes: `\n`, `\t`, `\r`, `\"`, `\\`, `\'`. Any other escaped
//! character is dropped together with its backslash. The opening quote is
//! the delimiter, so `"it's"` and `'say "hi"'` need no escapes.

/// Resolve a single escape character to its replacement.
///
/// Returns `None` for unrecognized escapes.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Scan a string literal starting at its opening quote.
///
/// Returns the unescaped value and the number of bytes consumed, closing
/// quote included. Returns `None` if the text ends before an unescaped
/// closing quote (a trailing lone backslash counts as unterminated).
pub(crate) fn scan_string(literal: &str) -> Option<(String, usize)> {
    let mut chars = literal.char_indices();
    let (_, delim) = chars.next()?;
    let mut value = String::new();

    while let Some((i, c)) = chars.next() {
        if c == delim {
            return Some((value, i + c.len_utf8()));
        }
        if c == '\\' {
            let (_, escaped) = chars.next()?;
            if let Some(resolved) = resolve_escape(escaped) {
                value.push(resolved);
            }
        } else {
            value.push(c);
        }
    }

    None
}

#[cfg(test)]
mod tests;
