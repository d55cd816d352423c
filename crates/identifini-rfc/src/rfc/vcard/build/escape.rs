//! vCard text escaping.

/// Replaces each `\n` with the two characters `\n`.
///
/// No other character is touched. Carriage returns pass through.
#[must_use]
pub fn escape_newlines(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        if c == '\n' {
            result.push_str("\\n");
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_newlines("hello; world, \\"), "hello; world, \\");
    }

    #[test]
    fn newline_becomes_literal() {
        assert_eq!(escape_newlines("Line1\nLine2\n"), "Line1\\nLine2\\n");
    }

    #[test]
    fn carriage_return_kept() {
        assert_eq!(escape_newlines("a\r\nb"), "a\r\\nb");
    }
}
