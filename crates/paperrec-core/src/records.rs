//! Utilities for records output format

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Collapse line breaks so a field stays on one record line
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_quotes("plain"), "plain");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("one\ntwo  three\r\n"), "one two three");
    }
}
