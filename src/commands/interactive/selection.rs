//! Parsing of user-typed article numbers

use paperrec_core::bail_usage;
use paperrec_core::error::Result;

/// Typed value that ends the session
pub const EXIT_SENTINEL: i64 = -1;

/// Outcome of parsing one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `-1`: leave the session
    Exit,
    /// `0`: numbering starts from 1
    Zero,
    /// A number outside `1..=len`
    OutOfRange(i64),
    /// Not a number at all
    Invalid,
    /// A valid choice, as a 0-based corpus index
    Article(usize),
}

impl Selection {
    /// Message for selections that do not pick an article
    pub fn message(&self, len: usize) -> Option<String> {
        match self {
            Selection::Exit => Some("Exiting the recommender system.".to_string()),
            Selection::Zero => Some("Articles start from 1, not 0...try again".to_string()),
            Selection::OutOfRange(n) => Some(format!(
                "There is no article {}; pick a number from 1 to {}",
                n, len
            )),
            Selection::Invalid => Some("Invalid input, try again...".to_string()),
            Selection::Article(_) => None,
        }
    }
}

/// Parse a 1-based article number typed by the user against a corpus of `len` articles
pub fn parse_selection(input: &str, len: usize) -> Selection {
    let trimmed = input.trim();
    let number = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(_) => return Selection::Invalid,
    };

    match number {
        EXIT_SENTINEL => Selection::Exit,
        0 => Selection::Zero,
        n if n > 0 && (n as u64) <= len as u64 => Selection::Article((n - 1) as usize),
        n => Selection::OutOfRange(n),
    }
}

/// Parse an article number given on the command line, rejecting anything
/// that does not name an article.
pub fn require_article(input: &str, len: usize) -> Result<usize> {
    match parse_selection(input, len) {
        Selection::Article(index) => Ok(index),
        Selection::Invalid => {
            bail_usage!(format!("invalid article number '{}'", input.trim()))
        }
        Selection::Exit | Selection::Zero | Selection::OutOfRange(_) => bail_usage!(format!(
            "article number must be between 1 and {}, got {}",
            len,
            input.trim()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperrec_core::error::RecommendError;

    #[test]
    fn test_valid_selection_is_zero_based() {
        assert_eq!(parse_selection("1", 5), Selection::Article(0));
        assert_eq!(parse_selection(" 5\n", 5), Selection::Article(4));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(parse_selection("-1", 5), Selection::Exit);
        assert_eq!(parse_selection("0", 5), Selection::Zero);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_selection("6", 5), Selection::OutOfRange(6));
        assert_eq!(parse_selection("-2", 5), Selection::OutOfRange(-2));
        assert_eq!(parse_selection("1", 0), Selection::OutOfRange(1));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_selection("abc", 5), Selection::Invalid);
        assert_eq!(parse_selection("", 5), Selection::Invalid);
        assert_eq!(parse_selection("2.5", 5), Selection::Invalid);
    }

    #[test]
    fn test_require_article() {
        assert_eq!(require_article("2", 3).unwrap(), 1);
        for bad in ["0", "-1", "4", "x"] {
            let err = require_article(bad, 3).unwrap_err();
            assert!(matches!(err, RecommendError::UsageError(_)));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Selection::Zero.message(3).unwrap(),
            "Articles start from 1, not 0...try again"
        );
        assert!(Selection::OutOfRange(9).message(3).unwrap().contains("1 to 3"));
        assert!(Selection::Article(0).message(3).is_none());
    }
}
