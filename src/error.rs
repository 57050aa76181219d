//! Error type for the scanner.
//!
//! Scanning is deliberately forgiving: almost any ill-formed input degrades
//! to a `Paragraph` token. The one hard failure is a backtick in a position
//! where neither a hyperlink name nor an inline reference can follow. Errors
//! surface as `Error` tokens carrying the rendered message; this type is the
//! single place those messages are defined.

use std::fmt;

/// A failure detected while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A backtick appeared outside any hyperlink or inline-reference
    /// context.
    UnexpectedQuote,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnexpectedQuote => {
                f.write_str("expected hyperlink or inline reference before quote")
            }
        }
    }
}

impl std::error::Error for ScanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_quote_diagnostic() {
        assert_eq!(
            ScanError::UnexpectedQuote.to_string(),
            "expected hyperlink or inline reference before quote"
        );
    }
}
