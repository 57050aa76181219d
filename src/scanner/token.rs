//! Token model for the reStructuredText scanner.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The classification of a scanned token.
///
/// The set is closed: every region of input maps onto exactly one of these,
/// with `Paragraph` as the fallback for anything the context rules do not
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// Sentinel end of stream. Text is always `"EOF"`.
    Eof,
    /// Scan failed; the text carries the diagnostic.
    Error,
    /// A line consisting solely of a newline.
    BlankLine,
    /// A run of non-newline Unicode whitespace.
    Space,
    /// A line that is followed by a section adornment.
    Title,
    /// Over- or underline adornment of a title.
    SectionAdornment,
    /// An adornment line acting as a horizontal rule.
    Transition,
    /// Plain text line (the default).
    Paragraph,
    /// A single bullet glyph from `* + - • ‣ ⁃`.
    Bullet,
    /// Enumerator prefix: arabic, alphabetic, roman, or `#` auto.
    Enum,
    /// Leading whitespace opening a block-quoted region.
    BlockQuote,
    /// Attribution line closing a block quote.
    Attribution,
    /// The `..` opening a comment block.
    Comment,
    /// `..` or `__` opening a hyperlink target line.
    HyperlinkStart,
    /// `_` or `__` between a hyperlink start and its name.
    HyperlinkPrefix,
    /// Backtick around a target name that contains colons.
    HyperlinkQuote,
    /// Hyperlink target name characters.
    HyperlinkName,
    /// The `:` closing a hyperlink target name.
    HyperlinkSuffix,
    /// URI body of a hyperlink target.
    HyperlinkUri,
    /// Opening backtick of an indirect reference.
    InlineReferenceOpen,
    /// Body of an indirect reference.
    InlineReferenceText,
    /// Closing `_` (or `` `_ ``) of an indirect reference.
    InlineReferenceClose,
}

impl TokenKind {
    /// The kind's name, as used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Error => "Error",
            TokenKind::BlankLine => "BlankLine",
            TokenKind::Space => "Space",
            TokenKind::Title => "Title",
            TokenKind::SectionAdornment => "SectionAdornment",
            TokenKind::Transition => "Transition",
            TokenKind::Paragraph => "Paragraph",
            TokenKind::Bullet => "Bullet",
            TokenKind::Enum => "Enum",
            TokenKind::BlockQuote => "BlockQuote",
            TokenKind::Attribution => "Attribution",
            TokenKind::Comment => "Comment",
            TokenKind::HyperlinkStart => "HyperlinkStart",
            TokenKind::HyperlinkPrefix => "HyperlinkPrefix",
            TokenKind::HyperlinkQuote => "HyperlinkQuote",
            TokenKind::HyperlinkName => "HyperlinkName",
            TokenKind::HyperlinkSuffix => "HyperlinkSuffix",
            TokenKind::HyperlinkUri => "HyperlinkURI",
            TokenKind::InlineReferenceOpen => "InlineReferenceOpen",
            TokenKind::InlineReferenceText => "InlineReferenceText",
            TokenKind::InlineReferenceClose => "InlineReferenceClose",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token returned from the scanner: its kind, the 1-based line it begins
/// on, and the exact slice of input it covers.
///
/// The text is an owned copy, so a token stays valid however long the
/// consumer holds onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub text: String,
}

impl Token {
    pub(crate) fn eof(line: usize) -> Token {
        Token {
            kind: TokenKind::Eof,
            line,
            text: "EOF".to_string(),
        }
    }

    /// Returns true if this token is the end-of-stream sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for the two terminal kinds, `EOF` and `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("EOF"),
            TokenKind::Error => write!(f, "error: {}", self.text),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{}: {:?}...", self.kind, head)
            }
            _ => write!(f, "{}: {:?}", self.kind, self.text),
        }
    }
}
