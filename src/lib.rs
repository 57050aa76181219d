//! A streaming lexical scanner for reStructuredText.
//!
//! The scanner consumes a byte stream and produces a flat sequence of
//! classified tokens — titles, section adornments, transitions, bullets,
//! enumerators, block quotes, attributions, comments, hyperlink targets,
//! inline references, whitespace and paragraphs — for a downstream parser to
//! assemble into a document tree. reST is context-sensitive and
//! indentation-aware, so classification leans on a small amount of state
//! carried across tokens plus bounded lookahead into the next line; see the
//! [`scanner`] module for the moving parts.
//!
//! ```
//! use tessera::{Scanner, TokenKind};
//!
//! let tokens: Vec<_> = Scanner::from_str("example", "Title\n=====\n").collect();
//! assert_eq!(tokens[0].kind, TokenKind::Title);
//! assert_eq!(tokens[0].text, "Title");
//! assert_eq!(tokens[1].kind, TokenKind::SectionAdornment);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod error;
pub mod scanner;

pub use error::ScanError;
pub use scanner::{ByteSource, ReadSource, Scanner, Token, TokenKind};
