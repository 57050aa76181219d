//! Scanner module, split by responsibility to keep the pipeline clear:
//!
//! - `input`: pull sources of bytes and the `io::Read` adapter.
//! - `token`: the token model handed to consumers.
//! - `rules`: pure, nom-powered shape recognizers over buffered text.
//! - `enumerator`: the enumerator sub-classifier (arabic/alpha/roman/auto).
//! - `cursor`: the stateful scanner that buffers lines, tracks context, and
//!   drives token emission through the rules.
//!
//! `cursor` owns all mutable state; everything it consults for *shape* lives
//! in `rules` and `enumerator` as plain functions, which keeps the dispatch
//! order in one place and the grammar details testable on their own.

pub mod token;

mod cursor;
mod enumerator;
mod input;
mod rules;

pub use cursor::Scanner;
pub use input::{ByteSource, ReadSource};
pub use token::{Token, TokenKind};
