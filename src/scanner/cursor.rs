//! The scanner itself: a pull-driven state machine over a byte source.
//!
//! Each call to [`Scanner::next_token`] classifies the next construct and
//! returns exactly one token. The input is buffered a line at a time and
//! decoded as UTF-8 on the fly; classification probes (title underlines,
//! transition follow-ups, enumerator continuations) save and restore the
//! cursor so no input is consumed speculatively.
//!
//! Context threads through a handful of values: the kinds of the last two
//! emitted tokens, the most recent line-leading markup, the current line's
//! indentation, and the last interpreted enumerator. The dispatch order in
//! `scan` is part of the contract; several predicates can claim the same
//! byte and the first one listed wins.

use crate::error::ScanError;

use super::enumerator::{self, Enumerator};
use super::input::ByteSource;
use super::rules;
use super::token::{Token, TokenKind};

/// A reStructuredText scanner over a byte source.
pub struct Scanner<S> {
    source: S,
    name: String,
    /// Raw bytes of the line being loaded, reused between refills.
    buf: Vec<u8>,
    /// Buffered, not-yet-emitted tail of the input. Carriage returns never
    /// make it in here.
    input: String,
    pos: usize,
    start: usize,
    last_rune: Option<char>,
    last_width: usize,
    line: usize,
    done: bool,
    errored: bool,
    finished: bool,
    at_line_start: bool,
    /// Kinds of the two most recently emitted tokens; `types[1]` is the
    /// immediate predecessor.
    types: [TokenKind; 2],
    /// Rune width of the current line's leading whitespace.
    indent: usize,
    /// Most recent line-leading construct, `Eof` when none is pending.
    last_markup: TokenKind,
    last_enum: Enumerator,
}

impl<'a> Scanner<std::str::Bytes<'a>> {
    /// Creates a scanner over in-memory text.
    pub fn from_str(name: impl Into<String>, text: &'a str) -> Self {
        Scanner::new(name, text.bytes())
    }
}

impl<S: ByteSource> Scanner<S> {
    /// Creates a scanner with a diagnostic name, positioned at line 1.
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Scanner {
            source,
            name: name.into(),
            buf: Vec::new(),
            input: String::new(),
            pos: 0,
            start: 0,
            last_rune: None,
            last_width: 0,
            line: 1,
            done: false,
            errored: false,
            finished: false,
            at_line_start: true,
            types: [TokenKind::Eof, TokenKind::Eof],
            indent: 0,
            last_markup: TokenKind::Eof,
            last_enum: Enumerator::default(),
        }
    }

    /// The diagnostic name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the next token. After `EOF` or `Error`, every further call
    /// returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        if self.errored {
            return Token::eof(self.line);
        }
        self.last_rune = None;
        self.last_width = 0;
        match self.scan() {
            Some(token) => token,
            None => Token::eof(self.line),
        }
    }

    // Buffering and the rune cursor.

    /// Reads the next line of input into the buffer, dropping carriage
    /// returns. When nothing is pending the buffer is replaced, otherwise
    /// the new line is appended so multi-line tokens stay addressable.
    fn load_line(&mut self) {
        self.buf.clear();
        loop {
            match self.source.next_byte() {
                None => {
                    self.done = true;
                    break;
                }
                Some(b'\r') => {}
                Some(b) => {
                    self.buf.push(b);
                    if b == b'\n' {
                        break;
                    }
                }
            }
        }
        let text = String::from_utf8_lossy(&self.buf);
        if self.start == self.pos {
            self.input.clear();
            self.input.push_str(&text);
            self.start = 0;
            self.pos = 0;
        } else {
            self.input.push_str(&text);
        }
    }

    fn read_rune(&mut self) -> Option<(char, usize)> {
        if !self.done && self.pos == self.input.len() {
            self.load_line();
        }
        let c = self.input[self.pos..].chars().next()?;
        Some((c, c.len_utf8()))
    }

    fn next_rune(&mut self) -> Option<char> {
        match self.read_rune() {
            Some((c, width)) => {
                self.last_rune = Some(c);
                self.last_width = width;
                self.pos += width;
                Some(c)
            }
            None => {
                self.last_rune = None;
                self.last_width = 0;
                None
            }
        }
    }

    fn peek_rune(&mut self) -> Option<char> {
        self.read_rune().map(|(c, _)| c)
    }

    /// Runs a lookahead without consuming input: the cursor is restored
    /// afterwards. The line counter is never touched inside a probe.
    fn probe<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let (pos, width) = (self.pos, self.last_width);
        let out = f(self);
        self.pos = pos;
        self.last_width = width;
        out
    }

    /// The current line from the pending token's start, without its newline.
    fn current_line(&self) -> &str {
        self.input[self.start..].split('\n').next().unwrap_or_default()
    }

    // Emission.

    fn emit(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            line: self.line,
            text: self.input[self.start..self.pos].to_string(),
        };
        if kind == TokenKind::BlankLine {
            self.line += 1;
        }
        self.types = [self.types[1], kind];
        self.start = self.pos;
        self.at_line_start = kind == TokenKind::BlankLine;
        token
    }

    /// Skips pending input without emitting it, tracking newlines.
    fn ignore(&mut self) {
        self.line += self.input[self.start..self.pos].matches('\n').count();
        self.start = self.pos;
    }

    /// Consumes an immediately following newline into the bookkeeping of the
    /// token just emitted.
    fn absorb_newline(&mut self) {
        if self.peek_rune() == Some('\n') {
            self.pos += 1;
            self.ignore();
            self.at_line_start = true;
        }
    }

    fn lex_end_of_line(&mut self, kind: TokenKind) -> Token {
        let token = self.emit(kind);
        self.absorb_newline();
        token
    }

    fn lex_until_terminator(&mut self, kind: TokenKind) -> Token {
        loop {
            match self.peek_rune() {
                None => return self.emit(kind),
                Some('\n') => return self.lex_end_of_line(kind),
                Some(_) => {
                    self.next_rune();
                }
            }
        }
    }

    /// Emits an `Error` token and leaves the scanner terminal.
    fn fail(&mut self, error: ScanError) -> Token {
        let token = Token {
            kind: TokenKind::Error,
            line: self.line,
            text: error.to_string(),
        };
        self.input.clear();
        self.start = 0;
        self.pos = 0;
        self.errored = true;
        token
    }

    // The dispatcher. Branch order is the contract.

    fn scan(&mut self) -> Option<Token> {
        let r = self.next_rune()?;
        if r == '\n' {
            return Some(self.lex_blank_line());
        }
        let bol = self.at_line_start;
        if bol && !r.is_whitespace() {
            self.indent = 0;
        }
        if r.is_whitespace() {
            if bol && self.is_block_quote() {
                return Some(self.lex_space(TokenKind::BlockQuote, bol));
            }
            return Some(self.lex_space(TokenKind::Space, bol));
        }
        if self.is_attribution(r) {
            return Some(self.lex_until_terminator(TokenKind::Attribution));
        }
        if self.is_bullet() {
            self.last_markup = TokenKind::Bullet;
            return Some(self.lex_end_of_line(TokenKind::Bullet));
        }
        if self.is_comment(r) {
            return Some(self.lex_comment());
        }
        if self.is_transition(r) {
            self.last_markup = TokenKind::Transition;
            return Some(self.lex_until_terminator(TokenKind::Transition));
        }
        if self.is_section_adornment(r) {
            self.last_markup = TokenKind::SectionAdornment;
            return Some(self.lex_until_terminator(TokenKind::SectionAdornment));
        }
        if self.is_hyperlink_start() {
            return Some(self.lex_hyperlink_start());
        }
        if self.is_hyperlink_prefix() {
            return Some(self.lex_hyperlink_prefix());
        }
        if r == '`' {
            return Some(self.lex_quote());
        }
        if self.is_hyperlink_name() {
            return Some(self.lex_hyperlink_name());
        }
        if self.is_hyperlink_suffix() {
            return Some(self.lex_end_of_line(TokenKind::HyperlinkSuffix));
        }
        if self.is_hyperlink_uri() {
            return Some(self.lex_until_terminator(TokenKind::HyperlinkUri));
        }
        if self.is_inline_reference_text() {
            return Some(self.lex_inline_reference_text());
        }
        if self.is_inline_reference_close() {
            return Some(self.lex_inline_reference_close());
        }
        if self.is_title() {
            self.last_markup = TokenKind::Title;
            return Some(self.lex_until_terminator(TokenKind::Title));
        }
        if self.is_enum(r) {
            return Some(self.lex_enum());
        }
        if bol {
            self.last_markup = TokenKind::Eof;
        }
        Some(self.lex_until_terminator(TokenKind::Paragraph))
    }

    // Blank lines and whitespace.

    fn lex_blank_line(&mut self) -> Token {
        self.last_enum = Enumerator::default();
        if self.types[1] == TokenKind::Comment {
            self.last_markup = TokenKind::Eof;
        }
        self.emit(TokenKind::BlankLine)
    }

    /// Consumes the maximal run of non-newline whitespace. At the start of a
    /// line the run's rune count becomes the line's indentation.
    fn lex_space(&mut self, kind: TokenKind, update_indent: bool) -> Token {
        loop {
            match self.peek_rune() {
                Some(c) if c.is_whitespace() && c != '\n' => {
                    self.next_rune();
                }
                _ => break,
            }
        }
        let token = self.emit(kind);
        if update_indent {
            self.indent = token.text.chars().count();
        }
        token
    }

    /// A deeper-indented line opens a block quote, but only when no
    /// line-leading markup (comment, bullet, target, ...) is pending and the
    /// neighborhood is body text.
    fn is_block_quote(&self) -> bool {
        if self.last_markup != TokenKind::Eof {
            return false;
        }
        let run = self.input[self.start..]
            .chars()
            .take_while(|&c| c.is_whitespace() && c != '\n')
            .count();
        if run <= self.indent {
            return false;
        }
        matches!(
            self.types[0],
            TokenKind::Paragraph | TokenKind::Attribution | TokenKind::Comment
        ) || (self.types[1] == TokenKind::Paragraph && self.indent > 0)
    }

    // Attributions.

    fn is_attribution(&mut self, r: char) -> bool {
        // A second attribution line continues the one above it.
        if self.types[0] == TokenKind::Attribution && self.types[1] == TokenKind::Space {
            return self.attribution_closes();
        }
        if r != '-' && r != '\u{2014}' {
            return false;
        }
        // The dashes must follow this line's own indent inside a quote; a
        // quote cannot open with its attribution.
        if self.types[1] != TokenKind::Space || self.indent == 0 {
            return false;
        }
        let body = match rules::attribution_prefix(self.current_line()) {
            Ok((body, _)) => body.trim(),
            Err(_) => return false,
        };
        if body.is_empty() || body.contains('-') {
            return false;
        }
        self.attribution_closes()
    }

    /// The line after an attribution must be blank, end the input, or align
    /// with the attribution's indent (a continuation).
    fn attribution_closes(&mut self) -> bool {
        let want = self.indent;
        self.probe(|s| {
            loop {
                match s.next_rune() {
                    None => return true,
                    Some('\n') => break,
                    Some(_) => {}
                }
            }
            match s.peek_rune() {
                None | Some('\n') => true,
                Some(_) => {
                    let mut width = 0;
                    while let Some(c) = s.peek_rune() {
                        if c == '\n' || !c.is_whitespace() {
                            break;
                        }
                        s.next_rune();
                        width += 1;
                    }
                    width == want
                }
            }
        })
    }

    // Bullets and comments.

    fn is_bullet(&self) -> bool {
        rules::bullet(&self.input[self.start..]).is_ok()
    }

    fn is_comment(&self, r: char) -> bool {
        r == '.' && self.types[1] != TokenKind::Title && rules::comment_opener(self.current_line())
    }

    fn lex_comment(&mut self) -> Token {
        self.next_rune();
        self.last_markup = TokenKind::Comment;
        self.lex_end_of_line(TokenKind::Comment)
    }

    // Titles, section adornments, transitions.

    /// True when the line after the current one is blank or the input ends.
    fn next_line_is_blank(&mut self) -> bool {
        self.probe(|s| {
            loop {
                match s.next_rune() {
                    None => return true,
                    Some('\n') => break,
                    Some(_) => {}
                }
            }
            matches!(s.peek_rune(), None | Some('\n'))
        })
    }

    fn is_transition(&mut self, r: char) -> bool {
        let context = matches!(self.types[1], TokenKind::Eof | TokenKind::BlankLine)
            || (self.types[1] == TokenKind::Space && self.types[0] == TokenKind::BlankLine);
        if !context {
            return false;
        }
        if rules::adornment_line(self.current_line(), 4) != Some(r) {
            return false;
        }
        self.next_line_is_blank()
    }

    fn is_section_adornment(&mut self, r: char) -> bool {
        // Right after a title the adornment is its underline.
        if self.types[1] == TokenKind::Title
            || (self.types[1] == TokenKind::Space && self.types[0] == TokenKind::Title)
        {
            return true;
        }
        // Otherwise it can only be an overline for a title on the next line.
        if rules::adornment_line(self.current_line(), 2) != Some(r) {
            return false;
        }
        !self.next_line_is_blank()
    }

    /// One-line lookahead: the current line is a title when the next line,
    /// leading whitespace aside, is an adornment run of at least two.
    fn is_title(&mut self) -> bool {
        self.probe(|s| {
            loop {
                match s.next_rune() {
                    None => return false,
                    Some('\n') => break,
                    Some(_) => {}
                }
            }
            loop {
                match s.peek_rune() {
                    Some(c) if c.is_whitespace() && c != '\n' => {
                        s.next_rune();
                    }
                    _ => break,
                }
            }
            let line = s.input[s.pos..].split('\n').next().unwrap_or_default();
            rules::adornment_line(line, 2).is_some()
        })
    }

    // Hyperlink targets and inline references.

    fn is_hyperlink_start(&self) -> bool {
        rules::hyperlink_start(&self.input[self.start..]).is_ok()
    }

    fn lex_hyperlink_start(&mut self) -> Token {
        self.next_rune();
        self.last_markup = TokenKind::HyperlinkStart;
        self.emit(TokenKind::HyperlinkStart)
    }

    fn is_hyperlink_prefix(&mut self) -> bool {
        match self.peek_rune() {
            None | Some('\n') => return false,
            Some(_) => {}
        }
        self.input[..self.pos].ends_with(".. _")
    }

    fn lex_hyperlink_prefix(&mut self) -> Token {
        // `.. __:` is an anonymous target; both underscores form the prefix.
        if self.input[self.start..].starts_with("__:") {
            self.next_rune();
        }
        self.emit(TokenKind::HyperlinkPrefix)
    }

    fn lex_quote(&mut self) -> Token {
        match self.types[1] {
            TokenKind::HyperlinkPrefix | TokenKind::HyperlinkName => {
                self.emit(TokenKind::HyperlinkQuote)
            }
            TokenKind::Space => self.emit(TokenKind::InlineReferenceOpen),
            TokenKind::InlineReferenceText => self.lex_inline_reference_close(),
            _ => self.fail(ScanError::UnexpectedQuote),
        }
    }

    fn is_hyperlink_name(&self) -> bool {
        match self.types[1] {
            TokenKind::HyperlinkPrefix => !self.input[..self.pos].ends_with("__:"),
            TokenKind::HyperlinkQuote => self.types[0] == TokenKind::HyperlinkPrefix,
            TokenKind::Space => self.types[0] == TokenKind::HyperlinkName,
            _ => false,
        }
    }

    /// Scans a hyperlink name. Escaped colons belong to the name, and inside
    /// a quoted name colons lose their terminating role entirely.
    fn lex_hyperlink_name(&mut self) -> Token {
        loop {
            match self.peek_rune() {
                Some(':') => {
                    if self.last_rune != Some('\\') && self.types[1] != TokenKind::HyperlinkQuote {
                        return self.emit(TokenKind::HyperlinkName);
                    }
                    self.next_rune();
                }
                Some('`') | None => return self.emit(TokenKind::HyperlinkName),
                Some('\n') => return self.lex_end_of_line(TokenKind::HyperlinkName),
                Some(_) => {
                    self.next_rune();
                }
            }
        }
    }

    fn is_hyperlink_suffix(&self) -> bool {
        match self.types[1] {
            TokenKind::HyperlinkPrefix | TokenKind::HyperlinkName => true,
            TokenKind::HyperlinkQuote => self.types[0] == TokenKind::HyperlinkName,
            _ => false,
        }
    }

    fn is_hyperlink_uri(&self) -> bool {
        let context = self.types[1] == TokenKind::Space
            && matches!(
                self.types[0],
                TokenKind::HyperlinkStart | TokenKind::HyperlinkSuffix | TokenKind::HyperlinkUri
            );
        if !context {
            return false;
        }
        // A lone reference word with a trailing unescaped underscore is an
        // indirect reference, not a URI.
        let rest = self.input[self.pos..].split('\n').next().unwrap_or_default();
        !(rules::unescaped_underscore_suffix(rest) && !rest.chars().any(char::is_whitespace))
    }

    fn is_inline_reference_text(&self) -> bool {
        match self.types[1] {
            TokenKind::Space => matches!(
                self.types[0],
                TokenKind::HyperlinkStart
                    | TokenKind::HyperlinkSuffix
                    | TokenKind::InlineReferenceText
            ),
            TokenKind::InlineReferenceOpen => true,
            _ => false,
        }
    }

    /// Scans reference text. Only a line-final underscore closes it;
    /// interior underscores are ordinary text.
    fn lex_inline_reference_text(&mut self) -> Token {
        loop {
            match self.peek_rune() {
                Some('_') => {
                    if self.pos + 2 >= self.input.len() {
                        return self.emit(TokenKind::InlineReferenceText);
                    }
                    self.next_rune();
                }
                Some('`') | None => return self.emit(TokenKind::InlineReferenceText),
                Some('\n') => return self.lex_end_of_line(TokenKind::InlineReferenceText),
                Some(_) => {
                    self.next_rune();
                }
            }
        }
    }

    fn is_inline_reference_close(&self) -> bool {
        self.types[1] == TokenKind::InlineReferenceText
    }

    fn lex_inline_reference_close(&mut self) -> Token {
        if self.last_rune == Some('`') {
            self.next_rune();
        }
        self.lex_end_of_line(TokenKind::InlineReferenceClose)
    }

    // Enumerators.

    /// Speculatively parses an enumerator and validates the following line;
    /// the cursor is restored either way.
    fn is_enum(&mut self, r: char) -> bool {
        if self.types[0] == TokenKind::BlankLine && self.types[1] == TokenKind::Paragraph {
            return false;
        }
        self.probe(|s| {
            if r == '(' && s.next_rune().is_none() {
                return false;
            }
            let suffix = match s.enum_suffix() {
                Some(i) => i,
                None => return false,
            };
            let interpreted = match s.interpret_enum(suffix) {
                Some(e) => e,
                None => return false,
            };
            s.last_enum = interpreted;
            loop {
                match s.next_rune() {
                    None => return true,
                    Some('\n') => break,
                    Some(_) => {}
                }
            }
            // The next line must not itself be a broken enumerator, or the
            // current line is body text (`z.` then `x.` is two paragraphs).
            let mut next = match s.next_rune() {
                Some(c) => c,
                None => return true,
            };
            if next == '(' {
                next = match s.next_rune() {
                    Some(c) => c,
                    None => return true,
                };
            }
            if !next.is_alphanumeric() {
                return true;
            }
            let suffix = match s.enum_suffix() {
                Some(i) => i,
                None => return false,
            };
            s.interpret_enum(suffix).is_some()
        })
    }

    /// Byte offset of the first `.`/`)` after the cursor, provided the rune
    /// after it is whitespace or the end of input.
    fn enum_suffix(&self) -> Option<usize> {
        let rest = &self.input[self.pos..];
        let i = rest.find(['.', ')'])?;
        match rest[i + 1..].chars().next() {
            None => Some(i),
            Some(c) if c.is_whitespace() => Some(i),
            _ => None,
        }
    }

    fn interpret_enum(&self, suffix: usize) -> Option<Enumerator> {
        let start = self.pos - self.last_width;
        let span = &self.input[start..self.pos + suffix];
        enumerator::interpret(span, self.last_enum)
    }

    fn lex_enum(&mut self) -> Token {
        loop {
            match self.peek_rune() {
                Some('\n') => return self.lex_end_of_line(TokenKind::Enum),
                None => return self.emit(TokenKind::Enum),
                Some(c) if c.is_whitespace() => return self.emit(TokenKind::Enum),
                Some(_) => {
                    self.next_rune();
                }
            }
        }
    }
}

impl<S: ByteSource> Iterator for Scanner<S> {
    type Item = Token;

    /// Yields every token through the final `EOF` (or `Error`), then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_terminal() {
            self.finished = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(input: &str) -> Vec<(TokenKind, String)> {
        Scanner::from_str("test", input)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn empty_input_is_a_lone_eof() {
        let tokens = kinds_and_texts("");
        assert_eq!(tokens, vec![(TokenKind::Eof, "EOF".to_string())]);
    }

    #[test]
    fn scanner_keeps_its_name() {
        let scanner = Scanner::from_str("doc.rst", "text");
        assert_eq!(scanner.name(), "doc.rst");
    }

    #[test]
    fn error_state_is_terminal() {
        let mut scanner = Scanner::from_str("test", "` trailing text");
        let first = scanner.next_token();
        assert_eq!(first.kind, TokenKind::Error);
        assert_eq!(
            first.text,
            "expected hyperlink or inline reference before quote"
        );
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn eof_repeats_after_the_end() {
        let mut scanner = Scanner::from_str("test", "x");
        assert_eq!(scanner.next_token().kind, TokenKind::Paragraph);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
        assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let tokens = kinds_and_texts("one\r\ntwo\r\n");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Paragraph, "one".to_string()),
                (TokenKind::Paragraph, "two".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn line_numbers_advance_per_line() {
        let mut scanner = Scanner::from_str("test", "a\nb\n\nc");
        let lines: Vec<(TokenKind, usize)> = (&mut scanner).map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            lines,
            vec![
                (TokenKind::Paragraph, 1),
                (TokenKind::Paragraph, 2),
                (TokenKind::BlankLine, 3),
                (TokenKind::Paragraph, 4),
                (TokenKind::Eof, 4),
            ]
        );
    }

    #[test]
    fn title_probe_does_not_consume_input() {
        // The underline is too short for an adornment, so the probe must
        // back out and leave the line to the paragraph rule.
        let tokens = kinds_and_texts("Almost\n=\n");
        assert_eq!(tokens[0], (TokenKind::Paragraph, "Almost".to_string()));
        assert_eq!(tokens[1], (TokenKind::Paragraph, "=".to_string()));
    }

    #[test]
    fn whitespace_only_line_scans_as_space_then_blank() {
        let tokens = kinds_and_texts(" \t\n");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Space, " \t".to_string()),
                (TokenKind::BlankLine, "\n".to_string()),
                (TokenKind::Eof, "EOF".to_string()),
            ]
        );
    }

    #[test]
    fn blank_line_resets_the_enumerator_sequence() {
        // Without the reset the second `1.` would break sequencing and fall
        // back to a paragraph.
        let tokens = kinds_and_texts("1. one\n\n1. uno");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Enum,
                TokenKind::Space,
                TokenKind::Paragraph,
                TokenKind::BlankLine,
                TokenKind::Enum,
                TokenKind::Space,
                TokenKind::Paragraph,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn multibyte_bullets_scan_cleanly() {
        let tokens = kinds_and_texts("\u{2022} item\n\u{2023} item\n\u{2043} item");
        let bullets: Vec<&str> = tokens
            .iter()
            .filter(|t| t.0 == TokenKind::Bullet)
            .map(|t| t.1.as_str())
            .collect();
        assert_eq!(bullets, vec!["\u{2022}", "\u{2023}", "\u{2043}"]);
    }

    #[test]
    fn read_source_and_str_source_agree() {
        use super::super::input::ReadSource;
        let input = "Title\n=====\n\nParagraph.";
        let from_str: Vec<TokenKind> = Scanner::from_str("a", input).map(|t| t.kind).collect();
        let from_read: Vec<TokenKind> = Scanner::new("b", ReadSource::new(input.as_bytes()))
            .map(|t| t.kind)
            .collect();
        assert_eq!(from_str, from_read);
    }

    #[test]
    fn indent_tracks_the_leading_space_run() {
        // The second indented line matches the block quote's indent, so it
        // is plain space, not a nested quote.
        let tokens = kinds_and_texts("Paragraph.\n\n   one\n   two");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Paragraph,
                TokenKind::BlankLine,
                TokenKind::BlockQuote,
                TokenKind::Paragraph,
                TokenKind::Space,
                TokenKind::Paragraph,
                TokenKind::Eof,
            ]
        );
    }
}
