//! Line-shape recognizers shared by the scanner's classifier predicates.
//!
//! These are pure functions over the buffered text: they decide whether a
//! slice *looks like* a construct. Whether the construct is actually emitted
//! also depends on the scanner's context (previous token kinds, indentation,
//! pending markup), which lives in `cursor`.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{one_of, satisfy};
use nom::combinator::peek;
use nom::sequence::terminated;
use nom::IResult;

/// The characters usable for section adornments and transitions.
pub(super) const ADORNMENTS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The recognized bullet glyphs.
pub(super) const BULLETS: &str = "*+-\u{2022}\u{2023}\u{2043}";

/// Recognizes a run of one repeated adornment character.
pub(super) fn adornment_run(input: &str) -> IResult<&str, &str> {
    let (_, first) = peek(satisfy(|c| ADORNMENTS.contains(c)))(input)?;
    take_while1(move |c| c == first)(input)
}

/// Returns the adornment character when the whole line consists of a single
/// repeated adornment at least `min_len` characters long.
pub(super) fn adornment_line(line: &str, min_len: usize) -> Option<char> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    match adornment_run(line) {
        Ok(("", run)) if run.chars().count() >= min_len => run.chars().next(),
        _ => None,
    }
}

/// Recognizes a bullet glyph followed by whitespace.
pub(super) fn bullet(input: &str) -> IResult<&str, char> {
    terminated(one_of(BULLETS), peek(satisfy(char::is_whitespace)))(input)
}

/// Recognizes the opener of a named (`.. _`) or anonymous (`__ `) hyperlink
/// target line.
pub(super) fn hyperlink_start(input: &str) -> IResult<&str, &str> {
    alt((tag(".. _"), tag("__ ")))(input)
}

/// Recognizes the dashes opening an attribution, returning the rest of the
/// line after them.
pub(super) fn attribution_prefix(input: &str) -> IResult<&str, &str> {
    alt((tag("---"), tag("--"), tag("\u{2014}")))(input)
}

/// Reports whether `line` opens a comment: exactly `..` followed by
/// whitespace or nothing. The hyperlink-target form `.. _` with a name after
/// it is not a comment, and `...` is ellipsis text.
pub(super) fn comment_opener(line: &str) -> bool {
    let rest = match line.strip_prefix("..") {
        Some(rest) => rest,
        None => return false,
    };
    if rest.starts_with('.') {
        return false;
    }
    if let Some(after) = line.strip_prefix(".. _") {
        if after.chars().next().map_or(false, |c| c != '\n') {
            return false;
        }
    }
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

/// Reports whether `s` ends with an underscore that is not escaped.
pub(super) fn unescaped_underscore_suffix(s: &str) -> bool {
    s.ends_with('_') && !s.ends_with("\\_")
}
