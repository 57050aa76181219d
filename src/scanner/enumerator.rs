//! The enumerator sub-classifier.
//!
//! Enumerators are the list prefixes `1.`, `(2)`, `A)`, `iv.`, `#.` and so
//! on. Interpreting one requires the previous enumerator: `#` inherits its
//! kind, a bare `V` is roman only inside a roman sequence, and consecutive
//! values of the same kind must step by exactly one.

use lazy_static::lazy_static;
use regex::Regex;

/// The interpreted kind of an enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum EnumKind {
    #[default]
    None,
    Arabic,
    UpperAlpha,
    LowerAlpha,
    UpperRoman,
    LowerRoman,
}

/// An interpreted enumerator: kind, ordinal value, and whether it was the
/// `#` auto form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct Enumerator {
    pub kind: EnumKind,
    pub value: i32,
    pub auto: bool,
}

lazy_static! {
    static ref ROMAN: Regex = Regex::new("^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("roman numeral pattern");
}

/// Interprets `span` (the text between the optional `(` and the `.`/`)`
/// suffix) against the previous enumerator. Returns `None` when the span is
/// not a valid successor.
pub(super) fn interpret(span: &str, last: Enumerator) -> Option<Enumerator> {
    let first = span.chars().next()?;
    if last.auto && first != '#' {
        return None;
    }
    let e = if first.is_ascii_digit() {
        let value: i32 = span.parse().ok()?;
        Enumerator {
            kind: EnumKind::Arabic,
            value,
            auto: false,
        }
    } else if first == '#' {
        if span != "#" {
            return None;
        }
        Enumerator {
            kind: last.kind,
            value: last.value + 1,
            auto: true,
        }
    } else if first.is_alphabetic() {
        if is_roman(first, last) {
            let kind = if first.is_lowercase() {
                EnumKind::LowerRoman
            } else {
                EnumKind::UpperRoman
            };
            Enumerator {
                kind,
                value: roman_value(span)?,
                auto: false,
            }
        } else if span.chars().count() > 1 || !first.is_ascii_alphabetic() {
            return None;
        } else {
            let kind = if first.is_ascii_lowercase() {
                EnumKind::LowerAlpha
            } else {
                EnumKind::UpperAlpha
            };
            Enumerator {
                kind,
                value: alpha_ordinal(first),
                auto: false,
            }
        }
    } else {
        return None;
    };
    if e.kind == last.kind && e.value - last.value != 1 {
        return None;
    }
    Some(e)
}

/// `I` and `i` are always roman; the other roman letters are ambiguous with
/// single-letter alphabetic enumerators and count as roman only while a
/// same-case roman sequence is active.
fn is_roman(c: char, last: Enumerator) -> bool {
    match c {
        'I' | 'i' => true,
        'V' | 'X' | 'L' | 'C' | 'D' | 'M' => last.kind == EnumKind::UpperRoman,
        'v' | 'x' | 'l' | 'c' | 'd' | 'm' => last.kind == EnumKind::LowerRoman,
        _ => false,
    }
}

fn alpha_ordinal(c: char) -> i32 {
    (c.to_ascii_lowercase() as i32) - ('a' as i32) + 1
}

/// Converts a roman numeral with the additive per-letter mapping, after
/// validating its shape.
fn roman_value(span: &str) -> Option<i32> {
    let upper = span.to_uppercase();
    if !ROMAN.is_match(&upper) {
        return None;
    }
    let sum = upper
        .chars()
        .map(|c| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => 0,
        })
        .sum();
    Some(sum)
}
