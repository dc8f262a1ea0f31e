//! Words: the typed (letter, value) pairs a block is made of.
//!
//! The tokenizer scans for the next address letter the dialect knows about,
//! then matches that letter's value grammar immediately after it. The result
//! is a lazy, ordered word sequence, consumed exactly once by the classifier.

use std::cmp::Ordering;
use std::fmt;

use crate::dialect::schema::{Dialect, Format};
use crate::error::{Error, Result};

/// A word's typed value.
///
/// Numeric grammars produce `Integer` when the source text has no decimal
/// point and `Number` otherwise, so `G1` holds `Integer(1)` while `G38.2`
/// holds `Number(38.2)`. `Text` is used by free-text letters such as `O`.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Number(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

// Parsed values never hold NaN; the grammars only admit plain decimals.
impl Eq for Value {}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(t) => write!(f, "{t}"),
        }
    }
}

/// One (letter, value) pair.
///
/// Equality and ordering consider only the letter and the value; the render
/// form is carried along from the dialect so a word can re-serialize itself
/// canonically (`G1` prints as `G01`, `X10.0` as `X10.`).
#[derive(Debug, Clone)]
pub struct Word {
    letter: char,
    value: Value,
    format: Format,
}

impl Word {
    pub(crate) fn new(letter: char, value: Value, format: Format) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            format,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Canonical value text per the dialect's formatting rule.
    pub fn value_str(&self) -> String {
        self.format.render(&self.value)
    }

    /// Lookup key used by the command registry: the letter followed by the
    /// shortest form of the value (`G00` and `G0` share the key `"G0"`).
    pub fn command_key(&self) -> String {
        format!("{}{}", self.letter, self.value)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter && self.value == other.value
    }
}

impl Eq for Word {}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.letter, &self.value).cmp(&(other.letter, &other.value))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.value_str())
    }
}

/// Lazy word tokenizer over one line's functional text (comments removed).
///
/// Yields words left to right. A recognized letter with no matching value, or
/// trailing non-whitespace after the last word, ends the iteration with an
/// error; no further items are produced after that.
pub struct WordIter<'a> {
    dialect: &'a Dialect,
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> WordIter<'a> {
    pub fn new(dialect: &'a Dialect, text: &'a str) -> Self {
        Self {
            dialect,
            text,
            pos: 0,
            done: false,
        }
    }
}

impl Iterator for WordIter<'_> {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let rest = &self.text[self.pos..];
        match self.dialect.next_letter(rest) {
            Some((letter, after_letter)) => {
                self.pos += after_letter;
                let spec = match self.dialect.word_spec(letter) {
                    Some(spec) => spec,
                    None => {
                        self.done = true;
                        return Some(Err(Error::UnknownLetter(letter)));
                    }
                };
                match spec.match_value_prefix(&self.text[self.pos..]) {
                    Some((value, len)) => {
                        self.pos += len;
                        Some(Ok(Word::new(letter, value, spec.format())))
                    }
                    None => {
                        self.done = true;
                        Some(Err(Error::WordValue {
                            letter,
                            remainder: self.text[self.pos..].to_string(),
                        }))
                    }
                }
            }
            None => {
                self.done = true;
                if rest.trim().is_empty() {
                    None
                } else {
                    Some(Err(Error::TrailingText {
                        text: rest.trim().to_string(),
                    }))
                }
            }
        }
    }
}

/// Tokenize a whole line into words, failing on the first malformed word.
pub fn words_from_text(dialect: &Dialect, text: &str) -> Result<Vec<Word>> {
    WordIter::new(dialect, text).collect()
}
