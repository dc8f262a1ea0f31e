//! Dialect schema types.
//!
//! A dialect is the table that gives every address letter its value grammar,
//! its canonical render form and a description. Dialects are defined in TOML
//! files (mirroring the structure below) and compiled into a runtime form
//! with ready-to-use regexes. Swapping the dialect changes the accepted
//! syntax without touching the tokenizer or the classifier.

use std::collections::HashMap;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::parser::word::{Value, Word};

/// Root dialect file structure (matches TOML).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DialectFile {
    pub dialect: DialectMeta,
    #[serde(default)]
    pub behavior: Behavior,
    pub words: Vec<WordDef>,
}

/// Dialect metadata.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DialectMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Startup block installed into a fresh machine's mode, e.g.
    /// `"G0 G17 G90 ..."`. Configuration, not behavior; machine profiles may
    /// override it.
    #[serde(default)]
    pub default_mode: String,
}

/// Dialect-level behavior switches.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct Behavior {
    /// Whether the canned-cycle repeat count (`L`) persists into modal state.
    #[serde(default)]
    pub persist_canned_cycle_repeats: bool,
}

/// One letter's definition in a dialect file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WordDef {
    pub letter: char,
    pub value: ValueKind,
    /// Render rule; defaults to the natural one for the value kind.
    pub format: Option<Format>,
    /// Optional regex overriding the value kind's default grammar. Must be
    /// anchored to match at the start of the remaining text.
    pub pattern: Option<String>,
    pub description: String,
}

/// Value grammars a letter can use.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Signed decimal, e.g. `X-1.5`, `F100`.
    Number,
    /// Positive integer, e.g. `N120`, `L3`.
    Integer,
    /// Command code: positive, at most one decimal digit, e.g. `G38.2`.
    Code,
    /// Free text running to the end of the line, e.g. `O` program names.
    Text,
}

impl ValueKind {
    fn default_pattern(self) -> &'static str {
        match self {
            ValueKind::Number => r"^\s*-?(\d+\.?\d*|\.\d+)",
            ValueKind::Integer => r"^\s*\d+",
            ValueKind::Code => r"^\s*\d+(\.\d)?",
            ValueKind::Text => r"^.+",
        }
    }

    fn default_format(self) -> Format {
        match self {
            ValueKind::Number => Format::Number,
            ValueKind::Integer => Format::Integer,
            ValueKind::Code => Format::Code,
            ValueKind::Text => Format::Raw,
        }
    }

    fn value_from(self, text: &str) -> Option<Value> {
        let t = text.trim();
        match self {
            ValueKind::Number | ValueKind::Code => {
                if t.contains('.') {
                    t.parse::<f64>().ok().map(Value::Number)
                } else {
                    t.parse::<i64>().ok().map(Value::Integer)
                }
            }
            ValueKind::Integer => t.parse::<i64>().ok().map(Value::Integer),
            ValueKind::Text => Some(Value::Text(t.to_string())),
        }
    }
}

/// Canonical render rule for a word's value.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Shortest decimal, rounded to 3 places; integral floats keep a
    /// trailing dot (`10.`), source integers render bare (`100`).
    Number,
    /// Integer codes zero-padded to two digits (`G00`, `M09`); dotted codes
    /// render as-is (`G38.2`).
    Code,
    /// Plain integer.
    Integer,
    /// The value text untouched.
    Raw,
}

impl Format {
    pub fn render(self, value: &Value) -> String {
        match (self, value) {
            (Format::Number, Value::Integer(i)) => i.to_string(),
            (Format::Number, Value::Number(n)) => {
                let rounded = (n * 1000.0).round() / 1000.0;
                let mut s = rounded.to_string();
                if !s.contains('.') {
                    s.push('.');
                }
                s
            }
            (Format::Code, Value::Integer(i)) => format!("{i:02}"),
            (Format::Integer, Value::Integer(i)) => i.to_string(),
            (_, v) => v.to_string(),
        }
    }
}

/// One letter's compiled definition.
#[derive(Debug, Clone)]
pub struct WordSpec {
    letter: char,
    kind: ValueKind,
    pattern: Regex,
    format: Format,
    description: String,
}

impl WordSpec {
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Match this letter's value grammar at the start of `text`, returning
    /// the typed value and the number of bytes consumed.
    pub fn match_value_prefix(&self, text: &str) -> Option<(Value, usize)> {
        let m = self.pattern.find(text)?;
        if m.start() != 0 {
            return None;
        }
        let value = self.kind.value_from(m.as_str())?;
        Some((value, m.end()))
    }

    /// Parse a complete value string; rejects partial matches.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        match self.match_value_prefix(text) {
            Some((value, len)) if text[len..].trim().is_empty() => Ok(value),
            _ => Err(Error::WordValue {
                letter: self.letter,
                remainder: text.to_string(),
            }),
        }
    }
}

/// Runtime dialect, optimized for the tokenizer's scan loop.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub behavior: Behavior,
    default_mode: String,
    words: HashMap<char, WordSpec>,
    letter_scan: Regex,
}

impl Dialect {
    pub fn word_spec(&self, letter: char) -> Option<&WordSpec> {
        self.words.get(&letter.to_ascii_uppercase())
    }

    /// All letters the dialect defines, in alphabetical order.
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.words.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// The startup block text installed into a fresh machine's mode.
    pub fn default_mode(&self) -> &str {
        &self.default_mode
    }

    /// Locate the next known address letter in `text`, case-insensitively.
    /// Returns the letter (upper-cased) and the byte offset just past it.
    /// Anything before the letter is skipped.
    pub(crate) fn next_letter(&self, text: &str) -> Option<(char, usize)> {
        let caps = self.letter_scan.captures(text)?;
        let m = caps.name("letter")?;
        let letter = m.as_str().chars().next()?.to_ascii_uppercase();
        Some((letter, m.end()))
    }

    /// Build a word from a letter and its value text, validating the value
    /// against the letter's grammar.
    pub fn make_word(&self, letter: char, value_text: &str) -> Result<Word> {
        let letter = letter.to_ascii_uppercase();
        let spec = self
            .word_spec(letter)
            .ok_or(Error::UnknownLetter(letter))?;
        let value = spec.parse_value(value_text)?;
        Ok(Word::new(letter, value, spec.format()))
    }
}

impl TryFrom<DialectFile> for Dialect {
    type Error = Error;

    fn try_from(file: DialectFile) -> Result<Self> {
        let mut words = HashMap::new();
        for def in file.words {
            let letter = def.letter.to_ascii_uppercase();
            let pattern = match &def.pattern {
                Some(p) => Regex::new(p)?,
                None => Regex::new(def.value.default_pattern())?,
            };
            words.insert(
                letter,
                WordSpec {
                    letter,
                    kind: def.value,
                    pattern,
                    format: def.format.unwrap_or_else(|| def.value.default_format()),
                    description: def.description,
                },
            );
        }

        let mut letters: Vec<char> = words.keys().copied().collect();
        letters.sort_unstable();
        let class: String = letters.iter().collect();
        let letter_scan = Regex::new(&format!(r"(?i)^.*?(?P<letter>[{class}])"))?;

        Ok(Self {
            name: file.dialect.name,
            version: file.dialect.version,
            description: file.dialect.description,
            behavior: file.behavior,
            default_mode: file.dialect.default_mode,
            words,
            letter_scan,
        })
    }
}

/// Parse a dialect from TOML text and compile it.
pub fn dialect_from_toml(text: &str) -> Result<Dialect> {
    let file: DialectFile = toml::from_str(text)?;
    Dialect::try_from(file)
}
