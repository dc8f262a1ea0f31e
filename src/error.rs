//! Error taxonomy for parsing, classification and machine-state tracking.
//!
//! Every variant carries the offending word(s) so callers can produce an
//! actionable message. None of these abort anything beyond the operation in
//! progress; skip-the-line versus abort-the-file is caller policy.

use thiserror::Error;

use crate::parser::word::Word;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // ---- format errors (tokenizer / classifier / block) ----
    /// A recognized address letter was found but no value matched its grammar.
    #[error("word '{letter}' has no valid value in {remainder:?}")]
    WordValue { letter: char, remainder: String },

    /// Non-whitespace text remained after the last word was consumed.
    #[error("unparsed text after last word: {text:?}")]
    TrailingText { text: String },

    /// Expected exactly one word in the given text.
    #[error("expected a single word in {text:?}, found {count}")]
    SingleWordExpected { text: String, count: usize },

    /// A fully-formed command list was requested but some words had no
    /// command head to bind to.
    #[error("text not fully formed, unassigned parameters: {}", words_str(.0))]
    UnassignedWords(Vec<Word>),

    /// The same command head appeared twice in one block.
    #[error("command {0} appears more than once in the same block")]
    DuplicateCommandWord(Word),

    /// Two commands in one block belong to the same modal group.
    #[error("{a} and {b} cannot be in the same block (modal group {group})")]
    ModalGroupCollision { group: u16, a: Word, b: Word },

    // ---- parameter errors ----
    /// The parameter letter is not accepted by the command's kind.
    #[error("invalid parameter for {kind}: {word}")]
    ParameterNotAccepted { kind: &'static str, word: Word },

    /// The same parameter letter was supplied twice to one command.
    #[error("parameter defined twice: {existing} -> {word}")]
    DuplicateParameter { existing: Word, word: Word },

    // ---- invalid-state errors (orchestrator) ----
    /// Leftover modal parameters were given but no motion mode is active.
    #[error("no active motion mode to bind modal parameters: {}", words_str(.0))]
    NoMotionMode(Vec<Word>),

    /// Words on the line look like commands the taxonomy does not support.
    #[error("unsupported gcode(s): {}", words_str(.0))]
    UnsupportedCodes(Vec<Word>),

    /// Modal parameters are not accepted by the active motion kind.
    #[error("modal parameters {} cannot be assigned in the active motion mode", words_str(.0))]
    UnassignedModalParams(Vec<Word>),

    /// A command was assigned to a modal-group slot it does not belong to.
    #[error("cannot set {word} on modal group {group}: wrong group")]
    ModalGroupMismatch { group: u16, word: Word },

    /// A canned cycle needs the active plane's normal axis, but the selected
    /// plane does not define one.
    #[error("active plane defines no normal axis; cannot resolve canned-cycle retract")]
    PlaneWithoutNormal,

    /// A work coordinate system index outside the nine G54-G59.3 slots.
    #[error("coordinate system index {0} out of range (1-9)")]
    CoordSystemIndex(u8),

    // ---- invalid-axis errors ----
    /// Arithmetic between positions with different axis sets.
    #[error("mismatched axes: {left:?} vs {right:?}")]
    AxisMismatch { left: String, right: String },

    /// An axis letter outside the configured axis set.
    #[error("invalid axis '{0}'")]
    InvalidAxis(char),

    // ---- dialect table errors ----
    /// The letter is not present in the dialect's word table.
    #[error("letter '{0}' is not defined by the dialect")]
    UnknownLetter(char),

    /// A dialect definition file failed to parse.
    #[error("dialect file: {0}")]
    DialectParse(#[from] toml::de::Error),

    /// A dialect definition file could not be read.
    #[error(transparent)]
    DialectIo(#[from] std::io::Error),

    /// A word's value pattern failed to compile.
    #[error("bad value pattern: {0}")]
    BadPattern(#[from] regex::Error),

    /// The requested dialect is not registered.
    #[error("unknown dialect '{0}'")]
    UnknownDialect(String),
}

fn words_str(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
