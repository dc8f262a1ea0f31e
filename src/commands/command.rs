//! A classified command: a head word bound to its parameters and kind.

use std::collections::BTreeMap;
use std::fmt;

use super::kinds::CommandKind;
use crate::error::{Error, Result};
use crate::parser::word::{Value, Word};

/// One executable unit: the head word (e.g. `G1`), its kind descriptor, and
/// a parameter map keyed by letter (each letter at most once).
///
/// Parameters are looked up explicitly with [`Command::get`] /
/// [`Command::value`]; absence means the parameter is valid for the kind but
/// was not supplied.
#[derive(Debug, Clone)]
pub struct Command {
    word: Word,
    kind: &'static CommandKind,
    params: BTreeMap<char, Word>,
}

impl Command {
    pub fn new(word: Word, kind: &'static CommandKind) -> Self {
        Self {
            word,
            kind,
            params: BTreeMap::new(),
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn kind(&self) -> &'static CommandKind {
        self.kind
    }

    pub fn params(&self) -> &BTreeMap<char, Word> {
        &self.params
    }

    pub fn modal_group(&self) -> Option<u16> {
        self.kind.modal_group
    }

    pub fn rank(&self) -> u16 {
        self.kind.exec_order
    }

    /// Add a parameter word. Fails if the kind does not accept the letter, or
    /// if the letter was already supplied.
    pub fn add_parameter(&mut self, word: Word) -> Result<()> {
        if !self.kind.accepts(word.letter()) {
            return Err(Error::ParameterNotAccepted {
                kind: self.kind.name,
                word,
            });
        }
        if let Some(existing) = self.params.get(&word.letter()) {
            return Err(Error::DuplicateParameter {
                existing: existing.clone(),
                word,
            });
        }
        self.params.insert(word.letter(), word);
        Ok(())
    }

    pub fn get(&self, letter: char) -> Option<&Word> {
        self.params.get(&letter.to_ascii_uppercase())
    }

    pub fn value(&self, letter: char) -> Option<&Value> {
        self.get(letter).map(Word::value)
    }

    /// Numeric parameter values for the given letters, e.g. the axis words a
    /// motion command should move.
    pub fn numeric_params(&self, letters: &str) -> BTreeMap<char, f64> {
        self.params
            .iter()
            .filter(|(letter, _)| letters.contains(**letter))
            .filter_map(|(letter, word)| word.value().as_f64().map(|v| (*letter, v)))
            .collect()
    }

    /// Copy holding only the parameters retained in modal state.
    pub fn modal_copy(&self) -> Command {
        self.modal_copy_retaining("")
    }

    /// Modal copy that additionally retains the given letters (used for
    /// dialect-configurable persistence, e.g. canned-cycle repeat counts).
    pub(crate) fn modal_copy_retaining(&self, extra: &str) -> Command {
        let params = self
            .params
            .iter()
            .filter(|(letter, _)| self.kind.persists(**letter) || extra.contains(**letter))
            .map(|(letter, word)| (*letter, word.clone()))
            .collect();
        Self {
            word: self.word.clone(),
            kind: self.kind,
            params,
        }
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.params == other.params
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        for word in self.params.values() {
            write!(f, " {word}")?;
        }
        Ok(())
    }
}
