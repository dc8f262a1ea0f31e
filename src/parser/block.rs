//! Blocks: the parsed form of one line's functional text.

use std::collections::BTreeMap;
use std::fmt;

use crate::commands::{words_to_commands, Command};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::parser::word::{words_from_text, Word};

/// One line's words, the commands classified out of them, and any leftover
/// parameter words that had no command head on this line ("modal
/// parameters", resolved later against the machine's motion mode).
///
/// Construction fails — producing no partial block — when a word is
/// malformed, a command head repeats, or two commands share a modal group.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    text: String,
    words: Vec<Word>,
    commands: Vec<Command>,
    modal_params: Vec<Word>,
}

impl Block {
    /// Parse a line's functional text (comments already removed).
    pub fn from_text(text: &str, dialect: &Dialect) -> Result<Self> {
        // collapse whitespace runs, strip padding
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let words = words_from_text(dialect, &cleaned)?;
        let (commands, modal_params) = words_to_commands(&words)?;
        let block = Self {
            text: cleaned,
            words,
            commands,
            modal_params,
        };
        block.verify()?;
        Ok(block)
    }

    /// Parse-level conflict checks, independent of any machine.
    fn verify(&self) -> Result<()> {
        let mut heads: Vec<&Word> = Vec::new();
        let mut groups: BTreeMap<u16, &Word> = BTreeMap::new();
        for command in &self.commands {
            let word = command.word();
            if heads.contains(&word) {
                return Err(Error::DuplicateCommandWord(word.clone()));
            }
            heads.push(word);

            if let Some(group) = command.modal_group() {
                if let Some(previous) = groups.insert(group, word) {
                    return Err(Error::ModalGroupCollision {
                        group,
                        a: previous.clone(),
                        b: word.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// The cleaned source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn modal_params(&self) -> &[Word] {
        &self.modal_params
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Canonical rendering: commands in original parse order, then leftover
    /// words, space-joined.
    pub fn to_text(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_string())
            .chain(self.modal_params.iter().map(|w| w.to_string()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect;

    fn block(text: &str) -> Block {
        Block::from_text(text, &dialect::linuxcnc()).expect("valid block")
    }

    #[test]
    fn commands_and_leftovers() {
        let b = block("G1 X1 Y2 G90");
        assert_eq!(b.commands().len(), 2);
        assert!(b.modal_params().is_empty());

        let b = block("X1 Y2");
        assert!(b.commands().is_empty());
        assert_eq!(b.modal_params().len(), 2);
    }

    #[test]
    fn whitespace_is_collapsed() {
        let b = block("  G1   X1\tY2 ");
        assert_eq!(b.text(), "G1 X1 Y2");
    }

    #[test]
    fn empty_line_gives_empty_block() {
        assert!(block("   ").is_empty());
    }

    #[test]
    fn duplicate_head_is_rejected() {
        let err = Block::from_text("M5 M5", &dialect::linuxcnc()).unwrap_err();
        assert!(matches!(err, Error::DuplicateCommandWord(_)));
    }

    #[test]
    fn modal_group_collision_is_rejected() {
        // G0 and G1 both belong to the motion group
        let err = Block::from_text("G0 G1", &dialect::linuxcnc()).unwrap_err();
        assert!(matches!(
            err,
            Error::ModalGroupCollision { group: 1, .. }
        ));

        // G20/G21 (units) conflict too
        let err = Block::from_text("G20 G21", &dialect::linuxcnc()).unwrap_err();
        assert!(matches!(err, Error::ModalGroupCollision { .. }));
    }

    #[test]
    fn to_text_renders_commands_then_leftovers() {
        assert_eq!(block("g1 y2 x1 f100").to_text(), "G01 X1 Y2 F100");
        assert_eq!(block("x1 y2").to_text(), "X1 Y2");
    }
}
