//! Parsing: text → words → classified blocks.

pub mod block;
pub mod word;

pub use block::Block;
pub use word::{words_from_text, Value, Word, WordIter};

use crate::commands::Command;
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// Parse one line's functional text into a block.
pub fn parse_block(text: &str, dialect: &Dialect) -> Result<Block> {
    Block::from_text(text, dialect)
}

/// Parse text that must be fully formed: every word belongs to a command.
/// Leftover parameter words (e.g. a bare `X1 Y2`) are a format error here;
/// use [`parse_block`] when modal parameters are expected.
pub fn parse_commands(text: &str, dialect: &Dialect) -> Result<Vec<Command>> {
    let block = Block::from_text(text, dialect)?;
    if !block.modal_params().is_empty() {
        return Err(Error::UnassignedWords(block.modal_params().to_vec()));
    }
    Ok(block.commands().to_vec())
}

/// Parse text containing exactly one word.
pub fn parse_word(text: &str, dialect: &Dialect) -> Result<Word> {
    let mut words = words_from_text(dialect, text)?;
    if words.len() != 1 {
        return Err(Error::SingleWordExpected {
            text: text.to_string(),
            count: words.len(),
        });
    }
    Ok(words.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect;

    #[test]
    fn parse_commands_requires_fully_formed_text() {
        let d = dialect::linuxcnc();
        assert_eq!(parse_commands("G1 X1 Y2", &d).unwrap().len(), 1);
        assert!(matches!(
            parse_commands("X1 Y2", &d),
            Err(Error::UnassignedWords(_))
        ));
    }

    #[test]
    fn parse_word_wants_exactly_one() {
        let d = dialect::linuxcnc();
        assert_eq!(parse_word("X1.5", &d).unwrap().letter(), 'X');
        assert!(parse_word("X1 Y2", &d).is_err());
        assert!(parse_word("", &d).is_err());
    }
}
