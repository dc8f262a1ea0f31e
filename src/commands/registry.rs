//! Word-to-kind lookup.
//!
//! Built once from the static registration table: exact head keys go into a
//! hash map, predicate-matched kinds into a scan list checked afterwards.
//! The build is idempotent and race-free; hosts that want to avoid even the
//! first-use cost can call [`init`] at startup.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::kinds::{CommandKind, Head, KINDS};
use crate::parser::word::Word;

/// Letters that can start a command. Words with any other letter are skipped
/// without consulting the table, unless exhaustive matching is requested.
const CANDIDATE_LETTERS: &str = "GMFSTNO";

struct Lookup {
    by_key: HashMap<&'static str, &'static CommandKind>,
    matchers: Vec<&'static CommandKind>,
}

static LOOKUP: OnceLock<Lookup> = OnceLock::new();

fn lookup() -> &'static Lookup {
    LOOKUP.get_or_init(|| {
        let mut by_key = HashMap::new();
        let mut matchers = Vec::new();
        for kind in KINDS {
            match kind.head {
                Head::Key(key) => {
                    let previous = by_key.insert(key, kind);
                    debug_assert!(previous.is_none(), "duplicate command key {key}");
                }
                Head::Match(_) => matchers.push(kind),
            }
        }
        Lookup { by_key, matchers }
    })
}

/// Build the lookup tables eagerly. Optional: the first classification
/// builds them on demand.
pub fn init() {
    let _ = lookup();
}

/// Map a word to its command kind, if it has one.
///
/// Exact key lookup first, then the predicate list. With `exhaustive` false
/// (the normal case) only `G M F S T N O` words are considered candidates.
pub fn kind_for_word(word: &Word, exhaustive: bool) -> Option<&'static CommandKind> {
    if !exhaustive && !CANDIDATE_LETTERS.contains(word.letter()) {
        return None;
    }
    let lookup = lookup();
    if let Some(kind) = lookup.by_key.get(word.command_key().as_str()) {
        return Some(kind);
    }
    lookup
        .matchers
        .iter()
        .copied()
        .find(|kind| match kind.head {
            Head::Match(predicate) => predicate(word),
            Head::Key(_) => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect;
    use crate::parser::parse_word;

    fn word(text: &str) -> Word {
        parse_word(text, &dialect::linuxcnc()).expect("single word")
    }

    #[test]
    fn exact_key_lookup() {
        assert_eq!(kind_for_word(&word("G0"), false).unwrap().name, "RapidMove");
        assert_eq!(kind_for_word(&word("G00"), false).unwrap().name, "RapidMove");
        assert_eq!(kind_for_word(&word("M30"), false).unwrap().name, "EndProgramPalletShuttle");
        assert_eq!(kind_for_word(&word("G59.1"), false).unwrap().name, "SelectCoordinateSystem7");
    }

    #[test]
    fn predicate_lookup() {
        assert_eq!(kind_for_word(&word("F1500"), false).unwrap().name, "FeedRate");
        assert_eq!(kind_for_word(&word("S200"), false).unwrap().name, "SpindleSpeed");
        assert_eq!(kind_for_word(&word("T2"), false).unwrap().name, "SelectTool");
        assert_eq!(kind_for_word(&word("N100"), false).unwrap().name, "LineNumber");
        assert_eq!(kind_for_word(&word("G38.3"), false).unwrap().name, "StraightProbe");
        assert_eq!(kind_for_word(&word("G30"), false).unwrap().name, "GotoPredefinedPosition");
        assert_eq!(kind_for_word(&word("G92.2"), false).unwrap().name, "ResetCoordSystemOffset");
        assert_eq!(kind_for_word(&word("M150"), false).unwrap().name, "UserDefined");
    }

    #[test]
    fn parameter_letters_are_never_candidates() {
        assert!(kind_for_word(&word("X10"), false).is_none());
        assert!(kind_for_word(&word("X10"), true).is_none());
    }

    #[test]
    fn unknown_codes_have_no_kind() {
        assert!(kind_for_word(&word("G100"), false).is_none());
        assert!(kind_for_word(&word("M300"), false).is_none());
    }
}
