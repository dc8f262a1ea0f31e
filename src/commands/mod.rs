//! Commands: the taxonomy, the word classifier, and command utilities.

pub mod command;
pub mod kinds;
pub mod registry;

pub use command::Command;
pub use kinds::{CommandKind, Effect, Head, KINDS};
pub use registry::{init, kind_for_word};

use crate::error::Result;
use crate::parser::word::Word;

/// Modal group identifiers.
///
/// G-code groups follow the LinuxCNC numbering (1-15), M-code groups are
/// offset by 100, and F/S/T get synthetic single-member groups above 200 so
/// they participate in conflict checking and modal memory like everything
/// else.
pub mod modal_group {
    pub const MOTION: u16 = 1;
    pub const PLANE_SELECTION: u16 = 2;
    pub const DISTANCE: u16 = 3;
    pub const ARC_IJK_DISTANCE: u16 = 4;
    pub const FEED_RATE_MODE: u16 = 5;
    pub const UNITS: u16 = 6;
    pub const CUTTER_DIAMETER_COMP: u16 = 7;
    pub const TOOL_LENGTH_OFFSET: u16 = 8;
    pub const CANNED_CYCLES_RETURN: u16 = 10;
    pub const COORDINATE_SYSTEM: u16 = 12;
    pub const CONTROL_MODE: u16 = 13;
    pub const SPINDLE_SPEED_MODE: u16 = 14;
    pub const LATHE_DIAMETER: u16 = 15;

    pub const STOPPING: u16 = 104;
    pub const SPINDLE: u16 = 107;
    pub const COOLANT: u16 = 108;
    pub const OVERRIDE_SWITCHES: u16 = 109;
    pub const USER_DEFINED: u16 = 110;

    pub const FEED_RATE: u16 = 201;
    pub const SPINDLE_SPEED: u16 = 202;
    pub const TOOL: u16 = 203;
}

/// Group a word sequence into commands plus leftover parameter words.
///
/// The driving invariant: *words are parameters before they are commands*.
/// A word that could start a command is still swallowed as a parameter when
/// a preceding command candidate accepts its letter ("S1000" stands alone,
/// but "G96 S1000" binds the S to G96). Resolution:
///
/// 1. Every word gets its candidate kind from the registry, or none.
/// 2. Scanning candidates left to right, each claims every later word whose
///    letter it accepts; a claimed word loses any candidate status of its
///    own, and a later candidate's claim overrides an earlier one, so a word
///    always belongs to the nearest preceding candidate that accepts it.
/// 3. Surviving candidates become commands with their claimed words as
///    parameters, in original order; words claimed by nobody are returned as
///    leftovers (modal parameters for the orchestrator to resolve).
pub fn words_to_commands(words: &[Word]) -> Result<(Vec<Command>, Vec<Word>)> {
    let mut candidate: Vec<Option<&'static CommandKind>> =
        words.iter().map(|w| kind_for_word(w, false)).collect();
    let mut claimed_by: Vec<Option<usize>> = vec![None; words.len()];

    for index in 0..words.len() {
        let Some(kind) = candidate[index] else {
            continue;
        };
        for later in (index + 1)..words.len() {
            if kind.accepts(words[later].letter()) {
                claimed_by[later] = Some(index);
                candidate[later] = None;
            }
        }
    }

    let mut commands = Vec::new();
    let mut leftovers = Vec::new();
    for index in 0..words.len() {
        if let Some(kind) = candidate[index] {
            let mut command = Command::new(words[index].clone(), kind);
            for later in (index + 1)..words.len() {
                if candidate[later].is_none() && claimed_by[later] == Some(index) {
                    command.add_parameter(words[later].clone())?;
                }
            }
            commands.push(command);
        } else if claimed_by[index].is_none() {
            leftovers.push(words[index].clone());
        }
    }
    Ok((commands, leftovers))
}

/// Order commands by execution rank; rank ties break by head word, a total
/// order independent of textual position.
pub fn sort_by_rank(commands: &mut [Command]) {
    commands.sort_by(|a, b| a.rank().cmp(&b.rank()).then_with(|| a.word().cmp(b.word())));
}

/// Partition a command list around the first command matching `predicate`,
/// after sorting by execution rank: (commands ranked before it, the match,
/// commands ranked after it). With no match, everything lands in the first
/// list.
pub fn split_commands(
    commands: &[Command],
    predicate: impl Fn(&Command) -> bool,
) -> (Vec<Command>, Option<Command>, Vec<Command>) {
    let mut sorted = commands.to_vec();
    sort_by_rank(&mut sorted);
    match sorted.iter().position(|cmd| predicate(cmd)) {
        Some(at) => {
            let after = sorted.split_off(at + 1);
            let matched = sorted.pop();
            (sorted, matched, after)
        }
        None => (sorted, None, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect;
    use crate::parser::word::words_from_text;

    fn classify(text: &str) -> (Vec<Command>, Vec<Word>) {
        let words = words_from_text(&dialect::linuxcnc(), text).expect("valid words");
        words_to_commands(&words).expect("classifiable")
    }

    #[test]
    fn commands_claim_their_parameters() {
        let (commands, leftovers) = classify("G1 X1 Y2 G90");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].to_string(), "G01 X1 Y2");
        assert_eq!(commands[1].to_string(), "G90");
        assert!(leftovers.is_empty());
    }

    #[test]
    fn bare_parameters_become_leftovers() {
        let (commands, leftovers) = classify("X1 Y2");
        assert!(commands.is_empty());
        assert_eq!(leftovers.len(), 2);
    }

    #[test]
    fn parameters_before_commands() {
        // S1000 alone is a command ...
        let (commands, _) = classify("S1000");
        assert_eq!(commands[0].kind().name, "SpindleSpeed");

        // ... but bound to G96 when it accepts the letter
        let (commands, leftovers) = classify("G96 S1000");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].kind().name, "SpindleConstantSurfaceSpeedMode");
        assert!(commands[0].get('S').is_some());
        assert!(leftovers.is_empty());
    }

    #[test]
    fn spindle_start_does_not_swallow_speed() {
        // M3 accepts no S parameter, so S2000 stays its own command
        let (commands, _) = classify("M3 S2000");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].kind().name, "StartSpindleCW");
        assert_eq!(commands[1].kind().name, "SpindleSpeed");
    }

    #[test]
    fn nearest_preceding_candidate_wins() {
        // both G1 and G2 accept X; each X binds to the closest head before it
        let (commands, leftovers) = classify("G1 X1 G2 X2 I0.5 J0.5");
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].to_string(), "G01 X1");
        assert_eq!(commands[1].to_string(), "G02 I0.5 J0.5 X2");
        assert!(leftovers.is_empty());
    }

    #[test]
    fn tool_change_swallows_tool_word() {
        let (commands, _) = classify("M6 T1");
        assert_eq!(commands.len(), 1);
        assert!(commands[0].get('T').is_some());

        let (commands, _) = classify("T1 M6");
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn every_word_lands_exactly_once() {
        for text in ["G1 X1 Y2 G90", "X1 Y2", "M3 S2000", "G91 S1000 G1 X1 Y2 M3", "N10 G0 X0"] {
            let words = words_from_text(&dialect::linuxcnc(), text).unwrap();
            let (commands, leftovers) = words_to_commands(&words).unwrap();
            let total: usize = commands
                .iter()
                .map(|c| 1 + c.params().len())
                .sum::<usize>()
                + leftovers.len();
            assert_eq!(total, words.len(), "words dropped or duplicated in {text:?}");
        }
    }

    #[test]
    fn duplicate_parameter_letter_fails() {
        let words = words_from_text(&dialect::linuxcnc(), "G1 X1 X2").unwrap();
        assert!(words_to_commands(&words).is_err());
    }

    #[test]
    fn split_partitions_around_rank_order() {
        let (commands, _) = classify("G91 S1000 G1 X1 Y2 M3");
        let (before, matched, after) =
            split_commands(&commands, |cmd| cmd.modal_group() == Some(modal_group::SPINDLE));

        let render = |cmds: &[Command]| {
            cmds.iter().map(|c| c.word().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(render(&before), vec!["G91", "S1000"]);
        assert_eq!(matched.unwrap().word().to_string(), "M03");
        assert_eq!(render(&after), vec!["G01"]);
    }

    #[test]
    fn split_without_match_keeps_everything_before() {
        let (commands, _) = classify("G1 X1 G90");
        let (before, matched, after) = split_commands(&commands, |_| false);
        assert_eq!(before.len(), 2);
        assert!(matched.is_none());
        assert!(after.is_empty());
    }
}
