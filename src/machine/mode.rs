//! Modal state: which command of each modal group is currently active.
//!
//! A command with a modal group stays in force until another member of the
//! same group replaces it (`G20` holds until a `G21` shows up). The machine's
//! mode is one slot per group, filled with the modal copy of the last command
//! seen for that group.

use std::collections::BTreeMap;
use std::fmt;

use crate::commands::{modal_group, sort_by_rank, Command, Effect};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::parser::Block;

#[derive(Debug, Clone, PartialEq)]
pub struct Mode {
    groups: BTreeMap<u16, Command>,
    retain_cycle_repeats: bool,
}

impl Mode {
    /// A mode with no active command in any group.
    pub fn empty() -> Self {
        Self {
            groups: BTreeMap::new(),
            retain_cycle_repeats: false,
        }
    }

    /// Mode initialized from the dialect's default-mode block(s).
    pub fn with_defaults(dialect: &Dialect) -> Result<Self> {
        let mut mode = Self::empty();
        mode.retain_cycle_repeats = dialect.behavior.persist_canned_cycle_repeats;
        let mut commands = Vec::new();
        for line in dialect.default_mode().lines() {
            let block = Block::from_text(line, dialect)?;
            commands.extend_from_slice(block.commands());
        }
        mode.set_mode(commands);
        Ok(mode)
    }

    /// Merge commands into the mode, in execution-rank order. Each command
    /// with a modal group replaces that group's slot with its modal copy.
    /// Returns the slots that changed.
    pub fn set_mode(&mut self, mut commands: Vec<Command>) -> BTreeMap<u16, Command> {
        sort_by_rank(&mut commands);
        let mut changed = BTreeMap::new();
        for command in &commands {
            let Some(group) = command.modal_group() else {
                continue;
            };
            let copy = if self.retain_cycle_repeats
                && command.kind().effect == Effect::CannedCycle
            {
                command.modal_copy_retaining("L")
            } else {
                command.modal_copy()
            };
            self.groups.insert(group, copy.clone());
            changed.insert(group, copy);
        }
        changed
    }

    /// Set one group's slot directly. The command must belong to that group.
    pub fn set_group(&mut self, group: u16, command: &Command) -> Result<()> {
        if command.modal_group() != Some(group) {
            return Err(Error::ModalGroupMismatch {
                group,
                word: command.word().clone(),
            });
        }
        self.groups.insert(group, command.modal_copy());
        Ok(())
    }

    /// Clear a group's slot (e.g. G80 revoking the motion mode). Returns the
    /// command that was active, if any.
    pub fn clear_group(&mut self, group: u16) -> Option<Command> {
        self.groups.remove(&group)
    }

    pub fn get(&self, group: u16) -> Option<&Command> {
        self.groups.get(&group)
    }

    pub fn motion(&self) -> Option<&Command> {
        self.get(modal_group::MOTION)
    }

    pub fn distance(&self) -> Option<&Command> {
        self.get(modal_group::DISTANCE)
    }

    pub fn units(&self) -> Option<&Command> {
        self.get(modal_group::UNITS)
    }

    pub fn plane_selection(&self) -> Option<&Command> {
        self.get(modal_group::PLANE_SELECTION)
    }

    pub fn coordinate_system(&self) -> Option<&Command> {
        self.get(modal_group::COORDINATE_SYSTEM)
    }

    pub fn canned_return(&self) -> Option<&Command> {
        self.get(modal_group::CANNED_CYCLES_RETURN)
    }

    /// True when the active distance mode interprets coordinates as
    /// increments from the current position.
    pub fn is_incremental(&self) -> bool {
        matches!(
            self.distance().map(|c| c.kind().effect),
            Some(Effect::DistanceMode { incremental: true })
        )
    }

    /// The active commands, ordered by modal group id.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.groups.values()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for command in self.commands() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{command}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect;
    use crate::parser::parse_block;

    fn commands(text: &str) -> Vec<Command> {
        parse_block(text, &dialect::linuxcnc())
            .expect("valid block")
            .commands()
            .to_vec()
    }

    #[test]
    fn default_mode_fills_the_expected_groups() {
        let mode = Mode::with_defaults(&dialect::linuxcnc()).unwrap();
        assert_eq!(mode.commands().count(), 16);
        assert_eq!(mode.motion().unwrap().word().to_string(), "G00");
        assert_eq!(mode.units().unwrap().word().to_string(), "G21");
        assert!(!mode.is_incremental());
    }

    #[test]
    fn set_mode_replaces_only_matching_groups() {
        let mut mode = Mode::with_defaults(&dialect::linuxcnc()).unwrap();
        let changed = mode.set_mode(commands("G91 G1 X1"));

        assert_eq!(changed.len(), 2);
        assert!(changed.contains_key(&modal_group::DISTANCE));
        assert!(changed.contains_key(&modal_group::MOTION));
        assert!(mode.is_incremental());
        assert_eq!(mode.motion().unwrap().word().to_string(), "G01");
        // modal copy dropped the X parameter
        assert!(mode.motion().unwrap().params().is_empty());
        // untouched groups keep their defaults
        assert_eq!(mode.units().unwrap().word().to_string(), "G21");
    }

    #[test]
    fn non_modal_commands_do_not_enter_the_mode() {
        let mut mode = Mode::empty();
        let changed = mode.set_mode(commands("G4 P2"));
        assert!(changed.is_empty());
        assert_eq!(mode.commands().count(), 0);
    }

    #[test]
    fn set_group_rejects_wrong_group() {
        let mut mode = Mode::empty();
        let g1 = &commands("G1")[0];
        assert!(mode.set_group(modal_group::MOTION, g1).is_ok());
        assert!(matches!(
            mode.set_group(modal_group::UNITS, g1),
            Err(Error::ModalGroupMismatch { .. })
        ));
    }

    #[test]
    fn clearing_a_group_removes_the_slot() {
        let mut mode = Mode::with_defaults(&dialect::linuxcnc()).unwrap();
        assert!(mode.clear_group(modal_group::MOTION).is_some());
        assert!(mode.motion().is_none());
    }

    #[test]
    fn canned_cycle_retains_its_modal_parameter_subset() {
        let mut mode = Mode::empty();
        mode.set_mode(commands("G81 X5 R2 L3"));
        let motion = mode.motion().unwrap();
        assert!(motion.get('X').is_some());
        assert!(motion.get('R').is_some());
        assert!(motion.get('L').is_none());
    }

    #[test]
    fn repeat_count_persists_when_the_dialect_opts_in() {
        let mut dialect = dialect::linuxcnc();
        dialect.behavior.persist_canned_cycle_repeats = true;
        let mut mode = Mode::with_defaults(&dialect).unwrap();
        mode.set_mode(commands("G81 X5 R2 L3"));
        assert!(mode.motion().unwrap().get('L').is_some());
    }

    #[test]
    fn display_renders_the_active_block() {
        let mode = Mode::with_defaults(&dialect::linuxcnc()).unwrap();
        let rendered = mode.to_string();
        assert!(rendered.contains("G00"));
        assert!(rendered.contains("G21"));
        assert!(rendered.contains("T0"));
    }
}
