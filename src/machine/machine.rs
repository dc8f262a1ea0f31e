//! The orchestrator: applies a block's commands to mode and position.

use std::collections::BTreeMap;

use super::mode::Mode;
use super::position::{Position, Unit};
use super::state::State;
use crate::commands::{modal_group, sort_by_rank, words_to_commands, Command, Effect};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::parser::word::{Value, Word};
use crate::parser::Block;

/// A virtual machine tracking mode, offsets and position across blocks.
///
/// Instances are fully independent; one per thread needs no synchronization.
#[derive(Debug, Clone)]
pub struct Machine {
    dialect: Dialect,
    axes: String,
    mode: Mode,
    state: State,
    abs_pos: Position,
    range_min: Position,
    range_max: Position,
}

impl Machine {
    /// Machine with the default X/Y/Z axis set.
    pub fn new(dialect: Dialect) -> Result<Self> {
        Self::with_axes(dialect, "XYZ")
    }

    pub fn with_axes(dialect: Dialect, axes: &str) -> Result<Self> {
        let mode = Mode::with_defaults(&dialect)?;
        let unit = match mode.units().map(|c| c.kind().effect) {
            Some(Effect::SetUnits { unit }) => unit,
            _ => Unit::Millimeters,
        };
        let axes: String = axes.chars().map(|c| c.to_ascii_uppercase()).collect();
        let abs_pos = Position::zero(&axes, unit)?;
        Ok(Self {
            state: State::new(&axes, unit)?,
            range_min: abs_pos.clone(),
            range_max: abs_pos.clone(),
            abs_pos,
            mode,
            dialect,
            axes,
        })
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn axes(&self) -> &str {
        &self.axes
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mutable state access, e.g. for loading coordinate-system offsets from
    /// a machine profile.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Position in machine coordinates.
    pub fn absolute_position(&self) -> &Position {
        &self.abs_pos
    }

    /// Position in the current work coordinate system.
    pub fn position(&self) -> Result<Position> {
        self.state.work_position(&self.abs_pos)
    }

    /// Bounding corners of every absolute position visited so far.
    pub fn absolute_range(&self) -> (&Position, &Position) {
        (&self.range_min, &self.range_max)
    }

    /// Parse one line's functional text and process the resulting block.
    pub fn process_text(&mut self, text: &str) -> Result<()> {
        let block = Block::from_text(text, &self.dialect)?;
        self.process_block(&block)
    }

    /// Apply a block: resolve leftover modal parameters against the active
    /// motion mode, then apply all commands in execution-rank order.
    pub fn process_block(&mut self, block: &Block) -> Result<()> {
        let mut commands = block.commands().to_vec();
        if let Some(modal) = self.modal_command(block.modal_params())? {
            commands.push(modal);
        }
        sort_by_rank(&mut commands);
        log::trace!("applying block: {}", block.to_text());
        for command in &commands {
            self.set_mode(vec![command.clone()])?;
            self.apply(command)?;
        }
        Ok(())
    }

    /// Merge commands into the mode and react to mode changes that carry
    /// state (coordinate-system selection).
    pub fn set_mode(&mut self, commands: Vec<Command>) -> Result<BTreeMap<u16, Command>> {
        let changed = self.mode.set_mode(commands);
        if let Some(selection) = self.mode.coordinate_system() {
            if let Effect::SelectCoordSystem { id } = selection.kind().effect {
                self.state.select(id)?;
            }
        }
        Ok(changed)
    }

    /// Synthesize the command implied by leftover parameter words: the active
    /// motion command re-issued with its retained parameters overridden by
    /// the leftovers.
    fn modal_command(&self, modal_params: &[Word]) -> Result<Option<Command>> {
        if modal_params.is_empty() {
            return Ok(None);
        }
        let Some(motion) = self.mode.motion() else {
            return Err(Error::NoMotionMode(modal_params.to_vec()));
        };

        let mut merged: BTreeMap<char, Word> = motion.params().clone();
        for word in modal_params {
            merged.insert(word.letter(), word.clone());
        }
        let mut words = Vec::with_capacity(merged.len() + 1);
        words.push(motion.word().clone());
        words.extend(merged.into_values());

        let (mut commands, unassigned) = words_to_commands(&words)?;
        if !unassigned.is_empty() {
            // G/M leftovers are probably valid but unsupported codes; anything
            // else is a misplaced motion parameter
            let plausible_codes = unassigned.iter().any(|w| matches!(w.letter(), 'G' | 'M'));
            return Err(if plausible_codes {
                Error::UnsupportedCodes(unassigned)
            } else {
                Error::UnassignedModalParams(unassigned)
            });
        }
        if commands.len() > 1 {
            let extra = commands.iter().skip(1).map(|c| c.word().clone()).collect();
            return Err(Error::UnsupportedCodes(extra));
        }
        Ok(commands.pop())
    }

    fn apply(&mut self, command: &Command) -> Result<()> {
        match command.kind().effect {
            Effect::Move | Effect::RapidMove => {
                let coords = command.numeric_params(&self.axes);
                self.move_to(&coords)
            }
            Effect::CannedCycle => self.canned_cycle(command),
            Effect::CancelCannedCycle => {
                self.mode.clear_group(modal_group::MOTION);
                Ok(())
            }
            Effect::SetOffset => self.set_temporary_offset(command),
            Effect::ClearOffset => {
                // G92.2 keeps the saved copy for a later G92.3; G92.1 erases it
                let erase_saved = command.word().value() != &Value::Number(92.2);
                self.state.clear_offset(erase_saved);
                Ok(())
            }
            Effect::RestoreOffset => {
                self.state.restore_offset();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Move the work position to the given coordinates, interpreted per the
    /// active distance mode: absolute updates only the named axes,
    /// incremental adds to the current position.
    fn move_to(&mut self, coords: &BTreeMap<char, f64>) -> Result<()> {
        let work = if self.mode.is_incremental() {
            let mut delta = Position::zero(&self.axes, self.abs_pos.unit())?;
            delta.update(coords)?;
            self.position()?.try_add(&delta)?
        } else {
            let mut work = self.position()?;
            work.update(coords)?;
            work
        };
        self.set_work_position(work)
    }

    fn set_work_position(&mut self, work: Position) -> Result<()> {
        self.abs_pos = self.state.absolute_position(&work)?;
        self.range_min = Position::min(&self.range_min, &self.abs_pos)?;
        self.range_max = Position::max(&self.range_max, &self.abs_pos)?;
        Ok(())
    }

    fn canned_cycle(&mut self, command: &Command) -> Result<()> {
        let mut coords = command.numeric_params(&self.axes);

        let normal_axis = self.mode.plane_selection().and_then(|c| match c.kind().effect {
            Effect::SelectPlane { normal_axis } => normal_axis,
            _ => None,
        });
        let return_to_r = matches!(
            self.mode.canned_return().map(|c| c.kind().effect),
            Some(Effect::CannedReturnMode { to_r: true })
        );

        if return_to_r {
            // retract along the plane's normal axis to the R level
            let axis = normal_axis.ok_or(Error::PlaneWithoutNormal)?;
            match command.value('R').and_then(Value::as_f64) {
                Some(r) => {
                    coords.insert(axis, r);
                }
                None => {
                    coords.remove(&axis);
                }
            }
        } else if let Some(axis) = normal_axis {
            // return to previous level: no motion along the normal axis
            coords.remove(&axis);
        }

        let repeats = command
            .value('L')
            .and_then(Value::as_i64)
            .filter(|count| *count > 0)
            .unwrap_or(1);
        for _ in 0..repeats {
            self.move_to(&coords)?;
        }
        Ok(())
    }

    /// G92: bias the temporary offset so the current position reads as the
    /// given coordinates.
    fn set_temporary_offset(&mut self, command: &Command) -> Result<()> {
        let work = self.position()?;
        let mut offset = self.state.offset().clone();
        for (axis, target) in command.numeric_params(&self.axes) {
            let current = work.get(axis).unwrap_or(0.0);
            let existing = offset.get(axis).unwrap_or(0.0);
            offset.set(axis, existing + current - target)?;
        }
        self.state.set_offset(offset);
        Ok(())
    }
}
