//! Non-modal machine state: work coordinate systems and the temporary offset.
//!
//! Absolute machine position and the "current" (work) position relate
//! through the selected coordinate-system offset plus the temporary offset:
//!
//! ```text
//! work = absolute - selected_offset - temporary_offset
//! absolute = work + temporary_offset + selected_offset
//! ```
//!
//! Both directions are exact inverses given the same offsets.

use super::position::{Position, Unit};
use crate::error::{Error, Result};

/// One of the nine work coordinate slots (G54-G59.3).
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    pub offset: Position,
}

impl CoordinateSystem {
    pub fn new(axes: &str, unit: Unit) -> Result<Self> {
        Ok(Self {
            offset: Position::zero(axes, unit)?,
        })
    }
}

/// State a machine retains outside of modal gcodes: the nine coordinate
/// system slots, which one is selected, and the temporary (G92) offset with
/// its saved copy.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    coord_systems: Vec<CoordinateSystem>,
    selected: u8,
    offset: Position,
    saved_offset: Position,
}

impl State {
    pub fn new(axes: &str, unit: Unit) -> Result<Self> {
        let mut coord_systems = Vec::with_capacity(9);
        for _ in 0..9 {
            coord_systems.push(CoordinateSystem::new(axes, unit)?);
        }
        Ok(Self {
            coord_systems,
            selected: 1, // G54
            offset: Position::zero(axes, unit)?,
            saved_offset: Position::zero(axes, unit)?,
        })
    }

    pub fn selected(&self) -> u8 {
        self.selected
    }

    pub fn select(&mut self, id: u8) -> Result<()> {
        if !(1..=9).contains(&id) {
            return Err(Error::CoordSystemIndex(id));
        }
        self.selected = id;
        Ok(())
    }

    /// The currently selected coordinate system.
    pub fn coord_system(&self) -> &CoordinateSystem {
        &self.coord_systems[(self.selected - 1) as usize]
    }

    pub fn coord_system_mut(&mut self) -> &mut CoordinateSystem {
        &mut self.coord_systems[(self.selected - 1) as usize]
    }

    pub fn coord_system_at(&self, id: u8) -> Option<&CoordinateSystem> {
        (1..=9)
            .contains(&id)
            .then(|| &self.coord_systems[(id - 1) as usize])
    }

    pub fn coord_system_at_mut(&mut self, id: u8) -> Option<&mut CoordinateSystem> {
        (1..=9)
            .contains(&id)
            .then(|| &mut self.coord_systems[(id - 1) as usize])
    }

    /// The temporary (G92) offset.
    pub fn offset(&self) -> &Position {
        &self.offset
    }

    /// Install a new temporary offset; a copy is saved for later restore.
    pub fn set_offset(&mut self, offset: Position) {
        self.saved_offset = offset.clone();
        self.offset = offset;
    }

    /// Zero the active temporary offset; with `erase_saved` the saved copy
    /// goes too, making a later restore a no-op.
    pub fn clear_offset(&mut self, erase_saved: bool) {
        self.offset = self.offset.scale(0.0);
        if erase_saved {
            self.saved_offset = self.saved_offset.scale(0.0);
        }
    }

    /// Reinstate the saved temporary offset.
    pub fn restore_offset(&mut self) {
        self.offset = self.saved_offset.clone();
    }

    /// Work position for an absolute position under the current offsets.
    pub fn work_position(&self, absolute: &Position) -> Result<Position> {
        absolute
            .try_sub(&self.coord_system().offset)?
            .try_sub(&self.offset)
    }

    /// Absolute position for a work position under the current offsets.
    pub fn absolute_position(&self, work: &Position) -> Result<Position> {
        work.try_add(&self.offset)?
            .try_add(&self.coord_system().offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new("XYZ", Unit::Millimeters).unwrap()
    }

    fn pos(x: f64, y: f64, z: f64) -> Position {
        let mut p = Position::zero("XYZ", Unit::Millimeters).unwrap();
        p.set('X', x).unwrap();
        p.set('Y', y).unwrap();
        p.set('Z', z).unwrap();
        p
    }

    #[test]
    fn defaults_to_first_coord_system_with_zero_offsets() {
        let s = state();
        assert_eq!(s.selected(), 1);
        let p = pos(1.0, 2.0, 3.0);
        assert_eq!(s.work_position(&p).unwrap(), p);
        assert_eq!(s.absolute_position(&p).unwrap(), p);
    }

    #[test]
    fn select_bounds() {
        let mut s = state();
        assert!(s.select(9).is_ok());
        assert!(matches!(s.select(0), Err(Error::CoordSystemIndex(0))));
        assert!(matches!(s.select(10), Err(Error::CoordSystemIndex(10))));
    }

    #[test]
    fn work_and_absolute_are_exact_inverses() {
        let mut s = state();
        s.coord_system_at_mut(2).unwrap().offset = pos(100.0, -50.0, 10.0);
        s.select(2).unwrap();
        s.set_offset(pos(1.0, 2.0, 3.0));

        let p = pos(7.0, 8.0, 9.0);
        let there_and_back = s.work_position(&s.absolute_position(&p).unwrap()).unwrap();
        assert_eq!(there_and_back, p);
        let back_and_there = s.absolute_position(&s.work_position(&p).unwrap()).unwrap();
        assert_eq!(back_and_there, p);
    }

    #[test]
    fn offset_clear_and_restore() {
        let mut s = state();
        s.set_offset(pos(5.0, 0.0, 0.0));

        s.clear_offset(false);
        assert_eq!(s.offset(), &pos(0.0, 0.0, 0.0));
        s.restore_offset();
        assert_eq!(s.offset(), &pos(5.0, 0.0, 0.0));

        s.clear_offset(true);
        s.restore_offset();
        assert_eq!(s.offset(), &pos(0.0, 0.0, 0.0));
    }
}
