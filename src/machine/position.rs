//! Axis-keyed positions and length units.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Axis letters a position may carry.
pub const POSSIBLE_AXES: &str = "XYZABCUVW";

/// Length units. Conversion factors are exact reciprocals, so converting
/// back and forth is lossless up to floating rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Millimeters,
    Inches,
}

impl Unit {
    pub fn factor_to(self, other: Unit) -> f64 {
        match (self, other) {
            (Unit::Millimeters, Unit::Inches) => 1.0 / 25.4,
            (Unit::Inches, Unit::Millimeters) => 25.4,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Millimeters => write!(f, "mm"),
            Unit::Inches => write!(f, "in"),
        }
    }
}

/// An axis-keyed numeric vector with a unit tag.
///
/// The axis set is fixed at construction (a subset of `XYZABCUVW`);
/// arithmetic demands identical axis sets on both sides.
#[derive(Debug, Clone)]
pub struct Position {
    values: BTreeMap<char, f64>,
    unit: Unit,
}

impl Position {
    /// All axes at zero.
    pub fn zero(axes: &str, unit: Unit) -> Result<Self> {
        let mut values = BTreeMap::new();
        for axis in axes.chars() {
            let axis = axis.to_ascii_uppercase();
            if !POSSIBLE_AXES.contains(axis) {
                return Err(Error::InvalidAxis(axis));
            }
            values.insert(axis, 0.0);
        }
        Ok(Self { values, unit })
    }

    pub fn axes(&self) -> String {
        self.values.keys().collect()
    }

    pub fn has_axis(&self, axis: char) -> bool {
        self.values.contains_key(&axis.to_ascii_uppercase())
    }

    pub fn get(&self, axis: char) -> Option<f64> {
        self.values.get(&axis.to_ascii_uppercase()).copied()
    }

    /// Set one axis value; the axis must be part of this position's set.
    pub fn set(&mut self, axis: char, value: f64) -> Result<()> {
        let axis = axis.to_ascii_uppercase();
        match self.values.get_mut(&axis) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::InvalidAxis(axis)),
        }
    }

    /// Set only the given axis values, leaving the rest untouched.
    pub fn update(&mut self, coords: &BTreeMap<char, f64>) -> Result<()> {
        for (axis, value) in coords {
            self.set(*axis, *value)?;
        }
        Ok(())
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Rescale every component into `unit`. Destructive and order
    /// independent; converting back restores the original values up to
    /// floating rounding.
    pub fn convert_to(&mut self, unit: Unit) {
        if unit != self.unit {
            let factor = self.unit.factor_to(unit);
            for value in self.values.values_mut() {
                *value *= factor;
            }
            self.unit = unit;
        }
    }

    pub fn to_unit(&self, unit: Unit) -> Position {
        let mut converted = self.clone();
        converted.convert_to(unit);
        converted
    }

    fn check_axes(&self, other: &Position) -> Result<()> {
        if self.axes() != other.axes() {
            return Err(Error::AxisMismatch {
                left: self.axes(),
                right: other.axes(),
            });
        }
        Ok(())
    }

    fn combine(&self, other: &Position, f: impl Fn(f64, f64) -> f64) -> Result<Position> {
        self.check_axes(other)?;
        let other = other.to_unit(self.unit);
        let values = self
            .values
            .iter()
            .map(|(axis, value)| (*axis, f(*value, other.values[axis])))
            .collect();
        Ok(Position {
            values,
            unit: self.unit,
        })
    }

    pub fn try_add(&self, other: &Position) -> Result<Position> {
        self.combine(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Position) -> Result<Position> {
        self.combine(other, |a, b| a - b)
    }

    pub fn scale(&self, factor: f64) -> Position {
        let values = self.values.iter().map(|(axis, v)| (*axis, v * factor)).collect();
        Position {
            values,
            unit: self.unit,
        }
    }

    /// Per-axis minimum of two positions (the result need not equal either).
    pub fn min(a: &Position, b: &Position) -> Result<Position> {
        a.combine(b, f64::min)
    }

    /// Per-axis maximum of two positions.
    pub fn max(a: &Position, b: &Position) -> Result<Position> {
        a.combine(b, f64::max)
    }

    /// Approximate comparison after unit normalization; meant for callers
    /// living with floating rounding (tests, tolerance checks).
    pub fn approx_eq(&self, other: &Position, tolerance: f64) -> bool {
        if self.axes() != other.axes() {
            return false;
        }
        let other = other.to_unit(self.unit);
        self.values
            .iter()
            .all(|(axis, value)| (value - other.values[axis]).abs() <= tolerance)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        if self.axes() != other.axes() {
            return false;
        }
        let other = other.to_unit(self.unit);
        self.values == other.values
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (axis, value) in &self.values {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{axis}{value}")?;
            first = false;
        }
        Ok(())
    }
}
