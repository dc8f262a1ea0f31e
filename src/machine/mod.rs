//! The machine model: positions, coordinate systems, modal state and the
//! orchestrator that applies parsed blocks to them.

pub mod machine;
pub mod mode;
pub mod position;
pub mod state;

pub use machine::Machine;
pub use mode::Mode;
pub use position::{Position, Unit, POSSIBLE_AXES};
pub use state::{CoordinateSystem, State};
