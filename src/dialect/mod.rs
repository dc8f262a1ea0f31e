//! Dialect tables.
//!
//! The dialect gives each address letter a value grammar, a canonical render
//! form and a description. The parser is parameterized over it.

pub mod registry;
pub mod schema;

pub use registry::{linuxcnc, DialectRegistry};
pub use schema::{Behavior, Dialect, DialectFile, Format, ValueKind, WordSpec};
