//! Terminal graph representation and snapshot validation.
//!
//! This module turns the editor's flat snapshot (placed components plus
//! user-drawn wires) into the [`TerminalGraph`] the solver traverses.

mod graph;
mod types;
mod validate;

pub use graph::{BatteryTerminals, Edge, TerminalGraph};
pub use types::*;
pub use validate::{can_connect, validate_components};
