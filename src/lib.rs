//! # Circuit Lab Core
//!
//! The simulation engine behind an interactive circuit editor for
//! learners: batteries, bulbs, switches, and LEDs wired together on a
//! canvas.
//!
//! This library provides:
//! - A terminal-level graph of placed components and user-drawn wires
//! - Qualitative simulation: complete, open, or short-circuited
//! - Which bulbs and LEDs are lit, and which LEDs are wired backwards
//! - A small text format for describing boards (used by the CLI)
//!
//! It does not model voltages, currents, or resistances.
//!
//! ## Architecture
//!
//! - [`circuit`] - Snapshot types and the terminal graph builder
//! - [`components`] - Component kinds, catalog, and edge conductivity
//! - [`solver`] - Short detection, completeness, and illumination
//! - [`dsl`] - Parser for the board description language
//!
//! ## Usage
//!
//! ```
//! use circuitlab_core::{CircuitEngine, Connection, PlacedComponent};
//!
//! let mut engine = CircuitEngine::new();
//! engine.set_components(vec![
//!     PlacedComponent::battery("battery-1"),
//!     PlacedComponent::bulb("bulb-1"),
//! ])?;
//! engine.set_connections(vec![
//!     Connection::new("battery-1-t0", "bulb-1-t0"),
//!     Connection::new("bulb-1-t1", "battery-1-t1"),
//! ]);
//!
//! let result = engine.simulate();
//! assert!(result.is_complete);
//! assert!(result.is_lit("bulb-1"));
//! # Ok::<(), circuitlab_core::CircuitError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! circuitlab board.circuit --format json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitEngine } from 'circuitlab_core';
//!
//! const engine = new WasmCircuitEngine();
//! engine.set_components(JSON.stringify(components));
//! engine.set_connections(JSON.stringify(connections));
//! const result = JSON.parse(engine.simulate());
//! ```
//!
//! ## Simulation Method
//!
//! Every call rebuilds the graph from the current snapshots:
//!
//! 1. Build terminal nodes and edges, dropping malformed wires
//! 2. Classify each edge (wire, closed/open switch, bulb, LED)
//! 3. If a battery's terminals are joined by wires and closed switches
//!    alone, report a short circuit
//! 4. Otherwise find, per battery, which loads lie on a path from `+` to `-`

pub mod circuit;
pub mod components;
pub mod dsl;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Connection, PlacedComponent, TerminalId};
pub use components::ComponentKind;
pub use error::{CircuitError, Result};
pub use solver::{CircuitEngine, OpenReason, SimulationResult};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitEngine;
