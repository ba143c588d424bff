//! Qualitative circuit solver.
//!
//! This module answers, for one snapshot, whether the circuit is short,
//! complete, or open, and which loads carry current.
//!
//! ## Pipeline
//!
//! Every call runs the same one-way pipeline:
//!
//! ```text
//! snapshot -> TerminalGraph (built + classified)
//!          -> short check            -> ShortDetected
//!          -> completeness/lighting  -> Evaluated
//! ```
//!
//! The short check looks only at zero-resistance edges (wires and closed
//! switches). If any battery's terminals are joined that way the whole
//! result is a short and nothing is lit. Otherwise every battery is
//! evaluated over the usable graph; see [`illuminate`] for the on-path
//! test.

mod illumination;
mod reach;
mod result;
mod short;
mod simulator;

pub use illumination::{diagnose_open, illuminate, Illumination};
pub use reach::{Adjacency, EdgeFilter};
pub use result::{OpenReason, SimulationResult};
pub use short::find_short;
pub use simulator::CircuitEngine;
