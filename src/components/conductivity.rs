//! Conductivity classification of graph edges.
//!
//! Every edge of the terminal graph is tagged with how current may cross
//! it:
//!
//! | Edge | Class |
//! |------|-------|
//! | wire | `Zero` |
//! | closed switch | `Zero` |
//! | open switch | `Blocked` |
//! | bulb | `LoadUndirected` |
//! | LED | `LoadDirected` (anode to cathode) |
//!
//! A battery contributes no internal edge: its terminals are the endpoints
//! the solver searches between, not a conductive path.

use serde::Serialize;

use super::ComponentKind;
use crate::circuit::PlacedComponent;

/// How current may cross an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Conductivity {
    /// Zero resistance, both directions
    Zero,
    /// Not traversable
    Blocked,
    /// Load, both directions
    LoadUndirected,
    /// Load, from the first endpoint (anode) to the second (cathode) only
    LoadDirected,
}

impl Conductivity {
    /// Whether the edge carries a load.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::LoadUndirected | Self::LoadDirected)
    }

    /// Whether current may cross from the first endpoint to the second.
    pub fn conducts_forward(&self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Whether current may cross from the second endpoint to the first.
    pub fn conducts_reverse(&self) -> bool {
        matches!(self, Self::Zero | Self::LoadUndirected)
    }
}

/// Classify the internal edge of a component.
///
/// Returns `None` for batteries, which have no internal edge.
pub fn classify(component: &PlacedComponent) -> Option<Conductivity> {
    match component.kind {
        ComponentKind::Battery => None,
        ComponentKind::Bulb => Some(Conductivity::LoadUndirected),
        ComponentKind::Led => Some(Conductivity::LoadDirected),
        ComponentKind::Switch if component.switch_closed => Some(Conductivity::Zero),
        ComponentKind::Switch => Some(Conductivity::Blocked),
    }
}
