//! Short-circuit detection.
//!
//! A battery is shorted when its two terminals are joined by wires and
//! closed switches alone, bypassing every load.

use crate::circuit::{BatteryTerminals, TerminalGraph};

use super::reach::{Adjacency, EdgeFilter};

/// Find the first shorted battery, if any.
pub fn find_short<'g>(graph: &'g TerminalGraph<'_>) -> Option<&'g BatteryTerminals> {
    if graph.batteries.is_empty() {
        return None;
    }

    let zero = Adjacency::new(graph, EdgeFilter::ZeroOnly);
    graph
        .batteries
        .iter()
        .find(|battery| zero.connects(battery.positive, battery.negative))
}
