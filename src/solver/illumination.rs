//! Completeness and illumination.
//!
//! For each battery with positive terminal `p` and negative terminal `n`,
//! the usable graph (wires, closed switches, bulbs both ways, LEDs anode to
//! cathode) is searched twice per load edge, with that edge removed:
//!
//! ```text
//! forward  = { nodes reachable from p }
//! backward = { nodes that can reach n }
//! ```
//!
//! A load edge `(u, v)` lies on some `p -> n` path iff one endpoint is in
//! `forward` and the other in `backward`. An LED whose endpoints only match
//! the reverse way sits in an otherwise valid loop with the wrong polarity.

use std::collections::BTreeSet;

use crate::circuit::{BatteryTerminals, Edge, EdgeId, TerminalGraph};
use crate::components::{ComponentKind, Conductivity};

use super::reach::{Adjacency, EdgeFilter};
use super::result::OpenReason;

/// Outcome of evaluating every battery of an unshorted graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Illumination {
    /// Some battery has a closed current path
    pub complete: bool,
    pub bulbs_lit: BTreeSet<String>,
    pub leds_lit: BTreeSet<String>,
    pub leds_wrong: BTreeSet<String>,
}

/// Position of a load edge relative to one battery's current paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    OnPath,
    Reversed,
    Off,
}

/// Evaluate completeness and lit loads for every battery.
///
/// Must only run on a graph without a short circuit.
pub fn illuminate(graph: &TerminalGraph<'_>) -> Illumination {
    let adj = Adjacency::new(graph, EdgeFilter::Usable);
    let mut out = Illumination::default();

    for battery in &graph.batteries {
        let complete = adj.connects(battery.positive, battery.negative);
        tracing::trace!(
            battery = %graph.components[battery.component].instance_id,
            complete,
            "evaluated battery"
        );
        out.complete |= complete;

        for (id, edge) in graph.load_edges() {
            let Some(owner) = edge.owner else { continue };
            let comp = &graph.components[owner];

            match (comp.kind, load_state(&adj, battery, id, edge)) {
                (ComponentKind::Bulb, LoadState::OnPath) => {
                    out.bulbs_lit.insert(comp.instance_id.clone());
                }
                (ComponentKind::Led, LoadState::OnPath) => {
                    out.leds_lit.insert(comp.instance_id.clone());
                }
                (ComponentKind::Led, LoadState::Reversed) => {
                    out.leds_wrong.insert(comp.instance_id.clone());
                }
                _ => {}
            }
        }
    }

    // An LED lit by any loop is not reported as miswired
    out.leds_wrong.retain(|id| !out.leds_lit.contains(id));

    out
}

fn load_state(
    adj: &Adjacency,
    battery: &BatteryTerminals,
    id: EdgeId,
    edge: &Edge,
) -> LoadState {
    let forward = adj.reachable_from(battery.positive, Some(id));
    let backward = adj.reaching(battery.negative, Some(id));
    let (a, b) = (edge.a.0, edge.b.0);

    if forward[a] && backward[b] {
        return LoadState::OnPath;
    }

    let reverse = forward[b] && backward[a];
    match edge.conductivity {
        Conductivity::LoadUndirected if reverse => LoadState::OnPath,
        Conductivity::LoadDirected if reverse => LoadState::Reversed,
        _ => LoadState::Off,
    }
}

/// Explain why an unshorted graph has no complete circuit.
pub fn diagnose_open(graph: &TerminalGraph<'_>) -> OpenReason {
    if graph.batteries.is_empty() {
        return OpenReason::NoBattery;
    }

    if graph.has_open_switch() {
        let relaxed = Adjacency::new(graph, EdgeFilter::SwitchesClosed);
        if graph
            .batteries
            .iter()
            .any(|b| relaxed.connects(b.positive, b.negative))
        {
            return OpenReason::SwitchOpen;
        }
    }

    OpenReason::NoClosedPath
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Connection, PlacedComponent};

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_series_bulbs() {
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l1"),
            PlacedComponent::bulb("l2"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l1-t0"),
            Connection::new("l1-t1", "l2-t1"),
            Connection::new("l2-t0", "b-t1"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(out.complete);
        assert_eq!(out.bulbs_lit, ids(&["l1", "l2"]));
    }

    #[test]
    fn test_parallel_bulbs_and_dangling_branch() {
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l1"),
            PlacedComponent::bulb("l2"),
            PlacedComponent::bulb("l3"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l1-t0"),
            Connection::new("b-t0", "l2-t0"),
            Connection::new("l1-t1", "b-t1"),
            Connection::new("l2-t1", "b-t1"),
            // l3 hangs off the positive rail only
            Connection::new("b-t0", "l3-t0"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(out.complete);
        assert_eq!(out.bulbs_lit, ids(&["l1", "l2"]));
    }

    #[test]
    fn test_bulb_across_negative_rail_is_lit() {
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l1"),
            PlacedComponent::bulb("l2"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l1-t0"),
            Connection::new("l1-t1", "b-t1"),
            // both legs of l2 on the negative terminal
            Connection::new("b-t1", "l2-t0"),
            Connection::new("l2-t1", "b-t1"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(out.complete);
        assert_eq!(out.bulbs_lit, ids(&["l1", "l2"]));
    }

    #[test]
    fn test_reversed_led_with_bulb() {
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l"),
            PlacedComponent::led("d"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l-t0"),
            Connection::new("l-t1", "d-t1"),
            Connection::new("d-t0", "b-t1"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(!out.complete);
        assert!(out.bulbs_lit.is_empty());
        assert!(out.leds_lit.is_empty());
        assert_eq!(out.leds_wrong, ids(&["d"]));
    }

    #[test]
    fn test_led_across_positive_rail_is_lit() {
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l"),
            PlacedComponent::led("d"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l-t0"),
            Connection::new("l-t1", "b-t1"),
            Connection::new("b-t0", "d-t0"),
            Connection::new("d-t1", "b-t0"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(out.complete);
        assert_eq!(out.bulbs_lit, ids(&["l"]));
        assert_eq!(out.leds_lit, ids(&["d"]));
        assert!(out.leds_wrong.is_empty());
    }

    #[test]
    fn test_led_into_dangling_branch_is_dark() {
        // d's cathode is on the positive rail, its anode only reaches l2
        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l1"),
            PlacedComponent::led("d"),
            PlacedComponent::bulb("l2"),
        ];
        let conns = vec![
            Connection::new("b-t0", "l1-t0"),
            Connection::new("l1-t1", "b-t1"),
            Connection::new("b-t0", "d-t1"),
            Connection::new("d-t0", "l2-t0"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert!(out.complete);
        assert_eq!(out.bulbs_lit, ids(&["l1"]));
        assert!(out.leds_lit.is_empty());
        assert!(out.leds_wrong.is_empty());
    }

    #[test]
    fn test_lit_by_one_battery_wrong_by_another() {
        // b1 drives d forward; b2 is wired across d the other way
        let comps = vec![
            PlacedComponent::battery("b1"),
            PlacedComponent::battery("b2"),
            PlacedComponent::led("d"),
        ];
        let conns = vec![
            Connection::new("b1-t0", "d-t0"),
            Connection::new("d-t1", "b1-t1"),
            Connection::new("b2-t0", "d-t1"),
            Connection::new("d-t0", "b2-t1"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        let out = illuminate(&graph);
        assert_eq!(out.leds_lit, ids(&["d"]));
        assert!(out.leds_wrong.is_empty());
    }

    #[test]
    fn test_diagnose_open() {
        let comps = vec![PlacedComponent::bulb("l")];
        let graph = TerminalGraph::build(&comps, &[]);
        assert_eq!(diagnose_open(&graph), OpenReason::NoBattery);

        let comps = vec![
            PlacedComponent::battery("b"),
            PlacedComponent::bulb("l"),
            PlacedComponent::switch("s", false),
        ];
        let conns = vec![
            Connection::new("b-t0", "s-t0"),
            Connection::new("s-t1", "l-t0"),
            Connection::new("l-t1", "b-t1"),
        ];
        let graph = TerminalGraph::build(&comps, &conns);
        assert_eq!(diagnose_open(&graph), OpenReason::SwitchOpen);

        let graph = TerminalGraph::build(&comps, &conns[..2]);
        assert_eq!(diagnose_open(&graph), OpenReason::NoClosedPath);
    }
}
