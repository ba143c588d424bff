//! Terminal graph structure.

use std::collections::HashMap;

use super::types::{Connection, EdgeId, NodeId, PlacedComponent, TerminalId};
use crate::components::{classify, ComponentKind, Conductivity};

/// An edge of the terminal graph.
///
/// For directed loads `a` is the anode and `b` the cathode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub conductivity: Conductivity,
    /// Index of the owning component, `None` for wires
    pub owner: Option<usize>,
}

/// The two terminals of a battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryTerminals {
    /// Index of the battery in the component list
    pub component: usize,
    /// Positive terminal (t0)
    pub positive: NodeId,
    /// Negative terminal (t1)
    pub negative: NodeId,
}

/// Undirected multigraph whose nodes are component terminals.
///
/// Terminals are dense indices: component `i` owns nodes `2i` (t0) and
/// `2i + 1` (t1). Built fresh from a snapshot on every simulation.
#[derive(Debug, Clone)]
pub struct TerminalGraph<'a> {
    /// The component snapshot the graph was built from
    pub components: &'a [PlacedComponent],

    /// All edges, intra-component edges first
    pub edges: Vec<Edge>,

    /// Battery terminal pairs, in component order
    pub batteries: Vec<BatteryTerminals>,

    /// Mapping from terminal ids to node ids
    terminal_map: HashMap<TerminalId, NodeId>,

    /// Number of wires dropped as dangling or self-referential
    dropped: usize,
}

impl<'a> TerminalGraph<'a> {
    /// Build the terminal graph of a snapshot.
    ///
    /// Connections naming an unknown terminal, or the same terminal at both
    /// ends, are dropped. Component instance ids are assumed unique.
    pub fn build(components: &'a [PlacedComponent], connections: &[Connection]) -> Self {
        let mut terminal_map = HashMap::with_capacity(components.len() * 2);
        let mut edges = Vec::with_capacity(components.len() + connections.len());
        let mut batteries = Vec::new();

        for (idx, comp) in components.iter().enumerate() {
            let t0 = NodeId(2 * idx);
            let t1 = NodeId(2 * idx + 1);
            terminal_map.insert(comp.terminal(0), t0);
            terminal_map.insert(comp.terminal(1), t1);

            if comp.kind == ComponentKind::Battery {
                batteries.push(BatteryTerminals {
                    component: idx,
                    positive: t0,
                    negative: t1,
                });
            }

            if let Some(conductivity) = classify(comp) {
                edges.push(Edge {
                    a: t0,
                    b: t1,
                    conductivity,
                    owner: Some(idx),
                });
            }
        }

        let mut dropped = 0usize;
        for conn in connections {
            let ends = (terminal_map.get(&conn.from), terminal_map.get(&conn.to));
            match ends {
                (Some(&a), Some(&b)) if a != b => {
                    edges.push(Edge {
                        a,
                        b,
                        conductivity: Conductivity::Zero,
                        owner: None,
                    });
                }
                (Some(_), Some(_)) => {
                    tracing::trace!(terminal = %conn.from, "dropping self-referential wire");
                    dropped += 1;
                }
                _ => {
                    tracing::trace!(from = %conn.from, to = %conn.to, "dropping dangling wire");
                    dropped += 1;
                }
            }
        }

        Self {
            components,
            edges,
            batteries,
            terminal_map,
            dropped,
        }
    }

    /// Number of terminal nodes.
    pub fn num_nodes(&self) -> usize {
        self.components.len() * 2
    }

    /// Find a terminal's node id.
    #[cfg(test)]
    fn find_terminal(&self, id: &TerminalId) -> Option<NodeId> {
        self.terminal_map.get(id).copied()
    }

    /// Component owning a terminal node, if the node belongs to this graph.
    #[cfg(test)]
    fn component_of(&self, node: NodeId) -> Option<&PlacedComponent> {
        self.components.get(node.0 / 2)
    }

    /// Number of wires dropped while building.
    pub fn dropped_connections(&self) -> usize {
        self.dropped
    }

    /// Whether any switch in the snapshot is open.
    pub fn has_open_switch(&self) -> bool {
        self.edges
            .iter()
            .any(|e| e.conductivity == Conductivity::Blocked)
    }

    /// Iterate over the load edges with their ids.
    pub fn load_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.conductivity.is_load())
            .map(|(i, e)| (EdgeId(i), e))
    }
}
