//! Index-based adjacency and breadth-first reachability.

use std::collections::VecDeque;

use crate::circuit::{EdgeId, NodeId, TerminalGraph};
use crate::components::Conductivity;

/// Which edges a traversal may cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFilter {
    /// Wires and closed switches only
    ZeroOnly,
    /// Every non-blocked edge, loads in their allowed direction
    Usable,
    /// As `Usable`, with every open switch treated as closed
    SwitchesClosed,
}

impl EdgeFilter {
    /// Allowed directions `(a -> b, b -> a)` for an edge class.
    fn arcs(&self, conductivity: Conductivity) -> (bool, bool) {
        match (self, conductivity) {
            (EdgeFilter::ZeroOnly, Conductivity::Zero) => (true, true),
            (EdgeFilter::ZeroOnly, _) => (false, false),
            (EdgeFilter::SwitchesClosed, Conductivity::Blocked) => (true, true),
            (_, c) => (c.conducts_forward(), c.conducts_reverse()),
        }
    }
}

/// Forward and reverse arc lists of a filtered terminal graph.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Outgoing `(edge, head)` arcs per node
    out: Vec<Vec<(EdgeId, NodeId)>>,
    /// Incoming `(edge, tail)` arcs per node
    inc: Vec<Vec<(EdgeId, NodeId)>>,
}

impl Adjacency {
    /// Build the adjacency of `graph` restricted by `filter`.
    pub fn new(graph: &TerminalGraph<'_>, filter: EdgeFilter) -> Self {
        let n = graph.num_nodes();
        let mut out = vec![Vec::new(); n];
        let mut inc = vec![Vec::new(); n];

        for (idx, edge) in graph.edges.iter().enumerate() {
            let id = EdgeId(idx);
            let (forward, reverse) = filter.arcs(edge.conductivity);
            if forward {
                out[edge.a.0].push((id, edge.b));
                inc[edge.b.0].push((id, edge.a));
            }
            if reverse {
                out[edge.b.0].push((id, edge.a));
                inc[edge.a.0].push((id, edge.b));
            }
        }

        Self { out, inc }
    }

    /// Nodes reachable from `start`, never crossing the edge `skip`.
    pub fn reachable_from(&self, start: NodeId, skip: Option<EdgeId>) -> Vec<bool> {
        Self::search(&self.out, start, skip)
    }

    /// Nodes from which `target` is reachable, never crossing `skip`.
    pub fn reaching(&self, target: NodeId, skip: Option<EdgeId>) -> Vec<bool> {
        Self::search(&self.inc, target, skip)
    }

    /// Whether `to` is reachable from `from`.
    pub fn connects(&self, from: NodeId, to: NodeId) -> bool {
        self.reachable_from(from, None)[to.0]
    }

    fn search(arcs: &[Vec<(EdgeId, NodeId)>], start: NodeId, skip: Option<EdgeId>) -> Vec<bool> {
        let mut visited = vec![false; arcs.len()];
        let mut queue = VecDeque::new();
        visited[start.0] = true;
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            for &(edge, next) in &arcs[node.0] {
                if Some(edge) == skip || visited[next.0] {
                    continue;
                }
                visited[next.0] = true;
                queue.push_back(next);
            }
        }

        visited
    }
}
