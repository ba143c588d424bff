//! Main engine interface.

use crate::circuit::{validate_components, Connection, PlacedComponent, TerminalGraph};
use crate::error::Result;

use super::illumination::{diagnose_open, illuminate};
use super::result::SimulationResult;
use super::short::find_short;

/// The circuit simulation engine.
///
/// Holds the two most recent snapshots handed to its setters and nothing
/// else. Every [`CircuitEngine::simulate`] call rebuilds the terminal graph
/// from scratch.
#[derive(Debug, Clone, Default)]
pub struct CircuitEngine {
    /// Current component snapshot, ids unique
    components: Vec<PlacedComponent>,
    /// Current wiring snapshot, possibly with dangling entries
    connections: Vec<Connection>,
}

impl CircuitEngine {
    /// Create an engine with empty snapshots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from both snapshots at once.
    pub fn with_snapshot(
        components: Vec<PlacedComponent>,
        connections: Vec<Connection>,
    ) -> Result<Self> {
        let mut engine = Self::new();
        engine.set_components(components)?;
        engine.set_connections(connections);
        Ok(engine)
    }

    /// Replace the component snapshot.
    ///
    /// Fails with [`CircuitError::DuplicateInstance`](crate::CircuitError::DuplicateInstance)
    /// when two components share an instance id; the previous snapshot is
    /// kept in that case.
    pub fn set_components(&mut self, components: Vec<PlacedComponent>) -> Result<()> {
        validate_components(&components)?;
        tracing::debug!(count = components.len(), "replaced component snapshot");
        self.components = components;
        Ok(())
    }

    /// Replace the wiring snapshot. Malformed wires are kept here and
    /// dropped when the graph is built.
    pub fn set_connections(&mut self, connections: Vec<Connection>) {
        tracing::debug!(count = connections.len(), "replaced wiring snapshot");
        self.connections = connections;
    }

    /// Current component snapshot.
    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    /// Current wiring snapshot.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Simulate the current snapshots.
    pub fn simulate(&self) -> SimulationResult {
        // Built + classified
        let graph = TerminalGraph::build(&self.components, &self.connections);

        if let Some(battery) = find_short(&graph) {
            tracing::debug!(
                battery = %self.components[battery.component].instance_id,
                "short circuit"
            );
            return SimulationResult::shorted();
        }

        let illumination = illuminate(&graph);
        let open_reason = if illumination.complete {
            None
        } else {
            Some(diagnose_open(&graph))
        };
        let result = SimulationResult::evaluated(illumination, open_reason);

        tracing::debug!(
            complete = result.is_complete,
            open_reason = ?result.open_reason,
            bulbs_lit = result.bulbs_lit.len(),
            leds_lit = result.leds_lit.len(),
            leds_wrong = result.leds_wrong.len(),
            dropped_wires = graph.dropped_connections(),
            "simulated circuit"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OpenReason;

    fn series_loop(switch_closed: bool) -> CircuitEngine {
        CircuitEngine::with_snapshot(
            vec![
                PlacedComponent::battery("battery-1"),
                PlacedComponent::switch("switch-1", switch_closed),
                PlacedComponent::bulb("bulb-1"),
            ],
            vec![
                Connection::new("battery-1-t0", "switch-1-t0"),
                Connection::new("switch-1-t1", "bulb-1-t0"),
                Connection::new("bulb-1-t1", "battery-1-t1"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_switch_toggle() {
        let open = series_loop(false).simulate();
        assert!(!open.is_complete);
        assert_eq!(open.open_reason, Some(OpenReason::SwitchOpen));
        assert!(open.bulbs_lit.is_empty());

        let closed = series_loop(true).simulate();
        assert!(closed.is_complete);
        assert!(closed.is_lit("bulb-1"));
    }

    #[test]
    fn test_duplicate_keeps_previous_snapshot() {
        let mut engine = series_loop(true);
        let err = engine
            .set_components(vec![PlacedComponent::bulb("a"), PlacedComponent::led("a")])
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(engine.components().len(), 3);
        assert!(engine.simulate().is_complete);
    }

    #[test]
    fn test_empty_engine() {
        let result = CircuitEngine::new().simulate();
        assert!(!result.is_complete);
        assert!(!result.short_circuit);
        assert_eq!(result.open_reason, Some(OpenReason::NoBattery));
    }

    #[test]
    fn test_connections_outlive_components() {
        let mut engine = series_loop(true);
        engine
            .set_components(vec![PlacedComponent::battery("battery-1")])
            .unwrap();
        assert_eq!(engine.connections().len(), 3);
        let result = engine.simulate();
        assert!(!result.is_complete);
        assert_eq!(result.open_reason, Some(OpenReason::NoClosedPath));
    }
}
