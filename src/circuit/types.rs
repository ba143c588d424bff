//! Core types for circuit representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::ComponentKind;

/// Dense index of a terminal in the terminal graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Dense index of an edge in the terminal graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A terminal identifier of the form `${instance_id}-t{0|1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminalId(String);

impl TerminalId {
    /// Build the id of terminal `index` of a component.
    pub fn new(instance_id: &str, index: usize) -> Self {
        Self(format!("{}-t{}", instance_id, index))
    }

    /// Split an id into its instance id and terminal index.
    ///
    /// Returns `None` unless the id ends in `-t0` or `-t1` after a
    /// non-empty instance id.
    pub fn parse(id: &str) -> Option<(&str, usize)> {
        let (instance_id, suffix) = id.rsplit_once("-t")?;
        if instance_id.is_empty() {
            return None;
        }
        match suffix {
            "0" => Some((instance_id, 0)),
            "1" => Some((instance_id, 1)),
            _ => None,
        }
    }

    /// The instance id part, if the id is well formed.
    pub fn instance_id(&self) -> Option<&str> {
        Self::parse(&self.0).map(|(instance_id, _)| instance_id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TerminalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TerminalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A component placed on the board.
///
/// Position and rotation live in the editor only; extra fields in a JSON
/// snapshot are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedComponent {
    /// Unique instance id
    pub instance_id: String,
    /// Component kind
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Switch state, meaningful only for switches
    #[serde(default)]
    pub switch_closed: bool,
}

impl PlacedComponent {
    pub fn new(instance_id: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            instance_id: instance_id.into(),
            kind,
            switch_closed: false,
        }
    }

    pub fn battery(instance_id: impl Into<String>) -> Self {
        Self::new(instance_id, ComponentKind::Battery)
    }

    pub fn bulb(instance_id: impl Into<String>) -> Self {
        Self::new(instance_id, ComponentKind::Bulb)
    }

    pub fn led(instance_id: impl Into<String>) -> Self {
        Self::new(instance_id, ComponentKind::Led)
    }

    pub fn switch(instance_id: impl Into<String>, closed: bool) -> Self {
        Self {
            switch_closed: closed,
            ..Self::new(instance_id, ComponentKind::Switch)
        }
    }

    /// Id of terminal `index` (0 or 1).
    pub fn terminal(&self, index: usize) -> TerminalId {
        TerminalId::new(&self.instance_id, index)
    }

    /// Both terminal ids, t0 first.
    pub fn terminals(&self) -> [TerminalId; 2] {
        [self.terminal(0), self.terminal(1)]
    }
}

/// A user-drawn wire between two terminals. Unordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    #[serde(rename = "fromTerminalId")]
    pub from: TerminalId,
    #[serde(rename = "toTerminalId")]
    pub to: TerminalId,
}

impl Connection {
    pub fn new(from: impl Into<TerminalId>, to: impl Into<TerminalId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether this wire joins the same two terminals as `other`, in
    /// either direction.
    pub fn same_endpoints(&self, other: &Connection) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_id_format() {
        assert_eq!(TerminalId::new("battery-1", 0).as_str(), "battery-1-t0");
        assert_eq!(PlacedComponent::bulb("bulb-2").terminal(1).as_str(), "bulb-2-t1");
    }

    #[test]
    fn test_terminal_id_parse() {
        assert_eq!(TerminalId::parse("battery-1-t0"), Some(("battery-1", 0)));
        assert_eq!(TerminalId::parse("a-t1"), Some(("a", 1)));
        assert_eq!(TerminalId::parse("a-t2"), None);
        assert_eq!(TerminalId::parse("-t0"), None);
        assert_eq!(TerminalId::parse("battery"), None);
        assert_eq!(TerminalId::from("led-3-t1").instance_id(), Some("led-3"));
    }

    #[test]
    fn test_same_endpoints() {
        let a = Connection::new("x-t0", "y-t1");
        assert!(a.same_endpoints(&Connection::new("y-t1", "x-t0")));
        assert!(!a.same_endpoints(&Connection::new("x-t0", "y-t0")));
    }

    #[test]
    fn test_component_json() {
        let json = r#"{"instanceId":"switch-1","type":"switch","gridX":100,"rotation":0,"switchClosed":true}"#;
        let comp: PlacedComponent = serde_json::from_str(json).unwrap();
        assert_eq!(comp, PlacedComponent::switch("switch-1", true));

        let json = r#"{"instanceId":"bulb-1","type":"bulb"}"#;
        let comp: PlacedComponent = serde_json::from_str(json).unwrap();
        assert!(!comp.switch_closed);
    }

    #[test]
    fn test_connection_json() {
        let json = r#"{"fromTerminalId":"battery-1-t0","toTerminalId":"bulb-1-t0"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn, Connection::new("battery-1-t0", "bulb-1-t0"));
    }
}
