//! Abstract Syntax Tree types for the board description language.

use crate::circuit::{Connection, PlacedComponent, TerminalId};
use crate::components::ComponentKind;

/// Complete AST representation of a parsed board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardAst {
    /// Optional title from `.title`
    pub title: Option<String>,
    /// All component declarations, in source order
    pub components: Vec<ComponentDef>,
    /// All wires, in source order
    pub wires: Vec<WireDef>,
}

impl BoardAst {
    /// Create a new empty board AST.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert into the engine's snapshot types.
    pub fn into_snapshot(self) -> (Vec<PlacedComponent>, Vec<Connection>) {
        let components = self
            .components
            .into_iter()
            .map(|def| PlacedComponent {
                instance_id: def.name,
                kind: def.kind,
                switch_closed: def.closed,
            })
            .collect();
        let connections = self
            .wires
            .into_iter()
            .map(|wire| Connection::new(wire.from, wire.to))
            .collect();
        (components, connections)
    }
}

/// A component declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDef {
    pub kind: ComponentKind,
    /// Instance id
    pub name: String,
    /// Switch state; always false for other kinds
    pub closed: bool,
    /// Source line number for error reporting
    pub line: usize,
}

/// A wire between two resolved terminal ids.
#[derive(Debug, Clone, PartialEq)]
pub struct WireDef {
    pub from: TerminalId,
    pub to: TerminalId,
    pub line: usize,
}
