//! Board description language.
//!
//! A small line-oriented text format for describing a board: the placed
//! components and the wires between their terminals. It is what the
//! `circuitlab` CLI reads and what the integration tests use for fixtures.
//!
//! # Grammar Overview
//!
//! ```text
//! board       = { line }
//! line        = comment | directive | component | wire | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".title" { word }
//! component   = kind name [state]
//! wire        = "wire" terminal terminal
//!
//! kind        = "battery" | "bulb" | "switch" | "led"
//! state       = "open" | "closed" | "on" | "off"      (switch only)
//! terminal    = name '.' suffix | name "-t0" | name "-t1"
//! suffix      = "t0" | "t1" | "0" | "1" | "+" | "-" | "anode" | "cathode"
//! ```
//!
//! # Terminals
//!
//! | Kind | t0 | t1 |
//! |------|----|----|
//! | battery | `+` | `-` |
//! | led | anode (`+`) | cathode (`-`) |
//! | bulb, switch | either end | other end |
//!
//! # Example
//!
//! ```text
//! .title Light the bulb
//! battery B1
//! switch  S1 closed
//! bulb    L1
//!
//! wire B1.+  S1.t0
//! wire S1.t1 L1.t0
//! wire L1.t1 B1.-
//! ```
//!
//! Wires may name components that are not declared; like a dangling wire
//! in the editor, the engine ignores them.

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{resolve_terminal, Parser};

use crate::error::Result;

/// Parse a board description string into an AST.
pub fn parse(input: &str) -> Result<BoardAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a board description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<BoardAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::CircuitError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
