//! Parser for the board description language.

use super::ast::*;
use super::lexer::{Lexer, Token, TokenKind};
use crate::circuit::TerminalId;
use crate::components::ComponentKind;
use crate::error::{CircuitError, Result};

/// Parser for board descriptions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire board description.
    pub fn parse(&mut self) -> Result<BoardAst> {
        let mut ast = BoardAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {}
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Word if self.current.text.eq_ignore_ascii_case("wire") => {
                    let wire = self.parse_wire()?;
                    ast.wires.push(wire);
                }
                TokenKind::Word => {
                    let component = self.parse_component()?;
                    ast.components.push(component);
                }
                TokenKind::Eof => break,
            }

            self.end_of_line()?;
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect_word(&mut self, what: &str) -> Result<Token> {
        if self.current.kind == TokenKind::Word {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(CircuitError::parse(
                self.current.line,
                format!("expected {}, got {:?}", what, self.current.kind),
            ))
        }
    }

    /// Consume the newline ending a statement.
    fn end_of_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(CircuitError::parse(
                self.current.line,
                format!("unexpected token: {:?}", self.current.text),
            )),
        }
    }

    fn parse_directive(&mut self, ast: &mut BoardAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".title" => {
                let mut words = Vec::new();
                while self.current.kind == TokenKind::Word {
                    words.push(self.current.text.clone());
                    self.advance()?;
                }
                ast.title = Some(words.join(" "));
            }
            _ => {
                return Err(CircuitError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_component(&mut self) -> Result<ComponentDef> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let kind = ComponentKind::parse(&keyword, line)?;
        let name = self.expect_word("instance id")?.text;

        let mut closed = false;
        if self.current.kind == TokenKind::Word {
            let state = self.current.text.to_lowercase();
            if kind != ComponentKind::Switch {
                return Err(CircuitError::parse(
                    line,
                    format!("{} '{}' takes no state", kind, name),
                ));
            }
            closed = match state.as_str() {
                "closed" | "on" => true,
                "open" | "off" => false,
                _ => {
                    return Err(CircuitError::parse(
                        line,
                        format!("invalid switch state: {}", state),
                    ));
                }
            };
            self.advance()?;
        }

        Ok(ComponentDef {
            kind,
            name,
            closed,
            line,
        })
    }

    fn parse_wire(&mut self) -> Result<WireDef> {
        let line = self.current.line;
        self.advance()?;

        let from = self.expect_word("terminal")?;
        let to = self.expect_word("terminal")?;

        Ok(WireDef {
            from: resolve_terminal(&from.text, line)?,
            to: resolve_terminal(&to.text, line)?,
            line,
        })
    }
}

/// Resolve a terminal reference.
///
/// Accepts `name.t0`, `name.t1`, `name.+`, `name.-` (and the aliases
/// `0`/`1`/`anode`/`cathode`) or a raw `name-t0` id.
pub fn resolve_terminal(text: &str, line: usize) -> Result<TerminalId> {
    let unknown = || CircuitError::UnknownTerminal {
        terminal: text.to_string(),
        line,
    };

    if let Some((name, suffix)) = text.rsplit_once('.') {
        if name.is_empty() {
            return Err(unknown());
        }
        let index = match suffix.to_lowercase().as_str() {
            "t0" | "0" | "+" | "anode" => 0,
            "t1" | "1" | "-" | "cathode" => 1,
            _ => return Err(unknown()),
        };
        return Ok(TerminalId::new(name, index));
    }

    match TerminalId::parse(text) {
        Some(_) => Ok(TerminalId::from(text)),
        None => Err(unknown()),
    }
}
