//! Error types for the Circuit Lab engine.
//!
//! This module provides a unified error type [`CircuitError`]. Only two
//! kinds of failure exist at the engine boundary:
//!
//! - configuration errors, raised when a component snapshot breaks the
//!   identity invariants the engine relies on (see
//!   [`CircuitError::is_configuration`]);
//! - errors of the outer surfaces (board description parsing, file I/O,
//!   JSON interchange).
//!
//! Malformed wiring is never an error: dangling or self-referential
//! connections are dropped while the terminal graph is built, and
//! [`CircuitEngine::simulate`](crate::CircuitEngine::simulate) is total.

use thiserror::Error;

/// Result type alias using [`CircuitError`].
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Unified error type for all Circuit Lab operations.
#[derive(Error, Debug)]
pub enum CircuitError {
    // ============ Configuration Errors ============
    /// Two components share the same instance id
    #[error("Duplicate component instance id '{instance_id}'")]
    DuplicateInstance { instance_id: String },

    /// Component kind outside of battery/bulb/switch/led
    #[error("Unknown component kind '{kind}' at line {line}")]
    UnknownComponentKind { kind: String, line: usize },

    // ============ Board Description Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Terminal reference that names neither t0 nor t1
    #[error("Unknown terminal '{terminal}' at line {line}")]
    UnknownTerminal { terminal: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading a board file
    #[error("Failed to read board file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot or result could not be (de)serialized
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl CircuitError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a duplicate instance error
    pub fn duplicate_instance(instance_id: impl Into<String>) -> Self {
        Self::DuplicateInstance {
            instance_id: instance_id.into(),
        }
    }

    /// Whether this is a fatal configuration error.
    ///
    /// The caller is expected to reject the edit that produced it rather
    /// than try to recover.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateInstance { .. } | Self::UnknownComponentKind { .. }
        )
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for CircuitError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_class() {
        assert!(CircuitError::duplicate_instance("bulb-1").is_configuration());
        assert!(CircuitError::UnknownComponentKind {
            kind: "resistor".to_string(),
            line: 3,
        }
        .is_configuration());
        assert!(!CircuitError::parse(1, "expected terminal").is_configuration());
    }

    #[test]
    fn test_display() {
        let err = CircuitError::duplicate_instance("battery-1");
        assert_eq!(
            err.to_string(),
            "Duplicate component instance id 'battery-1'"
        );
    }
}
