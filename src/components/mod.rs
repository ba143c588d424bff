//! Component models for the circuit lab.
//!
//! This module provides the four placeable component kinds:
//! - Source: Battery
//! - Loads: Bulb, LED
//! - Controls: Switch
//!
//! Each kind contributes at most one internal edge to the terminal graph;
//! [`classify`] decides how current may cross it.

mod catalog;
mod conductivity;

pub use catalog::{catalog, ComponentInfo, Polarity, TRAY_ORDER};
pub use conductivity::{classify, Conductivity};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, Result};

/// A placeable component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Battery: t0 is `+`, t1 is `-`
    Battery,
    /// Bulb: unordered terminals
    Bulb,
    /// Switch: unordered terminals, open or closed
    Switch,
    /// LED: t0 is the anode, t1 the cathode
    Led,
}

impl ComponentKind {
    /// Parse a kind from its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "battery" | "bat" | "cell" => Some(Self::Battery),
            "bulb" | "lamp" => Some(Self::Bulb),
            "switch" | "sw" => Some(Self::Switch),
            "led" => Some(Self::Led),
            _ => None,
        }
    }

    /// Parse a kind from its keyword, reporting unknown kinds as a
    /// configuration error.
    pub fn parse(keyword: &str, line: usize) -> Result<Self> {
        Self::from_keyword(keyword).ok_or_else(|| CircuitError::UnknownComponentKind {
            kind: keyword.to_string(),
            line,
        })
    }

    /// Lowercase keyword, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Bulb => "bulb",
            Self::Switch => "switch",
            Self::Led => "led",
        }
    }

    /// Polarity of terminal `index` (0 or 1), if the kind is polarized.
    pub fn terminal_polarity(&self, index: usize) -> Option<Polarity> {
        catalog(*self).terminals.get(index).copied().flatten()
    }

    /// Loads are the components reported as lit or miswired.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Bulb | Self::Led)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(ComponentKind::from_keyword("Battery"), Some(ComponentKind::Battery));
        assert_eq!(ComponentKind::from_keyword("LED"), Some(ComponentKind::Led));
        assert_eq!(ComponentKind::from_keyword("sw"), Some(ComponentKind::Switch));
        assert_eq!(ComponentKind::from_keyword("wire"), None);
    }

    #[test]
    fn test_parse_unknown_is_configuration_error() {
        let err = ComponentKind::parse("resistor", 4).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("resistor"));
    }

    #[test]
    fn test_polarity() {
        assert_eq!(ComponentKind::Battery.terminal_polarity(0), Some(Polarity::Positive));
        assert_eq!(ComponentKind::Battery.terminal_polarity(1), Some(Polarity::Negative));
        assert_eq!(ComponentKind::Led.terminal_polarity(0), Some(Polarity::Positive));
        assert_eq!(ComponentKind::Bulb.terminal_polarity(0), None);
        assert_eq!(ComponentKind::Switch.terminal_polarity(2), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ComponentKind::Led).unwrap();
        assert_eq!(json, "\"led\"");
        let kind: ComponentKind = serde_json::from_str("\"battery\"").unwrap();
        assert_eq!(kind, ComponentKind::Battery);
        assert!(serde_json::from_str::<ComponentKind>("\"wire\"").is_err());
    }
}
