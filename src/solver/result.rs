//! Simulation result and its composition.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::illumination::Illumination;

/// Why a circuit without a short is not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenReason {
    /// No battery is placed
    #[serde(rename = "no battery")]
    NoBattery,
    /// No path even with every open switch closed
    #[serde(rename = "no closed path")]
    NoClosedPath,
    /// Closing an open switch would complete the circuit
    #[serde(rename = "switch open")]
    SwitchOpen,
}

impl OpenReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenReason::NoBattery => "no battery",
            OpenReason::NoClosedPath => "no closed path",
            OpenReason::SwitchOpen => "switch open",
        }
    }
}

impl fmt::Display for OpenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one simulation.
///
/// `is_complete` and `short_circuit` are never both set. Id sets are
/// ordered so that equal snapshots serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub is_complete: bool,
    pub short_circuit: bool,
    pub open_reason: Option<OpenReason>,
    pub bulbs_lit: BTreeSet<String>,
    pub leds_lit: BTreeSet<String>,
    pub leds_wrong: BTreeSet<String>,
}

impl SimulationResult {
    /// Result for a snapshot with a shorted battery: nothing lit, not
    /// complete.
    pub fn shorted() -> Self {
        Self {
            short_circuit: true,
            ..Self::default()
        }
    }

    /// Result for an unshorted snapshot.
    ///
    /// `open_reason` is discarded when the circuit is complete.
    pub fn evaluated(illumination: Illumination, open_reason: Option<OpenReason>) -> Self {
        let Illumination {
            complete,
            bulbs_lit,
            leds_lit,
            leds_wrong,
        } = illumination;

        Self {
            is_complete: complete,
            short_circuit: false,
            open_reason: if complete { None } else { open_reason },
            bulbs_lit,
            leds_lit,
            leds_wrong,
        }
    }

    /// Whether the bulb or LED `instance_id` is lit.
    pub fn is_lit(&self, instance_id: &str) -> bool {
        self.bulbs_lit.contains(instance_id) || self.leds_lit.contains(instance_id)
    }

    /// Whether the LED `instance_id` sits in a loop with reversed polarity.
    pub fn is_wrong(&self, instance_id: &str) -> bool {
        self.leds_wrong.contains(instance_id)
    }

    /// Learner-facing status banner text.
    pub fn status_message(&self) -> &'static str {
        if self.short_circuit {
            return "Short circuit! Current has no load to pass through. Remove the direct wire.";
        }
        if self.is_complete {
            return "Circuit complete! Current is flowing.";
        }
        match self.open_reason {
            Some(OpenReason::NoBattery) => "Add a battery to power the circuit.",
            Some(OpenReason::SwitchOpen) => "Switch is open. Close it to complete the circuit.",
            _ if !self.leds_wrong.is_empty() => {
                "An LED is connected backwards. Flip it so + faces the battery's + terminal."
            }
            _ => "Circuit is not complete. Connect all components in a loop.",
        }
    }
}
