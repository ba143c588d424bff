//! Snapshot validation.

use std::collections::HashSet;

use crate::error::{CircuitError, Result};

use super::{Connection, PlacedComponent, TerminalId};

/// Validate a component snapshot.
///
/// Checks:
/// - No two components share an instance id
pub fn validate_components(components: &[PlacedComponent]) -> Result<()> {
    let mut seen = HashSet::with_capacity(components.len());
    for comp in components {
        if !seen.insert(comp.instance_id.as_str()) {
            return Err(CircuitError::duplicate_instance(&comp.instance_id));
        }
    }
    Ok(())
}

/// Whether the editor should accept a new wire from `from` to `to`.
///
/// Rejects empty handles, wires between two terminals of the same
/// component, and duplicates of an existing wire in either direction.
pub fn can_connect(existing: &[Connection], from: &TerminalId, to: &TerminalId) -> bool {
    if from.as_str().is_empty() || to.as_str().is_empty() {
        return false;
    }

    // Terminals of one component may not be wired to each other
    if let (Some(a), Some(b)) = (from.instance_id(), to.instance_id()) {
        if a == b {
            return false;
        }
    } else if from == to {
        return false;
    }

    let proposed = Connection::new(from.clone(), to.clone());
    !existing.iter().any(|c| c.same_endpoints(&proposed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_instance_rejected() {
        let comps = vec![
            PlacedComponent::battery("x"),
            PlacedComponent::bulb("y"),
            PlacedComponent::led("x"),
        ];
        let err = validate_components(&comps).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::DuplicateInstance { ref instance_id } if instance_id == "x"
        ));
    }

    #[test]
    fn test_unique_ids_accepted() {
        let comps = vec![PlacedComponent::battery("x"), PlacedComponent::bulb("y")];
        assert!(validate_components(&comps).is_ok());
        assert!(validate_components(&[]).is_ok());
    }

    #[test]
    fn test_can_connect() {
        let existing = vec![Connection::new("battery-1-t0", "bulb-1-t0")];
        let t = |s: &str| TerminalId::from(s);

        assert!(can_connect(&existing, &t("bulb-1-t1"), &t("battery-1-t1")));
        assert!(!can_connect(&existing, &t("bulb-1-t0"), &t("battery-1-t0")));
        assert!(!can_connect(&existing, &t("bulb-1-t0"), &t("bulb-1-t1")));
        assert!(!can_connect(&existing, &t(""), &t("bulb-1-t1")));
    }
}
