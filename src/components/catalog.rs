//! Static catalog of component kinds, as shown in the editor's tray.

use serde::Serialize;

use super::ComponentKind;

/// Terminal polarity of a polarized component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
}

impl Polarity {
    pub fn symbol(&self) -> char {
        match self {
            Polarity::Positive => '+',
            Polarity::Negative => '-',
        }
    }
}

/// Display and terminal metadata for a component kind.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentInfo {
    pub kind: ComponentKind,
    pub label: &'static str,
    pub description: &'static str,
    /// Polarity of t0 and t1
    pub terminals: [Option<Polarity>; 2],
}

static BATTERY: ComponentInfo = ComponentInfo {
    kind: ComponentKind::Battery,
    label: "Battery",
    description: "Provides electrical energy. Has positive (+) and negative (-) terminals.",
    terminals: [Some(Polarity::Positive), Some(Polarity::Negative)],
};

static BULB: ComponentInfo = ComponentInfo {
    kind: ComponentKind::Bulb,
    label: "Bulb",
    description: "Glows when electric current flows through it.",
    terminals: [None, None],
};

static SWITCH: ComponentInfo = ComponentInfo {
    kind: ComponentKind::Switch,
    label: "Switch",
    description: "Opens or closes the circuit. Toggle to control current flow.",
    terminals: [None, None],
};

static LED: ComponentInfo = ComponentInfo {
    kind: ComponentKind::Led,
    label: "LED",
    description: "Glows only when connected the right way. Longer leg is positive (+).",
    terminals: [Some(Polarity::Positive), Some(Polarity::Negative)],
};

/// Kinds in the order the editor tray lists them.
pub const TRAY_ORDER: [ComponentKind; 4] = [
    ComponentKind::Battery,
    ComponentKind::Bulb,
    ComponentKind::Switch,
    ComponentKind::Led,
];

/// Look up the catalog entry for a kind.
pub fn catalog(kind: ComponentKind) -> &'static ComponentInfo {
    match kind {
        ComponentKind::Battery => &BATTERY,
        ComponentKind::Bulb => &BULB,
        ComponentKind::Switch => &SWITCH,
        ComponentKind::Led => &LED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_kind() {
        for kind in TRAY_ORDER {
            assert_eq!(catalog(kind).kind, kind);
        }
    }

    #[test]
    fn test_led_is_polarized() {
        let led = catalog(ComponentKind::Led);
        assert_eq!(led.terminals[0].map(|p| p.symbol()), Some('+'));
        assert_eq!(led.terminals[1].map(|p| p.symbol()), Some('-'));
    }
}
