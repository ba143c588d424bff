//! WASM bindings for Circuit Lab Core.
//!
//! Snapshots and results cross the boundary as JSON strings in the editor's
//! own shapes (`instanceId`, `type`, `switchClosed`, `fromTerminalId`, ...).
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitEngine } from 'circuitlab_core';
//!
//! await init();
//!
//! const engine = new WasmCircuitEngine();
//! engine.set_components(JSON.stringify([
//!   { instanceId: 'battery-1', type: 'battery' },
//!   { instanceId: 'bulb-1', type: 'bulb' },
//! ]));
//! engine.set_connections(JSON.stringify([
//!   { fromTerminalId: 'battery-1-t0', toTerminalId: 'bulb-1-t0' },
//!   { fromTerminalId: 'bulb-1-t1', toTerminalId: 'battery-1-t1' },
//! ]));
//!
//! const result = JSON.parse(engine.simulate());
//! // { isComplete: true, shortCircuit: false, openReason: null, bulbsLit: ['bulb-1'], ... }
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Connection, PlacedComponent};
use crate::components::{catalog, TRAY_ORDER};
use crate::error::CircuitError;
use crate::solver::CircuitEngine;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CircuitError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible circuit engine.
///
/// Wraps the native [`CircuitEngine`]; the editor calls `simulate` after
/// every edit.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmCircuitEngine {
    engine: CircuitEngine,
}

#[wasm_bindgen]
impl WasmCircuitEngine {
    /// Create an engine with an empty board.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuitEngine {
        Self::default()
    }

    /// Replace the component snapshot from a JSON array.
    ///
    /// Throws on malformed JSON, an unknown component type, or a duplicate
    /// instance id.
    #[wasm_bindgen]
    pub fn set_components(&mut self, components_json: &str) -> Result<(), JsValue> {
        let components: Vec<PlacedComponent> = serde_json::from_str(components_json)
            .map_err(|e| to_js(CircuitError::WasmError {
                message: format!("invalid components: {}", e),
            }))?;
        self.engine.set_components(components).map_err(to_js)
    }

    /// Replace the wiring snapshot from a JSON array.
    ///
    /// Throws only on malformed JSON; dangling wires are accepted and
    /// ignored during simulation.
    #[wasm_bindgen]
    pub fn set_connections(&mut self, connections_json: &str) -> Result<(), JsValue> {
        let connections: Vec<Connection> = serde_json::from_str(connections_json)
            .map_err(|e| to_js(CircuitError::WasmError {
                message: format!("invalid connections: {}", e),
            }))?;
        self.engine.set_connections(connections);
        Ok(())
    }

    /// Simulate the current board and return the result as JSON.
    #[wasm_bindgen]
    pub fn simulate(&self) -> Result<String, JsValue> {
        let result = self.engine.simulate();
        serde_json::to_string(&result).map_err(|e| to_js(e.into()))
    }
}

/// Get the component tray catalog as a JSON array, in tray order.
#[wasm_bindgen]
pub fn component_catalog() -> Result<String, JsValue> {
    let entries: Vec<_> = TRAY_ORDER.iter().map(|&kind| catalog(kind)).collect();
    serde_json::to_string(&entries).map_err(|e| to_js(e.into()))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
