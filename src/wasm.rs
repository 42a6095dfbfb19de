//! WASM bindings for Breadboard Core.
//!
//! This module provides JavaScript-friendly bindings so a browser canvas UI
//! can drive the engine directly: the page owns the DOM elements and
//! pointer events, the engine owns placement, snapping, and power state.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmWorkbench } from 'breadboard_core';
//!
//! await init();
//!
//! const bench = new WasmWorkbench();
//! const battery = bench.add_component('battery', dropX, dropY);
//!
//! // On every pointer move during a drag:
//! const [x, y] = bench.drag_component(id, pointerX, pointerY);
//! element.style.left = `${x}px`;
//! element.style.top = `${y}px`;
//!
//! // After any edit:
//! for (const id of bench.energized_ids()) highlight(id);
//! statusLamp.classList.toggle('on', bench.power_active);
//! ```

use wasm_bindgen::prelude::*;

use crate::board::{ComponentId, Point};
use crate::components::ComponentKind;
use crate::engine::{EngineConfig, Workbench};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible circuit workbench.
///
/// This struct wraps the native [`Workbench`] and provides a
/// JavaScript-friendly API: kinds are lower-case strings, ids are plain
/// numbers, and positions are `[x, y]` pairs.
#[wasm_bindgen]
pub struct WasmWorkbench {
    bench: Workbench,
}

#[wasm_bindgen]
impl WasmWorkbench {
    /// Create an empty workbench with default geometry (100-unit tiles).
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmWorkbench {
        WasmWorkbench {
            bench: Workbench::new(),
        }
    }

    /// Create a workbench with custom geometry.
    ///
    /// # Arguments
    /// * `component_size` - Edge length of the square component footprint
    /// * `snap_threshold` - Along-axis snap distance
    /// * `align_tolerance` - Cross-axis snap band
    /// * `touch_tolerance` - Center-to-center conduction distance
    #[wasm_bindgen]
    pub fn with_config(
        component_size: f64,
        snap_threshold: f64,
        align_tolerance: f64,
        touch_tolerance: f64,
    ) -> WasmWorkbench {
        let config = EngineConfig::new()
            .with_component_size(component_size)
            .with_snap_threshold(snap_threshold)
            .with_align_tolerance(align_tolerance)
            .with_touch_tolerance(touch_tolerance);
        WasmWorkbench {
            bench: Workbench::with_config(config),
        }
    }

    /// Add a component dropped at `(x, y)` (cursor position; the tile is
    /// centered on it).
    ///
    /// # Arguments
    /// * `kind` - One of `"battery"`, `"bulb"`, `"switch"`, `"wire"`
    ///
    /// # Returns
    /// The new component's id.
    #[wasm_bindgen]
    pub fn add_component(&mut self, kind: &str, x: f64, y: f64) -> Result<u32, JsValue> {
        let kind: ComponentKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let id = self
            .bench
            .add_component(kind, Point::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(id.0 as u32)
    }

    /// Move a component to a drag candidate position, snapping when a
    /// neighbor qualifies.
    ///
    /// # Returns
    /// The resolved `[x, y]` top-left position to render.
    #[wasm_bindgen]
    pub fn drag_component(&mut self, id: u32, x: f64, y: f64) -> Result<Vec<f64>, JsValue> {
        let pos = self
            .bench
            .drag_component(ComponentId(id as usize), Point::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(vec![pos.x, pos.y])
    }

    /// Set a component's rotation in degrees. Cosmetic only.
    #[wasm_bindgen]
    pub fn rotate_component(&mut self, id: u32, degrees: f64) -> Result<(), JsValue> {
        self.bench
            .rotate_component(ComponentId(id as usize), degrees)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Flip a switch between on and off. No-op for other kinds.
    #[wasm_bindgen]
    pub fn toggle_switch(&mut self, id: u32) {
        self.bench.toggle_switch(ComponentId(id as usize));
    }

    /// Remove a component. Idempotent.
    #[wasm_bindgen]
    pub fn remove_component(&mut self, id: u32) {
        self.bench.remove_component(ComponentId(id as usize));
    }

    /// Ids of every energized component, in ascending order.
    #[wasm_bindgen]
    pub fn energized_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .bench
            .energized_ids()
            .iter()
            .map(|id| id.0 as u32)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Whether at least one bulb is lit.
    #[wasm_bindgen(getter)]
    pub fn power_active(&self) -> bool {
        self.bench.power_active()
    }

    /// Ids of components whose last drag ended in a snap, in ascending
    /// order. Presentation hint only.
    #[wasm_bindgen]
    pub fn snapped_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .bench
            .snapped_ids()
            .iter()
            .map(|id| id.0 as u32)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of live components.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> u32 {
        self.bench.store().len() as u32
    }
}

impl Default for WasmWorkbench {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default component footprint size.
#[wasm_bindgen]
pub fn default_component_size() -> f64 {
    crate::DEFAULT_COMPONENT_SIZE
}
