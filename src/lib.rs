//! # Breadboard Core
//!
//! The connectivity and power-propagation engine behind a drag-and-drop
//! circuit builder.
//!
//! This library provides:
//! - An authoritative placement store for components on a 2-D canvas
//! - A snap resolver that locks a dragged component flush against a
//!   near-neighbor, making contact deterministic and visually clean
//! - A power propagator that derives, after every edit, which components
//!   are reachable from a battery and whether any bulb is lit
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`board`] - Component identifiers, geometry, and the placement store
//! - [`components`] - The component model (battery, bulb, switch, wire)
//! - [`engine`] - Snap resolution, power propagation, and the [`Workbench`]
//!   facade a presentation layer drives
//!
//! ## Usage
//!
//! ```
//! use breadboard_core::{ComponentKind, Point, Workbench};
//!
//! let mut bench = Workbench::new();
//! let battery = bench.add_component(ComponentKind::Battery, Point::new(50.0, 50.0))?;
//! let bulb = bench.add_component(ComponentKind::Bulb, Point::new(150.0, 50.0))?;
//!
//! assert!(bench.power_active());
//! assert!(bench.energized_ids().contains(&bulb));
//! # Ok::<(), breadboard_core::BreadboardError>(())
//! ```
//!
//! ## Model
//!
//! This is a boolean reachability model, not a circuit solver: no
//! resistance, no voltage, no current direction. Two components conduct
//! into each other when their centers are within [`DEFAULT_TOUCH_TOLERANCE`]
//! of each other, and an open switch blocks propagation through itself.
//! The energized set is re-derived in full after every mutation; nothing is
//! cached between calls.

pub mod board;
pub mod components;
pub mod engine;
pub mod error;

// Re-export main types for convenience
pub use board::{ComponentId, PlacementStore, Point};
pub use components::{Component, ComponentKind, SwitchState};
pub use engine::{propagate, EngineConfig, PowerState, Workbench};
pub use error::{BreadboardError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmWorkbench;

/// Default edge length of a component's square footprint, in canvas units.
pub const DEFAULT_COMPONENT_SIZE: f64 = 100.0;

/// Default maximum along-axis distance for a snap to fire.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 60.0;

/// Default maximum cross-axis offset for a snap to fire.
pub const DEFAULT_ALIGN_TOLERANCE: f64 = 30.0;

/// Default maximum center-to-center distance at which two components
/// conduct. Slightly more than one edge length, so flush contact counts
/// but mere proximity does not.
pub const DEFAULT_TOUCH_TOLERANCE: f64 = 105.0;
