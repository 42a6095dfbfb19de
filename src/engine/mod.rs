//! The connectivity engine: snapping, power propagation, and the workbench
//! facade the presentation layer drives.

mod power;
mod snap;
mod workbench;

pub use power::{propagate, touching, PowerState};
pub use snap::{resolve_snap, SnapOutcome};
pub use workbench::Workbench;

use crate::{
    DEFAULT_ALIGN_TOLERANCE, DEFAULT_COMPONENT_SIZE, DEFAULT_SNAP_THRESHOLD,
    DEFAULT_TOUCH_TOLERANCE,
};

/// Geometric tuning for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Edge length of every component's square footprint.
    pub component_size: f64,
    /// Maximum along-axis distance at which a dragged component snaps to a
    /// neighbor.
    pub snap_threshold: f64,
    /// Maximum cross-axis offset for a snap to fire. Much tighter than
    /// `snap_threshold`, so snapping only triggers when the component is
    /// already nearly co-linear with the neighbor.
    pub align_tolerance: f64,
    /// Maximum center-to-center distance at which two components conduct.
    /// Sized just above one edge length, so flush contact qualifies but
    /// mere proximity does not.
    pub touch_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            component_size: DEFAULT_COMPONENT_SIZE,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            align_tolerance: DEFAULT_ALIGN_TOLERANCE,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component footprint edge length.
    pub fn with_component_size(mut self, component_size: f64) -> Self {
        self.component_size = component_size;
        self
    }

    /// Set the snap threshold.
    pub fn with_snap_threshold(mut self, snap_threshold: f64) -> Self {
        self.snap_threshold = snap_threshold;
        self
    }

    /// Set the alignment tolerance.
    pub fn with_align_tolerance(mut self, align_tolerance: f64) -> Self {
        self.align_tolerance = align_tolerance;
        self
    }

    /// Set the touch tolerance.
    pub fn with_touch_tolerance(mut self, touch_tolerance: f64) -> Self {
        self.touch_tolerance = touch_tolerance;
        self
    }
}
