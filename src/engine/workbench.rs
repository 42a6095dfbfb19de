//! The workbench: the facade the presentation layer drives.

use std::collections::HashSet;

use crate::board::{ComponentId, PlacementStore, Point};
use crate::components::{Component, ComponentKind};
use crate::error::{BreadboardError, Result};

use super::{propagate, resolve_snap, EngineConfig, PowerState};

/// Owns the placement store and keeps the derived power state current.
///
/// Every mutating call re-derives the energized set from scratch; there is
/// no incremental graph state between calls, so a caller that throttles
/// drag events to one per frame sees the same final state as one that
/// forwards every pointer move. All methods run synchronously on the
/// caller's thread.
///
/// Unknown ids are tolerated everywhere (a removal can race a queued UI
/// event); non-finite geometry is rejected before it reaches the store.
#[derive(Debug, Default)]
pub struct Workbench {
    store: PlacementStore,
    config: EngineConfig,
    power: PowerState,
    snapped: HashSet<ComponentId>,
}

impl Workbench {
    /// Create an empty workbench with default geometry.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an empty workbench with custom geometry.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            store: PlacementStore::new(),
            config,
            power: PowerState::default(),
            snapped: HashSet::new(),
        }
    }

    /// Add a component dropped at `drop_point` (the cursor position).
    ///
    /// The stored position is centered on the drop point, matching how a
    /// palette drop should land under the cursor.
    pub fn add_component(&mut self, kind: ComponentKind, drop_point: Point) -> Result<ComponentId> {
        if !drop_point.is_finite() {
            return Err(BreadboardError::non_finite_position(
                drop_point.x,
                drop_point.y,
            ));
        }
        let half = self.config.component_size / 2.0;
        let top_left = Point::new(drop_point.x - half, drop_point.y - half);
        let id = self.store.insert(kind, top_left, self.config.component_size);
        self.recompute();
        Ok(id)
    }

    /// Move a component to a drag candidate position, snapping it against a
    /// near-neighbor when one qualifies. Returns the position to render.
    ///
    /// An unknown id leaves the board untouched and echoes the candidate
    /// back.
    pub fn drag_component(&mut self, id: ComponentId, candidate: Point) -> Result<Point> {
        if !candidate.is_finite() {
            return Err(BreadboardError::non_finite_position(candidate.x, candidate.y));
        }
        if !self.store.contains(id) {
            return Ok(candidate);
        }

        let outcome = resolve_snap(id, candidate, &self.store, &self.config);
        self.store.set_position(id, outcome.position);
        if outcome.snapped {
            self.snapped.insert(id);
        } else {
            self.snapped.remove(&id);
        }
        self.recompute();
        Ok(outcome.position)
    }

    /// Set a component's rotation. Cosmetic only; no snapping applies.
    pub fn rotate_component(&mut self, id: ComponentId, degrees: f64) -> Result<()> {
        if !degrees.is_finite() {
            return Err(BreadboardError::non_finite_rotation(id, degrees));
        }
        self.store.set_rotation(id, degrees);
        Ok(())
    }

    /// Flip a switch between on and off. No-op for unknown ids and for
    /// non-switch components.
    pub fn toggle_switch(&mut self, id: ComponentId) {
        if self.store.toggle_switch(id) {
            self.recompute();
        }
    }

    /// Remove a component. Idempotent.
    pub fn remove_component(&mut self, id: ComponentId) {
        self.store.remove(id);
        self.snapped.remove(&id);
        self.recompute();
    }

    /// Re-derive the power state from the current layout.
    ///
    /// Called internally after every mutation; public so a caller batching
    /// its own updates can refresh explicitly. Idempotent.
    pub fn recompute(&mut self) {
        self.power = propagate(&self.store, &self.config);
    }

    /// Ids of every energized component.
    pub fn energized_ids(&self) -> &HashSet<ComponentId> {
        &self.power.energized
    }

    /// Whether at least one bulb is lit.
    pub fn power_active(&self) -> bool {
        self.power.power_active
    }

    /// Ids of components whose last drag ended in a snap. Presentation hint
    /// only; connectivity never reads this.
    pub fn snapped_ids(&self) -> &HashSet<ComponentId> {
        &self.snapped
    }

    /// The underlying placement store.
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.store.get(id)
    }

    /// The geometry configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
