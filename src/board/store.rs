//! The placement store: the authoritative set of live components.

use crate::board::{ComponentId, Point};
use crate::components::{Component, ComponentKind};

/// Owns the mutable collection of components on the canvas.
///
/// Components are kept in creation order, which fixes the enumeration order
/// the snap resolver's first-match rule depends on. Ids are assigned from a
/// monotonic counter and never reused, so uniqueness holds structurally.
///
/// Everything else in the engine treats this store as the single source of
/// truth; no component data is cached elsewhere.
#[derive(Debug, Default)]
pub struct PlacementStore {
    components: Vec<Component>,
    next_id: usize,
}

impl PlacementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new component and return its assigned id.
    ///
    /// `position` is the top-left corner; `size` is the square edge length.
    pub fn insert(&mut self, kind: ComponentKind, position: Point, size: f64) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        self.components.push(Component::new(id, kind, position, size));
        id
    }

    /// Remove a component. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: ComponentId) {
        self.components.retain(|c| c.id != id);
    }

    /// Update a component's position. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: ComponentId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(c) => {
                c.position = position;
                true
            }
            None => false,
        }
    }

    /// Update a component's rotation (normalized). Returns false if the id
    /// is unknown.
    pub fn set_rotation(&mut self, id: ComponentId, degrees: f64) -> bool {
        match self.get_mut(id) {
            Some(c) => {
                c.set_rotation(degrees);
                true
            }
            None => false,
        }
    }

    /// Flip a switch's state. Returns false if the id is unknown or the
    /// component is not a switch.
    pub fn toggle_switch(&mut self, id: ComponentId) -> bool {
        match self.get_mut(id) {
            Some(c) if c.kind == ComponentKind::Switch => {
                c.toggle();
                true
            }
            _ => false,
        }
    }

    /// Look up a component by id.
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Look up a component by id, mutably.
    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Whether a component with this id is live.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over all live components in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
