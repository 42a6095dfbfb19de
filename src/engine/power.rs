//! Power propagation: deriving the energized set from the current layout.

use std::collections::{HashSet, VecDeque};

use crate::board::{ComponentId, PlacementStore};
use crate::components::Component;

use super::EngineConfig;

/// Derived power state for one board snapshot.
///
/// Recomputed in full after every mutation; nothing here survives a layout
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerState {
    /// Every component reachable from a battery through conducting contact.
    pub energized: HashSet<ComponentId>,
    /// Whether at least one bulb is energized.
    pub power_active: bool,
}

impl PowerState {
    /// Whether the given component is energized.
    pub fn is_energized(&self, id: ComponentId) -> bool {
        self.energized.contains(&id)
    }
}

/// Adjacency predicate: two components conduct into each other when their
/// centers are within `touch_tolerance`.
///
/// Symmetric, and evaluated on current positions only; snap history is
/// irrelevant to connectivity.
pub fn touching(a: &Component, b: &Component, touch_tolerance: f64) -> bool {
    a.center().distance_to(b.center()) < touch_tolerance
}

/// Compute the energized set for the current store snapshot.
///
/// Breadth-first traversal seeded with every battery at once. An open
/// switch blocks propagation through itself and is itself left unenergized;
/// there is no "energized up to but not through". Each component is
/// enqueued at most once, so the walk is O(N) dequeues and O(N²) adjacency
/// checks, fine at interactive rates for a canvas of tens of components.
///
/// The result is a pure function of positions and states: traversal order
/// affects when a component is discovered, never whether.
pub fn propagate(store: &PlacementStore, config: &EngineConfig) -> PowerState {
    let mut energized: HashSet<ComponentId> = store
        .iter()
        .filter(|c| c.is_source())
        .map(|c| c.id)
        .collect();

    // No batteries: nothing can be live.
    if energized.is_empty() {
        return PowerState::default();
    }

    let mut queue: VecDeque<ComponentId> = energized.iter().copied().collect();

    while let Some(current_id) = queue.pop_front() {
        let current = match store.get(current_id) {
            Some(c) => c,
            None => continue,
        };
        for target in store.iter() {
            if target.id == current_id || energized.contains(&target.id) {
                continue;
            }
            if !touching(current, target, config.touch_tolerance) {
                continue;
            }
            if !target.conducts() {
                continue;
            }
            energized.insert(target.id);
            queue.push_back(target.id);
        }
    }

    let power_active = store
        .iter()
        .any(|c| c.is_bulb() && energized.contains(&c.id));

    PowerState {
        energized,
        power_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Point;
    use crate::components::ComponentKind;

    const SIZE: f64 = 100.0;

    fn place(store: &mut PlacementStore, kind: ComponentKind, x: f64, y: f64) -> ComponentId {
        store.insert(kind, Point::new(x, y), SIZE)
    }

    #[test]
    fn test_no_batteries_means_no_power() {
        let mut store = PlacementStore::new();
        place(&mut store, ComponentKind::Wire, 0.0, 0.0);
        place(&mut store, ComponentKind::Bulb, 100.0, 0.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.energized.is_empty());
        assert!(!state.power_active);
    }

    #[test]
    fn test_simple_series_chain() {
        let mut store = PlacementStore::new();
        let battery = place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        let wire = place(&mut store, ComponentKind::Wire, 100.0, 0.0);
        let bulb = place(&mut store, ComponentKind::Bulb, 200.0, 0.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(battery));
        assert!(state.is_energized(wire));
        assert!(state.is_energized(bulb));
        assert!(state.power_active);
    }

    #[test]
    fn test_gap_breaks_the_chain() {
        let mut store = PlacementStore::new();
        let battery = place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        let bulb = place(&mut store, ComponentKind::Bulb, 250.0, 0.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(battery));
        assert!(!state.is_energized(bulb));
        assert!(!state.power_active);
    }

    #[test]
    fn test_open_switch_blocks_and_stays_dark() {
        let mut store = PlacementStore::new();
        let battery = place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        let wire = place(&mut store, ComponentKind::Wire, 100.0, 0.0);
        let sw = place(&mut store, ComponentKind::Switch, 200.0, 0.0);
        let bulb = place(&mut store, ComponentKind::Bulb, 300.0, 0.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(battery));
        assert!(state.is_energized(wire));
        assert!(!state.is_energized(sw));
        assert!(!state.is_energized(bulb));
        assert!(!state.power_active);

        store.toggle_switch(sw);
        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(sw));
        assert!(state.is_energized(bulb));
        assert!(state.power_active);
    }

    #[test]
    fn test_battery_alone_is_energized_but_inactive() {
        let mut store = PlacementStore::new();
        let battery = place(&mut store, ComponentKind::Battery, 0.0, 0.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(battery));
        assert!(!state.power_active);
    }

    #[test]
    fn test_touching_without_snap_history_conducts() {
        let mut store = PlacementStore::new();
        let battery = place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        // Hand-placed at an odd offset, centers 104.4 apart: still touching.
        let bulb = place(&mut store, ComponentKind::Bulb, 102.0, 22.0);

        let state = propagate(&store, &EngineConfig::default());
        assert!(state.is_energized(battery));
        assert!(state.is_energized(bulb));
        assert!(state.power_active);
    }

    #[test]
    fn test_multiple_batteries_all_seed() {
        let mut store = PlacementStore::new();
        let b1 = place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        let bulb1 = place(&mut store, ComponentKind::Bulb, 100.0, 0.0);
        let b2 = place(&mut store, ComponentKind::Battery, 600.0, 600.0);
        let bulb2 = place(&mut store, ComponentKind::Bulb, 700.0, 600.0);

        let state = propagate(&store, &EngineConfig::default());
        for id in [b1, bulb1, b2, bulb2] {
            assert!(state.is_energized(id));
        }
        assert!(state.power_active);
    }

    #[test]
    fn test_propagation_is_idempotent() {
        let mut store = PlacementStore::new();
        place(&mut store, ComponentKind::Battery, 0.0, 0.0);
        place(&mut store, ComponentKind::Switch, 100.0, 0.0);
        place(&mut store, ComponentKind::Bulb, 200.0, 0.0);

        let config = EngineConfig::default();
        let first = propagate(&store, &config);
        let second = propagate(&store, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_order_independence() {
        // Same layout inserted in two different orders must classify every
        // position identically.
        let layout = [
            (ComponentKind::Battery, 0.0, 0.0),
            (ComponentKind::Wire, 100.0, 0.0),
            (ComponentKind::Wire, 200.0, 0.0),
            (ComponentKind::Bulb, 300.0, 0.0),
            (ComponentKind::Bulb, 500.0, 500.0),
        ];

        let config = EngineConfig::default();
        let energized_by_position = |order: &[usize]| {
            let mut store = PlacementStore::new();
            let mut ids = Vec::new();
            for &i in order {
                let (kind, x, y) = layout[i];
                ids.push((i, place(&mut store, kind, x, y)));
            }
            let state = propagate(&store, &config);
            let mut flags: Vec<(usize, bool)> = ids
                .into_iter()
                .map(|(i, id)| (i, state.is_energized(id)))
                .collect();
            flags.sort();
            flags
        };

        let forward = energized_by_position(&[0, 1, 2, 3, 4]);
        let shuffled = energized_by_position(&[4, 2, 0, 3, 1]);
        assert_eq!(forward, shuffled);
    }
}
