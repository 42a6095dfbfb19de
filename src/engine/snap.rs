//! Snap resolution: aligning a dragged component flush against a neighbor.

use crate::board::{ComponentId, PlacementStore, Point};

use super::EngineConfig;

/// Result of resolving a drag candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    /// The position to place the component at.
    pub position: Point,
    /// Whether a snap rule fired. Purely a presentation hint; connectivity
    /// never reads it.
    pub snapped: bool,
}

/// Resolve a drag candidate position against the rest of the board.
///
/// Neighbors are evaluated in store enumeration order and the first one
/// that qualifies wins; ties go to the earlier-created component, not the
/// nearer one. Offsets are measured between top-left corners.
///
/// Two rules, one axis each:
/// - horizontal (series): within `snap_threshold` along x and
///   `align_tolerance` along y, the candidate locks to the neighbor's row,
///   edge-to-edge on whichever side it approached from
/// - vertical (parallel): the symmetric rule along y
///
/// Pure and total: with no qualifying neighbor the candidate comes back
/// unchanged.
pub fn resolve_snap(
    dragged: ComponentId,
    candidate: Point,
    store: &PlacementStore,
    config: &EngineConfig,
) -> SnapOutcome {
    let size = config.component_size;

    for other in store.iter().filter(|c| c.id != dragged) {
        let dx = (candidate.x - other.position.x).abs();
        let dy = (candidate.y - other.position.y).abs();

        if dx < config.snap_threshold && dy < config.align_tolerance {
            let x = if candidate.x > other.position.x {
                other.position.x + size
            } else {
                other.position.x - size
            };
            return SnapOutcome {
                position: Point::new(x, other.position.y),
                snapped: true,
            };
        }

        if dy < config.snap_threshold && dx < config.align_tolerance {
            let y = if candidate.y > other.position.y {
                other.position.y + size
            } else {
                other.position.y - size
            };
            return SnapOutcome {
                position: Point::new(other.position.x, y),
                snapped: true,
            };
        }
    }

    SnapOutcome {
        position: candidate,
        snapped: false,
    }
}
