//! Board representation: identifiers, geometry, and the placement store.
//!
//! The [`PlacementStore`] is the single source of truth for component
//! positions and states; the snap resolver and power propagator both read
//! from it at query time and never cache component data.

mod store;
mod types;

pub use store::PlacementStore;
pub use types::{ComponentId, Point};
