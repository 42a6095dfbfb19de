//! Component models for the breadboard.
//!
//! Components are square tiles placed freely on a canvas. Four kinds exist:
//! - [`ComponentKind::Battery`] - power source, seeds propagation
//! - [`ComponentKind::Bulb`] - load, lights up when energized
//! - [`ComponentKind::Switch`] - conducts only when toggled on
//! - [`ComponentKind::Wire`] - plain conductor
//!
//! Whether a kind gates propagation is a property of the variant
//! ([`Component::conducts`]), not a string comparison in the traversal.

use std::fmt;
use std::str::FromStr;

use crate::board::{ComponentId, Point};

/// The kind of a component, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Battery,
    Bulb,
    Switch,
    Wire,
}

impl ComponentKind {
    /// Lower-case name, as used by the CLI script and WASM bindings.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Battery => "battery",
            ComponentKind::Bulb => "bulb",
            ComponentKind::Switch => "switch",
            ComponentKind::Wire => "wire",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "battery" => Ok(ComponentKind::Battery),
            "bulb" => Ok(ComponentKind::Bulb),
            "switch" => Ok(ComponentKind::Switch),
            "wire" => Ok(ComponentKind::Wire),
            other => Err(format!("unknown component kind '{other}'")),
        }
    }
}

/// Conduction state, meaningful only for switches.
///
/// Non-switch kinds carry `On` and propagation never reads it for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::On,
        }
    }
}

/// A component placed on the board.
#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Top-left corner in canvas-local coordinates.
    pub position: Point,
    /// Cosmetic rotation in degrees, normalized to `[-180, 180)`.
    /// Never read by connectivity.
    pub rotation: f64,
    pub state: SwitchState,
    /// Edge length of the square footprint.
    pub size: f64,
}

impl Component {
    /// Create a new component at a top-left position.
    ///
    /// Switches start open; every other kind starts conducting.
    pub fn new(id: ComponentId, kind: ComponentKind, position: Point, size: f64) -> Self {
        let state = match kind {
            ComponentKind::Switch => SwitchState::Off,
            _ => SwitchState::On,
        };
        Self {
            id,
            kind,
            position,
            rotation: 0.0,
            state,
            size,
        }
    }

    /// Geometric center of the footprint.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size / 2.0,
            self.position.y + self.size / 2.0,
        )
    }

    /// Whether current may pass through this component.
    ///
    /// Only an open switch blocks; every other kind always conducts.
    pub fn conducts(&self) -> bool {
        match self.kind {
            ComponentKind::Switch => self.state == SwitchState::On,
            _ => true,
        }
    }

    /// Whether this component seeds power propagation.
    pub fn is_source(&self) -> bool {
        self.kind == ComponentKind::Battery
    }

    /// Whether this component is a bulb.
    pub fn is_bulb(&self) -> bool {
        self.kind == ComponentKind::Bulb
    }

    /// Flip the switch state. No-op for non-switch kinds.
    pub fn toggle(&mut self) {
        if self.kind == ComponentKind::Switch {
            self.state = self.state.toggled();
        }
    }

    /// Set the rotation, normalized into `[-180, 180)`.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = normalize_degrees(degrees);
    }
}

/// Normalize an angle in degrees into `[-180, 180)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}
