//! Core types shared by the aquaflow crates.

mod color;
mod geometry;
mod surface;

pub use color::Rgba;
pub use geometry::{CornerRadii, Point, Rect, Transform};
pub use surface::{DrawCommand, DrawList, Surface};

use serde::{Deserialize, Serialize};

/// Size of the simulated area in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in square world units. Negative sizes count as empty.
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// Last known pointer position, unset while the pointer is outside the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    position: Option<Point>,
}

impl Pointer {
    pub fn set(&mut self, position: Point) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Which animation is playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Floating bottles beneath rising bubbles.
    #[default]
    Aqua,
    /// Drifting nodes joined by proximity lines.
    Network,
}

impl SceneKind {
    /// Cycle to the next scene.
    pub fn next(self) -> Self {
        match self {
            SceneKind::Aqua => SceneKind::Network,
            SceneKind::Network => SceneKind::Aqua,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Aqua => "aqua",
            SceneKind::Network => "network",
        }
    }
}

/// Tunables for the bubble and bottle scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AquaParams {
    /// Square world units per bubble.
    pub bubble_density: f64,
    /// Square world units per bottle.
    pub bottle_density: f64,
    /// Pointer influence radius.
    pub mouse_radius: f64,
    /// Displacement per frame at the pointer centre.
    pub mouse_force: f64,
    /// Bottles are pushed by this fraction of the bubble force.
    pub bottle_force_scale: f64,
}

impl Default for AquaParams {
    fn default() -> Self {
        Self {
            bubble_density: 10_000.0,
            bottle_density: 100_000.0,
            mouse_radius: 200.0,
            mouse_force: 3.0,
            bottle_force_scale: 0.6,
        }
    }
}

/// Tunables for the particle network scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkParams {
    /// Square world units per node.
    pub density: f64,
    /// Maximum distance at which two nodes are linked.
    pub link_radius: f64,
    /// Pointer influence radius.
    pub mouse_radius: f64,
    /// Velocity gained per frame at the pointer centre.
    pub mouse_force: f64,
    /// Spread of the initial velocity on each axis.
    pub default_speed: f64,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            density: 9_000.0,
            link_radius: 150.0,
            mouse_radius: 200.0,
            mouse_force: 0.05,
            default_speed: 1.0,
        }
    }
}
