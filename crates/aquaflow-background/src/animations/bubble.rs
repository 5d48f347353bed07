//! Rising bubbles with a sinusoidal wobble.

use std::f64::consts::TAU;

use aquaflow_core::{AquaParams, Point, Surface, Viewport};
use rand::Rng;

use super::{Spawn, unit};
use crate::force::proximity;
use crate::palette::BUBBLE;

/// Distance below the bottom edge where recycled bubbles reappear.
const SPAWN_MARGIN: f64 = 20.0;

/// Horizontal wobble amplitude per frame.
const WOBBLE_AMPLITUDE: f64 = 1.5;

/// Wobble cycles per world unit of height.
const WOBBLE_FREQUENCY: f64 = 0.015;

/// State for a single bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, always negative (rising).
    pub vy: f64,
    /// Radius.
    pub size: f64,
    /// Phase offset so neighbours don't wobble in step.
    pub wobble_offset: f64,
    pub alpha: f64,
}

impl Bubble {
    /// Create a bubble somewhere inside the viewport.
    pub fn new(rng: &mut impl Rng, viewport: Viewport) -> Self {
        let mut bubble = Self {
            x: 0.0,
            y: 0.0,
            vy: 0.0,
            size: 0.0,
            wobble_offset: 0.0,
            alpha: 0.0,
        };
        bubble.reset(rng, viewport, Spawn::Anywhere);
        bubble
    }

    /// Re-randomize every field.
    pub fn reset(&mut self, rng: &mut impl Rng, viewport: Viewport, spawn: Spawn) {
        self.x = unit(rng) * viewport.width;
        self.y = match spawn {
            Spawn::Anywhere => unit(rng) * viewport.height,
            Spawn::Below => viewport.height + SPAWN_MARGIN,
        };
        self.vy = -(unit(rng) * 2.0 + 0.5);
        self.size = unit(rng) * 10.0 + 3.0;
        self.wobble_offset = unit(rng) * TAU;
        self.alpha = unit(rng) * 0.2 + 0.1;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Height above which the bubble is recycled.
    pub fn exit_line(&self) -> f64 {
        -self.size * 2.0
    }

    /// Advance one frame.
    pub fn step(
        &mut self,
        rng: &mut impl Rng,
        viewport: Viewport,
        pointer: Option<Point>,
        params: &AquaParams,
    ) {
        self.y += self.vy;
        self.x += (self.y * WOBBLE_FREQUENCY + self.wobble_offset).sin() * WOBBLE_AMPLITUDE;

        // Pushed away from the pointer
        if let Some(p) = proximity(pointer, self.position(), params.mouse_radius) {
            self.x -= p.dir_x * p.strength * params.mouse_force;
            self.y -= p.dir_y * p.strength * params.mouse_force;
        }

        if self.y < self.exit_line() {
            self.reset(rng, viewport, Spawn::Below);
        }
    }

    /// Draw the bubble and its specular highlight.
    pub fn render(&self, surface: &mut impl Surface) {
        surface.save();
        surface.fill_circle(self.position(), self.size, BUBBLE.with_alpha(self.alpha));

        let highlight = Point::new(self.x - self.size * 0.3, self.y - self.size * 0.3);
        surface.fill_circle(highlight, self.size * 0.2, BUBBLE.with_alpha(self.alpha + 0.4));
        surface.restore();
    }
}
