//! Slowly rising, spinning water bottles.

use std::f64::consts::TAU;

use aquaflow_core::{AquaParams, CornerRadii, Point, Rect, Surface, Viewport};
use rand::Rng;

use super::{Spawn, unit};
use crate::force::proximity;
use crate::palette::{
    BOTTLE_ACCENT, BOTTLE_BODY, BOTTLE_CAP, BOTTLE_EDGE, BOTTLE_LABEL, BOTTLE_WATER,
};

/// Distance below the bottom edge where recycled bottles reappear.
const SPAWN_MARGIN: f64 = 100.0;

/// Height to width ratio of the bottle body.
const ASPECT: f64 = 2.8;

/// State for a single bottle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bottle {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity, always negative (rising).
    pub vy: f64,
    /// Rotation in radians.
    pub angle: f64,
    /// Radians added to `angle` per frame.
    pub rotation_speed: f64,
    pub width: f64,
    pub height: f64,
    pub alpha: f64,
}

impl Bottle {
    /// Create a bottle somewhere inside the viewport.
    pub fn new(rng: &mut impl Rng, viewport: Viewport) -> Self {
        let mut bottle = Self {
            x: 0.0,
            y: 0.0,
            vy: 0.0,
            angle: 0.0,
            rotation_speed: 0.0,
            width: 0.0,
            height: 0.0,
            alpha: 0.0,
        };
        bottle.reset(rng, viewport, Spawn::Anywhere);
        bottle
    }

    /// Re-randomize every field.
    pub fn reset(&mut self, rng: &mut impl Rng, viewport: Viewport, spawn: Spawn) {
        self.x = unit(rng) * viewport.width;
        self.y = match spawn {
            Spawn::Anywhere => unit(rng) * viewport.height,
            Spawn::Below => viewport.height + SPAWN_MARGIN,
        };
        self.vy = -(unit(rng) * 1.0 + 0.3);
        self.width = unit(rng) * 15.0 + 15.0;
        self.height = self.width * ASPECT;
        self.angle = unit(rng) * TAU;
        self.rotation_speed = (unit(rng) - 0.5) * 0.03;
        self.alpha = unit(rng) * 0.2 + 0.15;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Height above which the bottle is recycled.
    pub fn exit_line(&self) -> f64 {
        -self.height * 2.0
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
        self.angle += self.rotation_speed;

        if let Some(p) = proximity(pointer, self.position(), params.mouse_radius) {
            let push = p.strength * params.mouse_force * params.bottle_force_scale;
            self.x -= p.dir_x * push;
            self.y -= p.dir_y * push;
        }

        if self.y < self.exit_line() {
            self.reset(rng, viewport, Spawn::Below);
        }
    }

    /// Draw body, water, cap and label, rotated about the bottle centre.
    pub fn render(&self, surface: &mut impl Surface) {
        let w = self.width;
        let h = self.height;
        let r = w * 0.2;
        let a = self.alpha;

        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.angle);

        let body = Rect::new(-w / 2.0, -h / 2.0, w, h);
        surface.fill_round_rect(body, CornerRadii::uniform(r), BOTTLE_BODY.with_alpha(a));
        surface.stroke_round_rect(
            body,
            CornerRadii::uniform(r),
            BOTTLE_EDGE.with_alpha(a + 0.2),
            1.5,
        );

        // Lower half is filled with water
        surface.fill_round_rect(
            Rect::new(-w / 2.0 + 2.0, 0.0, w - 4.0, h / 2.0 - 2.0),
            CornerRadii::new(0.0, 0.0, r - 2.0, r - 2.0),
            BOTTLE_WATER.with_alpha(a * 0.9),
        );

        surface.fill_round_rect(
            Rect::new(-w * 0.3, -h / 2.0 - h * 0.1, w * 0.6, h * 0.1),
            CornerRadii::uniform(2.0),
            BOTTLE_CAP,
        );

        surface.fill_rect(
            Rect::new(-w / 2.0 + 1.0, -h * 0.1, w - 2.0, h * 0.25),
            BOTTLE_LABEL.with_alpha(a + 0.5),
        );
        surface.fill_rect(
            Rect::new(-w * 0.2, -h * 0.02, w * 0.4, 2.0),
            BOTTLE_ACCENT.with_alpha(a),
        );

        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaflow_core::{DrawCommand, DrawList, Transform};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEW: Viewport = Viewport::new(1000.0, 800.0);

    #[test]
    fn test_new_bottle_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let b = Bottle::new(&mut rng, VIEW);
            assert!(b.width >= 15.0 && b.width < 30.0);
            assert!((b.height - b.width * ASPECT).abs() < 1e-9);
            assert!(b.vy <= -0.3 && b.vy > -1.3);
            assert!(b.rotation_speed.abs() <= 0.015);
            assert!(b.alpha >= 0.15 && b.alpha < 0.35);
        }
    }

    #[test]
    fn test_recycles_with_taller_margin() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut b = Bottle::new(&mut rng, VIEW);
        b.y = b.exit_line() + 0.5;
        b.vy = -1.0;
        b.step(&mut rng, VIEW, None, &AquaParams::default());
        assert_eq!(b.y, VIEW.height + SPAWN_MARGIN);
    }

    #[test]
    fn test_never_stays_above_exit_line() {
        let mut rng = StdRng::seed_from_u64(8);
        let params = AquaParams::default();
        let mut bottles: Vec<Bottle> = (0..10).map(|_| Bottle::new(&mut rng, VIEW)).collect();
        for _ in 0..3_000 {
            for b in &mut bottles {
                b.step(&mut rng, VIEW, None, &params);
                assert!(b.y >= b.exit_line());
            }
        }
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut b = Bottle::new(&mut rng, VIEW);
        b.y = 400.0;
        b.angle = 1.0;
        b.rotation_speed = 0.01;
        b.step(&mut rng, VIEW, None, &AquaParams::default());
        assert!((b.angle - 1.01).abs() < 1e-12);
    }

    #[test]
    fn test_push_is_scaled_down() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut b = Bottle::new(&mut rng, VIEW);
        b.x = 500.0;
        b.y = 400.0;
        b.vy = 0.0;
        let params = AquaParams::default();
        b.step(&mut rng, VIEW, Some(Point::new(500.0, 300.0)), &params);
        let expected = 0.5 * params.mouse_force * params.bottle_force_scale;
        assert!((b.y - (400.0 + expected)).abs() < 1e-9);
        assert_eq!(b.x, 500.0);
    }

    #[test]
    fn test_render_shapes_share_bottle_transform() {
        let mut rng = StdRng::seed_from_u64(10);
        let b = Bottle::new(&mut rng, VIEW);
        let mut list = DrawList::new();
        b.render(&mut list);

        // body fill, body outline, water, cap, label, accent
        assert_eq!(list.len(), 6);
        let expected = Transform::IDENTITY.translated(b.x, b.y).rotated(b.angle);
        for command in list.commands() {
            match command {
                DrawCommand::RoundRect { transform, .. } => assert_eq!(*transform, expected),
                other => panic!("unexpected command {other:?}"),
            }
        }
        assert_eq!(list.transform(), Transform::IDENTITY);
    }
}
