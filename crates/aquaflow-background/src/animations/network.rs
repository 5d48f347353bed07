//! Particle network: drifting nodes linked by fading lines.

use aquaflow_core::{NetworkParams, Point, Surface, Viewport};
use rand::Rng;

use super::unit;
use crate::force::proximity;
use crate::palette::{LINK, NODE};

/// Width of a link line.
const LINK_WIDTH: f64 = 1.0;

/// State for a single network node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius.
    pub size: f64,
}

impl Node {
    /// Create a node somewhere inside the viewport.
    pub fn new(rng: &mut impl Rng, viewport: Viewport, params: &NetworkParams) -> Self {
        let mut node = Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 0.0,
        };
        node.reset(rng, viewport, params);
        node
    }

    /// Re-randomize every field.
    pub fn reset(&mut self, rng: &mut impl Rng, viewport: Viewport, params: &NetworkParams) {
        self.x = unit(rng) * viewport.width;
        self.y = unit(rng) * viewport.height;
        self.vx = (unit(rng) - 0.5) * params.default_speed;
        self.vy = (unit(rng) - 0.5) * params.default_speed;
        self.size = unit(rng) * 2.0 + 1.0;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance one frame: drift, bounce off the edges, then lean toward the pointer.
    pub fn step(&mut self, viewport: Viewport, pointer: Option<Point>, params: &NetworkParams) {
        self.x += self.vx;
        self.y += self.vy;

        // Position is not clamped, so a node may overshoot by up to one step
        if self.x < 0.0 || self.x > viewport.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > viewport.height {
            self.vy = -self.vy;
        }

        if let Some(p) = proximity(pointer, self.position(), params.mouse_radius) {
            self.vx += p.dir_x * p.strength * params.mouse_force;
            self.vy += p.dir_y * p.strength * params.mouse_force;
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.fill_circle(self.position(), self.size, NODE);
    }
}

/// Opacity of the link between two points, or `None` when they are too far apart.
///
/// Falls off linearly from 1 at distance 0 to 0 at `link_radius`.
pub fn link_opacity(a: Point, b: Point, link_radius: f64) -> Option<f64> {
    let distance_sq = a.distance_squared(b);
    if !(distance_sq < link_radius * link_radius) {
        return None;
    }
    let opacity = 1.0 - distance_sq.sqrt() / link_radius;
    (opacity > 0.0).then_some(opacity)
}

/// Draw a line between every pair of nodes closer than `link_radius`.
///
/// Quadratic in the node count; pools are kept small by the density divisor.
pub fn render_links(nodes: &[Node], link_radius: f64, surface: &mut impl Surface) {
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if let Some(opacity) = link_opacity(a.position(), b.position(), link_radius) {
                surface.stroke_line(
                    a.position(),
                    b.position(),
                    LINK.with_alpha(opacity),
                    LINK_WIDTH,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaflow_core::{DrawCommand, DrawList};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const VIEW: Viewport = Viewport::new(1000.0, 800.0);

    fn node_at(x: f64, y: f64, vx: f64, vy: f64) -> Node {
        Node {
            x,
            y,
            vx,
            vy,
            size: 2.0,
        }
    }

    #[test]
    fn test_new_node_ranges() {
        let mut rng = StdRng::seed_from_u64(12);
        let params = NetworkParams::default();
        for _ in 0..200 {
            let n = Node::new(&mut rng, VIEW, &params);
            assert!((0.0..1000.0).contains(&n.x));
            assert!((0.0..800.0).contains(&n.y));
            assert!(n.vx.abs() <= 0.5 && n.vy.abs() <= 0.5);
            assert!(n.size >= 1.0 && n.size < 3.0);
        }
    }

    #[test]
    fn test_bounce_on_right_edge() {
        let params = NetworkParams::default();
        let mut n = node_at(999.5, 400.0, 1.0, 0.0);
        n.step(VIEW, None, &params);
        assert_eq!(n.x, 1000.5);
        assert_eq!(n.vx, -1.0);
        n.step(VIEW, None, &params);
        assert_eq!(n.x, 999.5);
        assert_eq!(n.vx, -1.0);
    }

    #[test]
    fn test_bounce_on_top_edge() {
        let params = NetworkParams::default();
        let mut n = node_at(500.0, 0.25, 0.0, -0.5);
        n.step(VIEW, None, &params);
        assert_eq!(n.y, -0.25);
        assert_eq!(n.vy, 0.5);
    }

    #[test]
    fn test_bounce_on_left_edge() {
        let params = NetworkParams::default();
        let mut n = node_at(0.25, 400.0, -0.5, 0.0);
        n.step(VIEW, None, &params);
        assert_eq!(n.x, -0.25);
        assert_eq!(n.vx, 0.5);
        n.step(VIEW, None, &params);
        assert_eq!(n.x, 0.25);
        assert_eq!(n.vx, 0.5);
    }

    #[test]
    fn test_bounce_on_bottom_edge() {
        let params = NetworkParams::default();
        let mut n = node_at(500.0, 799.5, 0.0, 1.0);
        n.step(VIEW, None, &params);
        assert_eq!(n.y, 800.5);
        assert_eq!(n.vy, -1.0);
        assert_eq!(n.vx, 0.0);
    }

    #[test]
    fn test_no_flip_inside() {
        let params = NetworkParams::default();
        let mut n = node_at(500.0, 400.0, 0.3, -0.2);
        n.step(VIEW, None, &params);
        assert_eq!((n.vx, n.vy), (0.3, -0.2));
    }

    #[test]
    fn test_stays_near_viewport() {
        let mut rng = StdRng::seed_from_u64(99);
        let params = NetworkParams::default();
        let mut nodes: Vec<Node> = (0..30).map(|_| Node::new(&mut rng, VIEW, &params)).collect();
        for _ in 0..5_000 {
            for n in &mut nodes {
                n.step(VIEW, None, &params);
                assert!(n.x >= -1.0 && n.x <= VIEW.width + 1.0);
                assert!(n.y >= -1.0 && n.y <= VIEW.height + 1.0);
            }
        }
    }

    #[test]
    fn test_attracted_to_pointer() {
        let params = NetworkParams::default();
        let mut n = node_at(500.0, 400.0, 0.0, 0.0);
        n.step(VIEW, Some(Point::new(600.0, 400.0)), &params);
        let expected = 0.5 * params.mouse_force;
        assert!((n.vx - expected).abs() < 1e-12);
        assert_eq!(n.vy, 0.0);
    }

    #[test]
    fn test_link_opacity_scenario() {
        let opacity = link_opacity(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 150.0).unwrap();
        assert!((opacity - (1.0 - 100.0 / 150.0)).abs() < 1e-12);
        assert!((opacity - 0.333).abs() < 1e-3);
    }

    #[test]
    fn test_link_opacity_bounds() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(link_opacity(origin, origin, 150.0), Some(1.0));
        assert_eq!(link_opacity(origin, Point::new(150.0, 0.0), 150.0), None);
        assert_eq!(link_opacity(origin, Point::new(200.0, 0.0), 150.0), None);
        assert_eq!(link_opacity(origin, origin, 0.0), None);
    }

    #[test]
    fn test_render_links_pairs() {
        let nodes = vec![
            node_at(0.0, 0.0, 0.0, 0.0),
            node_at(100.0, 0.0, 0.0, 0.0),
            node_at(400.0, 0.0, 0.0, 0.0),
        ];
        let mut list = DrawList::new();
        render_links(&nodes, 150.0, &mut list);

        // Only the first two are close enough
        assert_eq!(list.len(), 1);
        match &list.commands()[0] {
            DrawCommand::Line {
                from, to, color, ..
            } => {
                assert_eq!(*from, Point::new(0.0, 0.0));
                assert_eq!(*to, Point::new(100.0, 0.0));
                assert!((color.a - 1.0 / 3.0).abs() < 1e-9);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
