//! Animation context: pools, pointer and randomness for one drawing surface.

use aquaflow_core::{AquaParams, NetworkParams, Point, Pointer, SceneKind, Surface, Viewport};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animations::bottle::Bottle;
use crate::animations::bubble::Bubble;
use crate::animations::network::{self, Node};
use crate::pool::{pool_size, populate};

/// Everything one running animation needs.
///
/// Each surface gets its own context, so several animations never share
/// pointer state or pools.
#[derive(Debug)]
pub struct AnimationContext {
    /// Scene currently playing.
    scene: SceneKind,
    aqua: AquaParams,
    network: NetworkParams,
    /// Size the pools were built for.
    viewport: Viewport,
    pointer: Pointer,
    bubbles: Vec<Bubble>,
    bottles: Vec<Bottle>,
    nodes: Vec<Node>,
    rng: StdRng,
}

impl AnimationContext {
    /// Create a context seeded from the system clock.
    pub fn new(scene: SceneKind, aqua: AquaParams, network: NetworkParams) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(scene, aqua, network, seed)
    }

    /// Create a context with a fixed random seed.
    pub fn with_seed(scene: SceneKind, aqua: AquaParams, network: NetworkParams, seed: u64) -> Self {
        Self {
            scene,
            aqua,
            network,
            viewport: Viewport::default(),
            pointer: Pointer::default(),
            bubbles: Vec::new(),
            bottles: Vec::new(),
            nodes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer.position()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn bottles(&self) -> &[Bottle] {
        &self.bottles
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Adopt a new viewport and rebuild the pools from scratch.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild();
    }

    /// Switch scene, rebuilding pools if it changed.
    pub fn set_scene(&mut self, scene: SceneKind) {
        if scene == self.scene {
            return;
        }
        tracing::info!(scene = scene.name(), "switching scene");
        self.scene = scene;
        self.rebuild();
    }

    pub fn set_pointer(&mut self, position: Point) {
        self.pointer.set(position);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    /// Discard all entities and repopulate the active scene's pools.
    fn rebuild(&mut self) {
        let viewport = self.viewport;
        let rng = &mut self.rng;

        self.bubbles.clear();
        self.bottles.clear();
        self.nodes.clear();

        match self.scene {
            SceneKind::Aqua => {
                let bubbles = pool_size(viewport, self.aqua.bubble_density);
                let bottles = pool_size(viewport, self.aqua.bottle_density);
                self.bubbles = populate(bubbles, || Bubble::new(rng, viewport));
                self.bottles = populate(bottles, || Bottle::new(rng, viewport));
            }
            SceneKind::Network => {
                let nodes = pool_size(viewport, self.network.density);
                let params = &self.network;
                self.nodes = populate(nodes, || Node::new(rng, viewport, params));
            }
        }

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            bubbles = self.bubbles.len(),
            bottles = self.bottles.len(),
            nodes = self.nodes.len(),
            "rebuilt entity pools"
        );
    }

    /// Clear the surface, then step and draw every entity once.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        surface.clear(self.viewport);
        let pointer = self.pointer.position();

        match self.scene {
            SceneKind::Aqua => {
                // Bottles go underneath the bubbles
                for bottle in &mut self.bottles {
                    bottle.step(&mut self.rng, self.viewport, pointer, &self.aqua);
                    bottle.render(surface);
                }
                for bubble in &mut self.bubbles {
                    bubble.step(&mut self.rng, self.viewport, pointer, &self.aqua);
                    bubble.render(surface);
                }
            }
            SceneKind::Network => {
                for node in &mut self.nodes {
                    node.step(self.viewport, pointer, &self.network);
                    node.render(surface);
                }
                network::render_links(&self.nodes, self.network.link_radius, surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaflow_core::{DrawCommand, DrawList};

    fn context(scene: SceneKind) -> AnimationContext {
        AnimationContext::with_seed(scene, AquaParams::default(), NetworkParams::default(), 1234)
    }

    #[test]
    fn test_empty_until_resized() {
        let mut ctx = context(SceneKind::Aqua);
        assert!(ctx.bubbles().is_empty());
        let mut list = DrawList::new();
        ctx.frame(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_network_pool_size_after_resize() {
        let mut ctx = context(SceneKind::Network);
        ctx.resize(Viewport::new(1000.0, 800.0));
        assert_eq!(ctx.nodes().len(), 88);
        assert!(ctx.bubbles().is_empty());
        assert!(ctx.bottles().is_empty());
    }

    #[test]
    fn test_aqua_pool_sizes_after_resize() {
        let mut ctx = context(SceneKind::Aqua);
        ctx.resize(Viewport::new(1000.0, 800.0));
        assert_eq!(ctx.bubbles().len(), 80);
        assert_eq!(ctx.bottles().len(), 8);
        assert!(ctx.nodes().is_empty());
    }

    #[test]
    fn test_resize_rebuilds_from_scratch() {
        let mut ctx = context(SceneKind::Network);
        ctx.resize(Viewport::new(1000.0, 800.0));
        let before = ctx.nodes().to_vec();
        ctx.resize(Viewport::new(1000.0, 800.0));
        assert_eq!(ctx.nodes().len(), before.len());
        assert_ne!(ctx.nodes(), &before[..]);

        ctx.resize(Viewport::new(0.0, 0.0));
        assert!(ctx.nodes().is_empty());
    }

    #[test]
    fn test_set_scene_switches_pools() {
        let mut ctx = context(SceneKind::Aqua);
        ctx.resize(Viewport::new(1000.0, 800.0));
        ctx.set_scene(SceneKind::Network);
        assert_eq!(ctx.scene(), SceneKind::Network);
        assert!(ctx.bubbles().is_empty());
        assert_eq!(ctx.nodes().len(), 88);
    }

    #[test]
    fn test_set_same_scene_keeps_state() {
        let mut ctx = context(SceneKind::Network);
        ctx.resize(Viewport::new(1000.0, 800.0));
        let before = ctx.nodes().to_vec();
        ctx.set_scene(SceneKind::Network);
        assert_eq!(ctx.nodes(), &before[..]);
    }

    #[test]
    fn test_aqua_draw_order_bottles_first() {
        let mut ctx = context(SceneKind::Aqua);
        ctx.resize(Viewport::new(1000.0, 800.0));
        let mut list = DrawList::new();
        ctx.frame(&mut list);

        // 6 shapes per bottle, then 2 circles per bubble
        let bottle_shapes = ctx.bottles().len() * 6;
        assert_eq!(list.len(), bottle_shapes + ctx.bubbles().len() * 2);
        assert!(
            list.commands()[..bottle_shapes]
                .iter()
                .all(|c| matches!(c, DrawCommand::RoundRect { .. }))
        );
        assert!(
            list.commands()[bottle_shapes..]
                .iter()
                .all(|c| matches!(c, DrawCommand::Circle { .. }))
        );
    }

    #[test]
    fn test_network_frame_draws_nodes_then_links() {
        let mut ctx = context(SceneKind::Network);
        ctx.resize(Viewport::new(1000.0, 800.0));
        let mut list = DrawList::new();
        ctx.frame(&mut list);

        let nodes = ctx.nodes().len();
        assert!(
            list.commands()[..nodes]
                .iter()
                .all(|c| matches!(c, DrawCommand::Circle { .. }))
        );
        assert!(
            list.commands()[nodes..]
                .iter()
                .all(|c| matches!(c, DrawCommand::Line { .. }))
        );
    }

    #[test]
    fn test_frame_clears_previous_drawing() {
        let mut ctx = context(SceneKind::Network);
        ctx.resize(Viewport::new(300.0, 300.0));
        let mut list = DrawList::new();
        ctx.frame(&mut list);
        let first = list.len();
        ctx.resize(Viewport::new(0.0, 0.0));
        ctx.frame(&mut list);
        assert!(first > 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_cleared_pointer_applies_no_force() {
        let view = Viewport::new(1000.0, 800.0);
        let mut with_history = context(SceneKind::Network);
        let mut never_pointed = context(SceneKind::Network);
        with_history.resize(view);
        never_pointed.resize(view);

        with_history.set_pointer(Point::new(500.0, 400.0));
        with_history.clear_pointer();
        assert!(with_history.pointer().is_none());

        let mut list = DrawList::new();
        with_history.frame(&mut list);
        never_pointed.frame(&mut list);
        assert_eq!(with_history.nodes(), never_pointed.nodes());
    }

    #[test]
    fn test_pointer_pushes_bubbles_in_context() {
        let view = Viewport::new(1000.0, 800.0);
        let mut pointed = context(SceneKind::Aqua);
        let mut free = context(SceneKind::Aqua);
        pointed.resize(view);
        free.resize(view);
        pointed.set_pointer(Point::new(500.0, 400.0));

        let mut list = DrawList::new();
        for _ in 0..5 {
            pointed.frame(&mut list);
            free.frame(&mut list);
        }
        assert_ne!(pointed.bubbles(), free.bubbles());
    }
}
