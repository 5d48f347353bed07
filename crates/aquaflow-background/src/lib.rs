//! Ambient background animations for aquaflow.
//!
//! Two scenes are provided: rising bubbles over floating water bottles, and a
//! particle network whose nearby nodes are joined by fading lines. Both are
//! driven by an [`AnimationContext`] that owns the entity pools, the pointer
//! state and the random source, and draw onto any [`aquaflow_core::Surface`].

mod animations;
mod force;
mod palette;
mod pool;
mod state;

pub use animations::Spawn;
pub use animations::bottle::Bottle;
pub use animations::bubble::Bubble;
pub use animations::network::{Node, link_opacity, render_links};
pub use force::{MIN_FORCE_DISTANCE, Proximity, proximity};
pub use pool::pool_size;
pub use state::AnimationContext;
