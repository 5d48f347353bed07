//! Entity kinematics for each animation.

pub mod bottle;
pub mod bubble;
pub mod network;

use rand::Rng;

/// Where a (re)initialized entity appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    /// Anywhere in the viewport. Used when a pool is first populated.
    Anywhere,
    /// Just below the bottom edge. Used when a rising entity is recycled.
    Below,
}

/// Uniform sample in `[0, 1)`.
pub(crate) fn unit(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..1.0)
}
