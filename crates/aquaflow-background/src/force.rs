//! Pointer proximity force shared by every entity kind.

use aquaflow_core::Point;

/// Below this distance the direction to the pointer is undefined and no force applies.
pub const MIN_FORCE_DISTANCE: f64 = 1e-6;

/// Pull toward the pointer felt at some position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximity {
    /// Unit vector from the entity toward the pointer.
    pub dir_x: f64,
    pub dir_y: f64,
    /// `(radius - distance) / radius`, in `(0, 1]`.
    pub strength: f64,
}

/// Compute the pointer's influence at `at`, if any.
///
/// Returns `None` when the pointer is unset, out of `radius`, or sitting on
/// top of the entity.
pub fn proximity(pointer: Option<Point>, at: Point, radius: f64) -> Option<Proximity> {
    let pointer = pointer?;
    let dx = pointer.x - at.x;
    let dy = pointer.y - at.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if !(distance < radius) || distance < MIN_FORCE_DISTANCE {
        return None;
    }

    Some(Proximity {
        dir_x: dx / distance,
        dir_y: dy / distance,
        strength: (radius - distance) / radius,
    })
}
