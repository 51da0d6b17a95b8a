//! Puck integrator - pure per-frame state transition
//!
//! One function, one frame: take the previous state, return the next.
//! The transition order is fixed and load-bearing: translate, reflect,
//! clamp, then friction. Reflection alone can overshoot the bounds in a
//! single frame, so the clamp is what enforces the containment invariant.

use super::puck_data::{PuckState, BOUNCE_DAMPING, FRICTION_DAMPING};
use crate::table::{clamp, TableBounds};
use cgmath::{Point3, Vector3};

/// Advance the puck by one frame
///
/// Invariant on return: `position.x` is inside `[left + radius,
/// right - radius]` and `position.z` inside `[far + radius, near - radius]`.
/// Y is untouched; the puck slides at fixed height.
pub fn step_puck(puck: &PuckState, bounds: &TableBounds, radius: f32) -> PuckState {
    let mut position = puck.position + puck.velocity;
    let mut velocity = puck.velocity;

    if position.x < bounds.left + radius || position.x > bounds.right - radius {
        velocity = Vector3::new(-velocity.x, velocity.y, velocity.z);
        velocity *= BOUNCE_DAMPING;
        log::debug!(
            "[Puck] X bounce at ({:.3}, {:.3}), velocity now ({:.4}, {:.4})",
            position.x,
            position.z,
            velocity.x,
            velocity.z
        );
    }
    if position.z < bounds.far + radius || position.z > bounds.near - radius {
        velocity = Vector3::new(velocity.x, velocity.y, -velocity.z);
        velocity *= BOUNCE_DAMPING;
        log::debug!(
            "[Puck] Z bounce at ({:.3}, {:.3}), velocity now ({:.4}, {:.4})",
            position.x,
            position.z,
            velocity.x,
            velocity.z
        );
    }

    position = Point3::new(
        clamp(position.x, bounds.left + radius, bounds.right - radius),
        position.y,
        clamp(position.z, bounds.far + radius, bounds.near - radius),
    );

    // Ambient friction, every frame, bounce or not.
    velocity *= FRICTION_DAMPING;

    PuckState { position, velocity }
}
