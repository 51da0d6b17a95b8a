//! Puck kinematic state - Pure DOP
//!
//! NO METHODS. Just data.
//! All state transitions happen in puck_operations.rs

use cgmath::{Point3, Vector3};

/// Puck kinematic state - pure data structure
///
/// `velocity` is a per-frame displacement, not a rate: the integrator adds
/// it to the position once per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuckState {
    /// Position in world space; y stays at the puck's resting height
    pub position: Point3<f32>,

    /// Per-frame displacement vector
    pub velocity: Vector3<f32>,
}

/// Velocity multiplier applied when the puck bounces off a wall
pub const BOUNCE_DAMPING: f32 = 0.95;

/// Velocity multiplier applied every frame (ambient friction)
///
/// Applied unconditionally, so a bounce frame stacks both factors
/// (0.95 * 0.99). This matches the original game's behavior.
pub const FRICTION_DAMPING: f32 = 0.99;

/// Create a puck at rest at the given position
pub fn create_puck_at_rest(position: Point3<f32>) -> PuckState {
    PuckState {
        position,
        velocity: Vector3::new(0.0, 0.0, 0.0),
    }
}
