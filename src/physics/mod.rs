//! Physics Module - puck integration
//!
//! Simple planar kinematics: one puck, per-frame Euler steps, wall
//! reflection with energy loss, ambient friction. No general collision
//! response and no broad phase; this is air hockey, not a physics engine.

pub mod puck_data;
pub mod puck_operations;

// Simple re-exports
pub use puck_data::{create_puck_at_rest, PuckState, BOUNCE_DAMPING, FRICTION_DAMPING};
pub use puck_operations::step_puck;
