//! Geometry Module - primitives and ray casting
//!
//! Pure value types plus pure intersection functions. Everything here is
//! created per-computation and never persisted; there is no shared state.

pub mod primitives;
pub mod raycast;

// Simple re-exports
pub use primitives::{create_plane, create_ray, create_sphere, ray_between, Plane, Ray, Sphere};
pub use raycast::{distance_between, ray_intersects_sphere, ray_plane_intersection};
