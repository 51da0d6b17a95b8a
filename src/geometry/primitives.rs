//! Geometric primitives - pure data structures
//!
//! NO METHODS beyond constructors. Just data.
//! All intersection math happens in raycast.rs

use cgmath::{Point3, Vector3};

/// A half-line in world space - pure data structure
///
/// Built fresh for every touch event from an unprojected near/far point
/// pair and consumed immediately by one intersection test. `direction` is
/// not required to be unit length; the intersection operations normalize
/// where the math demands it.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

/// Bounding sphere wrapping a mallet for hit testing
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
}

/// Infinite plane, used for the table surface
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub point: Point3<f32>,
    pub normal: Vector3<f32>,
}

/// Create a ray from an origin toward a direction
/// Pure function - constructs Ray data structure
pub fn create_ray(origin: Point3<f32>, direction: Vector3<f32>) -> Ray {
    Ray { origin, direction }
}

/// Create a ray spanning two points, from `near` toward `far`
pub fn ray_between(near: Point3<f32>, far: Point3<f32>) -> Ray {
    Ray {
        origin: near,
        direction: far - near,
    }
}

/// Create a bounding sphere from center and radius
pub fn create_sphere(center: Point3<f32>, radius: f32) -> Sphere {
    Sphere { center, radius }
}

/// Create a plane from a point on it and its normal
pub fn create_plane(point: Point3<f32>, normal: Vector3<f32>) -> Plane {
    Plane { point, normal }
}
