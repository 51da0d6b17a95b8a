//! Ray casting operations - pure functions
//!
//! All functions are pure: they take geometry data, return results, no side
//! effects. No methods, no self, just transformations.

use super::primitives::{Plane, Ray, Sphere};
use cgmath::{InnerSpace, Point3};

/// Test whether a ray's infinite line passes through a sphere
///
/// Uses the point-to-line projection formula: the squared distance from the
/// sphere center to the line is |center - origin|^2 minus the squared length
/// of the projection of (center - origin) onto the ray direction. The
/// direction is normalized here so callers may pass the raw near-to-far
/// vector produced by unprojection.
pub fn ray_intersects_sphere(sphere: &Sphere, ray: &Ray) -> bool {
    let direction = ray.direction.normalize();
    let to_center = sphere.center - ray.origin;

    let projected = to_center.dot(direction);
    let distance_squared = to_center.magnitude2() - projected * projected;

    distance_squared <= sphere.radius * sphere.radius
}

/// Intersect a ray with an infinite plane
///
/// Precondition: the ray must not be parallel to the plane (the denominator
/// dot(direction, normal) must be nonzero). The table plane's normal points
/// straight up while touch rays always descend from the camera, so the
/// degenerate case cannot occur in play; it is not handled here.
pub fn ray_plane_intersection(ray: &Ray, plane: &Plane) -> Point3<f32> {
    let t = (plane.point - ray.origin).dot(plane.normal) / ray.direction.dot(plane.normal);
    ray.origin + ray.direction * t
}

/// Euclidean distance between two points
pub fn distance_between(a: Point3<f32>, b: Point3<f32>) -> f32 {
    (b - a).magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::{create_plane, create_ray, create_sphere};
    use cgmath::{Point3, Vector3};

    #[test]
    fn test_ray_hits_sphere_dead_center() {
        // Hand-computed case: looking straight down +Z at a sphere on the axis.
        let sphere = create_sphere(Point3::new(0.0, 0.0, 0.4), 0.075);
        let ray = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(ray_intersects_sphere(&sphere, &ray));
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let sphere = create_sphere(Point3::new(0.0, 0.2, 0.4), 0.075);
        let ray = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        // Line passes 0.2 above the center, well outside radius 0.075.
        assert!(!ray_intersects_sphere(&sphere, &ray));
    }

    #[test]
    fn test_ray_grazing_sphere_counts_as_hit() {
        // Distance from line to center exactly equals the radius.
        let sphere = create_sphere(Point3::new(0.0, 0.075, 0.4), 0.075);
        let ray = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(ray_intersects_sphere(&sphere, &ray));
    }

    #[test]
    fn test_unnormalized_direction_gives_same_answer() {
        let sphere = create_sphere(Point3::new(0.0, 0.0, 0.4), 0.075);
        let unit = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let long = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 37.5));

        assert_eq!(
            ray_intersects_sphere(&sphere, &unit),
            ray_intersects_sphere(&sphere, &long)
        );
    }

    #[test]
    fn test_ray_behind_origin_still_intersects_line() {
        // The test is against the infinite line, not the half-line.
        let sphere = create_sphere(Point3::new(0.0, 0.0, -0.4), 0.075);
        let ray = create_ray(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(ray_intersects_sphere(&sphere, &ray));
    }

    #[test]
    fn test_plane_intersection_straight_down() {
        let plane = create_plane(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let ray = create_ray(Point3::new(0.25, 2.0, -0.3), Vector3::new(0.0, -1.0, 0.0));

        let hit = ray_plane_intersection(&ray, &plane);
        assert!((hit.x - 0.25).abs() < 1e-6);
        assert!(hit.y.abs() < 1e-6);
        assert!((hit.z + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_plane_intersection_oblique() {
        let plane = create_plane(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        // From (0, 1, 2) toward (0, -1, 0): crosses y=0 halfway.
        let ray = create_ray(Point3::new(0.0, 1.0, 2.0), Vector3::new(0.0, -2.0, -2.0));

        let hit = ray_plane_intersection(&ray, &plane);
        assert!(hit.y.abs() < 1e-6);
        assert!((hit.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_between_points() {
        let d = distance_between(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.14));
        assert!((d - 0.14).abs() < 1e-6);
    }
}
