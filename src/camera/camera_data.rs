//! Camera data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All matrix building and unprojection happens in camera_operations.rs

use cgmath::{Point3, Vector3};

/// Camera data structure - pure data, no methods
///
/// A fixed look-at camera hovering behind and above the near edge of the
/// table. Matrices are never stored here: they are rebuilt from this data
/// once per frame so a resize or camera move can never leave a stale
/// inverse lying around.
#[derive(Debug, Clone, Copy)]
pub struct CameraData {
    /// Camera position in world space
    pub eye: Point3<f32>,

    /// Point the camera looks at
    pub target: Point3<f32>,

    /// Up direction
    pub up: Vector3<f32>,

    /// Field of view (vertical, degrees)
    pub fov_degrees: f32,

    /// Aspect ratio (width / height)
    pub aspect_ratio: f32,

    /// Near clipping plane distance
    pub near_plane: f32,

    /// Far clipping plane distance
    pub far_plane: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 1.2, 2.2),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov_degrees: 60.0,
            aspect_ratio: 1.0,
            near_plane: 1.0,
            far_plane: 10.0,
        }
    }
}
