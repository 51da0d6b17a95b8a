//! Camera operations - Pure DOP functions
//!
//! All functions are pure: they take data, return new data, no side effects.
//! Matrices are rebuilt from CameraData every frame; the inverse
//! view-projection in particular must never be cached across frames, because
//! a resize or camera move between frames would silently invalidate every
//! unprojected touch ray.

use super::camera_data::CameraData;
use crate::error::{EngineError, EngineResult};
use crate::geometry::{ray_between, Ray};
use crate::input::NdcPoint;
use cgmath::{Deg, EuclideanSpace, Matrix4, Point3, SquareMatrix, Vector4};

// ============================================================================
// VIEW/PROJECTION MATRICES
// ============================================================================

/// Build view matrix from camera data
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    Matrix4::look_at_rh(camera.eye, camera.target, camera.up)
}

/// Build projection matrix from camera data
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    cgmath::perspective(
        Deg(camera.fov_degrees),
        camera.aspect_ratio,
        camera.near_plane,
        camera.far_plane,
    )
}

/// Build combined view-projection matrix
pub fn build_view_projection(camera: &CameraData) -> Matrix4<f32> {
    build_projection_matrix(camera) * build_view_matrix(camera)
}

/// Build the inverted view-projection matrix used for unprojection
///
/// Fails only if the camera configuration is degenerate (zero field of view,
/// coincident near/far planes); a well-formed perspective camera always
/// inverts.
pub fn build_inverted_view_projection(camera: &CameraData) -> EngineResult<Matrix4<f32>> {
    build_view_projection(camera)
        .invert()
        .ok_or_else(|| EngineError::SingularMatrix {
            context: "view-projection".to_string(),
        })
}

/// Compose a model-view-projection matrix for an object at `position`
///
/// Output consumed by the rendering layer to draw the puck and mallets; the
/// model transform is a pure translation since the pieces never rotate.
pub fn build_model_view_projection(
    view_projection: &Matrix4<f32>,
    position: Point3<f32>,
) -> Matrix4<f32> {
    view_projection * Matrix4::from_translation(position.to_vec())
}

// ============================================================================
// UPDATES
// ============================================================================

/// Update aspect ratio (e.g., on surface resize)
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    let mut new_camera = *camera;
    new_camera.aspect_ratio = width as f32 / height as f32;
    new_camera
}

// ============================================================================
// UNPROJECTION
// ============================================================================

/// Map a touch in normalized device coordinates to a world-space ray
///
/// Lifts the touch to clip-space points on the near (z = -1) and far (z = +1)
/// planes with w = 1, pushes both through the inverted view-projection,
/// applies the perspective divide, and spans a ray from the near world point
/// toward the far one. The divide is essential: skipping it leaves both
/// points in homogeneous space and the resulting ray misses everything.
pub fn unproject_touch(ndc: NdcPoint, inverted_view_projection: &Matrix4<f32>) -> Ray {
    let near_clip = Vector4::new(ndc.x, ndc.y, -1.0, 1.0);
    let far_clip = Vector4::new(ndc.x, ndc.y, 1.0, 1.0);

    let near_world = divide_by_w(inverted_view_projection * near_clip);
    let far_world = divide_by_w(inverted_view_projection * far_clip);

    ray_between(near_world, far_world)
}

/// Perspective divide: homogeneous clip coordinates to a 3D point
fn divide_by_w(v: Vector4<f32>) -> Point3<f32> {
    Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
}
