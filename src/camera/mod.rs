/// Camera Module - Data-Oriented Programming (DOP) style
///
/// This module follows pure DOP principles:
/// - camera_data.rs: Pure data structures with NO methods
/// - camera_operations.rs: Pure functions that operate on data
///
pub mod camera_data;
pub mod camera_operations;

// Re-export data structures
pub use camera_data::CameraData;

// Re-export all operations
pub use camera_operations::{
    // View/projection
    build_view_matrix,
    build_projection_matrix,
    build_view_projection,
    build_inverted_view_projection,
    build_model_view_projection,

    // Updates
    update_aspect_ratio,

    // Unprojection
    unproject_touch,
};

// Resize is just an alias for update_aspect_ratio
pub fn camera_resize(camera: &CameraData, width: u32, height: u32) -> CameraData {
    update_aspect_ratio(camera, width, height)
}
