// Rink Engine - Data-Oriented Programming (DOP) Architecture
//
// Geometry, ray casting and puck physics core for a 3D air hockey game.
// The crate owns the game's mathematical heart; the rendering surface,
// shader programs, texture loading and touch event dispatch are host
// responsibilities that consume the positions and matrices produced here.
//
// Conventions:
// - *_data modules hold pure data structures, no methods
// - *_operations modules hold pure functions over that data
// - all mutable game state lives in one GameData value owned by the host's
//   single render thread

// Core engine modules
pub mod config;
pub mod error;

// Essential systems
pub mod camera;
pub mod game;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod table;

pub use camera::{
    build_inverted_view_projection, build_model_view_projection, build_projection_matrix,
    build_view_matrix, build_view_projection, camera_resize, unproject_touch, CameraData,
};
pub use config::{load_config_from_str, validate_config, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use game::{
    create_game, handle_touch_drag, handle_touch_press, handle_touch_release, update_frame,
    GameData, MalletState, PieceDimensions, TouchState,
};
pub use geometry::{
    distance_between, ray_intersects_sphere, ray_plane_intersection, Plane, Ray, Sphere,
};
pub use input::{ndc_from_pixel, NdcPoint};
pub use physics::{step_puck, PuckState};
pub use table::{surface_plane, TableBounds};

// Re-export cgmath so hosts share the engine's math types
pub use cgmath;
