//! Engine configuration
//!
//! Optional TOML configuration for hosts that want to tune the table,
//! pieces or camera without recompiling. Every field has a default matching
//! the stock scene, so an empty config is valid.

use crate::camera::CameraData;
use crate::error::{invalid_config, EngineResult};
use crate::game::{create_game, GameData, PieceDimensions};
use crate::table::{validate_bounds, TableBounds};
use cgmath::{Point3, Vector3};
use serde::Deserialize;

/// Top-level engine configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub table: TableConfig,
    pub puck: PuckConfig,
    pub mallet: MalletConfig,
    pub camera: CameraConfig,
}

/// Table bounds configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub left: f32,
    pub right: f32,
    pub far: f32,
    pub near: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        let bounds = TableBounds::default();
        Self {
            left: bounds.left,
            right: bounds.right,
            far: bounds.far,
            near: bounds.near,
        }
    }
}

/// Puck dimensions
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuckConfig {
    pub radius: f32,
    pub height: f32,
}

impl Default for PuckConfig {
    fn default() -> Self {
        Self {
            radius: 0.06,
            height: 0.02,
        }
    }
}

/// Mallet dimensions
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MalletConfig {
    pub radius: f32,
    pub height: f32,
}

impl Default for MalletConfig {
    fn default() -> Self {
        Self {
            radius: 0.08,
            height: 0.15,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 1.2, 2.2],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 60.0,
            near_plane: 1.0,
            far_plane: 10.0,
        }
    }
}

/// Parse a TOML configuration string and validate it
pub fn load_config_from_str(toml_text: &str) -> EngineResult<EngineConfig> {
    let config: EngineConfig = toml::from_str(toml_text)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate a configuration
pub fn validate_config(config: &EngineConfig) -> EngineResult<()> {
    validate_bounds(&table_bounds(config))?;

    if config.puck.radius <= 0.0 {
        return Err(invalid_config(
            "puck.radius",
            config.puck.radius,
            "must be positive",
        ));
    }
    if config.puck.height <= 0.0 {
        return Err(invalid_config(
            "puck.height",
            config.puck.height,
            "must be positive",
        ));
    }
    if config.mallet.radius <= 0.0 {
        return Err(invalid_config(
            "mallet.radius",
            config.mallet.radius,
            "must be positive",
        ));
    }
    if config.mallet.height <= 0.0 {
        return Err(invalid_config(
            "mallet.height",
            config.mallet.height,
            "must be positive",
        ));
    }
    if config.camera.near_plane <= 0.0 {
        return Err(invalid_config(
            "camera.near_plane",
            config.camera.near_plane,
            "must be positive",
        ));
    }
    if config.camera.far_plane <= config.camera.near_plane {
        return Err(invalid_config(
            "camera.far_plane",
            config.camera.far_plane,
            "must be greater than near_plane",
        ));
    }
    if config.camera.fov_degrees <= 0.0 || config.camera.fov_degrees >= 180.0 {
        return Err(invalid_config(
            "camera.fov_degrees",
            config.camera.fov_degrees,
            "must be in (0, 180)",
        ));
    }
    Ok(())
}

/// Extract table bounds from a config
pub fn table_bounds(config: &EngineConfig) -> TableBounds {
    TableBounds {
        left: config.table.left,
        right: config.table.right,
        far: config.table.far,
        near: config.table.near,
    }
}

/// Build camera data from a config (aspect ratio comes from the surface)
pub fn camera_from_config(config: &EngineConfig, aspect_ratio: f32) -> CameraData {
    CameraData {
        eye: Point3::new(config.camera.eye[0], config.camera.eye[1], config.camera.eye[2]),
        target: Point3::new(
            config.camera.target[0],
            config.camera.target[1],
            config.camera.target[2],
        ),
        up: Vector3::new(0.0, 1.0, 0.0),
        fov_degrees: config.camera.fov_degrees,
        aspect_ratio,
        near_plane: config.camera.near_plane,
        far_plane: config.camera.far_plane,
    }
}

/// Build a fresh game from a config
pub fn game_from_config(config: &EngineConfig) -> GameData {
    create_game(
        table_bounds(config),
        PieceDimensions {
            puck_radius: config.puck.radius,
            puck_height: config.puck.height,
            mallet_radius: config.mallet.radius,
            mallet_height: config.mallet.height,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_stock_scene() {
        let config = load_config_from_str("").expect("empty config is valid");
        assert_eq!(table_bounds(&config), TableBounds::default());

        let game = game_from_config(&config);
        assert_eq!(game.dimensions.puck_radius, 0.06);
        assert_eq!(game.dimensions.mallet_radius, 0.08);
        assert_eq!(game.dimensions.mallet_height, 0.15);
    }

    #[test]
    fn test_partial_override() {
        let config = load_config_from_str(
            r#"
            [mallet]
            radius = 0.1

            [camera]
            fov_degrees = 45.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.mallet.radius, 0.1);
        assert_eq!(config.camera.fov_degrees, 45.0);
        // Untouched fields and sections keep defaults.
        assert_eq!(config.mallet.height, 0.15);
        assert_eq!(config.table.near, 0.8);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let result = load_config_from_str("[puck]\nradius = -0.06\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_puck_height_rejected() {
        // A sunken puck would sit below the table surface.
        let result = load_config_from_str("[puck]\nheight = -0.02\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_mallet_radius_rejected() {
        let result = load_config_from_str("[mallet]\nradius = 0.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_mallet_height_rejected() {
        // Height is also the press hit-test sphere diameter, so zero would
        // make the mallet untouchable.
        let result = load_config_from_str("[mallet]\nheight = 0.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_fov_out_of_range_rejected() {
        assert!(load_config_from_str("[camera]\nfov_degrees = 0.0\n").is_err());
        assert!(load_config_from_str("[camera]\nfov_degrees = 180.0\n").is_err());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = load_config_from_str("[table]\nleft = 1.0\nright = -1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_far_plane_behind_near_rejected() {
        let result = load_config_from_str("[camera]\nnear_plane = 5.0\nfar_plane = 2.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = load_config_from_str("[puck]\nmass = 1.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_camera_from_config_takes_surface_aspect() {
        let config = EngineConfig::default();
        let camera = camera_from_config(&config, 0.45);
        assert_eq!(camera.aspect_ratio, 0.45);
        assert_eq!(camera.eye, Point3::new(0.0, 1.2, 2.2));
    }
}
