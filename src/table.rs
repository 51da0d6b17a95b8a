//! Table bounds and the play surface plane
//!
//! The table is an axis-aligned rectangle on the XZ plane at y = 0. X runs
//! left/right, Z runs far (away from the player, negative) to near
//! (toward the player, positive). The center line sits at z = 0.

use crate::error::{invalid_config, EngineResult};
use crate::geometry::{create_plane, Plane};
use cgmath::{Point3, Vector3};

/// Play-field bounds - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableBounds {
    pub left: f32,
    pub right: f32,
    pub far: f32,
    pub near: f32,
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            left: -0.5,
            right: 0.5,
            far: -0.8,
            near: 0.8,
        }
    }
}

/// The mallet dragged by the player may not cross the center line
pub const CENTER_LINE_Z: f32 = 0.0;

/// Infinite plane of the table surface (through the origin, normal +Y)
/// Rebuilt per drag event; not cached
pub fn surface_plane() -> Plane {
    create_plane(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0))
}

/// Clamp a value into [min, max]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Validate that bounds describe a non-empty table
pub fn validate_bounds(bounds: &TableBounds) -> EngineResult<()> {
    if bounds.left >= bounds.right {
        return Err(invalid_config(
            "table.left",
            bounds.left,
            "left bound must be less than right bound",
        ));
    }
    if bounds.far >= bounds.near {
        return Err(invalid_config(
            "table.far",
            bounds.far,
            "far bound must be less than near bound",
        ));
    }
    Ok(())
}
