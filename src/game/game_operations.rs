//! Game operations - Pure DOP functions
//!
//! The three touch entry points plus the per-frame update. All functions
//! take the previous GameData and return the next; the caller (the render
//! surface's event dispatch) owns the single mutable copy.

use super::game_data::{GameData, MalletState, TouchState};
use crate::camera::unproject_touch;
use crate::geometry::{
    create_sphere, distance_between, ray_intersects_sphere, ray_plane_intersection,
};
use crate::input::NdcPoint;
use crate::physics::step_puck;
use crate::table::{clamp, surface_plane, CENTER_LINE_Z};
use cgmath::{Matrix4, Point3};

// ============================================================================
// FRAME UPDATE
// ============================================================================

/// Advance the game by one rendered frame
///
/// Only the puck moves between touch events; the mallet is driven purely by
/// drags.
pub fn update_frame(game: &GameData) -> GameData {
    let mut next = *game;
    next.puck = step_puck(&game.puck, &game.bounds, game.dimensions.puck_radius);
    next
}

// ============================================================================
// TOUCH HANDLING
// ============================================================================

/// Handle a touch press: hit-test the player mallet
///
/// Wraps the mallet in a bounding sphere at its current position and enters
/// Dragging iff the touch ray passes through it. The sphere radius is half
/// the mallet height, not the mallet's face radius - the mallet is taller
/// than it is wide, so the height gives the better wrap.
pub fn handle_touch_press(
    game: &GameData,
    ndc: NdcPoint,
    inverted_view_projection: &Matrix4<f32>,
) -> GameData {
    let ray = unproject_touch(ndc, inverted_view_projection);
    let bounding_sphere = create_sphere(game.mallet.position, game.dimensions.mallet_height / 2.0);

    let mut next = *game;
    next.touch = if ray_intersects_sphere(&bounding_sphere, &ray) {
        log::debug!(
            "[Touch] Press hit mallet at ({:.3}, {:.3})",
            game.mallet.position.x,
            game.mallet.position.z
        );
        TouchState::Dragging
    } else {
        TouchState::Idle
    };
    next
}

/// Handle a touch drag: move the mallet along the table surface
///
/// Ignored while Idle. The drag target is the intersection of the touch ray
/// with the table plane, clamped into the player's half of the table (the
/// mallet may not cross the center line). If the move brings the mallet
/// within striking distance of the puck, the displacement from the previous
/// mallet position becomes the puck's velocity - the sole mechanism that
/// sets the puck in motion.
pub fn handle_touch_drag(
    game: &GameData,
    ndc: NdcPoint,
    inverted_view_projection: &Matrix4<f32>,
) -> GameData {
    if game.touch != TouchState::Dragging {
        return *game;
    }

    let ray = unproject_touch(ndc, inverted_view_projection);
    let touched = ray_plane_intersection(&ray, &surface_plane());

    let mallet_radius = game.dimensions.mallet_radius;
    let bounds = game.bounds;
    let new_position = Point3::new(
        clamp(
            touched.x,
            bounds.left + mallet_radius,
            bounds.right - mallet_radius,
        ),
        game.mallet.position.y,
        clamp(
            touched.z,
            CENTER_LINE_Z + mallet_radius,
            bounds.near - mallet_radius,
        ),
    );

    let mut next = *game;
    next.mallet = MalletState {
        position: new_position,
        previous_position: game.mallet.position,
    };

    let distance = distance_between(new_position, game.puck.position);
    if distance < game.dimensions.puck_radius + mallet_radius {
        next.puck.velocity = new_position - game.mallet.position;
        log::debug!(
            "[Touch] Mallet struck puck, impulse ({:.4}, {:.4})",
            next.puck.velocity.x,
            next.puck.velocity.z
        );
    }

    next
}

/// Handle a touch release: always returns to Idle
pub fn handle_touch_release(game: &GameData) -> GameData {
    let mut next = *game;
    next.touch = TouchState::Idle;
    next
}
