//! Game state data structures - Pure DOP
//!
//! NO METHODS. Just data.
//! All state transitions happen in game_operations.rs

use crate::physics::{create_puck_at_rest, PuckState};
use crate::table::TableBounds;
use cgmath::Point3;

/// Touch interaction state
///
/// Explicit state machine in place of the original's implicit
/// `malletPressed` boolean: press enters Dragging on a hit, release always
/// returns to Idle, drag events are ignored while Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchState {
    Idle,
    Dragging,
}

/// Mallet kinematic state - pure data structure
///
/// `previous_position` exists solely to derive the impulse vector when the
/// mallet strikes the puck mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MalletState {
    pub position: Point3<f32>,
    pub previous_position: Point3<f32>,
}

/// Static piece dimensions, supplied by the mesh factories at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceDimensions {
    pub puck_radius: f32,
    pub puck_height: f32,
    pub mallet_radius: f32,
    pub mallet_height: f32,
}

impl Default for PieceDimensions {
    fn default() -> Self {
        Self {
            puck_radius: 0.06,
            puck_height: 0.02,
            mallet_radius: 0.08,
            mallet_height: 0.15,
        }
    }
}

/// All mutable game state - pure data structure
///
/// Owned exclusively by the single render thread; the frame callback and
/// touch callbacks that transform it are serialized by the hosting
/// surface's event dispatch, so no locking exists anywhere in the crate.
#[derive(Debug, Clone, Copy)]
pub struct GameData {
    pub puck: PuckState,
    pub mallet: MalletState,
    pub touch: TouchState,
    pub bounds: TableBounds,
    pub dimensions: PieceDimensions,
}

/// Create a fresh game: puck centered, player mallet on the near half
pub fn create_game(bounds: TableBounds, dimensions: PieceDimensions) -> GameData {
    let mallet_start = Point3::new(0.0, dimensions.mallet_height / 2.0, 0.4);
    GameData {
        puck: create_puck_at_rest(Point3::new(0.0, dimensions.puck_height / 2.0, 0.0)),
        mallet: MalletState {
            position: mallet_start,
            previous_position: mallet_start,
        },
        touch: TouchState::Idle,
        bounds,
        dimensions,
    }
}

impl Default for GameData {
    fn default() -> Self {
        create_game(TableBounds::default(), PieceDimensions::default())
    }
}
