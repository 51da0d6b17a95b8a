//! Game Module - interaction state machine and frame update
//!
//! Ties the crate together: each frame the puck integrator runs once, and
//! each touch event either hit-tests the player mallet, drags it along the
//! table surface, or releases it. All functions are pure: take data, return
//! results, no side effects.

pub mod game_data;
pub mod game_operations;

// Re-export game types
pub use game_data::{create_game, GameData, MalletState, PieceDimensions, TouchState};

// Re-export game operations
pub use game_operations::{
    handle_touch_drag, handle_touch_press, handle_touch_release, update_frame,
};
