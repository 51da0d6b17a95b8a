//! Headless rally: drive the engine without a rendering surface.
//!
//! Projects the player mallet to screen space to find where a finger would
//! land, simulates a press and a drag stroke that strikes the puck, then
//! steps the integrator for a few hundred frames, logging the puck as it
//! bounces around the table and slows down.
//!
//! Run with: RUST_LOG=debug cargo run --example headless_rally

use anyhow::Result;
use cgmath::{EuclideanSpace, InnerSpace, Point3};
use rink_engine::{
    build_inverted_view_projection, build_view_projection, handle_touch_drag, handle_touch_press,
    handle_touch_release, ndc_from_pixel, update_frame, CameraData, GameData, NdcPoint,
    TouchState,
};

const SURFACE_WIDTH: u32 = 1080;
const SURFACE_HEIGHT: u32 = 1920;

/// Where a world point lands on screen, in pixels (the inverse of what the
/// input layer does with a real touch)
fn pixel_of(world: Point3<f32>, camera: &CameraData) -> (f32, f32) {
    let clip = build_view_projection(camera) * world.to_homogeneous();
    let ndc = NdcPoint {
        x: clip.x / clip.w,
        y: clip.y / clip.w,
    };
    (
        (ndc.x + 1.0) / 2.0 * SURFACE_WIDTH as f32,
        (1.0 - ndc.y) / 2.0 * SURFACE_HEIGHT as f32,
    )
}

fn main() -> Result<()> {
    env_logger::init();

    let camera = CameraData {
        aspect_ratio: SURFACE_WIDTH as f32 / SURFACE_HEIGHT as f32,
        ..Default::default()
    };
    let mut game = GameData::default();

    // The host recomputes this every frame; with a static camera it only
    // changes on resize, but we rebuild nothing else so one copy suffices.
    let inverted_vp = build_inverted_view_projection(&camera)?;

    // Press exactly where the mallet appears on screen.
    let (mallet_px, mallet_py) = pixel_of(game.mallet.position, &camera);
    let press = ndc_from_pixel(mallet_px, mallet_py, SURFACE_WIDTH, SURFACE_HEIGHT);
    game = handle_touch_press(&game, press, &inverted_vp);
    println!(
        "press at pixel ({:.0}, {:.0}) -> {:?}",
        mallet_px, mallet_py, game.touch
    );

    if game.touch == TouchState::Dragging {
        // Drag in a straight stroke from the mallet toward the puck.
        let (puck_px, puck_py) = pixel_of(game.puck.position, &camera);
        let steps = 6;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let px = mallet_px + (puck_px - mallet_px) * t;
            let py = mallet_py + (puck_py - mallet_py) * t;
            let drag = ndc_from_pixel(px, py, SURFACE_WIDTH, SURFACE_HEIGHT);
            game = handle_touch_drag(&game, drag, &inverted_vp);
        }
        game = handle_touch_release(&game);
    }

    println!(
        "after stroke: mallet ({:.3}, {:.3}), puck velocity ({:.4}, {:.4})",
        game.mallet.position.x,
        game.mallet.position.z,
        game.puck.velocity.x,
        game.puck.velocity.z
    );

    for frame in 0..600 {
        game = update_frame(&game);
        if frame % 60 == 0 {
            println!(
                "frame {:3}: puck ({:.3}, {:.3}), speed {:.5}",
                frame,
                game.puck.position.x,
                game.puck.position.z,
                game.puck.velocity.magnitude()
            );
        }
    }

    Ok(())
}
