//! Input Module - touch coordinates
//!
//! Converts raw pixel touch coordinates from the hosting surface into
//! normalized device coordinates. Everything downstream (unprojection,
//! hit testing) works in NDC and world space only.

/// A touch location in normalized device coordinates
///
/// x and y are in [-1, 1]; (0, 0) is screen center, +y is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcPoint {
    pub x: f32,
    pub y: f32,
}

/// Convert a pixel touch position to normalized device coordinates
///
/// Pixel space has its origin at the top-left with +y down, so the y axis
/// flips sign.
pub fn ndc_from_pixel(pixel_x: f32, pixel_y: f32, width: u32, height: u32) -> NdcPoint {
    NdcPoint {
        x: pixel_x / width as f32 * 2.0 - 1.0,
        y: -(pixel_y / height as f32 * 2.0 - 1.0),
    }
}
