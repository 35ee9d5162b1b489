// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom factor floor and wheel step bounds
//! - **Opacity**: Window content opacity bounds
//! - **Frame**: Border margin and thumbnail square

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale factor applied on `fix` and `recover` (1.0 = natural size).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Lowest scale factor reachable with the mouse wheel. There is no upper bound.
pub const MIN_SCALE: f32 = 0.01;

/// Default change per wheel notch, in percent (1% = 0.01 of scale or opacity).
pub const DEFAULT_WHEEL_STEP_PERCENT: f32 = 1.0;

/// Minimum allowed wheel step percentage.
pub const MIN_WHEEL_STEP_PERCENT: f32 = 0.1;

/// Maximum allowed wheel step percentage.
pub const MAX_WHEEL_STEP_PERCENT: f32 = 25.0;

// ==========================================================================
// Opacity Defaults
// ==========================================================================

/// Fully opaque.
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Minimum opacity, keeps the window clickable.
pub const MIN_OPACITY: f32 = 0.01;

/// Maximum opacity.
pub const MAX_OPACITY: f32 = 1.0;

// ==========================================================================
// Frame Defaults
// ==========================================================================

/// Padding reserved on every side of the image for the drop shadow.
pub const BORDER_MARGIN: u32 = 10;

/// Drop shadow colour around the pinned image (`#409eff`).
pub const SHADOW_COLOR_RGB: (u8, u8, u8) = (0x40, 0x9e, 0xff);

/// Side length of the square shown in thumbnail mode.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 125;

/// Minimum thumbnail side length.
pub const MIN_THUMBNAIL_SIZE: u32 = 32;

/// Maximum thumbnail side length.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Size of the window before any image has been pinned.
pub const PLACEHOLDER_SIZE: (u32, u32) = (320, 200);

// ==========================================================================
// Save Defaults
// ==========================================================================

/// Whether saving goes through a dialog by default.
pub const DEFAULT_SAVE_INTERACTIVE: bool = true;

/// Prefix of generated file names.
pub const SAVE_FILENAME_PREFIX: &str = "Capturer_picture_";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MIN_WHEEL_STEP_PERCENT > 0.0);
    assert!(MAX_WHEEL_STEP_PERCENT > MIN_WHEEL_STEP_PERCENT);
    assert!(DEFAULT_WHEEL_STEP_PERCENT >= MIN_WHEEL_STEP_PERCENT);
    assert!(DEFAULT_WHEEL_STEP_PERCENT <= MAX_WHEEL_STEP_PERCENT);

    assert!(MIN_OPACITY > 0.0);
    assert!(MAX_OPACITY >= DEFAULT_OPACITY);
    assert!(DEFAULT_OPACITY >= MIN_OPACITY);

    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert_eq!(MIN_SCALE, 0.01);
    }

    #[test]
    fn wheel_step_matches_one_percent_per_notch() {
        assert_eq!(DEFAULT_WHEEL_STEP_PERCENT / 100.0, 0.01);
    }

    #[test]
    fn thumbnail_default_matches_original_square() {
        assert_eq!(DEFAULT_THUMBNAIL_SIZE, 125);
        assert_eq!(DEFAULT_THUMBNAIL_SIZE / 2, 62);
    }
}
