// SPDX-License-Identifier: MPL-2.0
//! Raster image handling for the pinned view.
//!
//! Loading and saving live in [`image`], file naming and format selection in
//! [`export`], and the scale/crop pipeline used for drawing in [`render`].

pub mod export;
pub mod image;
pub mod render;

use std::path::Path;

// Re-export commonly used types
pub use export::{default_filename, ExportFormat};
pub use image::{load_image, save_image, ImageData};

/// Supported image extensions
pub mod extensions {
    /// Extensions offered by the open dialog.
    pub const OPEN_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

    /// Extensions accepted by drag-and-drop. Matching is case-sensitive, so
    /// both spellings are listed.
    pub const DROP_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "JPG", "PNG", "JPEG", "bmp", "BMP"];

    /// Image format filters for save dialogs
    pub const IMAGE_SAVE_FILTERS: &[(&str, &[&str])] = &[
        ("PNG", &["png"]),
        ("JPEG", &["jpg", "jpeg"]),
        ("BMP", &["bmp"]),
    ];
}

/// Returns whether a dragged file may be dropped onto the pin window.
#[must_use]
pub fn accepts_drop(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions::DROP_EXTENSIONS.contains(&ext))
}
