// SPDX-License-Identifier: MPL-2.0
//! Save format selection and default file naming.

use crate::config::SAVE_FILENAME_PREFIX;
use chrono::{DateTime, TimeZone};
use image_rs::ImageFormat;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Supported formats for saving the pinned image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, keeps transparency).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// Uncompressed Windows bitmap.
    Bmp,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Bmp => "bmp",
        }
    }

    /// Returns the image format for the `image` crate.
    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Bmp => ImageFormat::Bmp,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "bmp" => Some(ExportFormat::Bmp),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Generates the default file name for a save.
///
/// Format: `Capturer_picture_{YYYYMMDD_HHMMSS_mmm}.png`
pub fn default_filename<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{}.{}",
        SAVE_FILENAME_PREFIX,
        now.format("%Y%m%d_%H%M%S_%3f"),
        ExportFormat::Png.extension()
    )
}

/// Joins the default file name onto `directory`.
pub fn default_save_path<Tz>(directory: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    directory.join(default_filename(now))
}
