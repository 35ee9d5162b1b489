// SPDX-License-Identifier: MPL-2.0
//! Image loading and saving for PNG, JPEG and BMP files.

use crate::error::{Error, Result};
use crate::media::export::ExportFormat;
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded RGBA8 bitmap together with the handle iced draws from.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, kept for clipboard export, saving and cropping.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `ImageData` from an RGBA image buffer.
    #[must_use]
    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.into_vec())
    }

    /// Creates a new `ImageData` from any decoded image.
    #[must_use]
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from_rgba_image(img.to_rgba8())
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Natural size of the bitmap as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the bitmap has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rebuilds an `image` buffer from the stored bytes.
    ///
    /// Returns `None` if the byte count does not match the dimensions.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its content cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let img_bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    log::debug!("Loaded {} ({}x{})", path.display(), width, height);
    Ok(ImageData::from_dynamic(&img))
}

/// Writes the bitmap to `path`, picking the format from the extension.
///
/// Unknown or missing extensions are written as PNG. Returns the format used.
///
/// # Errors
///
/// Returns an error if the pixel buffer is inconsistent or encoding fails.
pub fn save_image<P: AsRef<Path>>(data: &ImageData, path: P) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path).unwrap_or_default();

    let img = data
        .to_rgba_image()
        .ok_or_else(|| Error::Image("pixel buffer does not match image size".to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // JPEG and BMP carry no alpha channel in this pipeline
    match format {
        ExportFormat::Png => img.save_with_format(path, format.image_format())?,
        ExportFormat::Jpeg | ExportFormat::Bmp => DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, format.image_format())?,
    }

    log::info!("Saved image to {}", path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.size(), (4, 2));
        assert_eq!(data.rgba_bytes().len(), 4 * 2 * 4);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn save_picks_format_from_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let data = ImageData::from_rgba(3, 3, vec![128; 3 * 3 * 4]);

        let jpg = temp_dir.path().join("out.jpg");
        assert_eq!(save_image(&data, &jpg).expect("save jpg"), ExportFormat::Jpeg);
        assert_eq!(
            image_rs::ImageFormat::from_path(&jpg).expect("format"),
            image_rs::ImageFormat::Jpeg
        );

        let bmp = temp_dir.path().join("out.bmp");
        assert_eq!(save_image(&data, &bmp).expect("save bmp"), ExportFormat::Bmp);
        let reloaded = load_image(&bmp).expect("bmp should reload");
        assert_eq!(reloaded.size(), (3, 3));
    }

    #[test]
    fn save_without_extension_writes_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let data = ImageData::from_rgba(2, 2, vec![255; 16]);
        let path = temp_dir.path().join("nested").join("capture");

        assert_eq!(save_image(&data, &path).expect("save"), ExportFormat::Png);
        let bytes = fs::read(&path).expect("read back");
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn save_rejects_inconsistent_buffer() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let data = ImageData::from_rgba(10, 10, vec![0; 4]);

        match save_image(&data, temp_dir.path().join("broken.png")) {
            Err(Error::Image(_)) => {}
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}
