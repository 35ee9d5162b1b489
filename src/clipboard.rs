// SPDX-License-Identifier: MPL-2.0
//! System clipboard access for the pinned bitmap.
//!
//! The clipboard holds a single image slot. [`SystemClipboard`] talks to the
//! OS through `arboard`; [`MemoryClipboard`] keeps the slot in-process and is
//! used where no display server is available.

use crate::error::{Error, Result};
use crate::media::ImageData;
use std::borrow::Cow;

/// A single-slot image clipboard.
pub trait ImageClipboard {
    /// Replaces the clipboard content with `image`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] if the clipboard cannot be written.
    fn copy_image(&mut self, image: &ImageData) -> Result<()>;

    /// Reads the current clipboard image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] if the clipboard is unavailable or holds no image.
    fn paste_image(&mut self) -> Result<ImageData>;
}

/// The operating system clipboard.
///
/// A new `arboard` handle is opened per operation; on some platforms keeping
/// one open blocks other applications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ImageClipboard for SystemClipboard {
    fn copy_image(&mut self, image: &ImageData) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_image(to_arboard(image))?;
        log::debug!("Copied {}x{} image to clipboard", image.width, image.height);
        Ok(())
    }

    fn paste_image(&mut self) -> Result<ImageData> {
        let mut clipboard = arboard::Clipboard::new()?;
        let image = clipboard.get_image()?;
        from_arboard(&image)
    }
}

/// Returns the OS clipboard, or an in-process one when the OS clipboard
/// cannot be opened (e.g. no display server).
#[must_use]
pub fn detect() -> Box<dyn ImageClipboard> {
    match arboard::Clipboard::new() {
        Ok(_) => Box::new(SystemClipboard),
        Err(err) => {
            log::warn!("System clipboard unavailable, copy/paste stays in-process: {err}");
            Box::new(MemoryClipboard::default())
        }
    }
}

/// In-process clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    slot: Option<ImageData>,
}

impl MemoryClipboard {
    /// Whether an image has been copied.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.slot.is_some()
    }
}

impl ImageClipboard for MemoryClipboard {
    fn copy_image(&mut self, image: &ImageData) -> Result<()> {
        self.slot = Some(image.clone());
        Ok(())
    }

    fn paste_image(&mut self) -> Result<ImageData> {
        self.slot
            .clone()
            .ok_or_else(|| Error::Clipboard("clipboard holds no image".to_string()))
    }
}

/// Borrows the RGBA pixels of `image` in the layout `arboard` expects.
#[must_use]
pub fn to_arboard(image: &ImageData) -> arboard::ImageData<'_> {
    arboard::ImageData {
        width: image.width as usize,
        height: image.height as usize,
        bytes: Cow::Borrowed(image.rgba_bytes()),
    }
}

/// Converts a clipboard image into an [`ImageData`].
///
/// # Errors
///
/// Returns [`Error::Clipboard`] if the image is empty, too large, or its byte
/// count does not match its dimensions.
pub fn from_arboard(image: &arboard::ImageData<'_>) -> Result<ImageData> {
    let width = u32::try_from(image.width)
        .map_err(|_| Error::Clipboard("clipboard image is too wide".to_string()))?;
    let height = u32::try_from(image.height)
        .map_err(|_| Error::Clipboard("clipboard image is too tall".to_string()))?;

    if width == 0 || height == 0 {
        return Err(Error::Clipboard("clipboard image is empty".to_string()));
    }

    let expected = image.width * image.height * 4;
    if image.bytes.len() != expected {
        return Err(Error::Clipboard(format!(
            "clipboard image has {} bytes, expected {expected}",
            image.bytes.len()
        )));
    }

    Ok(ImageData::from_rgba(width, height, image.bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_arboard_borrows_pixels() {
        let data = ImageData::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let converted = to_arboard(&data);
        assert_eq!((converted.width, converted.height), (2, 1));
        assert!(matches!(converted.bytes, Cow::Borrowed(_)));
        assert_eq!(converted.bytes.as_ref(), data.rgba_bytes());
    }

    #[test]
    fn from_arboard_rejects_empty_image() {
        let empty = arboard::ImageData {
            width: 0,
            height: 4,
            bytes: Cow::Owned(Vec::new()),
        };
        assert!(matches!(from_arboard(&empty), Err(Error::Clipboard(_))));
    }

    #[test]
    fn from_arboard_rejects_short_buffer() {
        let short = arboard::ImageData {
            width: 4,
            height: 4,
            bytes: Cow::Owned(vec![0; 10]),
        };
        assert!(matches!(from_arboard(&short), Err(Error::Clipboard(_))));
    }

    #[test]
    fn from_arboard_accepts_matching_buffer() {
        let image = arboard::ImageData {
            width: 3,
            height: 2,
            bytes: Cow::Owned(vec![7; 24]),
        };
        let data = from_arboard(&image).expect("valid clipboard image");
        assert_eq!(data.size(), (3, 2));
    }

    #[test]
    fn memory_clipboard_paste_without_copy_fails() {
        let mut clipboard = MemoryClipboard::default();
        assert!(!clipboard.has_image());
        assert!(matches!(clipboard.paste_image(), Err(Error::Clipboard(_))));
    }

    #[test]
    fn memory_clipboard_returns_last_copy() {
        let mut clipboard = MemoryClipboard::default();
        clipboard
            .copy_image(&ImageData::from_rgba(1, 1, vec![0; 4]))
            .expect("copy");
        clipboard
            .copy_image(&ImageData::from_rgba(2, 2, vec![0; 16]))
            .expect("copy");

        let pasted = clipboard.paste_image().expect("paste");
        assert_eq!(pasted.size(), (2, 2));
    }
}
