// SPDX-License-Identifier: MPL-2.0
//! Scale and crop computations used when drawing the pinned bitmap.
//!
//! Full views are scaled on the GPU by the image widget. Thumbnail mode needs
//! a crop of the *scaled* bitmap, which is produced here on the CPU.

use crate::media::ImageData;
use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;

/// Returns `natural` multiplied by `scale`, rounded, never below one pixel.
#[must_use]
pub fn scaled_size(natural: (u32, u32), scale: f32) -> (u32, u32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let apply = |value: u32| ((value as f32 * scale).round() as u32).max(1);
    (apply(natural.0), apply(natural.1))
}

/// Top-left corner of a `side`×`side` square centred on a `width`×`height` bitmap.
///
/// Uses the centre pixel `((w - 1) / 2, (h - 1) / 2)` and an offset of
/// `side / 2`. The result is negative when the bitmap is smaller than the square.
#[must_use]
pub fn thumbnail_origin(width: u32, height: u32, side: u32) -> (i64, i64) {
    let half = i64::from(side / 2);
    let center_x = (i64::from(width) - 1).max(0) / 2;
    let center_y = (i64::from(height) - 1).max(0) / 2;
    (center_x - half, center_y - half)
}

/// Scales `image` by `scale` with bilinear filtering and crops a `side`×`side`
/// square around its centre.
///
/// Only the source pixels that land inside the square are scaled, so the
/// cost is bounded by `side` rather than by the scaled image size. Areas of
/// the square not covered by the scaled bitmap stay transparent.
#[must_use]
pub fn thumbnail(image: &ImageData, scale: f32, side: u32) -> ImageData {
    let mut square = RgbaImage::new(side, side);
    let Some(source) = image.to_rgba_image() else {
        log::warn!("Cannot build thumbnail from inconsistent pixel buffer");
        return ImageData::from_rgba_image(square);
    };

    let (src_width, src_height) = image.size();
    let (width, height) = scaled_size((src_width, src_height), scale);
    let (x, y) = thumbnail_origin(width, height, side);

    let Some(region) = visible_source_region((src_width, src_height), (width, height), (x, y), side)
    else {
        return ImageData::from_rgba_image(square);
    };

    let cropped =
        imageops::crop_imm(&source, region.left, region.top, region.width, region.height).to_image();
    let scaled = if (region.scaled_width, region.scaled_height) == (region.width, region.height) {
        cropped
    } else {
        imageops::resize(
            &cropped,
            region.scaled_width,
            region.scaled_height,
            FilterType::Triangle,
        )
    };

    imageops::overlay(
        &mut square,
        &scaled,
        region.scaled_left - x,
        region.scaled_top - y,
    );

    ImageData::from_rgba_image(square)
}

/// Source rectangle whose scaled image covers the thumbnail square, and
/// where that scaled rectangle sits in scaled coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SourceRegion {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    scaled_left: i64,
    scaled_top: i64,
    scaled_width: u32,
    scaled_height: u32,
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn visible_source_region(
    source: (u32, u32),
    scaled: (u32, u32),
    origin: (i64, i64),
    side: u32,
) -> Option<SourceRegion> {
    // Per-axis factors, since `scaled_size` rounds each axis on its own.
    let axis = |src: u32, dst: u32, start: i64| -> Option<(u32, u32, i64, u32)> {
        let factor = f64::from(dst) / f64::from(src);
        let visible_start = start.max(0);
        let visible_end = (start + i64::from(side)).min(i64::from(dst));
        if visible_end <= visible_start {
            return None;
        }
        let first = ((visible_start as f64 / factor).floor() as u32).min(src - 1);
        let last = ((visible_end as f64 / factor).ceil() as u32).clamp(first + 1, src);
        let scaled_start = (f64::from(first) * factor).round() as i64;
        let scaled_len = ((f64::from(last - first) * factor).round() as u32).max(1);
        Some((first, last - first, scaled_start, scaled_len))
    };

    let (left, width, scaled_left, scaled_width) = axis(source.0, scaled.0, origin.0)?;
    let (top, height, scaled_top, scaled_height) = axis(source.1, scaled.1, origin.1)?;
    Some(SourceRegion {
        left,
        top,
        width,
        height,
        scaled_left,
        scaled_top,
        scaled_width,
        scaled_height,
    })
}
