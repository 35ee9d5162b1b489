// SPDX-License-Identifier: MPL-2.0
//! Outer rectangle of the pin window.
//!
//! The window reserves [`BORDER_MARGIN`] pixels on every side for the drop
//! shadow, so its outer size is always the content size plus twice the margin.

use crate::config::BORDER_MARGIN;
use iced::{Point, Size};

/// Position and size of the window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            size: Size::ZERO,
        }
    }
}

impl WindowGeometry {
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Returns a rectangle of `size` sharing this rectangle's centre.
    #[must_use]
    pub fn centered_resize(&self, size: Size) -> Self {
        let center = self.center();
        Self {
            position: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    /// Size available to the image, i.e. the outer size minus the shadow border.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let border = 2.0 * border_margin();
        Size::new(
            (self.size.width - border).max(0.0),
            (self.size.height - border).max(0.0),
        )
    }
}

/// Border margin as a float, for layout math.
#[must_use]
pub fn border_margin() -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let margin = BORDER_MARGIN as f32;
    margin
}

/// Outer window size needed to show `content` pixels plus the shadow border.
#[must_use]
pub fn outer_size(content: (u32, u32)) -> Size {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (content.0 as f32, content.1 as f32);
    let border = 2.0 * border_margin();
    Size::new(width + border, height + border)
}
