// SPDX-License-Identifier: MPL-2.0
//! Scale and opacity of the pinned image.
//!
//! Both values are newtypes that clamp on construction, so handlers can add
//! wheel deltas without checking bounds themselves.

pub use crate::config::{DEFAULT_OPACITY, DEFAULT_SCALE, MAX_OPACITY, MIN_OPACITY, MIN_SCALE};

/// Absorbs f32 noise accumulated by repeated wheel steps before truncating.
const PERCENT_EPSILON: f32 = 1e-3;

/// Display scale factor, never below 0.01 and unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, raising it to the minimum if needed.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self(MIN_SCALE);
        }
        Self(factor.max(MIN_SCALE))
    }

    /// Returns the raw factor (1.0 = natural size).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale shifted by `delta`.
    #[must_use]
    pub fn adjust(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Truncated integer percentage, as shown in the context menu.
    #[must_use]
    pub fn percent(self) -> i32 {
        truncated_percent(self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

/// Opacity of the drawn content, within [0.01, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        if alpha.is_nan() {
            return Self(MIN_OPACITY);
        }
        Self(alpha.clamp(MIN_OPACITY, MAX_OPACITY))
    }

    /// Returns the raw alpha value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the opacity shifted by `delta`.
    #[must_use]
    pub fn adjust(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Truncated integer percentage, as shown in the context menu.
    #[must_use]
    pub fn percent(self) -> i32 {
        truncated_percent(self.0)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(DEFAULT_OPACITY)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncated_percent(value: f32) -> i32 {
    (value * 100.0 + PERCENT_EPSILON).trunc() as i32
}
