// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small value types shared by the pin component, kept apart from the
//! component so they can be tested in isolation.

pub mod drag;
pub mod geometry;
pub mod transform;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use geometry::{outer_size, WindowGeometry};
pub use transform::{Opacity, Scale};
