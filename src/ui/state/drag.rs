// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks whether the pin is held by the pointer. The window itself is moved
//! by the OS once the drag is handed over, so no positions are kept here.

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    held: bool,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self) {
        self.held = true;
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.held = false;
    }

    /// Whether the pointer is holding the window
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.held
    }
}
