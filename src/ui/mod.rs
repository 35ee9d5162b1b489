// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`pin`] - The floating image view, its context menu and interaction logic
//! - [`edit_panel`] - Annotation tool strip shown while editing
//! - [`state`] - Reusable state (scale, opacity, drag, window geometry)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod edit_panel;
pub mod pin;
pub mod state;
pub mod styles;
