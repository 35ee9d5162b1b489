// SPDX-License-Identifier: MPL-2.0
//! Floating image view ("pin").
//!
//! A frameless window showing one bitmap that can be moved, zoomed with the
//! wheel, faded with Ctrl+wheel and collapsed to a thumbnail by double-click.
//! This module follows a "state down, messages up" pattern: [`State`] turns
//! raw events into state changes and returns an [`Effect`] for the parent.

pub mod component;
pub mod context_menu;
mod view;


pub use component::{Effect, Message, Mode, State, ViewSettings, WindowRequest};
pub use context_menu::{Action, Entry};
pub use view::{view, ViewContext};
