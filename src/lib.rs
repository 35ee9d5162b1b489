// SPDX-License-Identifier: MPL-2.0
//! `iced_pin` keeps a screenshot floating above other windows.
//!
//! The pinned bitmap sits in a frameless, always-on-top window that can be
//! dragged, zoomed, faded, collapsed to a thumbnail, copied, pasted and saved.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
