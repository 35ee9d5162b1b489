// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the pin window widgets.

pub mod button;
pub mod container;
