// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::pin;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Pin interaction is forwarded
/// to the component; the remaining variants carry results of work the shell
/// performs on its behalf.
#[derive(Debug, Clone)]
pub enum Message {
    Pin(pin::Message),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the save-as dialog.
    SaveAsDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to pin at startup.
    pub file_path: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
}
