// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The pin component decides *what* should happen; the handlers here carry it
//! out: dialogs, clipboard, file I/O and OS window moves.

use super::{paths, Message};
use crate::clipboard::ImageClipboard;
use crate::config::SaveConfig;
use crate::i18n::fluent::I18n;
use crate::media::{self, export, extensions};
use crate::ui::pin::{self, Effect, WindowRequest};
use iced::{window, Task};
use std::path::{Path, PathBuf};

/// Mutable view over the application fields the handlers need.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub pin: &'a mut pin::State,
    pub window_id: &'a mut Option<window::Id>,
    pub clipboard: &'a mut dyn ImageClipboard,
    pub save: &'a SaveConfig,
}

/// Forwards a message to the pin component and performs what it asks for.
pub fn handle_pin_message(ctx: &mut UpdateContext<'_>, message: pin::Message) -> Task<Message> {
    if let pin::Message::RawEvent { window, .. } = &message {
        ctx.window_id.get_or_insert(*window);
    }

    let effect = ctx.pin.handle_message(message);
    finish(ctx, effect)
}

/// Handles a file dropped on the window.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let effect = ctx.pin.drop_file(path);
    finish(ctx, effect)
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    load_into_pin(ctx, &path);
    window_tasks(ctx)
}

/// Handles the result of the save-as dialog.
pub fn handle_save_as_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(path) = path {
        save_current(ctx, &path);
    }
    Task::none()
}

/// Performs `effect`, then applies any pending window change.
fn finish(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    let effect_task = perform_effect(ctx, effect);
    Task::batch([window_tasks(ctx), effect_task])
}

fn perform_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Close => {
            log::debug!("Closing pin window");
            match *ctx.window_id {
                Some(id) => window::close(id),
                None => iced::exit(),
            }
        }
        Effect::DragWindow => match *ctx.window_id {
            Some(id) => window::drag(id),
            None => Task::none(),
        },
        Effect::CopyToClipboard => {
            match ctx.pin.image() {
                Some(image) => {
                    if let Err(err) = ctx.clipboard.copy_image(image) {
                        log::warn!("{}: {err}", ctx.i18n.tr(err.i18n_key()));
                    }
                }
                None => log::debug!("Nothing to copy"),
            }
            Task::none()
        }
        Effect::PasteFromClipboard => {
            match ctx.clipboard.paste_image() {
                Ok(image) => ctx.pin.replace_image(image),
                Err(err) => log::warn!("{}: {err}", ctx.i18n.tr(err.i18n_key())),
            }
            Task::none()
        }
        Effect::OpenFileDialog => open_file_dialog(ctx),
        Effect::SaveImage => {
            if ctx.pin.image().is_none() {
                log::debug!("Nothing to save");
                return Task::none();
            }
            let now = chrono::Local::now();
            let directory = paths::get_pictures_dir_with_override(ctx.save.directory.clone());
            if ctx.save.interactive {
                save_as_dialog(ctx, directory, export::default_filename(&now))
            } else {
                save_current(ctx, &export::default_save_path(&directory, &now));
                Task::none()
            }
        }
        Effect::LoadFile(path) => {
            load_into_pin(ctx, &path);
            Task::none()
        }
    }
}

/// Turns the component's pending window change into window tasks.
fn window_tasks(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(request) = ctx.pin.take_window_request() else {
        return Task::none();
    };
    let Some(id) = *ctx.window_id else {
        log::debug!("Window not known yet, dropping {request:?}");
        return Task::none();
    };

    let WindowRequest::Reshape(geometry) = request;
    Task::batch([
        window::resize(id, geometry.size),
        window::move_to(id, geometry.position),
    ])
}

/// Loads `path` into the pin. On failure the current bitmap is kept.
fn load_into_pin(ctx: &mut UpdateContext<'_>, path: &Path) {
    match media::load_image(path) {
        Ok(image) => {
            log::info!("Pinned {}", path.display());
            ctx.pin.replace_image(image);
        }
        Err(err) => log::warn!(
            "{} ({}): {err}",
            ctx.i18n.tr(err.i18n_key()),
            path.display()
        ),
    }
}

fn save_current(ctx: &UpdateContext<'_>, path: &Path) {
    let Some(image) = ctx.pin.image() else {
        return;
    };
    if let Err(err) = media::save_image(image, path) {
        log::warn!(
            "{} ({}): {err}",
            ctx.i18n.tr(err.i18n_key()),
            path.display()
        );
    }
}

fn open_file_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    let title = ctx.i18n.tr("dialog-open-title");
    let filter_name = ctx.i18n.tr("dialog-filter-images");
    let directory = paths::get_pictures_dir_with_override(ctx.save.directory.clone());

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, extensions::OPEN_EXTENSIONS);

            if directory.exists() {
                dialog = dialog.set_directory(&directory);
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

fn save_as_dialog(ctx: &UpdateContext<'_>, directory: PathBuf, filename: String) -> Task<Message> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(ctx.i18n.tr("dialog-save-title"))
        .set_file_name(filename);
    for (name, exts) in extensions::IMAGE_SAVE_FILTERS {
        dialog = dialog.add_filter(*name, exts);
    }
    if directory.exists() {
        dialog = dialog.set_directory(&directory);
    }

    Task::perform(
        async move { dialog.save_file().await.map(|h| h.path().to_path_buf()) },
        Message::SaveAsDialogResult,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::media::ImageData;
    use crate::ui::pin::{Action, ViewSettings};
    use tempfile::tempdir;

    struct Harness {
        i18n: I18n,
        pin: pin::State,
        window_id: Option<window::Id>,
        clipboard: MemoryClipboard,
        save: SaveConfig,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                pin: pin::State::new(ViewSettings::default()),
                window_id: None,
                clipboard: MemoryClipboard::default(),
                save: SaveConfig::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                pin: &mut self.pin,
                window_id: &mut self.window_id,
                clipboard: &mut self.clipboard,
                save: &self.save,
            }
        }
    }

    fn solid(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![200; (width * height * 4) as usize])
    }

    #[test]
    fn raw_event_records_window_id() {
        let mut harness = Harness::new();
        let id = window::Id::unique();
        let event = iced::Event::Mouse(iced::mouse::Event::CursorLeft);
        let _ = handle_pin_message(
            &mut harness.ctx(),
            pin::Message::RawEvent { window: id, event },
        );
        assert_eq!(harness.window_id, Some(id));
    }

    #[test]
    fn copy_then_paste_round_trips_through_clipboard() {
        let mut harness = Harness::new();
        harness.pin.fix(solid(4, 3));

        let _ = handle_pin_message(&mut harness.ctx(), pin::Message::Menu(Action::Copy));
        assert!(harness.clipboard.has_image());

        harness.pin.fix(solid(8, 8));
        let _ = handle_pin_message(&mut harness.ctx(), pin::Message::Menu(Action::Paste));
        assert_eq!(harness.pin.natural_size(), Some((4, 3)));
    }

    #[test]
    fn paste_from_empty_clipboard_keeps_image() {
        let mut harness = Harness::new();
        harness.pin.fix(solid(5, 5));
        let _ = handle_pin_message(&mut harness.ctx(), pin::Message::Menu(Action::Paste));
        assert_eq!(harness.pin.natural_size(), Some((5, 5)));
    }

    #[test]
    fn non_interactive_save_writes_default_file() {
        let dir = tempdir().expect("tempdir");
        let mut harness = Harness::new();
        harness.save = SaveConfig {
            interactive: false,
            directory: Some(dir.path().to_path_buf()),
        };
        harness.pin.fix(solid(2, 2));

        let _ = handle_pin_message(&mut harness.ctx(), pin::Message::Menu(Action::Save));

        let saved: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].starts_with("Capturer_picture_"));
        assert!(saved[0].ends_with(".png"));
    }

    #[test]
    fn save_dialog_result_writes_chosen_path() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("pinned.bmp");
        let mut harness = Harness::new();
        harness.pin.fix(solid(3, 2));

        let _ = handle_save_as_dialog_result(&mut harness.ctx(), Some(target.clone()));

        let reloaded = media::load_image(&target).expect("saved file loads");
        assert_eq!(reloaded.size(), (3, 2));
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        let mut harness = Harness::new();
        harness.pin.fix(solid(6, 6));
        let _ = handle_open_file_dialog_result(&mut harness.ctx(), None);
        let _ = handle_save_as_dialog_result(&mut harness.ctx(), None);
        assert_eq!(harness.pin.natural_size(), Some((6, 6)));
    }

    #[test]
    fn opened_file_replaces_image() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("capture.png");
        media::save_image(&solid(7, 9), &path).expect("write fixture");

        let mut harness = Harness::new();
        harness.pin.fix(solid(2, 2));
        let _ = handle_open_file_dialog_result(&mut harness.ctx(), Some(path));
        assert_eq!(harness.pin.natural_size(), Some((7, 9)));
    }

    #[test]
    fn unreadable_file_keeps_current_image() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").expect("write fixture");

        let mut harness = Harness::new();
        harness.pin.fix(solid(2, 2));
        let _ = handle_file_dropped(&mut harness.ctx(), path);
        assert_eq!(harness.pin.natural_size(), Some((2, 2)));
    }

    #[test]
    fn dropped_text_file_is_ignored() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").expect("write fixture");

        let mut harness = Harness::new();
        harness.pin.fix(solid(2, 2));
        let _ = handle_file_dropped(&mut harness.ctx(), path);
        assert_eq!(harness.pin.natural_size(), Some((2, 2)));
    }

    #[test]
    fn window_request_is_consumed_without_window() {
        let mut harness = Harness::new();
        harness.pin.fix(solid(2, 2));
        let _ = window_tasks(&mut harness.ctx());
        assert!(harness.pin.take_window_request().is_none());
    }
}
