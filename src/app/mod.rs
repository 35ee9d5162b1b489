// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the pin window.
//!
//! The `App` struct wires together the pin component, localization, the
//! clipboard and the save settings, and translates component effects into
//! dialogs, file I/O and window tasks.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::clipboard::{self, ImageClipboard};
use crate::config::{self, defaults, Config, SaveConfig};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::pin::{self, ViewSettings};
use crate::ui::state::outer_size;
use iced::{window, Color, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    pin: pin::State,
    window_id: Option<window::Id>,
    clipboard: Box<dyn ImageClipboard>,
    save: SaveConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_id", &self.window_id)
            .field("has_image", &self.pin.image().is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings for a pin showing a bitmap of `image_size`,
/// or the placeholder size when nothing is pinned.
pub fn window_settings(image_size: Option<(u32, u32)>) -> window::Settings {
    let size = image_size.map_or_else(
        || {
            let (width, height) = defaults::PLACEHOLDER_SIZE;
            #[allow(clippy::cast_precision_loss)]
            Size::new(width as f32, height as f32)
        },
        outer_size,
    );

    window::Settings {
        size,
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // The window is created before `boot` runs, so the capture is decoded
    // here to size it.
    let initial = flags
        .file_path
        .as_deref()
        .and_then(|path| match media::load_image(path) {
            Ok(image) => Some(image),
            Err(err) => {
                log::warn!("Cannot pin {path}: {err}");
                None
            }
        });
    let settings = window_settings(initial.as_ref().map(ImageData::size));

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, initial)));
    let boot = move || {
        let (flags, initial) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, initial)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .style(App::style)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the startup flags and the capture
    /// decoded by [`run`].
    fn new(flags: Flags, initial: Option<ImageData>) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(std::path::PathBuf::from));
        if let Some(key) = config_warning {
            log::warn!("{}", I18n::default().tr(&key));
        }

        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_parts(i18n, &config, clipboard::detect());

        if let Some(image) = initial {
            app.pin.fix(image);
            // The window was already created at this size.
            let _ = app.pin.take_window_request();
        }

        (app, Task::none())
    }

    fn with_parts(i18n: I18n, config: &Config, clipboard: Box<dyn ImageClipboard>) -> Self {
        Self {
            i18n,
            pin: pin::State::new(ViewSettings::from(config)),
            window_id: None,
            clipboard,
            save: config.save.clone(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Clears the window background so only the framed bitmap and its
    /// shadow are drawn.
    fn style(&self, theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            pin: &mut self.pin,
            window_id: &mut self.window_id,
            clipboard: self.clipboard.as_mut(),
            save: &self.save,
        };

        match message {
            Message::Pin(pin_message) => update::handle_pin_message(&mut ctx, pin_message),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::SaveAsDialogResult(path) => {
                update::handle_save_as_dialog_result(&mut ctx, path)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            pin: &self.pin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::ui::pin::Action;
    use iced::{event, mouse, Point};

    fn app() -> App {
        App::with_parts(
            I18n::default(),
            &Config::default(),
            Box::new(MemoryClipboard::default()),
        )
    }

    fn solid(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![90; (width * height * 4) as usize])
    }

    #[test]
    fn window_settings_are_frameless_and_on_top() {
        let settings = window_settings(Some((100, 50)));
        assert!(!settings.decorations);
        assert!(settings.transparent);
        assert!(!settings.resizable);
        assert_eq!(settings.level, window::Level::AlwaysOnTop);
        assert_eq!(settings.size, Size::new(120.0, 70.0));
    }

    #[test]
    fn window_settings_fall_back_to_placeholder() {
        let settings = window_settings(None);
        assert_eq!(settings.size, Size::new(320.0, 200.0));
    }

    #[test]
    fn first_raw_event_records_window() {
        let mut app = app();
        let id = window::Id::unique();
        let _ = app.update(Message::Pin(pin::Message::RawEvent {
            window: id,
            event: event::Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(1.0, 1.0),
            }),
        }));
        assert_eq!(app.window_id, Some(id));
    }

    #[test]
    fn paste_through_app_replaces_pinned_image() {
        let mut app = app();
        app.pin.fix(solid(3, 3));
        let _ = app.update(Message::Pin(pin::Message::Menu(Action::Copy)));
        app.pin.fix(solid(10, 10));
        let _ = app.update(Message::Pin(pin::Message::Menu(Action::Paste)));
        assert_eq!(app.pin.natural_size(), Some((3, 3)));
    }

    #[test]
    fn title_is_localized() {
        let app = app();
        assert!(!app.title().starts_with("MISSING"));
    }
}
