// SPDX-License-Identifier: MPL-2.0
//! Pin component encapsulating view state and update logic.
//!
//! The component never touches the OS window, the clipboard or the file
//! system. It updates its own [`WindowGeometry`] and reports side effects
//! through [`Effect`] and [`State::take_window_request`]; the application
//! performs them.

use crate::config::Config;
use crate::media::{self, render, ImageData};
use crate::ui::edit_panel;
use crate::ui::pin::context_menu::{self, Action, Entry};
use crate::ui::state::geometry::border_margin;
use crate::ui::state::{outer_size, DragState, Opacity, Scale, WindowGeometry};
use iced::{event, keyboard, mouse, window, Point, Rectangle, Size};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Messages handled by the pin component.
#[derive(Debug, Clone)]
pub enum Message {
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Menu(Action),
    EditPanel(edit_panel::Event),
}

/// Side effects the application should perform after handling a pin message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Close,
    /// Hand the pointer to the OS so it moves the window.
    DragWindow,
    CopyToClipboard,
    PasteFromClipboard,
    OpenFileDialog,
    SaveImage,
    /// Load a dropped file and show it.
    LoadFile(PathBuf),
}

/// Pending change to the OS window, produced by the last update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowRequest {
    Reshape(WindowGeometry),
}

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// The edit panel is shown; pointer drag and wheel are disabled.
    Editing,
}

/// User-tunable interaction settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Scale/opacity change per wheel notch.
    pub wheel_step: f32,
    /// Side of the thumbnail square in pixels.
    pub thumbnail_size: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            wheel_step: config.view.wheel_step(),
            thumbnail_size: config.view.thumbnail_size(),
        }
    }
}

#[derive(Debug, Clone)]
struct OpenMenu {
    origin: Point,
    entries: Vec<Entry>,
}

/// Complete pin component state.
#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    /// Centre crop of the scaled image, built when thumbnail mode is entered.
    thumbnail: Option<ImageData>,
    scale: Scale,
    opacity: Opacity,
    is_thumbnail: bool,
    mode: Mode,
    ctrl_held: bool,
    drag: DragState,
    cursor_position: Option<Point>,
    last_click: Option<Instant>,
    geometry: WindowGeometry,
    /// Geometry to return to once the menu or edit panel no longer needs a larger window.
    restore_geometry: Option<WindowGeometry>,
    pending_window: Option<WindowRequest>,
    menu: Option<OpenMenu>,
    edit_panel: edit_panel::State,
    settings: ViewSettings,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            image: None,
            thumbnail: None,
            scale: Scale::default(),
            opacity: Opacity::default(),
            is_thumbnail: false,
            mode: Mode::Normal,
            ctrl_held: false,
            drag: DragState::default(),
            cursor_position: None,
            last_click: None,
            geometry: WindowGeometry::default(),
            restore_geometry: None,
            pending_window: None,
            menu: None,
            edit_panel: edit_panel::State::default(),
            settings,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Bitmap to draw: the thumbnail crop in thumbnail mode, the full image otherwise.
    #[must_use]
    pub fn display_image(&self) -> Option<&ImageData> {
        if self.is_thumbnail {
            self.thumbnail.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }

    /// Natural size of the current bitmap.
    #[must_use]
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(ImageData::size)
    }

    /// Size the bitmap is drawn at, without the border.
    #[must_use]
    pub fn display_size(&self) -> Option<(u32, u32)> {
        let natural = self.natural_size()?;
        if self.is_thumbnail {
            let side = self.settings.thumbnail_size;
            Some((side, side))
        } else {
            Some(render::scaled_size(natural, self.scale.value()))
        }
    }

    /// Rectangle occupied by the bitmap, in window coordinates.
    #[must_use]
    pub fn content_bounds(&self) -> Rectangle {
        let margin = border_margin();
        #[allow(clippy::cast_precision_loss)]
        let size = self
            .display_size()
            .map_or_else(|| self.geometry.content_size(), |(w, h)| {
                Size::new(w as f32, h as f32)
            });
        Rectangle::new(Point::new(margin, margin), size)
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    #[must_use]
    pub fn is_thumbnail(&self) -> bool {
        self.is_thumbnail
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    #[must_use]
    pub fn ctrl_held(&self) -> bool {
        self.ctrl_held
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    #[must_use]
    pub fn edit_panel(&self) -> &edit_panel::State {
        &self.edit_panel
    }

    /// Rows and top-left corner of the open context menu.
    #[must_use]
    pub fn menu(&self) -> Option<(&[Entry], Point)> {
        self.menu
            .as_ref()
            .map(|menu| (menu.entries.as_slice(), menu.origin))
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Takes the window move/resize produced by the last update, if any.
    pub fn take_window_request(&mut self) -> Option<WindowRequest> {
        self.pending_window.take()
    }

    // -------------------------------------------------------------------------
    // Image replacement
    // -------------------------------------------------------------------------

    /// Shows a freshly captured image at natural size.
    pub fn fix(&mut self, image: ImageData) {
        log::debug!("Pinning {}x{} image", image.width, image.height);
        self.replace_image(image);
    }

    /// Replaces the bitmap after open, paste or drop.
    ///
    /// Scale resets to 1.0 and thumbnail mode is left, so the window (natural
    /// size plus border, top-left kept) matches what is drawn.
    pub fn replace_image(&mut self, image: ImageData) {
        let size = outer_size(image.size());
        self.image = Some(image);
        self.thumbnail = None;
        self.is_thumbnail = false;
        self.scale = Scale::default();
        self.restore_geometry = None;
        self.request_reshape(WindowGeometry::new(self.geometry.position, size));
        self.grow_for_edit_panel();
    }

    /// Reacts to a file dropped onto the window.
    pub fn drop_file(&mut self, path: PathBuf) -> Effect {
        if media::accepts_drop(&path) {
            log::info!("Accepted dropped file {}", path.display());
            Effect::LoadFile(path)
        } else {
            log::debug!("Ignored dropped file {}", path.display());
            Effect::None
        }
    }

    // -------------------------------------------------------------------------
    // View transform
    // -------------------------------------------------------------------------

    /// Resets opacity and scale and restores natural size. No-op in thumbnail mode.
    pub fn recover(&mut self) {
        if self.is_thumbnail {
            return;
        }
        self.opacity = Opacity::default();
        self.scale = Scale::default();
        if let Some(natural) = self.natural_size() {
            self.resize_centered(outer_size(natural));
        }
    }

    /// Switches between the full image and the centred thumbnail square.
    pub fn toggle_thumbnail(&mut self) {
        let Some(image) = self.image.as_ref() else {
            return;
        };

        self.is_thumbnail = !self.is_thumbnail;
        let target = if self.is_thumbnail {
            let side = self.settings.thumbnail_size;
            self.thumbnail = Some(render::thumbnail(image, self.scale.value(), side));
            outer_size((side, side))
        } else {
            self.thumbnail = None;
            outer_size(render::scaled_size(image.size(), self.scale.value()))
        };

        log::debug!("Thumbnail mode {}", if self.is_thumbnail { "on" } else { "off" });
        self.resize_centered(target);
    }

    // -------------------------------------------------------------------------
    // Message handling
    // -------------------------------------------------------------------------

    /// Update the state and return the [`Effect`] the application must perform.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
            Message::Menu(action) => self.handle_menu_action(action),
            Message::EditPanel(event) => self.handle_edit_panel_event(event),
        }
    }

    fn handle_menu_action(&mut self, action: Action) -> Effect {
        self.close_menu();
        match action {
            Action::Copy => Effect::CopyToClipboard,
            Action::Paste => Effect::PasteFromClipboard,
            Action::Edit => {
                self.enter_editing();
                Effect::None
            }
            Action::Open => Effect::OpenFileDialog,
            Action::Save => Effect::SaveImage,
            Action::Recover => {
                self.recover();
                Effect::None
            }
            Action::Close => Effect::Close,
        }
    }

    fn handle_edit_panel_event(&mut self, event: edit_panel::Event) -> Effect {
        match event {
            edit_panel::Event::Save => Effect::SaveImage,
            edit_panel::Event::Cancel => {
                self.exit_editing();
                Effect::None
            }
            edit_panel::Event::Confirm
            | edit_panel::Event::Fix
            | edit_panel::Event::Undo
            | edit_panel::Event::Redo => {
                log::debug!("Edit panel event {event:?} has no action");
                Effect::None
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Window(window_event) => {
                self.handle_window_event(window_event);
                Effect::None
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::WheelScrolled { delta } => {
                    self.handle_wheel(delta);
                    Effect::None
                }
                mouse::Event::ButtonPressed(button) => self.handle_mouse_button_pressed(button),
                mouse::Event::ButtonReleased(_) => {
                    self.drag.stop();
                    Effect::None
                }
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                    Effect::None
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    Effect::None
                }
                _ => Effect::None,
            },
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard_event(keyboard_event),
            _ => Effect::None,
        }
    }

    fn handle_window_event(&mut self, event: window::Event) {
        match event {
            window::Event::Opened { position, size } => {
                if let Some(position) = position {
                    self.geometry.position = position;
                }
                self.geometry.size = size;
            }
            window::Event::Moved(position) => {
                self.geometry.position = position;
            }
            window::Event::Resized(size) => {
                self.geometry.size = size;
                self.sync_edit_panel();
            }
            _ => {}
        }
    }

    fn handle_keyboard_event(&mut self, event: keyboard::Event) -> Effect {
        match event {
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            } => {
                if self.menu.is_some() {
                    self.close_menu();
                    Effect::None
                } else {
                    Effect::Close
                }
            }
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Control),
                ..
            } => {
                self.ctrl_held = true;
                Effect::None
            }
            keyboard::Event::KeyReleased {
                key: keyboard::Key::Named(keyboard::key::Named::Control),
                ..
            } => {
                self.ctrl_held = false;
                Effect::None
            }
            keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            } if modifiers.command() && !modifiers.alt() => match c.as_str() {
                "c" | "C" => Effect::CopyToClipboard,
                "v" | "V" => Effect::PasteFromClipboard,
                "s" | "S" => Effect::SaveImage,
                "o" | "O" => Effect::OpenFileDialog,
                _ => Effect::None,
            },
            keyboard::Event::ModifiersChanged(modifiers) => {
                self.ctrl_held = modifiers.control();
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_mouse_button_pressed(&mut self, button: mouse::Button) -> Effect {
        // A press that reaches the component landed outside the menu
        if self.menu.is_some() {
            self.close_menu();
            return Effect::None;
        }

        if self.is_editing() {
            return Effect::None;
        }

        match button {
            mouse::Button::Left => {
                let now = Instant::now();
                let double_click = self
                    .last_click
                    .is_some_and(|instant| now.duration_since(instant) <= DOUBLE_CLICK_THRESHOLD);

                if double_click {
                    self.last_click = None;
                    self.drag.stop();
                    self.toggle_thumbnail();
                    return Effect::None;
                }
                self.last_click = Some(now);

                // Without a known pointer position there is nothing to grab.
                if self.cursor_position.is_none() {
                    return Effect::None;
                }
                self.drag.start();
                Effect::DragWindow
            }
            mouse::Button::Right => {
                self.drag.stop();
                self.open_menu(self.cursor_position.unwrap_or(Point::ORIGIN));
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_wheel(&mut self, delta: mouse::ScrollDelta) {
        if self.is_editing() || self.menu.is_some() {
            return;
        }

        let steps = scroll_steps(&delta);
        if steps.abs() < f32::EPSILON {
            return;
        }
        let amount = steps * self.settings.wheel_step;

        if self.ctrl_held {
            self.opacity = self.opacity.adjust(amount);
        } else if !self.is_thumbnail {
            self.scale = self.scale.adjust(amount);
            if let Some(natural) = self.natural_size() {
                self.resize_centered(outer_size(render::scaled_size(
                    natural,
                    self.scale.value(),
                )));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Context menu and edit mode
    // -------------------------------------------------------------------------

    fn open_menu(&mut self, cursor: Point) {
        let entries = context_menu::entries(self.scale, self.opacity);
        let (origin, needed) =
            context_menu::place(cursor, context_menu::menu_size(&entries), self.geometry.size);
        self.grow_window(needed);
        self.menu = Some(OpenMenu { origin, entries });
    }

    fn close_menu(&mut self) {
        if self.menu.take().is_some() {
            self.release_window_growth();
        }
    }

    fn enter_editing(&mut self) {
        if self.is_thumbnail {
            log::debug!("Edit mode unavailable in thumbnail mode");
            return;
        }
        self.mode = Mode::Editing;
        self.drag.stop();
        self.edit_panel.show();
        self.sync_edit_panel();
        self.grow_for_edit_panel();
    }

    fn exit_editing(&mut self) {
        self.mode = Mode::Normal;
        self.edit_panel.hide();
        self.release_window_growth();
    }

    fn sync_edit_panel(&mut self) {
        let content = self.content_bounds();
        self.edit_panel.reposition(content);
    }

    fn grow_for_edit_panel(&mut self) {
        if !self.edit_panel.is_visible() {
            return;
        }
        let panel = edit_panel::panel_size();
        let margin = 2.0 * border_margin();
        let needed = Size::new(
            self.geometry.size.width.max(panel.width + margin),
            self.geometry.size.height.max(panel.height + margin),
        );
        self.grow_window(needed);
        self.sync_edit_panel();
    }

    /// Enlarges the window to `needed`, keeping its top-left corner.
    fn grow_window(&mut self, needed: Size) {
        if needed == self.geometry.size {
            return;
        }
        if self.restore_geometry.is_none() {
            self.restore_geometry = Some(self.geometry);
        }
        self.request_reshape(WindowGeometry::new(self.geometry.position, needed));
    }

    /// Shrinks the window back once neither the menu nor the edit panel is shown.
    fn release_window_growth(&mut self) {
        if self.menu.is_some() || self.edit_panel.is_visible() {
            return;
        }
        if let Some(geometry) = self.restore_geometry.take() {
            self.request_reshape(geometry);
        }
    }

    // -------------------------------------------------------------------------
    // Window requests
    // -------------------------------------------------------------------------

    fn resize_centered(&mut self, size: Size) {
        self.restore_geometry = None;
        let geometry = self.geometry.centered_resize(size);
        self.request_reshape(geometry);
        self.sync_edit_panel();
        self.grow_for_edit_panel();
    }

    fn request_reshape(&mut self, geometry: WindowGeometry) {
        self.geometry = geometry;
        self.pending_window = Some(WindowRequest::Reshape(geometry));
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into notches.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}
