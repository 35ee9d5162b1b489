// SPDX-License-Identifier: MPL-2.0
//! Edit panel shown while the pin is in editing mode.
//!
//! The panel is a small toolbar anchored to the bottom-right corner of the
//! image. It only reports which button was pressed; the pin component decides
//! what each [`Event`] means.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{Element, Length, Point, Rectangle, Size};

/// Buttons of the edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Save,
    Confirm,
    Cancel,
    Fix,
    Undo,
    Redo,
}

impl Event {
    /// Every event, in toolbar order.
    pub const ALL: [Event; 6] = [
        Event::Undo,
        Event::Redo,
        Event::Fix,
        Event::Save,
        Event::Cancel,
        Event::Confirm,
    ];

    fn label_key(self) -> &'static str {
        match self {
            Event::Save => "edit-panel-save",
            Event::Confirm => "edit-panel-confirm",
            Event::Cancel => "edit-panel-cancel",
            Event::Fix => "edit-panel-fix",
            Event::Undo => "edit-panel-undo",
            Event::Redo => "edit-panel-redo",
        }
    }
}

/// Visibility and placement of the panel.
#[derive(Debug, Clone, Default)]
pub struct State {
    visible: bool,
    /// Bottom-right corner the panel is aligned to, in window coordinates.
    anchor: Point,
}

impl State {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Aligns the panel with the bottom-right corner of `content`.
    pub fn reposition(&mut self, content: Rectangle) {
        self.anchor = Point::new(content.x + content.width, content.y + content.height);
    }

    /// Top-left corner of the panel, kept inside the window.
    #[must_use]
    pub fn top_left(&self) -> Point {
        let size = panel_size();
        Point::new(
            (self.anchor.x - size.width).max(0.0),
            (self.anchor.y - size.height).max(0.0),
        )
    }
}

/// Outer size of the panel.
#[must_use]
pub fn panel_size() -> Size {
    #[allow(clippy::cast_precision_loss)]
    let buttons = Event::ALL.len() as f32;
    Size::new(
        buttons * sizing::EDIT_PANEL_BUTTON_WIDTH
            + (buttons - 1.0) * spacing::XXS
            + 2.0 * spacing::XXS,
        sizing::EDIT_PANEL_HEIGHT,
    )
}

/// Renders the toolbar. Placement is handled by the caller via [`State::top_left`].
pub fn view<'a>(i18n: &I18n) -> Element<'a, Event> {
    let buttons = Event::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, &event| {
            row.push(
                button(
                    text(i18n.tr(event.label_key()))
                        .size(typography::CAPTION)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .center(),
                )
                .width(Length::Fixed(sizing::EDIT_PANEL_BUTTON_WIDTH))
                .height(Length::Fill)
                .padding(0)
                .style(styles::button::panel_tool)
                .on_press(event),
            )
        },
    );

    let size = panel_size();
    container(buttons)
        .padding(spacing::XXS)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .style(styles::container::panel)
        .into()
}
