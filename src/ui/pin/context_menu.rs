// SPDX-License-Identifier: MPL-2.0
//! Right-click menu of the pin window.
//!
//! The menu is drawn inside the pin window. When the window is too small to
//! hold it, the pin component grows the window for as long as the menu stays
//! open (see [`place`]).

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{Opacity, Scale};
use crate::ui::styles;
use iced::widget::{button, container, rule, text, Column};
use iced::{Element, Length, Point, Size};

/// Clickable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Paste,
    Edit,
    Open,
    Save,
    Recover,
    Close,
}

impl Action {
    fn label_key(self) -> &'static str {
        match self {
            Action::Copy => "menu-copy",
            Action::Paste => "menu-paste",
            Action::Edit => "menu-edit",
            Action::Open => "menu-open",
            Action::Save => "menu-save-as",
            Action::Recover => "menu-recover",
            Action::Close => "menu-close",
        }
    }
}

/// One row of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Item(Action),
    /// Read-only zoom value, truncated percent.
    Zoom(i32),
    /// Read-only opacity value, truncated percent.
    Opacity(i32),
    Separator,
}

impl Entry {
    fn height(self) -> f32 {
        match self {
            Entry::Separator => sizing::MENU_SEPARATOR_HEIGHT,
            _ => sizing::MENU_ITEM_HEIGHT,
        }
    }
}

/// Rows of the menu for the given view transform.
#[must_use]
pub fn entries(scale: Scale, opacity: Opacity) -> Vec<Entry> {
    vec![
        Entry::Item(Action::Copy),
        Entry::Item(Action::Paste),
        Entry::Separator,
        Entry::Item(Action::Edit),
        Entry::Separator,
        Entry::Item(Action::Open),
        Entry::Item(Action::Save),
        Entry::Separator,
        Entry::Zoom(scale.percent()),
        Entry::Opacity(opacity.percent()),
        Entry::Item(Action::Recover),
        Entry::Separator,
        Entry::Item(Action::Close),
    ]
}

/// Outer size of a menu holding `entries`.
#[must_use]
pub fn menu_size(entries: &[Entry]) -> Size {
    let rows: f32 = entries.iter().map(|entry| entry.height()).sum();
    Size::new(sizing::MENU_WIDTH, rows + 2.0 * sizing::MENU_PADDING)
}

/// Where to draw a menu of size `menu` opened at `cursor` in a `window`.
///
/// Returns the menu's top-left corner and the window size needed to show it.
/// The window only grows (right and down) when it is smaller than the menu;
/// otherwise the menu is shifted to stay inside the window.
#[must_use]
pub fn place(cursor: Point, menu: Size, window: Size) -> (Point, Size) {
    let needed = Size::new(window.width.max(menu.width), window.height.max(menu.height));
    let origin = Point::new(
        cursor.x.min(needed.width - menu.width).max(0.0),
        cursor.y.min(needed.height - menu.height).max(0.0),
    );
    (origin, needed)
}

/// Renders the menu rows. Placement is handled by the caller.
pub fn view<'a>(entries: &[Entry], i18n: &I18n) -> Element<'a, Action> {
    let rows = entries.iter().fold(Column::new(), |column, entry| {
        let row: Element<'a, Action> = match *entry {
            Entry::Item(action) => button(text(i18n.tr(action.label_key())).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::menu_item)
                .on_press(action)
                .into(),
            Entry::Zoom(percent) => readout(i18n.tr_with_args("menu-zoom", &[("percent", percent)])),
            Entry::Opacity(percent) => {
                readout(i18n.tr_with_args("menu-opacity", &[("percent", percent)]))
            }
            Entry::Separator => container(rule::horizontal(1))
                .height(Length::Fixed(sizing::MENU_SEPARATOR_HEIGHT))
                .center_y(Length::Fixed(sizing::MENU_SEPARATOR_HEIGHT))
                .into(),
        };
        column.push(row)
    });

    let size = menu_size(entries);
    container(rows)
        .padding(sizing::MENU_PADDING)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .style(styles::container::panel)
        .into()
}

fn readout<'a>(label: String) -> Element<'a, Action> {
    container(text(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .center_y(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
        .into()
}
