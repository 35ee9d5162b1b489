// SPDX-License-Identifier: MPL-2.0
//! Rendering of the pin window.
//!
//! Layers, bottom to top: the framed bitmap inset by the border margin, the
//! edit panel, then the context menu.

use super::component::{Message, State};
use super::context_menu;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::edit_panel;
use crate::ui::state::geometry::border_margin;
use crate::ui::styles;
use iced::widget::image::FilterMethod;
use iced::widget::{container, image, mouse_area, text, Stack};
use iced::{mouse, ContentFit, Element, Length, Padding, Point};

/// Environment information required to render the pin.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::default()
    };

    let base = mouse_area(
        container(content(state, ctx))
            .padding(border_margin())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::transparent),
    )
    .interaction(interaction);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if state.edit_panel().is_visible() {
        let panel = edit_panel::view(ctx.i18n).map(Message::EditPanel);
        layers = layers.push(positioned(panel, state.edit_panel().top_left()));
    }

    if let Some((entries, origin)) = state.menu() {
        let menu = context_menu::view(entries, ctx.i18n).map(Message::Menu);
        layers = layers.push(positioned(menu, origin));
    }

    layers.into()
}

/// The bitmap, or a hint when nothing has been pinned yet.
fn content<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some((bitmap, (width, height))) = state.display_image().zip(state.display_size()) else {
        return container(text(ctx.i18n.tr("pin-empty")).size(typography::BODY))
            .padding(spacing::SM)
            .center(Length::Fill)
            .style(styles::container::panel)
            .into();
    };

    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (width as f32, height as f32);

    let picture = image(bitmap.handle.clone())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Fill)
        .filter_method(FilterMethod::Linear)
        .opacity(state.opacity().value());

    container(picture)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(styles::container::pin_frame)
        .into()
}

/// Places `element` with its top-left corner at `origin`.
fn positioned<'a>(element: Element<'a, Message>, origin: Point) -> Element<'a, Message> {
    container(element)
        .padding(Padding {
            top: origin.y,
            right: 0.0,
            bottom: 0.0,
            left: origin.x,
        })
        .into()
}
