// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::pin;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pin: &'a pin::State,
}

/// Renders the pin window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    pin::view(ctx.pin, &pin::ViewContext { i18n: ctx.i18n }).map(Message::Pin)
}
