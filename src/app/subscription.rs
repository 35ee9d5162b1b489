// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the pin component as raw events. Window
//! geometry events always go through so the component can track where the OS
//! placed it; keyboard and mouse events only when no widget captured them
//! (clicks on menu and panel buttons are handled by the buttons themselves).

use super::Message;
use crate::ui::pin;
use iced::{event, window, Subscription};

/// Creates the event subscription feeding the pin window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

fn route_event(event: event::Event, status: event::Status, window_id: window::Id) -> Option<Message> {
    match &event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path.clone()))
        }
        event::Event::Window(
            window::Event::Opened { .. } | window::Event::Moved(_) | window::Event::Resized(_),
        ) => Some(raw(window_id, event)),
        event::Event::Keyboard(_) | event::Event::Mouse(_) => match status {
            event::Status::Ignored => Some(raw(window_id, event)),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

fn raw(window: window::Id, event: event::Event) -> Message {
    Message::Pin(pin::Message::RawEvent { window, event })
}
