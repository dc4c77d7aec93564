// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, mouse and window events are filtered down to the few the
//! player reacts to. A fixed-rate tick drives the simulated media clock and
//! every player deadline.

use super::message::{Message, NativeEvent};
use crate::controls::Key;
use iced::keyboard::{self, key::Named, Modifiers};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Interval between two ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Maps a toolkit key to a player key, ignoring keys without a binding.
#[must_use]
pub fn player_key(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::Space) => Some(Key::Space),
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(Named::ArrowUp) => Some(Key::ArrowUp),
        keyboard::Key::Named(Named::ArrowDown) => Some(Key::ArrowDown),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(Key::KeyM),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("f") => Some(Key::KeyF),
        _ => None,
    }
}

fn key_pressed(key: &keyboard::Key, modifiers: Modifiers) -> Option<NativeEvent> {
    // Shortcuts with modifiers belong to the window manager.
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    player_key(key).map(NativeEvent::Key)
}

fn route(event: &Event, status: event::Status) -> Option<NativeEvent> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            key_pressed(key, *modifiers)
        }
        Event::Mouse(mouse::Event::CursorMoved { .. }) => Some(NativeEvent::CursorMoved),
        Event::Mouse(mouse::Event::CursorLeft) => Some(NativeEvent::CursorLeft),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(NativeEvent::MouseReleased)
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(NativeEvent::UncapturedPress),
            event::Status::Captured => None,
        },
        Event::Window(window::Event::Resized(size)) => Some(NativeEvent::Resized(*size)),
        _ => None,
    }
}

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window| {
        route(&event, status).map(|event| Message::Native { window, event })
    })
}

/// Creates the periodic tick subscription.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(TICK_INTERVAL).map(Message::Tick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn bound_keys_are_mapped() {
        assert_eq!(
            player_key(&keyboard::Key::Named(Named::Space)),
            Some(Key::Space)
        );
        assert_eq!(
            player_key(&keyboard::Key::Character("M".into())),
            Some(Key::KeyM)
        );
        assert_eq!(
            player_key(&keyboard::Key::Character("f".into())),
            Some(Key::KeyF)
        );
        assert_eq!(player_key(&keyboard::Key::Character("x".into())), None);
        assert_eq!(player_key(&keyboard::Key::Named(Named::Escape)), None);
    }

    #[test]
    fn modified_keys_are_ignored() {
        let space = keyboard::Key::Named(Named::Space);
        assert_eq!(
            key_pressed(&space, Modifiers::empty()),
            Some(NativeEvent::Key(Key::Space))
        );
        assert_eq!(
            key_pressed(&space, Modifiers::SHIFT),
            Some(NativeEvent::Key(Key::Space))
        );
        assert_eq!(key_pressed(&space, Modifiers::CTRL), None);
        assert_eq!(key_pressed(&space, Modifiers::ALT), None);
    }

    #[test]
    fn only_uncaptured_presses_count_as_outside_clicks() {
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(
            route(&press, event::Status::Ignored),
            Some(NativeEvent::UncapturedPress)
        );
        assert_eq!(route(&press, event::Status::Captured), None);
    }

    #[test]
    fn resize_carries_the_new_size() {
        let resized = Event::Window(window::Event::Resized(Size::new(400.0, 800.0)));
        assert_eq!(
            route(&resized, event::Status::Ignored),
            Some(NativeEvent::Resized(Size::new(400.0, 800.0)))
        );
    }
}
