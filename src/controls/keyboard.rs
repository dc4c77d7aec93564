// SPDX-License-Identifier: MPL-2.0
//! Global keyboard bindings.

use super::skip::SkipDirection;

/// Physical keys the player listens to, independent of the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyM,
    KeyF,
}

/// Transport action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlay,
    Skip(SkipDirection),
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
}

/// A resolved key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub action: KeyAction,
    /// Whether the host should suppress its default handling (page scroll).
    pub prevent_default: bool,
}

/// Looks up the binding for a key.
#[must_use]
pub fn binding_for(key: Key) -> Binding {
    let (action, prevent_default) = match key {
        Key::Space => (KeyAction::TogglePlay, true),
        Key::ArrowLeft => (KeyAction::Skip(SkipDirection::Rewind), false),
        Key::ArrowRight => (KeyAction::Skip(SkipDirection::Forward), false),
        Key::ArrowUp => (KeyAction::VolumeUp, true),
        Key::ArrowDown => (KeyAction::VolumeDown, true),
        Key::KeyM => (KeyAction::ToggleMute, false),
        Key::KeyF => (KeyAction::ToggleFullscreen, false),
    };
    Binding {
        action,
        prevent_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_toggles_play_and_suppresses_scroll() {
        let binding = binding_for(Key::Space);
        assert_eq!(binding.action, KeyAction::TogglePlay);
        assert!(binding.prevent_default);
    }

    #[test]
    fn arrows_map_to_skip_and_volume() {
        assert_eq!(
            binding_for(Key::ArrowLeft).action,
            KeyAction::Skip(SkipDirection::Rewind)
        );
        assert_eq!(
            binding_for(Key::ArrowRight).action,
            KeyAction::Skip(SkipDirection::Forward)
        );
        assert_eq!(binding_for(Key::ArrowUp).action, KeyAction::VolumeUp);
        assert_eq!(binding_for(Key::ArrowDown).action, KeyAction::VolumeDown);
    }

    #[test]
    fn only_space_and_vertical_arrows_prevent_default() {
        let preventing: Vec<Key> = [
            Key::Space,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::KeyM,
            Key::KeyF,
        ]
        .into_iter()
        .filter(|k| binding_for(*k).prevent_default)
        .collect();
        assert_eq!(preventing, vec![Key::Space, Key::ArrowUp, Key::ArrowDown]);
    }

    #[test]
    fn letters_map_to_mute_and_fullscreen() {
        assert_eq!(binding_for(Key::KeyM).action, KeyAction::ToggleMute);
        assert_eq!(binding_for(Key::KeyF).action, KeyAction::ToggleFullscreen);
    }
}
