//! Keyboard input mapping
//!
//! Translates winit keys into keyboard messages. Only the keys the page
//! reacts to are mapped; everything else is ignored.

use winit::keyboard::{Key, NamedKey};

use sidepanel::messages::{KeyboardMsg, Msg};

/// Map a pressed key to a message
pub fn key_to_msg(key: &Key, shift: bool) -> Option<Msg> {
    let msg = match key {
        Key::Named(NamedKey::Escape) => KeyboardMsg::Escape,
        Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Space) => KeyboardMsg::Activate,
        Key::Named(NamedKey::Tab) if shift => KeyboardMsg::FocusPrevious,
        Key::Named(NamedKey::Tab) => KeyboardMsg::FocusNext,
        // Some platforms report Space as a character
        Key::Character(c) if c.as_str() == " " => KeyboardMsg::Activate,
        _ => return None,
    };
    Some(Msg::Keyboard(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_direction_follows_shift() {
        assert!(matches!(
            key_to_msg(&Key::Named(NamedKey::Tab), false),
            Some(Msg::Keyboard(KeyboardMsg::FocusNext))
        ));
        assert!(matches!(
            key_to_msg(&Key::Named(NamedKey::Tab), true),
            Some(Msg::Keyboard(KeyboardMsg::FocusPrevious))
        ));
    }

    #[test]
    fn test_activation_keys() {
        for key in [
            Key::Named(NamedKey::Enter),
            Key::Named(NamedKey::Space),
            Key::Character(" ".into()),
        ] {
            assert!(matches!(
                key_to_msg(&key, false),
                Some(Msg::Keyboard(KeyboardMsg::Activate))
            ));
        }
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert!(key_to_msg(&Key::Character("a".into()), false).is_none());
        assert!(key_to_msg(&Key::Named(NamedKey::ArrowUp), false).is_none());
    }
}
