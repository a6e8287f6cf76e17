use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sb_core::keymap::{KeyChord, KeyCode, Modifiers};

/// Translate a crossterm key event into a [`KeyChord`].
///
/// Key releases and keys the key map has no name for yield `None`.
pub fn to_key_chord(event: &KeyEvent) -> Option<KeyChord> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let code = match event.code {
        CtKeyCode::Char(c) => KeyCode::Char(c),
        CtKeyCode::Enter => KeyCode::Enter,
        CtKeyCode::Esc => KeyCode::Esc,
        CtKeyCode::Tab => KeyCode::Tab,
        CtKeyCode::BackTab => KeyCode::BackTab,
        CtKeyCode::Backspace => KeyCode::Backspace,
        CtKeyCode::Delete => KeyCode::Delete,
        CtKeyCode::Up => KeyCode::Up,
        CtKeyCode::Down => KeyCode::Down,
        CtKeyCode::Left => KeyCode::Left,
        CtKeyCode::Right => KeyCode::Right,
        CtKeyCode::Home => KeyCode::Home,
        CtKeyCode::End => KeyCode::End,
        _ => return None,
    };

    let modifiers = Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        // BackTab already encodes the shift.
        shift: event.modifiers.contains(KeyModifiers::SHIFT) && code != KeyCode::BackTab,
    };

    Some(KeyChord::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn event(code: CtKeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_letter() {
        let chord = to_key_chord(&event(CtKeyCode::Char('n'), KeyModifiers::NONE)).unwrap();
        assert_eq!(chord, "n".parse::<KeyChord>().unwrap());
    }

    #[test]
    fn shifted_letter_keeps_the_uppercase_char() {
        let chord = to_key_chord(&event(CtKeyCode::Char('N'), KeyModifiers::SHIFT)).unwrap();
        assert_eq!(chord, KeyChord::plain(KeyCode::Char('N')));
        assert!(chord.is_text_editing());
    }

    #[test]
    fn control_combination() {
        let chord = to_key_chord(&event(CtKeyCode::Char('k'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(chord, "ctrl+k".parse::<KeyChord>().unwrap());
        assert!(!chord.is_text_editing());
    }

    #[test]
    fn shift_tab_is_plain_backtab() {
        let chord = to_key_chord(&event(CtKeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(chord, KeyChord::plain(KeyCode::BackTab));
    }

    #[test]
    fn releases_and_unmapped_keys_are_dropped() {
        let release = KeyEvent {
            code: CtKeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(to_key_chord(&release), None);
        assert_eq!(to_key_chord(&event(CtKeyCode::F(5), KeyModifiers::NONE)), None);
    }
}
