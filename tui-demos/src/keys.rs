use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Quit keys shared by the demos that don't take free text.
pub const QUIT_KEYS: &[&str] = &["ctrl+c", "esc", "q"];

/// Human-readable identifier for a key press, e.g. `"q"`, `"esc"`, `"ctrl+c"`.
pub fn key_name(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".into(),
        KeyCode::Esc => "esc".into(),
        KeyCode::Backspace => "backspace".into(),
        KeyCode::Delete => "delete".into(),
        KeyCode::Tab => "tab".into(),
        KeyCode::BackTab => "shift+tab".into(),
        KeyCode::Left => "left".into(),
        KeyCode::Right => "right".into(),
        KeyCode::Up => "up".into(),
        KeyCode::Down => "down".into(),
        KeyCode::Home => "home".into(),
        KeyCode::End => "end".into(),
        KeyCode::F(n) => format!("f{n}"),
        _ => "unknown".into(),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("ctrl+{base}")
    } else if key.modifiers.contains(KeyModifiers::ALT) {
        format!("alt+{base}")
    } else {
        base
    }
}

pub fn is_one_of(key: &KeyEvent, names: &[&str]) -> bool {
    let name = key_name(key);
    names.iter().any(|n| *n == name)
}

/// Key presses only; release and repeat events are dropped.
pub fn pressed(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn names_common_keys() {
        assert_eq!(key_name(&key(KeyCode::Char('q'), KeyModifiers::NONE)), "q");
        assert_eq!(key_name(&key(KeyCode::Esc, KeyModifiers::NONE)), "esc");
        assert_eq!(key_name(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)), "ctrl+c");
        assert_eq!(key_name(&key(KeyCode::Enter, KeyModifiers::NONE)), "enter");
    }

    #[test]
    fn uppercase_is_not_lowercase_key() {
        let shifted = key(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(key_name(&shifted), "Q");
        assert!(!is_one_of(&shifted, QUIT_KEYS));
    }

    #[test]
    fn quit_set_matches() {
        assert!(is_one_of(&key(KeyCode::Char('q'), KeyModifiers::NONE), QUIT_KEYS));
        assert!(is_one_of(&key(KeyCode::Esc, KeyModifiers::NONE), QUIT_KEYS));
        assert!(is_one_of(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), QUIT_KEYS));
        assert!(!is_one_of(&key(KeyCode::Char('c'), KeyModifiers::NONE), QUIT_KEYS));
    }

    #[test]
    fn pressed_ignores_releases_and_resizes() {
        let mut release = key(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        assert!(pressed(&Event::Key(release)).is_none());
        assert!(pressed(&Event::Resize(80, 24)).is_none());
        assert!(pressed(&Event::Key(key(KeyCode::Char('q'), KeyModifiers::NONE))).is_some());
    }
}
