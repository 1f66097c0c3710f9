use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Left,
    Right,
    Input(char),
    None,
}

/// Maps a key press to an action. Plain characters stay `Input` so text
/// fields can receive them; the app decides what they mean on the dashboard.
pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppAction::Quit,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab | KeyCode::Down => AppAction::NextField,
        KeyCode::BackTab | KeyCode::Up => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}
