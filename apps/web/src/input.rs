use indie_sync::Action;
use ratzilla::event::KeyCode;

/// Maps a browser key press to a showcase action. The compact sheet captures
/// typing for its search box while it is open.
pub fn action_for_key(code: KeyCode, sheet_open: bool) -> Option<Action> {
    if sheet_open {
        return match code {
            KeyCode::Esc => Some(Action::CloseSheet),
            KeyCode::Enter => Some(Action::CompactSelect),
            KeyCode::Up => Some(Action::CompactUp),
            KeyCode::Down => Some(Action::CompactDown),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Left => Some(Action::PreviousCategory),
        KeyCode::Right => Some(Action::NextCategory),
        KeyCode::Up => Some(Action::PreviousBrand),
        KeyCode::Down => Some(Action::NextBrand),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| usize::try_from(digit).ok())
            .map(|digit| Action::SelectCategory(digit - 1)),
        KeyCode::Char('r') => Some(Action::ToggleDescription),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('b' | '/') => Some(Action::OpenSheet),
        _ => None,
    }
}
