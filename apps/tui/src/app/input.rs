use crate::app::state::{App, Screen};
use crossterm::event::KeyCode;
use indie_sync::Action;

pub fn handle_input(app: &mut App, key: KeyCode) {
    let showcase = match &mut app.screen {
        Screen::Error(_) => {
            if matches!(key, KeyCode::Esc | KeyCode::Char('q')) {
                app.running = false;
            }
            return;
        }
        Screen::Showcase(showcase) => showcase,
    };

    let sheet_open = showcase.ui().sheet_open;
    if !sheet_open && key == KeyCode::Char('q') {
        app.running = false;
        return;
    }

    let Some(action) = action_for_key(key, sheet_open) else {
        return;
    };

    match showcase.apply(action) {
        Ok(()) => {
            if let Some(category) = showcase.active_category() {
                app.status_message = match showcase.active_brand() {
                    Some(brand) => format!("{} / {}", category.label, brand.name),
                    None => category.label.clone(),
                };
            }
        }
        Err(e) => {
            log::warn!("{e}");
            app.status_message = format!("Error: {e}");
        }
    }
}

/// Same bindings as the browser build; `q` is handled by the caller. While the
/// brand sheet is open every printable key goes to its search box.
pub fn action_for_key(key: KeyCode, sheet_open: bool) -> Option<Action> {
    if sheet_open {
        return match key {
            KeyCode::Esc => Some(Action::CloseSheet),
            KeyCode::Enter => Some(Action::CompactSelect),
            KeyCode::Up => Some(Action::CompactUp),
            KeyCode::Down => Some(Action::CompactDown),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
    }

    match key {
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

#[cfg(test)]
mod tests {
    use super::*;
    use indie_sync::{Catalog, LoadError, Theme};

    const CATALOG: &str = r#"{"categories": {
        "pop": {"label": "Pop", "insight": "", "brands": [
            {"name": "Brand A", "fingerprint": [1, 2, 3, 4, 5]},
            {"name": "Brand B", "fingerprint": [5, 4, 3, 2, 1]}
        ]},
        "rock": {"label": "Rock", "insight": "", "brands": []}
    }}"#;

    fn app() -> App {
        App::from_load(Catalog::from_json(CATALOG), Theme::Dark)
    }

    fn selection(app: &App) -> Option<(String, usize)> {
        app.showcase().map(|showcase| {
            let selection = showcase.selection();
            (selection.category.clone(), selection.brand_index)
        })
    }

    #[test]
    fn arrows_move_brand_and_category() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Down);
        assert_eq!(selection(&app), Some(("pop".to_string(), 1)));
        assert_eq!(app.status_message, "Pop / Brand B");

        handle_input(&mut app, KeyCode::Right);
        assert_eq!(selection(&app), Some(("rock".to_string(), 0)));
        assert_eq!(app.status_message, "Rock");
    }

    #[test]
    fn q_types_into_open_sheet_instead_of_quitting() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Char('b'));
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.showcase().map(|s| s.ui().search.clone()), Some("q".to_string()));

        handle_input(&mut app, KeyCode::Esc);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn digits_select_tabs_and_ignore_missing_ones() {
        let mut app = app();

        handle_input(&mut app, KeyCode::Char('2'));
        assert_eq!(selection(&app), Some(("rock".to_string(), 0)));

        handle_input(&mut app, KeyCode::Char('9'));
        assert_eq!(selection(&app), Some(("rock".to_string(), 0)));
    }

    #[test]
    fn keys_outside_the_browser_map_do_nothing() {
        for key in [KeyCode::Tab, KeyCode::Enter, KeyCode::Char('j')] {
            assert_eq!(action_for_key(key, false), None);
        }
        assert_eq!(action_for_key(KeyCode::Char('r'), false), Some(Action::ToggleDescription));
    }

    #[test]
    fn error_screen_quits_on_escape() {
        let mut app = App::from_load(Err(LoadError::Status(500)), Theme::Dark);

        handle_input(&mut app, KeyCode::Down);
        assert!(app.running);
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
