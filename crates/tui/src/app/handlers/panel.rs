use crate::app::AppState;
use crossterm::event::KeyCode;

pub(super) fn handle_panel_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('p') => {
            app.go_home();
            true
        }
        KeyCode::Char('q') => {
            app.should_exit = true;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => match app.panel_screen.as_mut() {
            Some(screen) => {
                screen.select_prev();
                true
            }
            None => false,
        },
        KeyCode::Down | KeyCode::Char('j') => match app.panel_screen.as_mut() {
            Some(screen) => {
                screen.select_next();
                true
            }
            None => false,
        },
        KeyCode::Enter | KeyCode::Char(' ') => app.apply_selected(),
        _ => false,
    }
}
