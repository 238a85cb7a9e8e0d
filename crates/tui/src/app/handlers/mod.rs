mod home;
mod panel;

use crate::app::state::Screen;
use crate::app::AppState;
use crossterm::event::{KeyCode, KeyModifiers};

/// Routes a key press to the active screen. Returns whether a redraw is needed.
pub(crate) fn handle_key(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_exit = true;
        return true;
    }
    match app.screen() {
        Screen::Home => home::handle_home_key(app, code),
        Screen::Panel(_) => panel::handle_panel_key(app, code),
    }
}

#[cfg(test)]
mod tests {
    use super::handle_key;
    use crate::app::state::{Panel, Screen};
    use crate::app::system::testing::offline_services;
    use crate::app::AppState;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_exits_from_any_screen() {
        let (services, _runner) = offline_services();
        let mut app = AppState::new(services);
        app.open_panel(Panel::Mouse);
        assert!(handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_exit);
    }

    #[test]
    fn enter_opens_tile_and_esc_returns_home() {
        let (services, _runner) = offline_services();
        let mut app = AppState::new(services);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.home_selected, 3);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Panel(Panel::Display));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
        assert!(!app.should_exit);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen(), Screen::Panel(Panel::Display));
    }

    #[test]
    fn digit_keys_jump_to_panels() {
        let (services, _runner) = offline_services();
        let mut app = AppState::new(services);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.screen(), Screen::Panel(Panel::Advanced));
    }
}
