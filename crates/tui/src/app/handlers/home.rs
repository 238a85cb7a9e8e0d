use crate::app::state::{Panel, MENU_COLUMNS};
use crate::app::AppState;
use crossterm::event::KeyCode;

fn move_selection(app: &mut AppState, delta_row: isize, delta_col: isize) -> bool {
    let count = Panel::ALL.len() as isize;
    let columns = MENU_COLUMNS as isize;
    let current = app.home_selected as isize;
    let row = current / columns + delta_row;
    let col = current % columns + delta_col;
    if row < 0 || col < 0 || col >= columns {
        return false;
    }
    let next = row * columns + col;
    if next >= count {
        return false;
    }
    app.home_selected = next as usize;
    true
}

pub(super) fn handle_home_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1, 0),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1, 0),
        KeyCode::Left | KeyCode::Char('h') => move_selection(app, 0, -1),
        KeyCode::Right | KeyCode::Char('l') => move_selection(app, 0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => match Panel::from_index(app.home_selected) {
            Some(panel) => {
                app.open_panel(panel);
                true
            }
            None => false,
        },
        KeyCode::Char(digit @ '0'..='9') => {
            let index = digit.to_digit(10).map(|value| value as usize);
            match index.and_then(Panel::from_index) {
                Some(panel) => {
                    app.open_panel(panel);
                    true
                }
                None => false,
            }
        }
        KeyCode::Tab | KeyCode::Char('n') => app.go_next(),
        KeyCode::Char('r') => {
            app.refresh_summaries();
            true
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_exit = true;
            true
        }
        _ => false,
    }
}
