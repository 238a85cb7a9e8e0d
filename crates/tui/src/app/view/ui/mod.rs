mod constants;
mod grid;
mod panel;
mod status;
mod style;
mod top_bar;

use crate::app::state::Screen;
use crate::app::AppState;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Clear, Paragraph};

use self::constants::{STATUS_HEIGHT, TOP_BAR_HEIGHT};
use self::grid::render_menu_grid;
use self::panel::render_panel_screen;
use self::status::build_status_line;
use self::top_bar::render_top_bar;

pub fn draw_ui(f: &mut ratatui::Frame<'_>, app: &AppState) {
    let size = f.area();
    if size.width == 0 || size.height == 0 {
        return;
    }
    f.render_widget(Clear, size);

    let [top, body, footer] = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(size);

    render_top_bar(f, top, app);
    match (app.screen(), app.panel_screen.as_ref()) {
        (Screen::Panel(_), Some(screen)) => render_panel_screen(f, body, screen),
        _ => render_menu_grid(f, body, app),
    }
    f.render_widget(Paragraph::new(build_status_line(app)), footer);
}

#[cfg(test)]
mod tests {
    use super::draw_ui;
    use crate::app::state::Panel;
    use crate::app::system::testing::{services_with, FixedProbe, RecordingRunner};
    use crate::app::AppState;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn online_app() -> AppState {
        let runner = RecordingRunner::default();
        let probe = FixedProbe {
            internet: true,
            proxy: false,
            user: "kano".to_string(),
        };
        AppState::new(services_with(&runner, probe))
    }

    #[test]
    fn home_screen_shows_every_tile_with_summaries() {
        let app = online_app();
        let text = render(&app, 80, 30);
        assert!(text.contains("Kano Settings"));
        for panel in Panel::ALL {
            assert!(text.contains(panel.name()), "missing tile {panel}");
        }
        assert!(text.contains("Connected"));
        assert!(text.contains("United States"));
        assert!(text.contains("Icon-Wifi.png"));
    }

    #[test]
    fn panel_screen_lists_choices() {
        let mut app = online_app();
        app.open_panel(Panel::Overclocking);
        let text = render(&app, 80, 24);
        assert!(text.contains("Kano Settings · Overclocking"));
        assert!(text.contains("Turbo"));
        assert!(text.contains("Esc back"));
    }

    #[test]
    fn short_terminal_scrolls_grid_to_selection() {
        let mut app = online_app();
        app.home_selected = 9;
        let text = render(&app, 60, 12);
        assert!(text.contains("Advanced"));
        assert!(!text.contains("Keyboard"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = online_app();
        render(&app, 1, 1);
        render(&app, 10, 3);
    }
}
