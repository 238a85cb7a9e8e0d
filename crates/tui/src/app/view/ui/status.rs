use crate::app::state::Screen;
use crate::app::AppState;
use ratatui::text::{Line, Span};

use super::style::{accent, dim};

const HOME_HINTS: &str = "←↑↓→ move · Enter open · 0-9 jump · Tab next · r refresh · q quit";
const PANEL_HINTS: &str = "↑↓ choose · Enter apply · Esc back · q quit";
const INFO_PANEL_HINTS: &str = "Esc back · q quit";

pub(super) fn build_status_line(app: &AppState) -> Line<'static> {
    let hints = match app.screen() {
        Screen::Home => HOME_HINTS,
        Screen::Panel(_) => match app.panel_screen.as_ref() {
            Some(screen) if screen.is_read_only() => INFO_PANEL_HINTS,
            _ => PANEL_HINTS,
        },
    };
    match app.status.as_deref() {
        Some(status) => Line::from(vec![
            Span::styled(format!(" {status}"), accent()),
            Span::styled(format!("  {hints}"), dim()),
        ]),
        None => Line::from(Span::styled(format!(" {hints}"), dim())),
    }
}

#[cfg(test)]
mod tests {
    use super::build_status_line;
    use crate::app::state::Panel;
    use crate::app::system::testing::offline_services;
    use crate::app::AppState;

    #[test]
    fn status_message_leads_the_line() {
        let (services, _runner) = offline_services();
        let mut app = AppState::new(services);
        app.open_panel(Panel::Font);
        app.set_status("Font size set to Big");
        let line = build_status_line(&app).to_string();
        assert!(line.starts_with(" Font size set to Big"));
        assert!(line.contains("Enter apply"));
    }

    #[test]
    fn info_panels_do_not_offer_apply() {
        let (services, _runner) = offline_services();
        let mut app = AppState::new(services);
        app.open_panel(Panel::Account);
        assert!(!build_status_line(&app).to_string().contains("Enter apply"));
    }
}
