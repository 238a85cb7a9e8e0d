use crate::app::state::Screen;
use crate::app::AppState;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use super::constants::{ARROW_WIDTH, CLOSE_WIDTH, WINDOW_TITLE};
use super::style::{arrow_style, header_style};

pub(super) fn header_text(screen: Screen) -> String {
    match screen {
        Screen::Home => WINDOW_TITLE.to_string(),
        Screen::Panel(panel) => format!("{WINDOW_TITLE} · {panel}"),
    }
}

pub(super) fn render_top_bar(f: &mut ratatui::Frame<'_>, area: Rect, app: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    f.render_widget(Block::default().style(header_style()), area);

    // Single text row, vertically centred in the bar.
    let row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let [prev, next, header, close] = Layout::horizontal([
        Constraint::Length(ARROW_WIDTH),
        Constraint::Length(ARROW_WIDTH),
        Constraint::Min(0),
        Constraint::Length(CLOSE_WIDTH),
    ])
    .areas(row);

    let navigation = &app.navigation;
    f.render_widget(
        Paragraph::new(" ◀ prev").style(arrow_style(navigation.can_go_prev())),
        prev,
    );
    f.render_widget(
        Paragraph::new("next ▶").style(arrow_style(navigation.can_go_next())),
        next,
    );
    f.render_widget(
        Paragraph::new(header_text(navigation.screen()))
            .alignment(Alignment::Center)
            .style(header_style()),
        header,
    );
    f.render_widget(
        Paragraph::new("✕ quit ")
            .alignment(Alignment::Right)
            .style(arrow_style(true)),
        close,
    );
}

#[cfg(test)]
mod tests {
    use super::header_text;
    use crate::app::state::{Panel, Screen};

    #[test]
    fn header_names_open_panel() {
        assert_eq!(header_text(Screen::Home), "Kano Settings");
        assert_eq!(header_text(Screen::Panel(Panel::Wifi)), "Kano Settings · Wifi");
    }
}
