use crate::app::state::{menu_rows, Panel, SummaryEntry, MENU_COLUMNS};
use crate::app::util::text::truncate_to_width;
use crate::app::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::constants::TILE_HEIGHT;
use super::style::{dim, tile_border_style, tile_style};

/// First menu row to draw so the selected tile stays on screen.
pub(super) fn first_visible_row(selected: usize, visible_rows: usize) -> usize {
    let rows = menu_rows();
    let visible_rows = visible_rows.clamp(1, rows);
    let selected_row = selected / MENU_COLUMNS;
    selected_row
        .saturating_add(1)
        .saturating_sub(visible_rows)
        .min(rows - visible_rows)
}

pub(super) fn tile_lines(
    panel: Panel,
    summary: Option<&SummaryEntry>,
    width: usize,
) -> Vec<Line<'static>> {
    let description = summary
        .and_then(|entry| entry.displayed_value.as_deref())
        .unwrap_or("");
    vec![
        Line::from(Span::styled(
            truncate_to_width(&format!("{}  {}", panel.index(), panel.name()), width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(truncate_to_width(description, width)),
    ]
}

fn render_tile(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    panel: Panel,
    summary: Option<&SummaryEntry>,
    row: usize,
    selected: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tile_border_style(selected))
        .title_bottom(Line::from(Span::styled(panel.icon_file(), dim())).right_aligned())
        .style(tile_style(row));
    let inner = block.inner(area);
    f.render_widget(block, area);
    let lines = tile_lines(panel, summary, inner.width.saturating_sub(1) as usize);
    f.render_widget(Paragraph::new(Text::from(lines)), inner);
}

pub(super) fn render_menu_grid(f: &mut ratatui::Frame<'_>, area: Rect, app: &AppState) {
    if area.height < TILE_HEIGHT || area.width == 0 {
        return;
    }
    let visible_rows = (area.height / TILE_HEIGHT) as usize;
    let first_row = first_visible_row(app.home_selected, visible_rows);
    let last_row = usize::min(menu_rows(), first_row + visible_rows);

    for (offset, row) in (first_row..last_row).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + offset as u16 * TILE_HEIGHT,
            width: area.width,
            height: TILE_HEIGHT,
        };
        let cells = Layout::horizontal(
            (0..MENU_COLUMNS).map(|_| Constraint::Ratio(1, MENU_COLUMNS as u32)),
        )
        .split(row_area);
        for (column, cell) in cells.iter().enumerate() {
            let index = row * MENU_COLUMNS + column;
            let Some(panel) = Panel::from_index(index) else {
                break;
            };
            let summary = app.summaries.iter().find(|entry| entry.panel == panel);
            render_tile(f, *cell, panel, summary, row, index == app.home_selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{first_visible_row, tile_lines};
    use crate::app::state::{Panel, SummaryEntry};

    #[test]
    fn selected_row_is_kept_visible() {
        assert_eq!(first_visible_row(0, 2), 0);
        assert_eq!(first_visible_row(9, 2), 3);
        assert_eq!(first_visible_row(5, 2), 1);
        assert_eq!(first_visible_row(9, 10), 0);
        assert_eq!(first_visible_row(9, 0), 4);
    }

    #[test]
    fn tile_shows_name_and_summary() {
        let entry = SummaryEntry {
            panel: Panel::Audio,
            panel_name: "Audio",
            raw_value: Some("HDMI".to_string()),
            displayed_value: Some("HDMI".to_string()),
        };
        let lines = tile_lines(Panel::Audio, Some(&entry), 30);
        let text: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        assert_eq!(text, vec!["2  Audio", "HDMI"]);
    }

    #[test]
    fn display_tile_has_blank_summary() {
        let lines = tile_lines(Panel::Display, None, 30);
        assert_eq!(lines[1].to_string(), "");
    }
}
