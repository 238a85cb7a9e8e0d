use crate::app::state::PanelScreen;
use crate::app::util::text::{truncate_to_width, wrap_line};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::style::{accent, dim};

pub(super) struct PanelLines {
    pub(super) lines: Vec<Line<'static>>,
    pub(super) selected_line: Option<usize>,
}

pub(super) fn build_panel_lines(screen: &PanelScreen, width: usize) -> PanelLines {
    let width = width.max(1);
    let mut lines = Vec::new();
    for wrapped in wrap_line(screen.description, width) {
        lines.push(Line::from(wrapped));
    }
    if !screen.info.is_empty() {
        lines.push(Line::default());
        for info in &screen.info {
            lines.push(Line::from(Span::styled(truncate_to_width(info, width), accent())));
        }
    }

    let mut selected_line = None;
    if !screen.choices.is_empty() {
        lines.push(Line::default());
        for (index, choice) in screen.choices.iter().enumerate() {
            let is_selected = index == screen.selected;
            let marker = if is_selected { "> " } else { "  " };
            let current_marker = if screen.current == Some(index) { "*" } else { " " };
            let mut style = Style::default();
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
                selected_line = Some(lines.len());
            }
            let label = truncate_to_width(
                &format!("{marker}{current_marker} {}", choice.label),
                width,
            );
            let label_width = label.chars().count();
            let mut spans = vec![Span::styled(label, style)];
            if let Some(detail) = choice.detail.as_deref() {
                let room = width.saturating_sub(label_width + 3);
                if room > 0 {
                    spans.push(Span::styled(
                        format!(" ({})", truncate_to_width(detail, room)),
                        dim(),
                    ));
                }
            }
            lines.push(Line::from(spans));
        }
    }
    PanelLines {
        lines,
        selected_line,
    }
}

/// Vertical scroll that keeps the selected choice in view.
pub(super) fn scroll_offset(selected_line: Option<usize>, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let Some(selected) = selected_line else {
        return 0;
    };
    selected.saturating_add(1).saturating_sub(height).min(total - height)
}

pub(super) fn render_panel_screen(f: &mut ratatui::Frame<'_>, area: Rect, screen: &PanelScreen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent())
        .title(format!(" {} ", screen.panel.name()));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 2 || inner.height == 0 {
        return;
    }
    let content = Rect {
        x: inner.x + 1,
        width: inner.width - 1,
        ..inner
    };
    let PanelLines {
        lines,
        selected_line,
    } = build_panel_lines(screen, content.width as usize);
    let offset = scroll_offset(selected_line, lines.len(), content.height as usize);
    f.render_widget(
        Paragraph::new(Text::from(lines)).scroll((offset as u16, 0)),
        content,
    );
}

#[cfg(test)]
mod tests {
    use super::{build_panel_lines, scroll_offset};
    use crate::app::state::Panel;
    use crate::app::system::testing::offline_services;

    #[test]
    fn choices_mark_selection_and_current_value() {
        let (mut services, _runner) = offline_services();
        let mut screen = Panel::Font.open(&mut services);
        screen.selected = 2;
        let rendered = build_panel_lines(&screen, 40);
        let text: Vec<String> = rendered.lines.iter().map(|line| line.to_string()).collect();
        assert!(text.contains(&"  * Normal".to_string()));
        assert!(text.contains(&">   Big".to_string()));
        let selected = rendered.selected_line.map(|index| text[index].as_str());
        assert_eq!(selected, Some(">   Big"));
    }

    #[test]
    fn details_are_appended_when_they_fit() {
        let (mut services, _runner) = offline_services();
        let screen = Panel::Keyboard.open(&mut services);
        let rendered = build_panel_lines(&screen, 60);
        let text: Vec<String> = rendered.lines.iter().map(|line| line.to_string()).collect();
        assert!(text.contains(&"> * United States (us)".to_string()));
    }

    #[test]
    fn scroll_follows_selection() {
        assert_eq!(scroll_offset(Some(3), 10, 20), 0);
        assert_eq!(scroll_offset(Some(12), 20, 5), 8);
        assert_eq!(scroll_offset(Some(19), 20, 5), 15);
        assert_eq!(scroll_offset(None, 20, 5), 0);
    }
}
