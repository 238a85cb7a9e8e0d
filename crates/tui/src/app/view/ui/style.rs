use ratatui::style::{Color, Modifier, Style};

use super::constants::{ACCENT, TILE_GREY_BG, TILE_WHITE_BG, TOP_BAR_BG};

/// Menu rows alternate between a white and a grey tile.
pub(super) fn tile_style(row: usize) -> Style {
    if row % 2 == 1 {
        Style::default().bg(TILE_GREY_BG)
    } else {
        Style::default().bg(TILE_WHITE_BG)
    }
}

pub(super) fn tile_border_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(super) fn arrow_style(enabled: bool) -> Style {
    let style = Style::default().bg(TOP_BAR_BG);
    if enabled {
        style.fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        style.fg(Color::DarkGray)
    }
}

pub(super) fn header_style() -> Style {
    Style::default()
        .bg(TOP_BAR_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub(super) fn accent() -> Style {
    Style::default().fg(ACCENT)
}
