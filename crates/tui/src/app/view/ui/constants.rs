use ratatui::style::Color;

pub(super) const WINDOW_TITLE: &str = "Kano Settings";
pub(super) const TOP_BAR_HEIGHT: u16 = 3;
pub(super) const STATUS_HEIGHT: u16 = 1;
pub(super) const TILE_HEIGHT: u16 = 4;
pub(super) const ARROW_WIDTH: u16 = 8;
pub(super) const CLOSE_WIDTH: u16 = 9;
pub(super) const TOP_BAR_BG: Color = Color::Rgb(40, 40, 40);
pub(super) const TILE_WHITE_BG: Color = Color::Rgb(28, 28, 28);
pub(super) const TILE_GREY_BG: Color = Color::Rgb(44, 44, 44);
pub(super) const ACCENT: Color = Color::Rgb(255, 132, 43);
