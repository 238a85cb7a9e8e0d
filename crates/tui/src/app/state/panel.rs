use crate::app::system::store::{
    KEY_AUDIO, KEY_FONT, KEY_KEYBOARD_COUNTRY, KEY_MOUSE, KEY_OVERCLOCKING, KEY_WALLPAPER,
};
use std::fmt;

/// Tiles per menu row.
pub const MENU_COLUMNS: usize = 2;

pub fn menu_rows() -> usize {
    Panel::ALL.len().div_ceil(MENU_COLUMNS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    Keyboard,
    Mouse,
    Audio,
    Display,
    Wifi,
    Overclocking,
    Account,
    Wallpaper,
    Font,
    Advanced,
}

impl Panel {
    /// Menu order. `ALL[i].index() == i`.
    pub const ALL: [Panel; 10] = [
        Self::Keyboard,
        Self::Mouse,
        Self::Audio,
        Self::Display,
        Self::Wifi,
        Self::Overclocking,
        Self::Account,
        Self::Wallpaper,
        Self::Font,
        Self::Advanced,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Mouse => "Mouse",
            Self::Audio => "Audio",
            Self::Display => "Display",
            Self::Wifi => "Wifi",
            Self::Overclocking => "Overclocking",
            Self::Account => "Account",
            Self::Wallpaper => "Wallpaper",
            Self::Font => "Font",
            Self::Advanced => "Advanced",
        }
    }

    /// Store key whose value is shown on the menu tile.
    pub fn setting_key(self) -> Option<&'static str> {
        match self {
            Self::Keyboard => Some(KEY_KEYBOARD_COUNTRY),
            Self::Mouse => Some(KEY_MOUSE),
            Self::Audio => Some(KEY_AUDIO),
            Self::Overclocking => Some(KEY_OVERCLOCKING),
            Self::Wallpaper => Some(KEY_WALLPAPER),
            Self::Font => Some(KEY_FONT),
            Self::Display | Self::Wifi | Self::Account | Self::Advanced => None,
        }
    }

    pub fn icon_file(self) -> String {
        format!("Icon-{}.png", self.name())
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
