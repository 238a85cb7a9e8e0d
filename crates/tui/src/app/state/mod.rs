pub(crate) mod navigation;
pub(crate) mod panel;
pub(crate) mod screen;
pub(crate) mod summary;

pub(crate) use navigation::{Navigation, Screen};
pub(crate) use panel::{menu_rows, Panel, MENU_COLUMNS};
pub(crate) use screen::{apply_choice, PanelScreen};
pub(crate) use summary::{summarize_all, SummaryEntry};
