pub(crate) mod ui;

pub(crate) use ui::draw_ui;
