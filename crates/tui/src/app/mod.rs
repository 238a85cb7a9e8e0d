pub(crate) mod handlers;
pub(crate) mod state;
pub(crate) mod system;
pub(crate) mod util;
pub(crate) mod view;

use crate::app::state::{
    apply_choice, summarize_all, Navigation, Panel, PanelScreen, Screen, SummaryEntry,
};
use crate::app::system::Services;
use tracing::debug;

pub struct AppState {
    pub navigation: Navigation,
    pub services: Services,
    pub summaries: Vec<SummaryEntry>,
    pub home_selected: usize,
    pub panel_screen: Option<PanelScreen>,
    pub status: Option<String>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        let mut app = Self {
            navigation: Navigation::default(),
            services,
            summaries: Vec::new(),
            home_selected: 0,
            panel_screen: None,
            status: None,
            should_exit: false,
        };
        app.refresh_summaries();
        app
    }

    pub fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    pub fn refresh_summaries(&mut self) {
        self.summaries = summarize_all(&self.services.store, self.services.probe.as_ref());
        debug!(count = self.summaries.len(), "summaries refreshed");
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(text.into());
    }

    fn show_panel(&mut self, panel: Panel) {
        // Tear down the old screen before the new one queries the system.
        self.panel_screen = None;
        self.home_selected = panel.index();
        self.panel_screen = Some(panel.open(&mut self.services));
    }

    pub fn open_panel(&mut self, panel: Panel) {
        self.navigation.select(panel);
        debug!(panel = %self.navigation.current(), "panel selected");
        self.status = None;
        self.show_panel(panel);
    }

    pub fn go_home(&mut self) {
        self.navigation.go_home();
        self.panel_screen = None;
        self.refresh_summaries();
    }

    /// "Next" from the menu: re-open the last visited panel.
    pub fn go_next(&mut self) -> bool {
        if !self.navigation.can_go_next() {
            return false;
        }
        let panel = self.navigation.go_back();
        debug!(
            shown = %panel,
            last_visited = %self.navigation.last_visited(),
            "returned to last panel"
        );
        self.status = None;
        self.show_panel(panel);
        true
    }

    pub fn apply_selected(&mut self) -> bool {
        let Some(screen) = self.panel_screen.as_mut() else {
            return false;
        };
        match apply_choice(screen, &mut self.services) {
            Some(message) => {
                self.set_status(message);
                true
            }
            None => false,
        }
    }
}
