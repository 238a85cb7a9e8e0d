use super::panel::Panel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    Panel(Panel),
}

/// Which screen is up and which panel "next" returns to. One level only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    screen: Screen,
    current: Panel,
    last_visited: Panel,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            current: Panel::Keyboard,
            last_visited: Panel::Keyboard,
        }
    }
}

impl Navigation {
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn last_visited(&self) -> Panel {
        self.last_visited
    }

    pub fn select(&mut self, panel: Panel) {
        self.current = panel;
        self.last_visited = panel;
        self.screen = Screen::Panel(panel);
    }

    /// Shows the last visited panel and returns it.
    pub fn go_back(&mut self) -> Panel {
        let target = self.last_visited;
        self.screen = Screen::Panel(target);
        self.last_visited = self.current;
        target
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.screen, Screen::Panel(_))
    }

    pub fn can_go_next(&self) -> bool {
        self.screen == Screen::Home
    }
}
