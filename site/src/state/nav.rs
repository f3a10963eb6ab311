//! Navigation bar state: scroll appearance and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset (px) past which the bar switches to its solid style.
/// The comparison is strict, so exactly this offset is still "top".
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu: MenuState,
}

impl NavState {
    /// Recompute the scrolled flag from the current vertical offset.
    /// Returns `true` when the flag changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// A nav link was followed. The menu always ends up closed.
    pub fn activate_link(&mut self) {
        self.menu = MenuState::Closed;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Class list for the `<nav>` element.
    pub fn navbar_class(&self) -> &'static str {
        if self.scrolled { "navbar navbar-scrolled" } else { "navbar" }
    }

    /// Accessible label for the hamburger button.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_menu_open() { "Close menu" } else { "Open menu" }
    }
}
