//! Mobile menu state.
//!
//! The menu, its overlay and the body scroll lock are one flag projected onto
//! three elements, so they can never disagree.

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

/// Class flags the menu state projects onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuClasses {
    /// `active` on the menu element.
    pub menu_active: bool,
    /// `active` on the overlay element.
    pub overlay_active: bool,
    /// `no-scroll` on the body.
    pub scroll_locked: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Used by the open/close buttons and the overlay.
    pub fn toggle(&mut self) -> MenuClasses {
        self.open = !self.open;
        self.classes()
    }

    /// Handle a nav-link click at the given viewport width.
    ///
    /// At or below `breakpoint` the click toggles the menu like the menu
    /// button does; wider viewports show the inline nav and leave the menu
    /// alone. Returns `None` when nothing changed.
    pub fn nav_link_clicked(&mut self, viewport_width: f64, breakpoint: f64) -> Option<MenuClasses> {
        if viewport_width <= breakpoint {
            Some(self.toggle())
        } else {
            None
        }
    }

    pub fn classes(&self) -> MenuClasses {
        MenuClasses {
            menu_active: self.open,
            overlay_active: self.open,
            scroll_locked: self.open,
        }
    }
}
