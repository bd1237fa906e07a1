//! Renderer-free UI state for every interactive region of the page.
//!
//! Each region is a small record whose projection (`classes()`, style
//! helpers, [`form::ButtonView`]) is applied to the DOM by `page`. Nothing in
//! here touches `web_sys`, so the whole interaction model runs in native tests.

pub mod focus;
pub mod form;
pub mod hover;
pub mod links;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod tabs;

use crate::config::PageConfig;

pub use form::{ButtonView, Step, SubmitMachine, SubmitPhase};
pub use menu::{MenuClasses, MenuState};
pub use reveal::{OneShot, RevealSet, SkillBar};
pub use scroll::ScrollState;
pub use tabs::{TabClasses, TabState};

/// Class toggled on the menu, overlay, back-to-top control, tab buttons and panes.
pub const ACTIVE_CLASS: &str = "active";
/// Class on the body while the menu is open.
pub const NO_SCROLL_CLASS: &str = "no-scroll";
/// Class on the header once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class added to a section the first time it is revealed.
pub const ANIMATE_CLASS: &str = "animate";

/// All transient state of the page, shared by every handler.
#[derive(Debug, Clone)]
pub struct PageState {
    pub config: PageConfig,
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub tabs: TabState,
    pub skills: OneShot,
    pub sections: RevealSet,
    pub form: SubmitMachine,
}

impl PageState {
    pub fn new(config: PageConfig, tabs: TabState, section_count: usize) -> Self {
        Self {
            config,
            menu: MenuState::new(),
            scroll: ScrollState::default(),
            tabs,
            skills: OneShot::new(),
            sections: RevealSet::new(section_count),
            form: SubmitMachine::new(),
        }
    }

    /// Recompute the scroll flags from the current offset.
    pub fn scrolled_to(&mut self, offset: f64) -> ScrollState {
        self.scroll = ScrollState::at_offset(offset, &self.config.thresholds);
        self.scroll
    }

    pub fn nav_link_clicked(&mut self, viewport_width: f64) -> Option<MenuClasses> {
        let breakpoint = self.config.thresholds.mobile_breakpoint;
        self.menu.nav_link_clicked(viewport_width, breakpoint)
    }

    /// Skills section report; `true` means fill the bars now.
    pub fn skills_observed(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        let threshold = self.config.thresholds.skills_visibility;
        self.skills.observe(is_intersecting, ratio, threshold)
    }

    /// Animated section report; `true` means add the animate class now.
    pub fn section_observed(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let threshold = self.config.thresholds.section_visibility;
        self.sections.observe(index, is_intersecting, ratio, threshold)
    }

    pub fn submit(&mut self, current_label: &str) -> Option<Step> {
        self.form.submit(current_label, &self.config.form)
    }

    pub fn submit_elapsed(&mut self) -> Option<Step> {
        self.form.elapse(&self.config.form)
    }
}
