//! Tab switcher state.
//!
//! Buttons declare a target pane id (`data-tab`); panes are matched by id.
//! Activating a button always clears every other button and pane first, so
//! at most one pane is active.

/// Which tab button and pane are active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState {
    /// Declared target pane id per button, in document order.
    targets: Vec<Option<String>>,
    /// Pane ids in document order.
    panes: Vec<String>,
    active_button: Option<usize>,
    active_pane: Option<usize>,
}

/// Per-element `active` flags, index-aligned with the buttons and panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabClasses {
    pub buttons: Vec<bool>,
    pub panes: Vec<bool>,
}

impl TabState {
    pub fn new(targets: Vec<Option<String>>, panes: Vec<String>) -> Self {
        Self {
            targets,
            panes,
            active_button: None,
            active_pane: None,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    pub fn active_pane(&self) -> Option<usize> {
        self.active_pane
    }

    /// Id of the pane currently shown.
    pub fn active_pane_id(&self) -> Option<&str> {
        self.active_pane
            .and_then(|i| self.panes.get(i))
            .map(String::as_str)
    }

    /// Activate button `index` and the pane it targets.
    ///
    /// An out-of-range index leaves the state untouched and returns `None`.
    /// A button whose target matches no pane still becomes active, with every
    /// pane cleared.
    pub fn activate(&mut self, index: usize) -> Option<TabClasses> {
        let target = self.targets.get(index)?;
        self.active_button = Some(index);
        self.active_pane = target
            .as_deref()
            .and_then(|id| self.panes.iter().position(|pane| pane == id));
        Some(self.classes())
    }

    /// Establish the initial state by activating the first button, if any.
    pub fn activate_first(&mut self) -> Option<TabClasses> {
        self.activate(0)
    }

    pub fn classes(&self) -> TabClasses {
        TabClasses {
            buttons: (0..self.targets.len())
                .map(|i| self.active_button == Some(i))
                .collect(),
            panes: (0..self.panes.len())
                .map(|i| self.active_pane == Some(i))
                .collect(),
        }
    }
}
