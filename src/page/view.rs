//! Typed handles to every element the page wiring touches.
//!
//! All lookups happen once in [`PageView::bind`]; handlers only ever work
//! through these handles. The `apply_*` methods project `ui` state onto the
//! DOM and never read state back from it.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
    NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::{PageConfig, Selectors};
use crate::diag;
use crate::error::{FolioError, Result};
use crate::ui::{
    ButtonView, MenuClasses, ScrollState, SkillBar, TabClasses, ACTIVE_CLASS, ANIMATE_CLASS,
    NO_SCROLL_CLASS, SCROLLED_CLASS,
};

/// Contact form and its submit button.
pub(crate) struct ContactView {
    pub(crate) form: HtmlFormElement,
    pub(crate) submit: HtmlButtonElement,
}

/// A project card and the overlay revealed on hover.
pub(crate) struct ProjectCard {
    pub(crate) card: Element,
    pub(crate) overlay: Option<HtmlElement>,
}

pub(crate) struct PageView {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) body: HtmlElement,
    pub(crate) header: Element,
    pub(crate) menu_button: Element,
    pub(crate) close_menu_button: Element,
    pub(crate) menu: Element,
    pub(crate) overlay: Element,
    pub(crate) nav_links: Vec<Element>,
    pub(crate) back_to_top: Element,
    pub(crate) tab_buttons: Vec<Element>,
    pub(crate) tab_panes: Vec<Element>,
    pub(crate) skill_bars: Vec<(HtmlElement, SkillBar)>,
    pub(crate) skills_section: Option<Element>,
    pub(crate) animated_sections: Vec<Element>,
    pub(crate) anchors: Vec<Element>,
    pub(crate) profile_links: Vec<HtmlAnchorElement>,
    pub(crate) profile_items: Vec<HtmlElement>,
    pub(crate) project_cards: Vec<ProjectCard>,
    pub(crate) contact: Option<ContactView>,
    pub(crate) focusable: String,
}

impl PageView {
    /// Look up every element named in `config.selectors`.
    ///
    /// # Errors
    /// Returns [`FolioError::MissingElement`] if a required element (header,
    /// menu controls, menu, overlay, back-to-top) is absent, or
    /// [`FolioError::Dom`] if a selector is invalid.
    pub(crate) fn bind(window: Window, config: &PageConfig) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("window has no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| FolioError::MissingElement("body".to_string()))?;
        let s: &Selectors = &config.selectors;

        let skill_bars = all::<HtmlElement>(&document.query_selector_all(&s.skill_bars)?)
            .into_iter()
            .filter_map(|bar| {
                let attr = bar.get_attribute("data-progress");
                match SkillBar::from_attr(attr.as_deref()) {
                    Some(skill) => Some((bar, skill)),
                    None => {
                        diag::warn(
                            config.diagnostics,
                            &format!("skipping skill bar with data-progress {attr:?}"),
                        );
                        None
                    }
                }
            })
            .collect();

        let project_cards = all::<Element>(&document.query_selector_all(&s.project_cards)?)
            .into_iter()
            .map(|card| {
                let overlay = card
                    .query_selector(&s.project_overlay)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                ProjectCard { card, overlay }
            })
            .collect();

        let contact = match optional::<HtmlFormElement>(&document, &s.contact_form)? {
            Some(form) => {
                let submit = form
                    .query_selector("button[type=\"submit\"]")?
                    .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
                match submit {
                    Some(submit) => Some(ContactView { form, submit }),
                    None => {
                        diag::warn(config.diagnostics, "contact form has no submit button");
                        None
                    }
                }
            }
            None => None,
        };

        Ok(Self {
            header: required(&document, &s.header)?,
            menu_button: required(&document, &s.menu_button)?,
            close_menu_button: required(&document, &s.close_menu_button)?,
            menu: required(&document, &s.menu)?,
            overlay: required(&document, &s.overlay)?,
            nav_links: all(&document.query_selector_all(&s.nav_links)?),
            back_to_top: required(&document, &s.back_to_top)?,
            tab_buttons: all(&document.query_selector_all(&s.tab_buttons)?),
            tab_panes: all(&document.query_selector_all(&s.tab_panes)?),
            skill_bars,
            skills_section: optional(&document, &s.skills_section)?,
            animated_sections: all(&document.query_selector_all(&s.animated_sections)?),
            anchors: all(&document.query_selector_all(&s.anchors)?),
            profile_links: all(&document.query_selector_all(&s.profile_links)?),
            profile_items: all(&document.query_selector_all(&s.profile_items)?),
            project_cards,
            contact,
            focusable: s.focusable.clone(),
            window,
            document,
            body,
        })
    }

    /// Declared `data-tab` target of each tab button.
    pub(crate) fn tab_targets(&self) -> Vec<Option<String>> {
        self.tab_buttons
            .iter()
            .map(|button| button.get_attribute("data-tab"))
            .collect()
    }

    pub(crate) fn tab_pane_ids(&self) -> Vec<String> {
        self.tab_panes.iter().map(Element::id).collect()
    }

    /// Index of `target` among the animated sections.
    pub(crate) fn section_index(&self, target: &Element) -> Option<usize> {
        self.animated_sections
            .iter()
            .position(|section| section.is_same_node(Some(target.as_ref())))
    }

    pub(crate) fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Viewport width; unknown widths count as wide.
    pub(crate) fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    pub(crate) fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    pub(crate) fn apply_menu(&self, classes: MenuClasses) {
        set_class(&self.menu, ACTIVE_CLASS, classes.menu_active);
        set_class(&self.overlay, ACTIVE_CLASS, classes.overlay_active);
        set_class(&self.body, NO_SCROLL_CLASS, classes.scroll_locked);
    }

    pub(crate) fn apply_scroll(&self, state: ScrollState) {
        set_class(&self.header, SCROLLED_CLASS, state.header_scrolled);
        set_class(&self.back_to_top, ACTIVE_CLASS, state.back_to_top_visible);
    }

    pub(crate) fn apply_tabs(&self, classes: &TabClasses) {
        for (button, active) in self.tab_buttons.iter().zip(&classes.buttons) {
            set_class(button, ACTIVE_CLASS, *active);
        }
        for (pane, active) in self.tab_panes.iter().zip(&classes.panes) {
            set_class(pane, ACTIVE_CLASS, *active);
        }
    }

    pub(crate) fn fill_skill_bars(&self) {
        for (bar, skill) in &self.skill_bars {
            let _ = bar.style().set_property("width", &skill.width());
        }
    }

    pub(crate) fn reveal_section(&self, index: usize) {
        if let Some(section) = self.animated_sections.get(index) {
            set_class(section, ANIMATE_CLASS, true);
        }
    }

    pub(crate) fn apply_button(&self, button: &ButtonView, success_class: &str) {
        let Some(contact) = &self.contact else {
            return;
        };
        contact.submit.set_inner_html(&button.label);
        contact.submit.set_disabled(button.disabled);
        set_class(&contact.submit, success_class, button.success);
    }
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn required<T: JsCast>(document: &Document, selector: &str) -> Result<T> {
    optional(document, selector)?.ok_or_else(|| FolioError::MissingElement(selector.to_string()))
}

fn optional<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>> {
    match document.query_selector(selector)? {
        Some(element) => element
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| FolioError::Dom(format!("{selector} matched an unexpected element type"))),
        None => Ok(None),
    }
}

/// Matching nodes of type `T`, in document order; other node types are skipped.
fn all<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
