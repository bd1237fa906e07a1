//! Runtime configuration for the page controller.
//!
//! Every field has a default matching the portfolio markup, so an empty
//! object (or no config at all) reproduces the stock behavior. Values can be
//! supplied from JavaScript as a plain object or as a JSON string.

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub thresholds: Thresholds,
    pub form: FormConfig,
    /// Domain whose profile links get re-opened over https when clicked.
    /// `None` disables the special case.
    pub link_fix_domain: Option<String>,
    /// Emit `[folio]` console diagnostics.
    pub diagnostics: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            thresholds: Thresholds::default(),
            form: FormConfig::default(),
            link_fix_domain: Some("unstop.com".to_string()),
            diagnostics: true,
        }
    }
}

/// CSS selectors for every element the controller binds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub header: String,
    pub menu_button: String,
    pub close_menu_button: String,
    pub menu: String,
    pub overlay: String,
    pub nav_links: String,
    pub tab_buttons: String,
    pub tab_panes: String,
    pub skill_bars: String,
    pub back_to_top: String,
    pub contact_form: String,
    pub profile_links: String,
    pub profile_items: String,
    pub project_cards: String,
    /// Looked up inside each project card.
    pub project_overlay: String,
    pub skills_section: String,
    pub animated_sections: String,
    pub anchors: String,
    pub focusable: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "#header".to_string(),
            menu_button: ".menu-btn".to_string(),
            close_menu_button: ".close-menu".to_string(),
            menu: "#menu".to_string(),
            overlay: ".overlay".to_string(),
            nav_links: ".nav-link".to_string(),
            tab_buttons: ".tab-btn".to_string(),
            tab_panes: ".tab-pane".to_string(),
            skill_bars: ".skill-progress".to_string(),
            back_to_top: ".back-to-top".to_string(),
            contact_form: "#contactForm".to_string(),
            profile_links: ".profiles-container a[target=\"_blank\"]".to_string(),
            profile_items: ".profile-item".to_string(),
            project_cards: ".project-card".to_string(),
            project_overlay: ".project-overlay".to_string(),
            skills_section: ".skills-content".to_string(),
            animated_sections:
                ".about-content, .skills-content, .projects-content, .profiles-section, .contact-content"
                    .to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            focusable: "a, button, input, textarea, [tabindex]".to_string(),
        }
    }
}

/// Scroll offsets, breakpoints and visibility ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Header gets `scrolled` strictly above this offset.
    pub header_scrolled: f64,
    /// Back-to-top becomes visible strictly above this offset.
    pub back_to_top: f64,
    /// Nav-link clicks close the menu at or below this viewport width.
    pub mobile_breakpoint: f64,
    /// Fixed header height subtracted from anchor targets.
    pub header_offset: f64,
    /// Visible ratio of the skills section that starts the bar fill.
    pub skills_visibility: f64,
    /// Visible ratio of an animated section that adds `animate`.
    pub section_visibility: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            header_scrolled: 50.0,
            back_to_top: 500.0,
            mobile_breakpoint: 768.0,
            header_offset: 80.0,
            skills_visibility: 0.2,
            section_visibility: 0.1,
        }
    }
}

/// Simulated contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Delay before the form is reset and the button shows the sent label.
    pub sending_ms: u32,
    /// Delay before the button returns to its original label.
    pub sent_ms: u32,
    pub sending_label: String,
    pub sent_label: String,
    pub success_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            sending_ms: 1500,
            sent_ms: 3000,
            sending_label: "<i class=\"fas fa-spinner fa-spin\"></i> Sending...".to_string(),
            sent_label: "<i class=\"fas fa-check\"></i> Message Sent!".to_string(),
            success_class: "success".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that offsets are non-negative and ratios lie in `0..=1`.
    ///
    /// # Errors
    /// Returns [`FolioError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        let offsets = [
            ("headerScrolled", t.header_scrolled),
            ("backToTop", t.back_to_top),
            ("mobileBreakpoint", t.mobile_breakpoint),
            ("headerOffset", t.header_offset),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let ratios = [
            ("skillsVisibility", t.skills_visibility),
            ("sectionVisibility", t.section_visibility),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::Config(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PageConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let mut config = PageConfig::default();
        config.thresholds.header_offset = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("headerOffset"));
    }

    #[test]
    fn test_nan_offset_rejected() {
        let mut config = PageConfig::default();
        config.thresholds.back_to_top = f64::NAN;
        assert!(config.validate().is_err());
    }
}
