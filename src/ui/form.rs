//! Simulated contact form submission.
//!
//! `idle -> sending -> sent -> idle`, advanced by two chained delays. No
//! message leaves the page. The machine only decides what the submit button
//! shows; scheduling the delays is the caller's job.

use crate::config::FormConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    /// The submit button is disabled exactly while a submission is in flight.
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Sent => "sent",
        }
    }
}

/// What the submit button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// Inner HTML of the button.
    pub label: String,
    pub disabled: bool,
    /// Success class present.
    pub success: bool,
}

/// One transition of the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub button: ButtonView,
    /// Clear the form's fields.
    pub reset_fields: bool,
    /// Delay before the next [`SubmitMachine::elapse`], if any.
    pub next_delay_ms: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitMachine {
    phase: SubmitPhase,
    original_label: Option<String>,
}

impl SubmitMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a submission, capturing the button's current label.
    ///
    /// Ignored (returns `None`) while a previous submission is still running.
    pub fn submit(&mut self, current_label: &str, config: &FormConfig) -> Option<Step> {
        if self.phase.is_busy() {
            return None;
        }
        self.original_label = Some(current_label.to_string());
        self.phase = SubmitPhase::Sending;
        Some(Step {
            button: ButtonView {
                label: config.sending_label.clone(),
                disabled: true,
                success: false,
            },
            reset_fields: false,
            next_delay_ms: Some(config.sending_ms),
        })
    }

    /// The pending delay ran out; move to the next phase.
    pub fn elapse(&mut self, config: &FormConfig) -> Option<Step> {
        match self.phase {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => {
                self.phase = SubmitPhase::Sent;
                Some(Step {
                    button: ButtonView {
                        label: config.sent_label.clone(),
                        disabled: true,
                        success: true,
                    },
                    reset_fields: true,
                    next_delay_ms: Some(config.sent_ms),
                })
            }
            SubmitPhase::Sent => Some(Step {
                button: self.finish(),
                reset_fields: false,
                next_delay_ms: None,
            }),
        }
    }

    /// Abandon a running submission and restore the original label.
    ///
    /// Returns `None` when idle.
    pub fn cancel(&mut self) -> Option<ButtonView> {
        if self.phase.is_busy() {
            Some(self.finish())
        } else {
            None
        }
    }

    fn finish(&mut self) -> ButtonView {
        self.phase = SubmitPhase::Idle;
        ButtonView {
            label: self.original_label.take().unwrap_or_default(),
            disabled: false,
            success: false,
        }
    }
}
