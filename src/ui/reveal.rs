//! One-shot visibility triggers for entrance animations.
//!
//! Each trigger fires on the first qualifying intersection and then stays
//! spent; later intersections are ignored so animations never replay.

/// Slack for browsers that report a crossing ratio a hair under the
/// observer's own threshold.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report should fire a trigger.
pub fn qualifies(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// A trigger that fires at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns `true` exactly once: on the first qualifying report.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.fired || !qualifies(is_intersecting, ratio, threshold) {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Independent one-shot triggers for a list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealSet {
    triggers: Vec<OneShot>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            triggers: vec![OneShot::new(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Feed a report for section `index`; `true` means add `animate` now.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        self.triggers
            .get_mut(index)
            .is_some_and(|t| t.observe(is_intersecting, ratio, threshold))
    }

    /// All sections have fired; the observer can be disconnected.
    pub fn is_complete(&self) -> bool {
        self.triggers.iter().all(OneShot::has_fired)
    }
}

/// Target fill of one skill bar, read once from `data-progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBar {
    percent: f64,
}

impl SkillBar {
    /// Parse a `data-progress` value. Returns `None` for missing or
    /// non-numeric values; numbers are clamped to `0..=100`.
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        let percent: f64 = value?.trim().trim_end_matches('%').parse().ok()?;
        if !percent.is_finite() {
            return None;
        }
        Some(Self {
            percent: percent.clamp(0.0, 100.0),
        })
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Inline `width` value applied when the skills section is revealed.
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}
