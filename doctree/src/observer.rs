//! Heading intersection tracking for scroll-driven activation.

use crate::config::ActivationOrder;

/// Ratio at which a heading counts as fully visible.
pub const THRESHOLD: f64 = 1.0;

/// One observer report about a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target: target.into(),
            is_intersecting,
            ratio,
        }
    }

    /// Heading fully inside the viewport.
    pub fn visible(target: impl Into<String>) -> Self {
        Self::new(target, true, THRESHOLD)
    }

    /// Heading scrolled out of the viewport.
    pub fn hidden(target: impl Into<String>) -> Self {
        Self::new(target, false, 0.0)
    }

    fn counts(&self) -> bool {
        self.is_intersecting || self.ratio >= THRESHOLD
    }
}

/// Remembers the last reported state of every observed heading.
#[derive(Debug, Clone, Default)]
pub struct IntersectionTracker {
    /// Observed heading IDs in document order.
    observed: Vec<String>,
    /// Last known state per heading, in first-reported order.
    targets: Vec<(String, bool)>,
    order: ActivationOrder,
}

impl IntersectionTracker {
    /// `observed` must be in document order.
    pub fn new(observed: Vec<String>, order: ActivationOrder) -> Self {
        Self {
            observed,
            targets: Vec::new(),
            order,
        }
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.iter().any(|o| o == id)
    }

    /// Record a batch of reports and return the first heading currently
    /// intersecting, if any. Reports for unobserved headings are ignored.
    pub fn record(&mut self, entries: &[IntersectionEntry]) -> Option<String> {
        for entry in entries {
            if !self.is_observed(&entry.target) {
                log::trace!("[observer] ignoring unobserved target {}", entry.target);
                continue;
            }
            let intersecting = entry.counts();
            match self.targets.iter_mut().find(|(id, _)| *id == entry.target) {
                Some((_, state)) => *state = intersecting,
                None => self.targets.push((entry.target.clone(), intersecting)),
            }
        }
        self.first_intersecting()
    }

    /// First intersecting heading according to the configured order.
    pub fn first_intersecting(&self) -> Option<String> {
        match self.order {
            ActivationOrder::Insertion => self
                .targets
                .iter()
                .find(|(_, intersecting)| *intersecting)
                .map(|(id, _)| id.clone()),
            ActivationOrder::Document => self
                .observed
                .iter()
                .find(|id| {
                    self.targets
                        .iter()
                        .any(|(target, intersecting)| target == *id && *intersecting)
                })
                .cloned(),
        }
    }
}

/// Heading ID referenced by an item link: the origin, the first `/` and
/// the first `#` are stripped.
pub fn target_id_from_href(href: &str, origin: &str) -> String {
    let stripped = if origin.is_empty() {
        href.to_string()
    } else {
        href.replacen(origin, "", 1)
    };
    stripped.replacen('/', "", 1).replacen('#', "", 1)
}
