//! Tree configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::TreeError;

/// Default trailing-edge delay for scroll-driven activation.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Current page location, used to detect the active item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Scheme, host and port, e.g. `https://go.dev`.
    pub origin: String,
    /// Path, e.g. `/doc/effective_go`.
    pub path: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Location {
    pub fn new(
        origin: impl Into<String>,
        path: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            path: path.into(),
            hash: hash.into(),
        }
    }

    /// Parse an absolute URL.
    pub fn parse(url: &str) -> Result<Self, TreeError> {
        let parsed = Url::parse(url).map_err(|source| TreeError::InvalidLocation {
            url: url.to_string(),
            source,
        })?;
        let hash = match parsed.fragment() {
            Some(fragment) => format!("#{fragment}"),
            None => String::new(),
        };
        Ok(Self {
            origin: parsed.origin().ascii_serialization(),
            path: parsed.path().to_string(),
            hash,
        })
    }
}

/// How the first intersecting heading is chosen when several are visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOrder {
    /// Order in which headings were first reported by the observer.
    #[default]
    Insertion,
    /// Order of the headings in the document.
    Document,
}

/// Per-tree configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Select the item whose heading scrolls into view. Also switches
    /// active-item detection from the location path to its hash.
    pub use_scroll_observers: bool,

    /// When false, selecting an item collapses every expanded group
    /// that does not contain it.
    pub allow_multiple_expansion: bool,

    /// ID of the expand/collapse-all control, if the page has one.
    pub toggle: Option<String>,

    /// Location the active item is matched against.
    pub location: Location,

    /// Debounce delay for activation callbacks, in milliseconds.
    pub debounce_ms: u64,

    pub activation_order: ActivationOrder,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            use_scroll_observers: false,
            allow_multiple_expansion: false,
            toggle: None,
            location: Location::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            activation_order: ActivationOrder::default(),
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Enable scroll-driven activation.
    pub fn scroll_observers(mut self, enabled: bool) -> Self {
        self.use_scroll_observers = enabled;
        self
    }

    /// Allow several groups to stay expanded at once.
    pub fn multiple_expansion(mut self, allowed: bool) -> Self {
        self.allow_multiple_expansion = allowed;
        self
    }

    /// Wire an expand/collapse-all control.
    pub fn toggle(mut self, id: impl Into<String>) -> Self {
        self.toggle = Some(id.into());
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Delays beyond `u64::MAX` milliseconds saturate.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn activation_order(mut self, order: ActivationOrder) -> Self {
        self.activation_order = order;
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse() {
        let loc = Location::parse("https://go.dev/doc/effective_go#names").unwrap();
        assert_eq!(loc.origin, "https://go.dev");
        assert_eq!(loc.path, "/doc/effective_go");
        assert_eq!(loc.hash, "#names");

        let loc = Location::parse("http://localhost:6060/tour/").unwrap();
        assert_eq!(loc.origin, "http://localhost:6060");
        assert_eq!(loc.hash, "");
    }

    #[test]
    fn test_location_parse_rejects_relative() {
        assert!(matches!(
            Location::parse("/doc/"),
            Err(TreeError::InvalidLocation { .. })
        ));
    }

    #[test]
    fn test_config_json_defaults() {
        let config = TreeConfig::from_json(r#"{"use_scroll_observers": true}"#).unwrap();
        assert!(config.use_scroll_observers);
        assert!(!config.allow_multiple_expansion);
        assert_eq!(config.debounce_delay(), Duration::from_millis(100));
        assert_eq!(config.activation_order, ActivationOrder::Insertion);
    }

    #[test]
    fn test_config_json_order() {
        let config = TreeConfig::from_json(r#"{"activation_order": "document"}"#).unwrap();
        assert_eq!(config.activation_order, ActivationOrder::Document);
    }

    #[test]
    fn test_debounce_builder() {
        let config = TreeConfig::new().debounce(Duration::from_millis(250));
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.debounce_delay(), Duration::from_millis(250));

        let config = TreeConfig::new().debounce(Duration::MAX);
        assert_eq!(config.debounce_ms, u64::MAX);
    }
}
