//! Binder configuration.
//!
//! Every field has a default matching the observed behavior, so
//! `BinderConfig::default()` is the common case and a host page only
//! overrides what it needs (e.g. from an embedded JSON options blob).

use serde::Deserialize;
use std::time::Duration;

/// Selector for copy-trigger elements.
pub const DEFAULT_TRIGGER_SELECTOR: &str = ".copy-button";
/// Label shown while a copy confirmation is pending.
pub const DEFAULT_CONFIRM_LABEL: &str = "Copied!";
/// Default label restored after the confirmation reverts.
pub const DEFAULT_IDLE_LABEL: &str = "Copy";
/// Milliseconds a confirmation stays visible.
pub const DEFAULT_REVERT_DELAY_MS: u64 = 2000;

/// Options for [`clipbind-web`]'s binder and `CopyButton` component.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BinderConfig {
    /// CSS selector matching copy-trigger elements.
    pub trigger_selector: String,
    /// Confirmation label shown after a successful copy.
    pub confirm_label: String,
    /// Fallback label restored on revert when a trigger had no bind-time text.
    pub idle_label: String,
    /// How long the confirmation label stays before reverting.
    pub revert_delay_ms: u64,
}

impl BinderConfig {
    /// Parse options from a JSON blob, with defaults for absent fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            trigger_selector: DEFAULT_TRIGGER_SELECTOR.to_string(),
            confirm_label: DEFAULT_CONFIRM_LABEL.to_string(),
            idle_label: DEFAULT_IDLE_LABEL.to_string(),
            revert_delay_ms: DEFAULT_REVERT_DELAY_MS,
        }
    }
}
