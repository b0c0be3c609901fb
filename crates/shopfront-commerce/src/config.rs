//! Search bar configuration.

use crate::search::SUGGESTION_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the search bar controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBarConfig {
    /// Maximum suggestions shown in the dropdown. Can only lower the
    /// built-in cap of [`SUGGESTION_LIMIT`].
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Grace period between blur and hiding the dropdown, in milliseconds.
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
}

fn default_suggestion_limit() -> usize {
    SUGGESTION_LIMIT
}

fn default_hide_delay_ms() -> u64 {
    200
}

impl SearchBarConfig {
    /// The blur grace period as a [`Duration`].
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchBarConfig::default();
        assert_eq!(config.suggestion_limit, 8);
        assert_eq!(config.hide_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SearchBarConfig = serde_json::from_str(r#"{"hide_delay_ms": 350}"#).unwrap();
        assert_eq!(config.hide_delay_ms, 350);
        assert_eq!(config.suggestion_limit, 8);
    }
}
