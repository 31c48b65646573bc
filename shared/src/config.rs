use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the lived time widget
///
/// Every field has a default, so a partial JSON object is a valid override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Local storage key holding the birth date
    pub storage_key: String,
    pub refresh_interval_ms: u32,
    /// Viewport width at which the single-line layout is used
    pub wide_layout_min_width_px: u32,
    /// Shown in place of the elapsed time while no date is set
    pub title: String,
    pub prompt_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: "birthDate".to_string(),
            refresh_interval_ms: 1000,
            wide_layout_min_width_px: 992,
            title: "Dogs Live Long".to_string(),
            prompt_message: "Give Us Your Birth Date To Proceed".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse JSON overrides on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.refresh_interval_ms.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WidgetConfig::default();
        assert_eq!(config.storage_key, "birthDate");
        assert_eq!(config.refresh_interval_ms, 1000);
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
        assert_eq!(config.wide_layout_min_width_px, 992);
        assert_eq!(config.title, "Dogs Live Long");
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_json(r#"{"title": "Cats Live Longer"}"#).unwrap();
        assert_eq!(config.title, "Cats Live Longer");
        assert_eq!(config.storage_key, "birthDate");
        assert_eq!(config.refresh_interval_ms, 1000);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(WidgetConfig::from_json("{not json").is_err());
        assert!(WidgetConfig::from_json(r#"{"refresh_interval_ms": "fast"}"#).is_err());
    }

    #[test]
    fn test_zero_interval_is_raised_to_one_millisecond() {
        let config = WidgetConfig {
            refresh_interval_ms: 0,
            ..WidgetConfig::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_millis(1));
    }
}
