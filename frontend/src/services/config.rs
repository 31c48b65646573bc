use anyhow::{Context, Result};
use shared::WidgetConfig;

use crate::services::logging::Logger;

/// Attribute on `<body>` carrying JSON overrides for [`WidgetConfig`]
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Page configuration, falling back to defaults when it cannot be read
pub fn load_config() -> WidgetConfig {
    match read_config() {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("using default config: {e:#}"));
            WidgetConfig::default()
        }
    }
}

fn read_config() -> Result<WidgetConfig> {
    let body = web_sys::window()
        .context("no window")?
        .document()
        .context("no document")?
        .body()
        .context("no <body> element")?;

    match body.get_attribute(CONFIG_ATTRIBUTE) {
        Some(raw) => parse_config(&raw),
        None => Ok(WidgetConfig::default()),
    }
}

pub fn parse_config(raw: &str) -> Result<WidgetConfig> {
    WidgetConfig::from_json(raw).with_context(|| format!("invalid {CONFIG_ATTRIBUTE} JSON"))
}
