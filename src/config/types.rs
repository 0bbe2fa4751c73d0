use serde::{Deserialize, Serialize};

use crate::explain::Language;
use crate::ui::session::ResponsePolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Location of the remote explain service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the explain endpoint, appended to `base_url`.
    #[serde(default = "default_explain_path")]
    pub explain_path: String,
    /// Total request timeout. Absent means requests never time out.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Initial session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Defaults {
    /// Language selected at startup.
    #[serde(default)]
    pub language: Language,
    /// How responses to superseded requests are applied.
    #[serde(default)]
    pub response_policy: ResponsePolicy,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Spaces inserted for Tab in the editor (default: 4).
    #[serde(default = "default_tab_width")]
    pub tab_width: u8,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_explain_path() -> String {
    "/api/explain/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_tab_width() -> u8 {
    4
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            explain_path: default_explain_path(),
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            tab_width: default_tab_width(),
        }
    }
}

impl ServiceConfig {
    /// Full URL of the explain endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.explain_path
        )
    }
}
