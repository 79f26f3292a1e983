//! Tracked-link (UTM) configuration.

use serde::{Deserialize, Serialize};

fn default_utm_medium() -> String {
    "afiliado".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    #[serde(default = "default_utm_medium")]
    pub utm_medium: String,

    /// Optional campaign tag; omitted from links when empty.
    #[serde(default)]
    pub utm_campaign: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            utm_medium: default_utm_medium(),
            utm_campaign: String::new(),
        }
    }
}
