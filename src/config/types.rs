// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::search::PanelAnchor;
use crate::theme::ThemeMode;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8088";

/// File service configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            url: default_server_url(),
        }
    }
}

/// Search navigator configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Wait between the search dialog appearing and the panel update
    #[serde(default = "default_rerender_delay_ms")]
    pub rerender_delay_ms: u64,
}

fn default_rerender_delay_ms() -> u64 {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            rerender_delay_ms: default_rerender_delay_ms(),
        }
    }
}

impl SearchConfig {
    pub fn rerender_delay(&self) -> Duration {
        Duration::from_millis(self.rerender_delay_ms)
    }
}

/// Match panel placement section
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_overlay_top")]
    pub top: u16,
    #[serde(default = "default_overlay_right")]
    pub right: u16,
}

fn default_overlay_top() -> u16 {
    2
}

fn default_overlay_right() -> u16 {
    3
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            top: default_overlay_top(),
            right: default_overlay_right(),
        }
    }
}

impl OverlayConfig {
    pub fn anchor(&self) -> PanelAnchor {
        PanelAnchor {
            top: self.top,
            right: self.right,
        }
    }
}

/// Theme configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
