use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote query API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint (e.g., "https://rickandmortyapi.com/graphql").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Pagination behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Page requested by the initial load.
    #[serde(default = "default_start_page")]
    pub start_page: u32,
    /// Failure message that means "no more pages" rather than a fault.
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,
    /// Ignore scroll triggers while a load is already in flight.
    ///
    /// Off by default: overlapping triggers may fetch the same page twice.
    #[serde(default)]
    pub guard_in_flight: bool,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Rows moved per Up/Down or wheel notch.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

fn default_endpoint() -> String {
    "https://rickandmortyapi.com/graphql".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_start_page() -> u32 {
    1
}

fn default_not_found_message() -> String {
    "404: Not Found".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_scroll_step() -> u16 {
    3
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            not_found_message: default_not_found_message(),
            guard_in_flight: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            scroll_step: default_scroll_step(),
        }
    }
}
