//! Configuration types

use std::time::Duration;

use dashdemo_provider::MockProvider;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Mock provider settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Simulated fetch latency
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Probability (0.0 - 1.0) that a fetch fails
    #[serde(default)]
    pub failure_rate: f64,

    /// Message carried by simulated failures
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: 0.0,
            failure_message: default_failure_message(),
        }
    }
}

impl ProviderSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Build the mock provider these settings describe
    pub fn build_mock(&self) -> MockProvider {
        MockProvider::new(self.latency())
            .with_failure_rate(self.failure_rate, self.failure_message.clone())
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Terminal event poll timeout, also the spinner tick
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show the demo credentials under the login form
    #[serde(default = "default_true")]
    pub show_demo_hint: bool,

    #[serde(default = "default_true")]
    pub mask_password: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_demo_hint: true,
            mask_password: true,
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before logging out
    #[serde(default)]
    pub confirm_logout: bool,
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_failure_message() -> String {
    "Service temporarily unavailable".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.provider.latency_ms, 1000);
        assert_eq!(settings.provider.failure_rate, 0.0);
        assert_eq!(
            settings.provider.failure_message,
            "Service temporarily unavailable"
        );
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.show_demo_hint);
        assert!(settings.ui.mask_password);
        assert!(!settings.behavior.confirm_logout);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str("[provider]\nfailure_rate = 0.5\n").unwrap();
        assert_eq!(settings.provider.failure_rate, 0.5);
        assert_eq!(settings.provider.latency_ms, 1000);
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_build_mock_clamps_failure_rate() {
        let provider = ProviderSettings {
            latency_ms: 10,
            failure_rate: 3.0,
            failure_message: "down".to_string(),
        }
        .build_mock();

        assert_eq!(provider.latency(), Duration::from_millis(10));
        assert_eq!(provider.failure_rate(), 1.0);
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let ui = UiSettings {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert_eq!(ui.tick_rate(), Duration::from_millis(1));
    }
}
