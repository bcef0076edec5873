//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Values that fail to parse fall back to the default
//! with a warning.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::state::Route;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Native window configuration
    pub window: WindowConfig,
    /// Delays and notice lifetimes
    pub timing: TimingConfig,
    /// Initial theme and screen
    pub appearance: AppearanceConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner size in logical pixels
    pub width: f32,
    pub height: f32,
}

/// Timing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay between a successful sign-in and the picker
    pub login_redirect: Duration,
    /// Delay between logging out and the login screen
    pub logout_redirect: Duration,
    /// How long a notice stays visible
    pub toast_lifetime: Duration,
}

/// Appearance configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppearanceConfig {
    /// Start in dark mode
    pub dark_mode: bool,
    /// Screen shown at startup
    pub start_route: Route,
    /// Maximum number of notices on screen at once
    pub max_toasts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            window: WindowConfig {
                title: lookup("SUITE_WINDOW_TITLE")
                    .unwrap_or_else(|| "Suite Empresarial".to_string()),
                width: parse_or(&lookup, "SUITE_WINDOW_WIDTH", 1200.0),
                height: parse_or(&lookup, "SUITE_WINDOW_HEIGHT", 800.0),
            },
            timing: TimingConfig {
                login_redirect: millis_or(&lookup, "SUITE_LOGIN_DELAY_MS", 800),
                logout_redirect: millis_or(&lookup, "SUITE_LOGOUT_DELAY_MS", 500),
                toast_lifetime: millis_or(&lookup, "SUITE_TOAST_MS", 4000),
            },
            appearance: AppearanceConfig {
                dark_mode: lookup("SUITE_DARK_MODE")
                    .map(|v| parse_flag(&v))
                    .unwrap_or(false),
                start_route: parse_or(&lookup, "SUITE_START_ROUTE", Route::Login),
                max_toasts: parse_or(&lookup, "SUITE_MAX_TOASTS", 3),
            },
        }
    }

    /// Inner window size as egui expects it
    pub fn window_size(&self) -> [f32; 2] {
        [self.window.width, self.window.height]
    }
}

/// Parse `key` from the lookup, keeping `default` if absent or invalid
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(err) => {
                warn!(key, value = %raw, error = %err, "Invalid configuration value, using default");
                default
            }
        },
        None => default,
    }
}

fn millis_or<F>(lookup: &F, key: &str, default_ms: u64) -> Duration
where
    F: Fn(&str) -> Option<String>,
{
    Duration::from_millis(parse_or(lookup, key, default_ms))
}

/// Truthy strings: 1, true, yes, on (case-insensitive)
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window.title, "Suite Empresarial");
        assert_eq!(config.window_size(), [1200.0, 800.0]);
        assert_eq!(config.timing.login_redirect, Duration::from_millis(800));
        assert_eq!(config.timing.logout_redirect, Duration::from_millis(500));
        assert_eq!(config.timing.toast_lifetime, Duration::from_millis(4000));
        assert!(!config.appearance.dark_mode);
        assert_eq!(config.appearance.start_route, Route::Login);
        assert_eq!(config.appearance.max_toasts, 3);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("SUITE_WINDOW_WIDTH", "1440"),
            ("SUITE_LOGIN_DELAY_MS", "0"),
            ("SUITE_DARK_MODE", "Yes"),
            ("SUITE_START_ROUTE", "/app/nomina"),
        ]);
        assert_eq!(config.window.width, 1440.0);
        assert_eq!(config.timing.login_redirect, Duration::ZERO);
        assert!(config.appearance.dark_mode);
        assert_eq!(config.appearance.start_route, Route::app("nomina"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_with(&[
            ("SUITE_WINDOW_HEIGHT", "tall"),
            ("SUITE_TOAST_MS", "-5"),
            ("SUITE_DARK_MODE", "maybe"),
            ("SUITE_START_ROUTE", "/nowhere"),
        ]);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.timing.toast_lifetime, Duration::from_millis(4000));
        assert!(!config.appearance.dark_mode);
        assert_eq!(config.appearance.start_route, Route::Login);
    }
}
