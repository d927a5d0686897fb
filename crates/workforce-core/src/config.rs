//! Console configuration
//!
//! Built once at start-up and shared read-only.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "/api/";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;
pub const DEFAULT_GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL every endpoint path is appended to. Always ends with `/`.
    pub api_base_url: String,
    pub page_size: u32,
    pub toast_duration_ms: u32,
    /// One-shot geolocation timeout for visit check-in/out.
    pub geolocation_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            geolocation_timeout_ms: DEFAULT_GEOLOCATION_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build from optional overrides (typically `option_env!` values).
    /// Blank or unparsable values keep the defaults.
    pub fn from_overrides(api_base_url: Option<&str>, page_size: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.to_string();
        }
        if let Some(size) = page_size.and_then(|s| s.trim().parse::<u32>().ok()).filter(|s| *s > 0) {
            config.page_size = size;
        }
        config.normalized()
    }

    fn normalized(mut self) -> Self {
        if !self.api_base_url.ends_with('/') {
            self.api_base_url.push('/');
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_overrides(None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_normalize_base_url() {
        let config = AppConfig::from_overrides(Some("https://api.example.com/v1"), Some("25"));
        assert_eq!(config.api_base_url, "https://api.example.com/v1/");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_bad_page_size_ignored() {
        let config = AppConfig::from_overrides(Some("  "), Some("zero"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }
}
