use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://triviaziggle.com";
pub const DEFAULT_SITE_NAME: &str = "Triviaziggle";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;

/// Site-wide settings shared with handlers through `AppState`.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Absolute origin without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    pub secure_cookies: bool,
    pub session_idle: Duration,
}

impl SiteConfig {
    pub fn new(base_url: &str, site_name: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            site_name: site_name.to_string(),
            secure_cookies: false,
            session_idle: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }

    /// Absolute URL for a site path starting with `/`.
    pub fn absolute(&self, path: &str) -> String {
        if path == "/" {
            self.base_url.clone()
        } else {
            format!("{}{path}", self.base_url)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_SITE_NAME)
    }
}
