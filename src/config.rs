//! API Configuration
//!
//! Backend address, fixed at build time.

/// Used when `MOTORCYCLE_API_URL` is not set during the build
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `MOTORCYCLE_API_URL` from the build environment
    pub fn from_env() -> Self {
        Self::new(option_env!("MOTORCYCLE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
