//! Dashboard Configuration
//!
//! Where the service lives and which features the view exposes.

use crate::error::{ClientError, ClientResult};

/// Base URL used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Configuration injected into the dashboard view
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Service root, without the `/opportunities` path
    pub api_base_url: String,
    /// Show the "Add Opportunity" modal
    pub creation_enabled: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            creation_enabled: true,
        }
    }
}

impl DashboardConfig {
    pub fn new(api_base_url: impl Into<String>, creation_enabled: bool) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            creation_enabled,
        }
        .normalized()
    }

    /// Strip whitespace and trailing slashes from the base URL
    pub fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Normalize, then require an absolute http(s) base URL
    pub fn validated(self) -> ClientResult<Self> {
        let config = self.normalized();
        if !(config.api_base_url.starts_with("http://") || config.api_base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "api_base_url must be an http(s) URL, got {:?}",
                config.api_base_url
            )));
        }
        Ok(config)
    }

    /// `GET`/`POST` endpoint for the collection
    pub fn opportunities_url(&self) -> String {
        format!("{}/opportunities", self.api_base_url)
    }

    /// `PUT` endpoint for a record's status
    pub fn status_url(&self, id: u32) -> String {
        format!("{}/opportunities/{}/status", self.api_base_url, id)
    }
}
