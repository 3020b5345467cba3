//! Runtime Configuration
//!
//! Reads `DashboardConfig` from the page so one build serves any environment.
//!
//! Precedence: `<script id="dashboard-config" type="application/json">` in
//! index.html, then `DASHBOARD_API_BASE_URL` at build time, then defaults.

use opportunity_client::DashboardConfig;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Fields the page may override; anything missing keeps the fallback
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    api_base_url: Option<String>,
    creation_enabled: Option<bool>,
}

/// Load config from the current document
pub fn load_config() -> DashboardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let config = resolve_config(raw.as_deref(), option_env!("DASHBOARD_API_BASE_URL"));
    log::info!(
        "Dashboard config: api_base_url={}, creation_enabled={}",
        config.api_base_url,
        config.creation_enabled
    );
    config
}

fn resolve_config(raw: Option<&str>, build_base_url: Option<&str>) -> DashboardConfig {
    let mut fallback = DashboardConfig::default();
    if let Some(base) = build_base_url {
        fallback = DashboardConfig::new(base, fallback.creation_enabled);
    }

    let overrides = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => match serde_json::from_str::<ConfigOverrides>(json) {
            Ok(o) => o,
            Err(e) => {
                log::error!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                ConfigOverrides::default()
            }
        },
        None => ConfigOverrides::default(),
    };

    let candidate = DashboardConfig::new(
        overrides.api_base_url.unwrap_or_else(|| fallback.api_base_url.clone()),
        overrides.creation_enabled.unwrap_or(fallback.creation_enabled),
    );

    match candidate.clone().validated() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using {}", e, fallback.api_base_url);
            DashboardConfig::new(fallback.api_base_url, candidate.creation_enabled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opportunity_client::DEFAULT_API_BASE_URL;

    #[test]
    fn test_no_config_uses_defaults() {
        assert_eq!(resolve_config(None, None), DashboardConfig::default());
        assert_eq!(resolve_config(Some("  \n "), None), DashboardConfig::default());
    }

    #[test]
    fn test_build_env_overrides_default_base() {
        let config = resolve_config(None, Some("https://opportunitybot.example.com/"));
        assert_eq!(config.api_base_url, "https://opportunitybot.example.com");
        assert!(config.creation_enabled);
    }

    #[test]
    fn test_page_config_wins() {
        let raw = r#"{"api_base_url":"https://hosted.example.com","creation_enabled":false}"#;
        let config = resolve_config(Some(raw), Some("https://build.example.com"));
        assert_eq!(config.api_base_url, "https://hosted.example.com");
        assert!(!config.creation_enabled);
    }

    #[test]
    fn test_partial_page_config_keeps_fallback_base() {
        let config = resolve_config(Some(r#"{"creation_enabled":false}"#), Some("https://build.example.com"));
        assert_eq!(config.api_base_url, "https://build.example.com");
        assert!(!config.creation_enabled);
    }

    #[test]
    fn test_malformed_page_config_falls_back() {
        let config = resolve_config(Some("{not json"), None);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_invalid_base_url_falls_back_keeping_flag() {
        let raw = r#"{"api_base_url":"ftp://files.example.com","creation_enabled":false}"#;
        let config = resolve_config(Some(raw), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.creation_enabled);
    }

    #[test]
    fn test_shipped_page_config_keeps_build_base() {
        let html = include_str!("../index.html");
        let start = html.find(r#"id="dashboard-config""#).unwrap();
        let body_start = start + html[start..].find('>').unwrap() + 1;
        let body_end = body_start + html[body_start..].find("</script>").unwrap();

        let config = resolve_config(Some(&html[body_start..body_end]), Some("https://build.example.com"));
        assert_eq!(config.api_base_url, "https://build.example.com");
        assert!(config.creation_enabled);
    }
}
