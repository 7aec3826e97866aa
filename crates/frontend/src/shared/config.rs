//! Application configuration
//!
//! Provided once at the app root via `provide_context(AppConfig::load())`
//! and read by pages with `use_config()`.

use contracts::shared::geo::LatLng;
use leptos::prelude::*;

/// Port of the item/point API when no explicit URL is configured
pub const DEFAULT_API_PORT: u16 = 3333;

pub const IBGE_LOCALITIES_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the item/point API, without trailing slash
    pub api_base: String,
    pub ibge_base: String,
    pub tile_url: String,
    pub tile_subdomains: Vec<String>,
    pub tile_attribution: String,
    /// Map center until geolocation answers
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub logo_src: String,
}

impl AppConfig {
    /// Defaults with the API on `protocol//hostname:3333`
    pub fn for_location(protocol: &str, hostname: &str) -> Self {
        Self::with_api_base(format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT))
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            ibge_base: IBGE_LOCALITIES_URL.to_string(),
            tile_url: OSM_TILE_URL.to_string(),
            tile_subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            tile_attribution: OSM_ATTRIBUTION.to_string(),
            default_center: LatLng::new(-25.4430381, -54.4013914),
            default_zoom: 15,
            logo_src: "/assets/logo.svg".to_string(),
        }
    }

    /// `ECOLETA_API_URL` at build time wins; otherwise the API is expected
    /// next to the page's host.
    pub fn load() -> Self {
        if let Some(url) = option_env!("ECOLETA_API_URL") {
            return Self::with_api_base(url);
        }

        let Some(window) = web_sys::window() else {
            return Self::for_location("http:", "localhost");
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "localhost".to_string());
        Self::for_location(&protocol, &hostname)
    }

    /// Item/point API endpoint, e.g. `api_url("items")`
    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    /// IBGE endpoint, e.g. `ibge_url("estados")`
    pub fn ibge_url(&self, path: &str) -> String {
        join_url(&self.ibge_base, path)
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_location() {
        let config = AppConfig::for_location("https:", "ecoleta.example");
        assert_eq!(config.api_base, "https://ecoleta.example:3333");
        assert_eq!(config.api_url("items"), "https://ecoleta.example:3333/items");
    }

    #[test]
    fn test_with_api_base_trims_slash() {
        let config = AppConfig::with_api_base("http://localhost:3333/");
        assert_eq!(config.api_url("/points"), "http://localhost:3333/points");
    }

    #[test]
    fn test_ibge_url() {
        let config = AppConfig::with_api_base("http://localhost:3333");
        assert_eq!(
            config.ibge_url("estados/PR/municipios"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/PR/municipios"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a", "b"), "http://a/b");
    }
}
