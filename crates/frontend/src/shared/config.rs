//! Runtime configuration, resolved once from `window.location`.

use contracts::shared::role_policy::PolicyConfig;

const LOCAL_API_BASE: &str = "http://localhost:8080/api";
const SAME_ORIGIN_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub health_interval_ms: u32,
    pub notice_lifetime_ms: u32,
    pub search_debounce_ms: u32,
    pub policy: PolicyConfig,
}

impl AppConfig {
    pub fn for_hostname(hostname: &str) -> Self {
        Self {
            api_base: resolve_api_base(hostname),
            health_interval_ms: 5 * 60 * 1000,
            notice_lifetime_ms: 3000,
            search_debounce_ms: 300,
            policy: PolicyConfig::default(),
        }
    }

    pub fn from_window() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self::for_hostname(&hostname)
    }

    /// Server root: the API base without its `/api` suffix.
    pub fn server_root(&self) -> &str {
        self.api_base
            .strip_suffix("/api")
            .unwrap_or(&self.api_base)
    }

    pub fn health_url(&self) -> String {
        format!("{}/actuator/health", self.server_root())
    }
}

pub fn resolve_api_base(hostname: &str) -> String {
    match hostname {
        "localhost" | "127.0.0.1" => LOCAL_API_BASE.to_string(),
        _ => SAME_ORIGIN_API_BASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_dev_server() {
        assert_eq!(resolve_api_base("localhost"), "http://localhost:8080/api");
        assert_eq!(resolve_api_base("127.0.0.1"), "http://localhost:8080/api");
        assert_eq!(resolve_api_base("showroom.example.in"), "/api");
    }

    #[test]
    fn health_url_strips_api_suffix() {
        assert_eq!(
            AppConfig::for_hostname("localhost").health_url(),
            "http://localhost:8080/actuator/health"
        );
        assert_eq!(
            AppConfig::for_hostname("shop.in").health_url(),
            "/actuator/health"
        );
    }

    #[test]
    fn defaults() {
        let config = AppConfig::for_hostname("localhost");
        assert_eq!(config.health_interval_ms, 300_000);
        assert_eq!(config.notice_lifetime_ms, 3000);
        assert_eq!(config.policy.sales_lookback_days, 3);
    }
}
