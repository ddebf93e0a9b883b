//! Runtime configuration of the dashboard.

use leptos::prelude::*;

use crate::shared::api_utils::api_base_from_location;

/// Debounce applied to server-side search input
pub const SEARCH_DEBOUNCE_MS: u32 = 400;
/// How long a row-action notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub search_debounce_ms: u32,
    pub notice_timeout_ms: u32,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            notice_timeout_ms: NOTICE_TIMEOUT_MS,
        }
    }

    /// `ADMIN_API_BASE` baked in at build time, else the page origin
    pub fn from_env() -> Self {
        Self::resolve(option_env!("ADMIN_API_BASE"))
    }

    fn resolve(baked: Option<&str>) -> Self {
        match baked.map(str::trim).filter(|base| !base.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(api_base_from_location()),
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baked_base_wins() {
        let config = AppConfig::resolve(Some(" https://api.tickets.test "));
        assert_eq!(config.api_base, "https://api.tickets.test");
        assert_eq!(config.search_debounce_ms, 400);
    }
}
