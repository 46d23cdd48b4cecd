//! Screen configuration read from the page URL.
//!
//! `?page_size=20&toast_ms=5000&seed=40` overrides the defaults. Anything
//! that fails to parse or validate is logged and ignored.

use contracts::system::tasks::ScreenConfig;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
struct ConfigOverrides {
    page_size: Option<usize>,
    toast_ms: Option<u32>,
    seed: Option<usize>,
}

/// Builds the config from the current location's query string
pub fn load_screen_config() -> ScreenConfig {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    screen_config_from_query(&search)
}

pub fn screen_config_from_query(query: &str) -> ScreenConfig {
    let overrides: ConfigOverrides = match serde_qs::from_str(query.trim_start_matches('?')) {
        Ok(overrides) => overrides,
        Err(e) => {
            log::warn!("Ignoring malformed config query {:?}: {}", query, e);
            return ScreenConfig::default();
        }
    };

    let mut config = ScreenConfig::default();
    if let Some(size) = overrides.page_size {
        config.default_page_size = size;
    }
    if let Some(ms) = overrides.toast_ms {
        config.toast_duration_ms = ms;
    }
    if let Some(seed) = overrides.seed {
        config.seed_count = seed;
    }

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("Invalid screen config, using defaults: {:#}", e);
            ScreenConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(screen_config_from_query(""), ScreenConfig::default());
        assert_eq!(screen_config_from_query("?"), ScreenConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = screen_config_from_query("?page_size=20&toast_ms=5000&seed=40");
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.seed_count, 40);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let config = screen_config_from_query("page_size=7");
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        let config = screen_config_from_query("page_size=lots");
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_oversized_seed_falls_back() {
        let config = screen_config_from_query("?seed=100000000");
        assert_eq!(config, ScreenConfig::default());
    }
}
