use crate::Route;
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
pub const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard";

const SUBMIT_DELAY_ENV: &str = "SUPPORT_DESK_SUBMIT_DELAY_MS";
const DASHBOARD_ROUTE_ENV: &str = "SUPPORT_DESK_DASHBOARD_ROUTE";

pub static CONFIG: Lazy<FormConfig> = Lazy::new(FormConfig::from_env);

#[derive(Clone, PartialEq, Debug)]
pub struct FormConfig {
    /// Latency of the simulated send before the completion signal fires.
    pub submit_delay: Duration,
    pub dashboard_route: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            dashboard_route: DEFAULT_DASHBOARD_ROUTE.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_env() -> Self {
        let mut config = FormConfig::default();

        if let Ok(raw) = std::env::var(SUBMIT_DELAY_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.submit_delay = Duration::from_millis(ms),
                Err(e) => warn!(
                    "Ignoring {}={:?}: {}. Using {}ms.",
                    SUBMIT_DELAY_ENV, raw, e, DEFAULT_SUBMIT_DELAY_MS
                ),
            }
        }

        if let Ok(route) = std::env::var(DASHBOARD_ROUTE_ENV) {
            let route = route.trim();
            match route.parse::<Route>() {
                Ok(_) => config.dashboard_route = route.to_string(),
                Err(e) => warn!(
                    "Ignoring {}={:?}: {}. Using {}.",
                    DASHBOARD_ROUTE_ENV, route, e, DEFAULT_DASHBOARD_ROUTE
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        std::env::remove_var(SUBMIT_DELAY_ENV);
        std::env::remove_var(DASHBOARD_ROUTE_ENV);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        let config = FormConfig::from_env();
        assert_eq!(config.submit_delay, Duration::from_millis(2000));
        assert_eq!(config.dashboard_route, "/dashboard");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear();
        std::env::set_var(SUBMIT_DELAY_ENV, "250");
        std::env::set_var(DASHBOARD_ROUTE_ENV, " / ");
        let config = FormConfig::from_env();
        assert_eq!(config.submit_delay, Duration::from_millis(250));
        assert_eq!(config.dashboard_route, "/");
        clear();
    }

    #[test]
    #[serial]
    fn test_bad_values_fall_back() {
        clear();
        std::env::set_var(SUBMIT_DELAY_ENV, "soon");
        std::env::set_var(DASHBOARD_ROUTE_ENV, "home");
        assert_eq!(FormConfig::from_env(), FormConfig::default());

        // well-formed but not a page of this app
        std::env::set_var(DASHBOARD_ROUTE_ENV, "/home");
        let config = FormConfig::from_env();
        assert_eq!(config.dashboard_route, DEFAULT_DASHBOARD_ROUTE);
        assert!(config.dashboard_route.parse::<Route>().is_ok());
        clear();
    }
}
