//! Configuration for the outbound provider HTTP client
//!
//! Provides environment-based configuration for the provider client
//! with the defaults used in production.

use crate::services::provider_client::ProviderClientConfig;
use std::env;

impl ProviderClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_ms = env::var("PROVIDER_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(defaults.timeout_ms);

        let connect_timeout_ms = env::var("PROVIDER_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ms: &u64| *ms > 0)
            .unwrap_or(defaults.connect_timeout_ms);

        let enable_detailed_logging = env::var("PROVIDER_DETAILED_LOGGING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enable_detailed_logging);

        Self {
            timeout_ms,
            connect_timeout_ms,
            enable_detailed_logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to synchronize tests that modify environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_provider_client_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("PROVIDER_TIMEOUT_MS");
            env::remove_var("PROVIDER_CONNECT_TIMEOUT_MS");
            env::remove_var("PROVIDER_DETAILED_LOGGING");
        }

        let config = ProviderClientConfig::from_env();
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.connect_timeout_ms, 3000);
        assert!(config.enable_detailed_logging);
    }

    #[test]
    fn test_provider_client_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("PROVIDER_TIMEOUT_MS", "2500");
            env::set_var("PROVIDER_CONNECT_TIMEOUT_MS", "0");
            env::set_var("PROVIDER_DETAILED_LOGGING", "false");
        }

        let config = ProviderClientConfig::from_env();
        assert_eq!(config.timeout_ms, 2500);
        // Zero is not a usable timeout, so the default stays in place
        assert_eq!(config.connect_timeout_ms, 3000);
        assert!(!config.enable_detailed_logging);

        unsafe {
            env::remove_var("PROVIDER_TIMEOUT_MS");
            env::remove_var("PROVIDER_CONNECT_TIMEOUT_MS");
            env::remove_var("PROVIDER_DETAILED_LOGGING");
        }
    }
}
