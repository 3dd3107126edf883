//! Security headers configuration.

use std::env;

/// Configuration for security headers middleware
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    pub csp_enabled: bool,
    pub csp_directives: String,
    pub hsts_enabled: bool,
    pub hsts_max_age: u32,
    pub hsts_include_subdomains: bool,
    pub frame_options: String,
    pub content_type_options: bool,
    pub referrer_policy: String,
    pub cross_origin_opener_policy: String,
    pub dns_prefetch_control: bool,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp_enabled: true,
            csp_directives: "default-src 'self'; frame-ancestors 'self'; object-src 'none'"
                .to_string(),
            hsts_enabled: true,
            hsts_max_age: 15_552_000, // 180 days
            hsts_include_subdomains: true,
            frame_options: "SAMEORIGIN".to_string(),
            content_type_options: true,
            referrer_policy: "no-referrer".to_string(),
            cross_origin_opener_policy: "same-origin".to_string(),
            dns_prefetch_control: true,
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let csp_enabled = env::var("SECURITY_CSP_ENABLED")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.csp_enabled);

        let csp_directives = env::var("CSP_DIRECTIVES").unwrap_or(defaults.csp_directives);

        let hsts_enabled = env::var("HSTS_ENABLED")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.hsts_enabled);

        let hsts_max_age = env::var("HSTS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.hsts_max_age);

        let hsts_include_subdomains = env::var("HSTS_INCLUDE_SUBDOMAINS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.hsts_include_subdomains);

        let frame_options = env::var("X_FRAME_OPTIONS").unwrap_or(defaults.frame_options);

        let content_type_options = env::var("X_CONTENT_TYPE_OPTIONS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.content_type_options);

        let referrer_policy = env::var("REFERRER_POLICY").unwrap_or(defaults.referrer_policy);

        let cross_origin_opener_policy = env::var("CROSS_ORIGIN_OPENER_POLICY")
            .unwrap_or(defaults.cross_origin_opener_policy);

        let dns_prefetch_control = env::var("X_DNS_PREFETCH_CONTROL")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(defaults.dns_prefetch_control);

        Self {
            csp_enabled,
            csp_directives,
            hsts_enabled,
            hsts_max_age,
            hsts_include_subdomains,
            frame_options,
            content_type_options,
            referrer_policy,
            cross_origin_opener_policy,
            dns_prefetch_control,
        }
    }

    /// Value of the `Strict-Transport-Security` header
    pub fn hsts_value(&self) -> String {
        if self.hsts_include_subdomains {
            format!("max-age={}; includeSubDomains", self.hsts_max_age)
        } else {
            format!("max-age={}", self.hsts_max_age)
        }
    }
}
