//! Outbound HTTP client for the weather provider.
//!
//! Wraps `reqwest` with:
//! - one fixed timeout per call (no retries, no circuit breaking)
//! - structured logging of every call
//! - Prometheus counters and latency histograms per provider operation

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use url::Url;

/// Configuration for the provider HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderClientConfig {
    /// Upper bound for a whole call, connect included (in milliseconds)
    pub timeout_ms: u64,

    /// Connection establishment timeout (in milliseconds)
    pub connect_timeout_ms: u64,

    /// Log every call, not only failures
    pub enable_detailed_logging: bool,
}

impl Default for ProviderClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            connect_timeout_ms: 3000,
            enable_detailed_logging: true,
        }
    }
}

impl ProviderClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms.min(self.timeout_ms))
    }
}

/// Metrics for outbound provider calls
#[derive(Clone)]
pub struct ProviderClientMetrics {
    /// Calls by operation and outcome
    pub requests_total: CounterVec,

    /// Call duration by operation
    pub request_duration_seconds: HistogramVec,

    /// Timeouts by operation
    pub timeouts_total: CounterVec,
}

impl ProviderClientMetrics {
    /// Create the collectors and register them in `registry`
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = CounterVec::new(
            Opts::new(
                "provider_requests_total",
                "Total weather provider requests by operation and outcome",
            ),
            &["operation", "outcome"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "provider_request_duration_seconds",
                "Duration of weather provider requests",
            )
            .buckets(vec![0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["operation"],
        )?;

        let timeouts_total = CounterVec::new(
            Opts::new(
                "provider_timeouts_total",
                "Total weather provider requests that timed out",
            ),
            &["operation"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(timeouts_total.clone()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            timeouts_total,
        })
    }
}

/// Transport-level failures; HTTP error statuses are returned as responses
#[derive(Debug, thiserror::Error)]
pub enum ProviderClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

/// HTTP client used for every provider call
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    config: ProviderClientConfig,
    metrics: Option<ProviderClientMetrics>,
}

impl ProviderClient {
    pub fn new(
        config: ProviderClientConfig,
        metrics: Option<ProviderClientMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            metrics,
        })
    }

    pub fn config(&self) -> &ProviderClientConfig {
        &self.config
    }

    /// Issue a GET for `operation`, bounded by the configured timeout
    ///
    /// Any HTTP status counts as a completed call; the caller decides what a
    /// non-success status means.
    pub async fn get(
        &self,
        url: Url,
        operation: &'static str,
    ) -> Result<reqwest::Response, ProviderClientError> {
        let destination = url.host_str().unwrap_or("unknown").to_string();
        let timeout = self.config.timeout();
        let start = Instant::now();

        let result = tokio::time::timeout(timeout, self.client.get(url).send()).await;
        let duration = start.elapsed();

        match result {
            Ok(Ok(response)) => {
                let status = response.status();
                let outcome = if status.is_success() { "success" } else { "http_error" };
                self.record(operation, outcome, duration);

                if status.is_success() {
                    if self.config.enable_detailed_logging {
                        info!(
                            destination = %destination,
                            operation,
                            status = status.as_u16(),
                            duration_ms = duration.as_millis(),
                            "Provider request completed"
                        );
                    }
                } else {
                    warn!(
                        destination = %destination,
                        operation,
                        status = status.as_u16(),
                        duration_ms = duration.as_millis(),
                        "Provider returned an error status"
                    );
                }
                Ok(response)
            }
            Ok(Err(e)) if e.is_timeout() => {
                self.record_timeout(operation, duration);
                warn!(
                    destination = %destination,
                    operation,
                    timeout_ms = timeout.as_millis(),
                    "Provider request timed out"
                );
                Err(ProviderClientError::Timeout(timeout))
            }
            Ok(Err(e)) => {
                self.record(operation, "network_error", duration);
                warn!(
                    destination = %destination,
                    operation,
                    error = %e,
                    duration_ms = duration.as_millis(),
                    "Provider request failed with network error"
                );
                Err(ProviderClientError::Network(e.without_url()))
            }
            Err(_) => {
                self.record_timeout(operation, duration);
                warn!(
                    destination = %destination,
                    operation,
                    timeout_ms = timeout.as_millis(),
                    "Provider request timed out"
                );
                Err(ProviderClientError::Timeout(timeout))
            }
        }
    }

    fn record(&self, operation: &str, outcome: &str, duration: Duration) {
        if let Some(metrics) = &self.metrics {
            metrics
                .requests_total
                .with_label_values(&[operation, outcome])
                .inc();
            metrics
                .request_duration_seconds
                .with_label_values(&[operation])
                .observe(duration.as_secs_f64());
        }
    }

    fn record_timeout(&self, operation: &str, duration: Duration) {
        self.record(operation, "timeout", duration);
        if let Some(metrics) = &self.metrics {
            metrics.timeouts_total.with_label_values(&[operation]).inc();
        }
    }
}
