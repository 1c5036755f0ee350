//! Gate configuration
//!
//! Defines all parameters for one gated test run: where to trigger it,
//! how to authenticate, and how long each API call may take.

use std::time::Duration;

/// Default per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for one gated test run
///
/// Everything here comes straight from the CI job definition. The values are
/// echoed verbatim into the run transcript, access token included, matching
/// what operators expect to see in the build log.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Trigger URL of the remote test
    /// (e.g., "https://api.runscope.com/radar/tr-1/trigger")
    pub trigger_endpoint: String,

    /// Bearer token sent with every API call
    pub access_token: String,

    /// Bucket key of the test, used to rewrite the results-page URL
    pub bucket_key: String,

    /// Maximum time a single API call may take
    pub timeout: Duration,
}

impl RunConfig {
    /// Creates a new configuration with the default timeout
    pub fn new(trigger_endpoint: String, access_token: String, bucket_key: String) -> Self {
        Self {
            trigger_endpoint,
            access_token,
            bucket_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the per-call timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.trigger_endpoint.is_empty() {
            anyhow::bail!("trigger endpoint cannot be empty");
        }

        if !self.trigger_endpoint.starts_with("http://")
            && !self.trigger_endpoint.starts_with("https://")
        {
            anyhow::bail!("trigger endpoint must start with http:// or https://");
        }

        if self.access_token.is_empty() {
            anyhow::bail!("access token cannot be empty");
        }

        if self.bucket_key.is_empty() {
            anyhow::bail!("bucket key cannot be empty");
        }

        if self.timeout.as_secs() == 0 {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}
