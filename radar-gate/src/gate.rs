//! Run controller
//!
//! Drives one remote test run end to end: trigger the run, wait out the
//! grace period, poll until a terminal status, then map the outcome onto
//! the host build. The controller always runs to completion; trigger and
//! poll failures become a failed verdict instead of an error.

use radar_client::RadarApi;
use radar_core::domain::log::BuildLog;
use radar_core::domain::outcome::{BuildResult, RunVerdict};
use radar_core::domain::status::RadarStatus;
use radar_core::domain::url::api_results_url;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::sleep::Sleeper;

/// Pause between triggering the run and the first poll
pub const GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Pause between consecutive polls while the run is pending
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Controller for one gated test run
pub struct RunGate {
    config: RunConfig,
    api: Arc<dyn RadarApi>,
    sleeper: Arc<dyn Sleeper>,
}

impl RunGate {
    /// Creates a new gate over the given API and sleeper.
    pub fn new(config: RunConfig, api: Arc<dyn RadarApi>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            config,
            api,
            sleeper,
        }
    }

    /// Runs the gate to completion.
    ///
    /// Always returns a verdict. When the verdict is [`RunVerdict::Fail`]
    /// the host build is marked failed exactly once; a passing run leaves
    /// it untouched.
    pub async fn run(&self, log: &dyn BuildLog, build: &mut dyn BuildResult) -> RunVerdict {
        let verdict = self.drive(log).await;

        log.line(&format!("Test run finished:{}", verdict));
        if verdict == RunVerdict::Fail {
            build.mark_failed();
        }

        verdict
    }

    /// Triggers the run and polls it to a terminal status.
    async fn drive(&self, log: &dyn BuildLog) -> RunVerdict {
        log.line("Test Trigger Configuration:");
        log.line(&format!(
            "Trigger End Point:{}",
            self.config.trigger_endpoint
        ));
        log.line(&format!("Access Token:{}", self.config.access_token));
        log.line(&format!("Bucket Key:{}", self.config.bucket_key));

        let started = Instant::now();

        let results_page = match self
            .api
            .trigger_run(log, &self.config.trigger_endpoint)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                warn!("Trigger call failed: {}", e);
                log.line(&format!("Failed to trigger test run:{}", e));
                return RunVerdict::Fail;
            }
        };

        log.line(&format!("Test Results URL:{}", results_page));

        let api_url = api_results_url(&results_page, &self.config.bucket_key);
        log.line(&format!("API URL:{}", api_url));

        // Give the remote run a head start before the first poll.
        if self.sleeper.sleep(GRACE_PERIOD).await.is_err() {
            debug!("Grace period interrupted, polling early");
        }

        let mut polls = 0u32;
        loop {
            let token = match self.api.latest_result(log, &api_url).await {
                Ok(token) => token,
                Err(e) => {
                    warn!("Results call failed after {} poll(s): {}", polls, e);
                    log.line(&format!("Failed to fetch test result:{}", e));
                    return RunVerdict::Fail;
                }
            };
            polls += 1;

            log.line(&format!("Response received:{}", token));

            let status = RadarStatus::classify(&token);
            if let Some(verdict) = status.verdict() {
                info!(
                    "Terminal status {:?} after {} poll(s) in {:?}",
                    status,
                    polls,
                    started.elapsed()
                );
                return verdict;
            }

            debug!("Run still pending ({:?}), polling again", status);
            if self.sleeper.sleep(POLL_INTERVAL).await.is_err() {
                debug!("Poll interval interrupted, polling early");
            }
        }
    }
}
