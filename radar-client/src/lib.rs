//! Radar HTTP Client
//!
//! A small, type-safe client for the two calls the radar gate makes against
//! the remote test API: triggering a run and polling its result.
//!
//! Every call is a single authenticated GET with a bounded round trip. The
//! client never retries; deciding what a failure means is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use radar_client::{RadarApi, RadarClient};
//! use radar_core::domain::log::MemoryLog;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RadarClient::new("rs_live_abc123", Duration::from_secs(60))?;
//! let log = MemoryLog::new();
//!
//! let results_page = client
//!     .trigger_run(&log, "https://api.runscope.com/radar/tr-1/trigger")
//!     .await?;
//! println!("results at {}", results_page);
//! # Ok(())
//! # }
//! ```

pub mod error;

// Re-export commonly used types
pub use error::{ApiCall, ClientError, Result};

use async_trait::async_trait;
use radar_core::domain::log::BuildLog;
use radar_core::dto::results::ResultsResponse;
use radar_core::dto::trigger::TriggerResponse;
use reqwest::{Client, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Operations the run controller needs from the remote API.
///
/// The controller depends on this trait instead of the concrete client so
/// tests can script response sequences without a network.
#[async_trait]
pub trait RadarApi: Send + Sync {
    /// Starts a remote test run and returns the results-page URL.
    async fn trigger_run(&self, log: &dyn BuildLog, url: &str) -> Result<String>;

    /// Queries a started run and returns its raw status token.
    async fn latest_result(&self, log: &dyn BuildLog, url: &str) -> Result<String>;
}

/// HTTP client for the remote test API
///
/// Carries the bearer token and the per-call timeout. Both calls go through
/// one shared request core; the only difference is which payload field gets
/// extracted.
#[derive(Debug, Clone)]
pub struct RadarClient {
    /// HTTP client instance, built with the configured timeouts
    client: Client,
    /// Bearer token sent with every request
    access_token: String,
}

impl RadarClient {
    /// Creates a new client.
    ///
    /// The timeout bounds both the connection attempt and the total round
    /// trip of every call made through this client.
    pub fn new(access_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(ClientError::Init)?;

        Ok(Self {
            client,
            access_token: access_token.into(),
        })
    }

    /// Issues one authenticated GET and parses the JSON payload.
    ///
    /// Exactly one round trip: any failure comes back as an error instead of
    /// a retry.
    async fn get_json<T: DeserializeOwned>(&self, call: ApiCall, url: &str) -> Result<T> {
        debug!(%call, url, "sending request");

        let response = self
            .client
            .get(url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.access_token),
            )
            .send()
            .await
            .map_err(|source| ClientError::Request { call, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                call,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Request { call, source })?;

        serde_json::from_str(&body).map_err(|e| ClientError::Payload {
            call,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RadarApi for RadarClient {
    async fn trigger_run(&self, log: &dyn BuildLog, url: &str) -> Result<String> {
        let response: TriggerResponse = self.get_json(ApiCall::Trigger, url).await?;

        let run = response
            .data
            .runs
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::Payload {
                call: ApiCall::Trigger,
                reason: "trigger response contained no runs".to_string(),
            })?;

        log.line(&format!("Trigger response:{}", run.url));
        debug!(url = %run.url, "trigger call succeeded");

        Ok(run.url)
    }

    async fn latest_result(&self, log: &dyn BuildLog, url: &str) -> Result<String> {
        let response: ResultsResponse = self.get_json(ApiCall::Results, url).await?;

        log.line(&format!("Results response:{}", response.data.result));
        debug!(result = %response.data.result, "results call succeeded");

        Ok(response.data.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use radar_core::domain::log::MemoryLog;

    fn test_client() -> RadarClient {
        RadarClient::new("test-token", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(RadarClient::new("test-token", Duration::from_secs(60)).is_ok());
    }

    #[tokio::test]
    async fn test_trigger_returns_results_page_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/radar/tr-1/trigger")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "data": {
                        "runs": [
                            { "url": "https://www.runscope.com/radar/bk-1/ts-9/results/run-7" }
                        ]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client();
        let log = MemoryLog::new();
        let url = format!("{}/radar/tr-1/trigger", server.url());

        let results_page = client.trigger_run(&log, &url).await.unwrap();

        assert_eq!(
            results_page,
            "https://www.runscope.com/radar/bk-1/ts-9/results/run-7"
        );
        assert_eq!(
            log.lines(),
            vec![
                "Trigger response:https://www.runscope.com/radar/bk-1/ts-9/results/run-7"
                    .to_string()
            ]
        );

        // Exactly one round trip.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_results_returns_status_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/buckets/bk-1/radar/ts-9/results/run-7")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "data": { "result": "working" } }).to_string())
            .create_async()
            .await;

        let client = test_client();
        let log = MemoryLog::new();
        let url = format!("{}/buckets/bk-1/radar/ts-9/results/run-7", server.url());

        let token = client.latest_result(&log, &url).await.unwrap();

        assert_eq!(token, "working");
        assert_eq!(log.lines(), vec!["Results response:working".to_string()]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/buckets/bk-1/radar/ts-9/results/run-7")
            .with_status(404)
            .with_body("no such run")
            .create_async()
            .await;

        let client = test_client();
        let log = MemoryLog::new();
        let url = format!("{}/buckets/bk-1/radar/ts-9/results/run-7", server.url());

        let err = client.latest_result(&log, &url).await.unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.call(), Some(ApiCall::Results));
        match err {
            ClientError::Status { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such run");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(log.lines().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/radar/tr-1/trigger")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;

        let client = test_client();
        let log = MemoryLog::new();
        let url = format!("{}/radar/tr-1/trigger", server.url());

        let err = client.trigger_run(&log, &url).await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::Payload {
                call: ApiCall::Trigger,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_run_list_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/radar/tr-1/trigger")
            .with_status(200)
            .with_body(serde_json::json!({ "data": { "runs": [] } }).to_string())
            .create_async()
            .await;

        let client = test_client();
        let log = MemoryLog::new();
        let url = format!("{}/radar/tr-1/trigger", server.url());

        let err = client.trigger_run(&log, &url).await.unwrap_err();

        match err {
            ClientError::Payload { call, reason } => {
                assert_eq!(call, ApiCall::Trigger);
                assert_eq!(reason, "trigger response contained no runs");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_error_on_both_calls() {
        // A listener that accepts connections and never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = RadarClient::new("test-token", Duration::from_millis(200)).unwrap();
        let log = MemoryLog::new();

        let err = client
            .trigger_run(&log, &format!("http://{}/radar/tr-1/trigger", addr))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.call(), Some(ApiCall::Trigger));

        let err = client
            .latest_result(&log, &format!("http://{}/buckets/bk/radar/run", addr))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.call(), Some(ApiCall::Results));
    }
}
