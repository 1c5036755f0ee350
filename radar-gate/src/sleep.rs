//! Wait handling
//!
//! The gate spends most of its time waiting: a grace period after the
//! trigger and a fixed pause between polls. Every pause goes through the
//! `Sleeper` trait so the cadence can be scripted in tests.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Error returned when a pause ends before its full duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitInterrupted;

impl fmt::Display for WaitInterrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wait interrupted before its full duration")
    }
}

impl std::error::Error for WaitInterrupted {}

/// Clock-dependent waiting
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Pauses for the given duration.
    ///
    /// Returns `Err(WaitInterrupted)` when the pause was cut short. The
    /// gate treats an interrupted pause as elapsed and keeps going.
    async fn sleep(&self, duration: Duration) -> Result<(), WaitInterrupted>;
}

/// Sleeper backed by the tokio timer; never interrupted
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) -> Result<(), WaitInterrupted> {
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
