//! Trigger API response payload

use serde::{Deserialize, Serialize};

/// Envelope of the trigger API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub data: TriggerData,
}

/// Runs started by a trigger call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerData {
    pub runs: Vec<TriggeredRun>,
}

/// One started run. Only the results-page URL is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggeredRun {
    pub url: String,
}
