//! Remote test run status classification

use crate::domain::outcome::RunVerdict;

const TOKEN_QUEUED: &str = "queued";
const TOKEN_WORKING: &str = "working";
const TOKEN_PASS: &str = "pass";

/// Status of a triggered test run, as reported by the results API.
///
/// The API reports free-form string tokens. Only `queued`, `working` and
/// `pass` carry meaning; every other token lands in [`RadarStatus::Other`]
/// and ends the run as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadarStatus {
    Queued,
    Working,
    Pass,
    Other(String),
}

impl RadarStatus {
    /// Classifies a raw status token, ignoring ASCII case.
    ///
    /// Tokens are matched exactly apart from case: whitespace or partial
    /// matches (`"passed"`) are not recognized and classify as `Other`.
    pub fn classify(token: &str) -> Self {
        if token.eq_ignore_ascii_case(TOKEN_QUEUED) {
            Self::Queued
        } else if token.eq_ignore_ascii_case(TOKEN_WORKING) {
            Self::Working
        } else if token.eq_ignore_ascii_case(TOKEN_PASS) {
            Self::Pass
        } else {
            Self::Other(token.to_string())
        }
    }

    /// True while the remote run has not reached a terminal state.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Queued | Self::Working)
    }

    /// The verdict for a terminal status, or `None` while the run is still
    /// queued or working.
    pub fn verdict(&self) -> Option<RunVerdict> {
        match self {
            Self::Queued | Self::Working => None,
            Self::Pass => Some(RunVerdict::Pass),
            Self::Other(_) => Some(RunVerdict::Fail),
        }
    }
}
