//! Run verdicts and the host build result flag

use std::fmt;

/// Final verdict of a gated test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunVerdict {
    Pass,
    Fail,
}

impl fmt::Display for RunVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunVerdict::Pass => f.write_str("pass"),
            RunVerdict::Fail => f.write_str("fail"),
        }
    }
}

/// Mutable result flag owned by the host build.
///
/// The gate only ever downgrades the result: a failed run marks the build
/// failed, a passing run leaves the flag untouched.
pub trait BuildResult {
    /// Marks the host build as failed.
    fn mark_failed(&mut self);
}

/// Standalone build result flag.
///
/// Starts out successful and can only flip to failed.
#[derive(Debug, Default)]
pub struct StepOutcome {
    failed: bool,
}

impl StepOutcome {
    /// Creates a fresh, successful outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the gate has marked the build as failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

impl BuildResult for StepOutcome {
    fn mark_failed(&mut self) {
        self.failed = true;
    }
}
