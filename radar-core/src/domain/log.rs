//! Build log sink
//!
//! The host build owns the log stream; the controller and the HTTP client
//! only append lines to it. The sink is a capability handed in per run, not
//! a global logger.

use std::sync::{Arc, Mutex};

/// Line sink for the host-facing build log.
///
/// # Thread Safety
/// Implementations must be Send + Sync so a sink can be shared across the
/// controller's await points.
pub trait BuildLog: Send + Sync {
    /// Appends one line to the build log.
    fn line(&self, line: &str);
}

/// Sink that collects lines in memory.
///
/// Uses Arc<Mutex<Vec<String>>> for thread-safe access across tasks. Handy
/// in tests and anywhere the log stream is inspected after the run.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    /// Creates a new, empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap();
        lines.clone()
    }
}

impl BuildLog for MemoryLog {
    fn line(&self, line: &str) {
        let mut lines = self.lines.lock().unwrap();
        lines.push(line.to_string());
    }
}
