//! Log sinks
//!
//! The run transcript goes to a `BuildLog` sink owned by the caller. This
//! module provides the stdout sink used by the binary; the gate's own
//! diagnostics go to stderr through `tracing` and never mix with it.

use radar_core::domain::log::BuildLog;

/// Sink that prints each transcript line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog;

impl BuildLog for ConsoleLog {
    fn line(&self, line: &str) {
        println!("{}", line);
    }
}
