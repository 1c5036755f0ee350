//! Core domain types
//!
//! This module contains the domain structures shared between the HTTP client
//! and the run controller: run status classification, the pass/fail verdict,
//! the capabilities the host build supplies (log stream, result flag), and
//! the results-URL derivation.

pub mod log;
pub mod outcome;
pub mod status;
pub mod url;
