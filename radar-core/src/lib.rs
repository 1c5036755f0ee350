//! Radar Gate Core
//!
//! Core types for gating a build on a remote Runscope test run.
//!
//! This crate contains:
//! - Domain types: status classification, verdicts, the build log and build
//!   result capabilities, and results-URL derivation
//! - DTOs: envelopes for the two response payloads the remote API returns

pub mod domain;
pub mod dto;
