//! Data Transfer Objects for the remote API payloads
//!
//! This module contains the envelopes the remote API wraps its answers in.
//! Each call consumes exactly one field out of its payload; everything else
//! the API sends is ignored.

pub mod results;
pub mod trigger;
