//! Results-URL derivation
//!
//! The trigger API answers with a human-facing results page on the public
//! host. Polling happens against the API host instead, under the bucket's
//! radar path. The mapping is a fixed prefix substitution.

/// URL scheme for both hosts.
pub const SCHEME: &str = "https";

/// Public host serving the human-facing results pages.
pub const RUNSCOPE_HOST: &str = "www.runscope.com";

/// API host the status polls go to.
pub const API_HOST: &str = "api.runscope.com";

/// Derives the API polling URL from a results-page URL.
///
/// Replaces the prefix `https://www.runscope.com/radar/<bucket_key>` with
/// `https://api.runscope.com/buckets/<bucket_key>/radar`, keeping the rest
/// of the path intact. A URL without that prefix passes through unchanged.
pub fn api_results_url(results_page_url: &str, bucket_key: &str) -> String {
    let public_prefix = format!("{}://{}/radar/{}", SCHEME, RUNSCOPE_HOST, bucket_key);
    let api_prefix = format!(
        "{}://{}/buckets/{}/radar",
        SCHEME, API_HOST, bucket_key
    );

    match results_page_url.strip_prefix(&public_prefix) {
        Some(rest) => format!("{}{}", api_prefix, rest),
        None => results_page_url.to_string(),
    }
}
