//! Results API response payload

use serde::{Deserialize, Serialize};

/// Envelope of the results API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub data: ResultsData,
}

/// Current state of a run. `result` is the raw status token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsData {
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_results_payload() {
        let body = r#"{
            "data": {
                "assertions_defined": 4,
                "assertions_failed": 0,
                "assertions_passed": 4,
                "result": "working"
            },
            "error": null,
            "meta": { "status": "success" }
        }"#;

        let response: ResultsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.result, "working");
    }
}
