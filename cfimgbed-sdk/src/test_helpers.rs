// ABOUTME: Test helper utilities for mocking CF-Imgbed API responses
// ABOUTME: Provides canned JSON bodies for the success, failure, and error shapes

use serde_json::json;

pub fn mock_success_response(url: &str, id: &str, r2_key: &str) -> serde_json::Value {
    json!({
        "success": true,
        "data": [
            {
                "url": url,
                "id": id,
                "r2Key": r2_key
            }
        ]
    })
}

pub fn mock_failure_response(message: &str) -> serde_json::Value {
    json!({
        "success": false,
        "results": [
            {
                "message": message
            }
        ]
    })
}

pub fn mock_unstructured_response(message: &str) -> serde_json::Value {
    json!({
        "message": message
    })
}
