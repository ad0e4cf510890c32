//! LLM error types.

use thiserror::Error;

/// Errors that can occur when calling an upstream LLM API.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed (transport error or undecodable success body)
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("api error (status {status}): {details}")]
    Api { status: u16, details: String },
}

/// Map a non-success HTTP response to an `Api` error.
///
/// The upstream body is echoed into the details when it is valid JSON;
/// otherwise a fixed placeholder stands in.
pub(crate) async fn api_error(response: reqwest::Response) -> LLMError {
    let status = response.status().as_u16();
    let details = match response.json::<serde_json::Value>().await {
        Ok(body) => body.to_string(),
        Err(_) => r#"{"message":"Could not parse error response"}"#.to_string(),
    };
    LLMError::Api { status, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = LLMError::Api {
            status: 503,
            details: r#"{"message":"overloaded"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("overloaded"));
    }
}
