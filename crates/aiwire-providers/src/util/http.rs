//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.

use aiwire_domain::error::{Error, Result};
use reqwest::Response;

/// Check response status and parse JSON
///
/// # Arguments
/// * `response` - The HTTP response to check
/// * `provider_name` - Name of the provider for error messages
/// * `make_error` - Error constructor matching the caller's role (chat,
///   embedding, vector store)
///
/// # Returns
/// Parsed JSON value on success, or an appropriate error
pub async fn check_and_parse<F>(
    response: Response,
    provider_name: &str,
    make_error: F,
) -> Result<serde_json::Value>
where
    F: Fn(String) -> Error,
{
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let code = status.as_u16();

        let context = match code {
            401 => "authentication failed".to_string(),
            429 => "rate limit exceeded".to_string(),
            500..=599 => format!("server error ({code})"),
            _ => format!("request failed ({code})"),
        };

        return Err(make_error(format!("{provider_name} {context}: {error_text}")));
    }

    response
        .json()
        .await
        .map_err(|e| make_error(format!("{provider_name} response parse failed: {e}")))
}
