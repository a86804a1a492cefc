//! Shared Provider Utilities
//!
//! Helper functions and patterns used across multiple provider
//! implementations to reduce code duplication. These are shared
//! utilities, not ports.

/// Endpoint resolution and credential policy helpers
pub mod endpoint;
/// HTTP response processing helpers
pub mod http;

pub use endpoint::{effective_url, is_blank, is_hosted_host};
pub use http::check_and_parse;
