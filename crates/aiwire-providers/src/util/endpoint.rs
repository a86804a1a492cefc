//! Endpoint Resolution Helpers
//!
//! Shared logic for deciding the effective endpoint of a provider and
//! whether that endpoint falls under the vendor's hosted host, which is
//! what the mandatory-credential policy keys off.

use reqwest::Url;

/// Get the effective URL with fallback to the provider default
///
/// Standardized approach for handling optional base URLs across all
/// providers. Trims whitespace and trailing slashes so later path
/// concatenation is uniform.
pub fn effective_url(provided: Option<&str>, default_url: &str) -> String {
    provided
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(default_url)
        .trim_end_matches('/')
        .to_string()
}

/// Whether an optional credential is absent or blank
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).map_or(true, str::is_empty)
}

/// Whether a URL points at the given vendor host
///
/// Comparison is by parsed host, not by full string equality, so
/// `https://api.openai.com/v1` and `https://api.openai.com/` both count
/// as hosted while any self-hosted or proxy URL does not. An unparsable
/// URL is treated as not hosted; it will fail later at request time
/// rather than during credential validation.
pub fn is_hosted_host(url: &str, vendor_host: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.eq_ignore_ascii_case(vendor_host)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OPENAI_HOSTED_HOST;

    #[test]
    fn effective_url_falls_back_to_default() {
        assert_eq!(
            effective_url(None, "https://api.openai.com/v1"),
            "https://api.openai.com/v1"
        );
        assert_eq!(
            effective_url(Some("  "), "https://api.openai.com/v1"),
            "https://api.openai.com/v1"
        );
    }

    #[test]
    fn effective_url_trims_trailing_slash() {
        assert_eq!(
            effective_url(Some("http://localhost:8080/v1/"), "unused"),
            "http://localhost:8080/v1"
        );
    }

    #[test]
    fn hosted_host_matches_by_host_not_literal() {
        assert!(is_hosted_host("https://api.openai.com", OPENAI_HOSTED_HOST));
        assert!(is_hosted_host("https://api.openai.com/v1", OPENAI_HOSTED_HOST));
        assert!(is_hosted_host("https://API.OPENAI.COM/v1/", OPENAI_HOSTED_HOST));
    }

    #[test]
    fn self_hosted_urls_are_not_hosted() {
        assert!(!is_hosted_host("http://localhost:8080/v1", OPENAI_HOSTED_HOST));
        assert!(!is_hosted_host("https://proxy.internal/openai", OPENAI_HOSTED_HOST));
        assert!(!is_hosted_host("not a url", OPENAI_HOSTED_HOST));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("sk-abc")));
    }
}
