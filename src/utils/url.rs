//! URL utilities for consistent API endpoint construction.
//!
//! The chat surface talks to its backend through relative API paths by
//! default; when the host injects an explicit server URL, endpoints are
//! joined to it without ever producing double slashes.

/// Normalize a base URL by removing trailing slashes.
///
/// # Examples
///
/// ```
/// use causerie::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://127.0.0.1:8709/"), "http://127.0.0.1:8709");
/// assert_eq!(normalize_base_url(""), "");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join an API endpoint to a base URL.
///
/// An empty base yields a same-origin relative path, which is the common
/// case for the embedded chat surface.
///
/// # Examples
///
/// ```
/// use causerie::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://127.0.0.1:8709/", "api/download?file=report.zip"),
///     "http://127.0.0.1:8709/api/download?file=report.zip"
/// );
/// assert_eq!(construct_api_url("", "api/chat"), "/api/chat");
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalized_base, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_any_number_of_trailing_slashes() {
        assert_eq!(normalize_base_url("http://host/v1"), "http://host/v1");
        assert_eq!(normalize_base_url("http://host/v1/"), "http://host/v1");
        assert_eq!(normalize_base_url("http://host/v1///"), "http://host/v1");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn construct_handles_slashes_on_either_side() {
        assert_eq!(
            construct_api_url("http://host", "api/download"),
            "http://host/api/download"
        );
        assert_eq!(
            construct_api_url("http://host/", "/api/download"),
            "http://host/api/download"
        );
        assert_eq!(construct_api_url("", "/api/download"), "/api/download");
    }
}
