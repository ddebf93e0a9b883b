//! API utilities for frontend-backend communication
//!
//! Helpers for resolving the admin API base URL and joining request paths.

/// Derive an API base URL from the current window location.
///
/// Used when no base URL was baked in at build time: the dashboard is then
/// assumed to be served from the same origin as the API.
///
/// # Returns
/// - Origin like "https://admin.example.com"
/// - Empty string if window is not available
pub fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Join a base URL and a request path with exactly one `/` between them
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("https://api.test/", "/admin/venues"), "https://api.test/admin/venues");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_slashes() {
        assert_eq!(join_url("https://api.test", "/admin/managers"), "https://api.test/admin/managers");
        assert_eq!(join_url("https://api.test/", "admin/managers"), "https://api.test/admin/managers");
        assert_eq!(join_url("https://api.test//", "//admin"), "https://api.test/admin");
    }

    #[test]
    fn test_join_url_keeps_query() {
        assert_eq!(
            join_url("/api", "/admin/tickets/list?page=1&limit=15"),
            "/api/admin/tickets/list?page=1&limit=15"
        );
    }

    #[test]
    fn test_join_url_empty_path() {
        assert_eq!(join_url("https://api.test/", ""), "https://api.test");
    }
}
