//! Cookie Management Infrastructure
//!
//! Common cookie handling utilities and configuration.

use axum::http::{HeaderMap, HeaderValue, header};
use axum::http::header::InvalidHeaderValue;
use chrono::{DateTime, Utc};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

/// RFC 7231 IMF-fixdate, the format browsers expect in `Expires`
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

impl CookieConfig {
    /// Build Set-Cookie header value
    ///
    /// When `expires` is given, both `Expires` and `Max-Age` are emitted,
    /// with `Max-Age` measured from `now`.
    pub fn build_set_cookie(
        &self,
        value: &str,
        expires: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(expires) = expires {
            let max_age = (expires - now).num_seconds().max(0);
            cookie.push_str(&format!("; Max-Age={}", max_age));
            cookie.push_str(&format!("; Expires={}", http_date(expires)));
        }

        cookie
    }
}

/// Extract a cookie value from headers
///
/// Every `Cookie` header is searched; the first match wins.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Create a Set-Cookie header value
pub fn set_cookie_header(
    config: &CookieConfig,
    value: &str,
    expires: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&config.build_set_cookie(value, expires, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn config() -> CookieConfig {
        CookieConfig {
            name: "token".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }

    #[test]
    fn test_cookie_config_build() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let cookie = config().build_set_cookie("value123", Some(now + Duration::seconds(60)), now);

        assert!(cookie.starts_with("token=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=60"));
        assert!(cookie.contains("Expires=Tue, 02 Jan 2024 03:05:05 GMT"));
    }

    #[test]
    fn test_cookie_without_expiry_is_session_cookie() {
        let mut config = config();
        config.secure = false;
        let cookie = config.build_set_cookie("v", None, Utc::now());

        assert!(!cookie.contains("Secure"));
        assert!(!cookie.contains("Max-Age"));
        assert!(!cookie.contains("Expires"));
    }

    #[test]
    fn test_past_expiry_has_zero_max_age() {
        let now = Utc::now();
        let cookie = config().build_set_cookie("v", Some(now - Duration::seconds(5)), now);
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; token=abc123; other=xyz"),
        );

        assert_eq!(extract_cookie(&headers, "token"), Some("abc123".to_string()));
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("foo=bar"));
        headers.append(header::COOKIE, HeaderValue::from_static("token=second"));

        assert_eq!(extract_cookie(&headers, "token"), Some("second".to_string()));
    }
}
