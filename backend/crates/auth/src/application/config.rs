//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Name of the cookie carrying the session token
    pub token_cookie_name: String,
    /// HS256 signing secret
    pub token_secret: Vec<u8>,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    /// A token may only be refreshed once it has at most this much life left
    pub refresh_window: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// bcrypt work factor
    pub password_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_cookie_name: "token".to_string(),
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(60),
            refresh_window: Duration::from_secs(30),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            password_cost: 8,
        }
    }
}

impl AuthConfig {
    /// Default config signing with the given secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    /// Create config for development (cheap hashing, random secret)
    pub fn development() -> Self {
        Self {
            password_cost: platform::password::MIN_COST,
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the token cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();

        assert_eq!(config.token_cookie_name, "token");
        assert_eq!(config.token_ttl, Duration::from_secs(60));
        assert_eq!(config.refresh_window, Duration::from_secs(30));
        assert_eq!(config.password_cost, 8);
        assert!(!config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();

        assert_eq!(config1.token_secret.len(), 32);
        assert_ne!(config1.token_secret, config2.token_secret);
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert_eq!(config.password_cost, 4);
        assert!(!config.token_secret.is_empty());
    }

    #[test]
    fn test_cookie_config() {
        let config = AuthConfig {
            cookie_secure: true,
            ..AuthConfig::with_secret("k")
        };
        let cookie = config.cookie_config();

        assert_eq!(cookie.name, "token");
        assert!(cookie.http_only);
        assert!(cookie.secure);
        assert_eq!(cookie.path, "/");
    }
}
