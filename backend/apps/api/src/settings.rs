//! Process settings
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Missing credentials or signing secret abort startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail, ensure};
use auth::AuthConfig;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8010";
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// One year
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Everything the binary needs to boot
///
/// No `Debug`: it carries the database password and the signing secret.
#[derive(Clone)]
pub struct Settings {
    pub database: PgConnectOptions,
    pub db_max_connections: u32,
    pub auth: AuthConfig,
    pub frontend_origins: Vec<String>,
    pub listen_addr: SocketAddr,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url)
                .context("DATABASE_URL is not a valid Postgres URL")?,
            None => {
                let user = get("DB_USERNAME")
                    .context("DATABASE_URL or DB_USERNAME must be set")?;
                let password = get("DB_PASSWORD")
                    .context("DATABASE_URL or DB_PASSWORD must be set")?;
                let name = get("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?;
                let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());

                PgConnectOptions::new()
                    .host(&host)
                    .username(&user)
                    .password(&password)
                    .database(&name)
                    .ssl_mode(PgSslMode::Disable)
            }
        };

        let Some(secret) = get("JWT_KEY") else {
            bail!("JWT_KEY must be set to a non-empty value");
        };

        let defaults = AuthConfig::default();
        let token_ttl = parse_or(
            "TOKEN_TTL_SECS",
            get("TOKEN_TTL_SECS"),
            defaults.token_ttl.as_secs(),
        )?;
        ensure!(
            token_ttl <= MAX_TOKEN_TTL_SECS,
            "TOKEN_TTL_SECS must be at most {MAX_TOKEN_TTL_SECS}"
        );
        let refresh_window = parse_or(
            "REFRESH_WINDOW_SECS",
            get("REFRESH_WINDOW_SECS"),
            defaults.refresh_window.as_secs(),
        )?;
        ensure!(
            token_ttl > 0 && refresh_window < token_ttl,
            "REFRESH_WINDOW_SECS ({refresh_window}) must be shorter than \
             TOKEN_TTL_SECS ({token_ttl})"
        );

        let password_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), defaults.password_cost)?;
        ensure!(
            (platform::password::MIN_COST..=platform::password::MAX_COST).contains(&password_cost),
            "BCRYPT_COST must be between {} and {}",
            platform::password::MIN_COST,
            platform::password::MAX_COST
        );

        let auth = AuthConfig {
            token_ttl: Duration::from_secs(token_ttl),
            refresh_window: Duration::from_secs(refresh_window),
            password_cost,
            cookie_secure: parse_or("COOKIE_SECURE", get("COOKIE_SECURE"), false)?,
            ..AuthConfig::with_secret(secret.into_bytes())
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR must be host:port")?;

        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            database,
            db_max_connections,
            auth,
            frontend_origins,
            listen_addr,
        })
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {v:?}")),
        None => Ok(default),
    }
}
