use crate::spotify::DEFAULT_BASE_URL;
use axum::http::{HeaderValue, Method, header};
use nichefy_core::NicheSearchConfig;
use std::str::FromStr;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub spotify_base_url: String,
    pub top_artists_limit: usize,
    /// Empty means any origin
    pub cors_origins: Vec<String>,
    pub search: NicheSearchConfig,
}

impl ServerConfig {
    /// Reads the process environment (after `.env` was loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = NicheSearchConfig::default();

        let fetch_timeout_secs = parse_or(
            &lookup,
            "NICHEFY_FETCH_TIMEOUT_SECS",
            defaults.fetch_timeout.as_secs(),
        )?;

        let search = NicheSearchConfig::new(
            parse_or(&lookup, "NICHEFY_NICHE_THRESHOLD", defaults.niche_threshold)?,
            parse_or(&lookup, "NICHEFY_TARGET_COUNT", defaults.target_count)?,
            parse_or(&lookup, "NICHEFY_MAX_DEPTH", defaults.max_depth)?,
        )
        .with_fetch_timeout(Duration::from_secs(fetch_timeout_secs))
        .with_max_concurrent_fetches(parse_or(
            &lookup,
            "NICHEFY_MAX_CONCURRENT_FETCHES",
            defaults.max_concurrent_fetches,
        )?);

        let cors_origins = lookup("NICHEFY_CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr: lookup("NICHEFY_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:5000".to_string()),
            spotify_base_url: lookup("SPOTIFY_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            top_artists_limit: parse_or(&lookup, "NICHEFY_TOP_ARTISTS_LIMIT", 8)?,
            cors_origins,
            search,
        })
    }

    /// Credentialed CORS for the configured origins, permissive otherwise.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    key: "NICHEFY_CORS_ORIGINS",
                    value: origin.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
