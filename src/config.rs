//! Relay configuration sourced from environment variables with an optional
//! YAML override file, in that order.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_CACHE_TTL_MS: u64 = 300_000;
pub const DEFAULT_RADIUS_KM: f64 = 100.0;
pub const DEFAULT_UPSTREAM_LIMIT: u32 = 50;
pub const DEFAULT_UPSTREAM_URL: &str = "https://webcams.windy.com/api/webcams/v2";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub api_key: String,
    pub upstream_url: String,
    pub upstream_limit: u32,
    pub cache_ttl_ms: u64,
    pub default_radius_km: f64,
    pub cors_origin: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    api_key: Option<String>,
    upstream_url: Option<String>,
    upstream_limit: Option<u32>,
    cache_ttl_ms: Option<u64>,
    default_radius_km: Option<f64>,
    cors_origin: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("NEARCAM_BIND")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .with_context(|| "parse NEARCAM_BIND")?;
        let metrics_bind = std::env::var("NEARCAM_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9100".to_string())
            .parse()
            .with_context(|| "parse NEARCAM_METRICS_BIND")?;
        let api_key = std::env::var("WINDY_API_KEY").with_context(|| "WINDY_API_KEY is required")?;
        let upstream_url = std::env::var("NEARCAM_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_limit = match std::env::var("NEARCAM_UPSTREAM_LIMIT") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse NEARCAM_UPSTREAM_LIMIT")?,
            Err(_) => DEFAULT_UPSTREAM_LIMIT,
        };
        let cache_ttl_ms = match std::env::var("NEARCAM_CACHE_TTL_MS") {
            Ok(value) => value.parse().with_context(|| "parse NEARCAM_CACHE_TTL_MS")?,
            Err(_) => DEFAULT_CACHE_TTL_MS,
        };
        let default_radius_km = match std::env::var("NEARCAM_DEFAULT_RADIUS_KM") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse NEARCAM_DEFAULT_RADIUS_KM")?,
            Err(_) => DEFAULT_RADIUS_KM,
        };
        let cors_origin = std::env::var("NEARCAM_CORS_ORIGIN").ok();
        Ok(Self {
            bind_addr,
            metrics_bind,
            api_key,
            upstream_url,
            upstream_limit,
            cache_ttl_ms,
            default_radius_km,
            cors_origin,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("NEARCAM_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read NEARCAM_CONFIG: {path}"))?;
            let override_cfg: RelayConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse relay config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.api_key {
                config.api_key = value;
            }
            if let Some(value) = override_cfg.upstream_url {
                config.upstream_url = value;
            }
            if let Some(value) = override_cfg.upstream_limit {
                config.upstream_limit = value;
            }
            if let Some(value) = override_cfg.cache_ttl_ms {
                config.cache_ttl_ms = value;
            }
            if let Some(value) = override_cfg.default_radius_km {
                config.default_radius_km = value;
            }
            if let Some(value) = override_cfg.cors_origin {
                config.cors_origin = Some(value);
            }
        }
        Ok(config)
    }
}
