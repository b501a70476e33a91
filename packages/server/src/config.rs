use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Fixed reference timezone for every provider's business hours.
pub const DEFAULT_BUSINESS_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Radius applied when a search carries coordinates but no radius.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Page size of the public search endpoint.
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 12;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub provider_seed_path: Option<PathBuf>,
    pub business_timezone: Tz,
    pub default_radius_km: f64,
    pub search_page_size: u32,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let business_timezone = match env::var("BUSINESS_TIMEZONE") {
            Ok(name) => name
                .parse::<Tz>()
                .map_err(|e| anyhow!("BUSINESS_TIMEZONE is not a valid IANA timezone: {}", e))?,
            Err(_) => DEFAULT_BUSINESS_TIMEZONE,
        };

        let default_radius_km: f64 = env::var("DEFAULT_RADIUS_KM")
            .unwrap_or_else(|_| DEFAULT_RADIUS_KM.to_string())
            .parse()
            .context("DEFAULT_RADIUS_KM must be a number")?;
        if !(default_radius_km.is_finite() && default_radius_km > 0.0) {
            return Err(anyhow!("DEFAULT_RADIUS_KM must be positive"));
        }

        let search_page_size: u32 = env::var("SEARCH_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_SEARCH_PAGE_SIZE.to_string())
            .parse()
            .context("SEARCH_PAGE_SIZE must be a valid number")?;
        if search_page_size == 0 {
            return Err(anyhow!("SEARCH_PAGE_SIZE must be at least 1"));
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            provider_seed_path: env::var("PROVIDER_SEED_PATH").ok().map(PathBuf::from),
            business_timezone,
            default_radius_km,
            search_page_size,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }

    /// Settings consumed by the discovery activities
    pub fn discovery_settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            business_timezone: self.business_timezone,
            default_radius_km: self.default_radius_km,
            page_size: self.search_page_size,
        }
    }
}

/// Discovery knobs shared by the service layer.
#[derive(Debug, Clone, Copy)]
pub struct DiscoverySettings {
    pub business_timezone: Tz,
    pub default_radius_km: f64,
    pub page_size: u32,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            business_timezone: DEFAULT_BUSINESS_TIMEZONE,
            default_radius_km: DEFAULT_RADIUS_KM,
            page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}
