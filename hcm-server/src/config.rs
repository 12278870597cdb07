//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use hcm_core::constants::{DEFAULT_THETA_A, DEFAULT_THETA_I};
use hcm_core::GovernanceConfig;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }

    /// Read `LOG_FORMAT` directly, before the subscriber (and Config) exist
    pub fn from_env() -> Self {
        env::var("LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Learned model file (JSON). None = learned mode always falls back.
    pub model_path: Option<PathBuf>,

    /// Overrides the cutoff stored in the model file
    pub learned_cutoff: Option<f64>,

    /// Default anomaly threshold when a request omits theta_a
    pub theta_a: f64,

    /// Default impact threshold when a request omits theta_I
    pub theta_i: f64,

    pub log_format: LogFormat,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            model_path: None,
            learned_cutoff: None,
            theta_a: DEFAULT_THETA_A,
            theta_i: DEFAULT_THETA_I,
            log_format: LogFormat::Pretty,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup (environment, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST")
                .and_then(|h| match h.parse::<IpAddr>() {
                    Ok(ip) => Some(ip),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid HOST '{}'", h);
                        None
                    }
                })
                .unwrap_or(defaults.host),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: lookup("HCM_MODEL_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            learned_cutoff: unit_interval(&lookup, "HCM_LEARNED_CUTOFF"),

            theta_a: unit_interval(&lookup, "HCM_THETA_A").unwrap_or(defaults.theta_a),

            theta_i: unit_interval(&lookup, "HCM_THETA_I").unwrap_or(defaults.theta_i),

            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Thresholds used when a request does not carry its own
    pub fn governance(&self) -> GovernanceConfig {
        GovernanceConfig::new(self.theta_a, self.theta_i)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Parse a value that must lie in [0, 1]; anything else is ignored
fn unit_interval<F>(lookup: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Some(v),
        _ => {
            tracing::warn!("Ignoring {}='{}': expected a number in [0, 1]", key, raw);
            None
        }
    }
}
