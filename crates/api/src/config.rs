//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;

use rust_decimal::Decimal;
use thiserror::Error;

use pokertracker_ledger::{DEFAULT_DEALER_FEE, MAX_AMOUNT};

pub const ADDR_VAR: &str = "POKER_TRACKER_ADDR";
pub const ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";
pub const DEALER_FEE_VAR: &str = "DEALER_FEE";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
/// Vite dev server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("POKER_TRACKER_ADDR: invalid socket address {0:?}")]
    InvalidAddr(String),

    #[error("DEALER_FEE: expected a decimal between 0 and the maximum payment amount, got {0:?}")]
    InvalidDealerFee(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub dealer_fee: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: vec![DEFAULT_ORIGIN.to_string()],
            dealer_fee: DEFAULT_DEALER_FEE,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr_raw.clone()))?;

        let dealer_fee = match lookup(DEALER_FEE_VAR) {
            Some(raw) => match raw.trim().parse::<Decimal>() {
                Ok(fee) if fee >= Decimal::ZERO && fee <= MAX_AMOUNT => fee,
                _ => return Err(ConfigError::InvalidDealerFee(raw)),
            },
            None => DEFAULT_DEALER_FEE,
        };

        let allowed_origins = parse_origins(&lookup(ORIGINS_VAR).unwrap_or_default());

        Ok(Self {
            bind_addr,
            allowed_origins,
            dealer_fee,
        })
    }
}

/// Comma-separated origins; empty, "null" and non-http(s) entries are dropped.
/// Falls back to the dev origin when nothing valid remains.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ORIGIN.to_string()]
    } else {
        origins
    }
}
