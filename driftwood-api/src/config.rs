//! Runtime configuration for the API server.
//!
//! Everything comes from environment variables with development defaults.
//! The JWT signing secret is injected here at startup and carried through
//! application state; nothing in the codebase holds a process-wide secret.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

const DEFAULT_ADDR: &str = "127.0.0.1:8081";
const DEFAULT_WEB_DIR: &str = "./web";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

// Development fallback only; set DRIFTWOOD_JWT_SECRET in any real deployment.
const DEV_JWT_SECRET: &str = "driftwood-dev-secret";

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub addr: SocketAddr,
    /// HMAC secret for signing and validating session tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub token_ttl_hours: i64,
    /// Directory holding the static frontend bundle
    pub web_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let addr = env::var("DRIFTWOOD_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .context("invalid DRIFTWOOD_ADDR")?;

        let jwt_secret = match env::var("DRIFTWOOD_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("DRIFTWOOD_JWT_SECRET not set, using development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let token_ttl_hours = env::var("DRIFTWOOD_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        let web_dir = env::var("DRIFTWOOD_WEB_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_WEB_DIR));

        Ok(Config {
            addr,
            jwt_secret,
            token_ttl_hours,
            web_dir,
        })
    }

    /// Fixed configuration for tests: ephemeral port, known secret.
    pub fn for_tests() -> Self {
        Config {
            addr: "127.0.0.1:0".parse().expect("valid test addr"),
            jwt_secret: "test-secret".to_string(),
            token_ttl_hours: 1,
            web_dir: PathBuf::from("./web"),
        }
    }
}
