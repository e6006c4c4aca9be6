//! Deployment-time configuration.
//!
//! Every credential comes from the environment; nothing secret is ever
//! committed to source.

use stakeboard_core::{Error, Result};

/// Server configuration resolved from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind, e.g. `127.0.0.1:8170` (`SB_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Directory holding the SQLite database (`SB_DATA_DIR`).
    pub data_dir: String,
    /// Secret for signing bearer tokens (`SB_JWT_SECRET`, required).
    pub jwt_secret: String,
    /// Token lifetime in hours (`SB_TOKEN_TTL_HOURS`, default 24).
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen_addr =
            std::env::var("SB_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8170".to_string());
        let data_dir = std::env::var("SB_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let jwt_secret = std::env::var("SB_JWT_SECRET")
            .map_err(|_| Error::MissingConfigKey("SB_JWT_SECRET".to_string()))?;
        let token_ttl_hours = std::env::var("SB_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        Ok(Self {
            listen_addr,
            data_dir,
            jwt_secret,
            token_ttl_hours,
        })
    }
}
