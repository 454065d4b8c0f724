use crate::dn::{device_profile_dn, Dn};
use anyhow::{anyhow, Result};
use std::env;
use std::path::Path;

/// Default tracing filter when neither `RUST_LOG` nor `UCSC_LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "ucsc_timezone_admin=info";
const DEFAULT_DEVICE_PROFILE: &str = "default";

#[derive(Debug, Clone)]
pub struct Config {
    pub device_profile: String,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let device_profile = env::var("UCSC_DEVICE_PROFILE")
            .unwrap_or_else(|_| DEFAULT_DEVICE_PROFILE.to_string());
        let device_profile = if device_profile.trim().is_empty() {
            DEFAULT_DEVICE_PROFILE.to_string()
        } else {
            device_profile.trim().to_string()
        };

        if device_profile.contains('/') {
            return Err(anyhow!("Invalid UCSC_DEVICE_PROFILE: must not contain '/'"));
        }

        let log_filter = env::var("UCSC_LOG_FILTER")
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            device_profile,
            log_filter,
        })
    }

    /// Loads a `.env` file if present, then reads the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Like [`Config::load`] but with an explicit env file, which must exist.
    /// Variables already set in the process win over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .map_err(|e| anyhow!("Failed to load {}: {}", path.display(), e))?;
        Self::from_env()
    }

    /// Root of the device profile the time settings belong to.
    pub fn base_dn(&self) -> Dn {
        device_profile_dn(&self.device_profile)
    }
}
