//! Configuration management for GameLift clients
//!
//! Handles configuration loading from files and environment variables.
//! Configuration is stored in TOML format with support for multiple named profiles.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{ConfigError, Result};

/// Port GameLift Local listens on unless told otherwise
pub const DEFAULT_LOCAL_PORT: u16 = 9080;
/// Region used when a profile does not name one
pub const DEFAULT_REGION: &str = "us-east-1";
/// Per-request timeout used when a profile does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Profile used when none is given explicitly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
    /// Map of profile name -> profile configuration
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Individual profile configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Profile {
    /// AWS region of the GameLift service
    #[serde(default = "default_region")]
    pub region: String,
    /// Address GameLift Local instead of the regional service
    #[serde(default)]
    pub use_local: bool,
    /// Port of GameLift Local
    #[serde(default = "default_local_port")]
    pub local_port: u16,
    /// Explicit endpoint; overrides both `region` and `use_local`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            region: default_region(),
            use_local: false,
            local_port: default_local_port(),
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_local_port() -> u16 {
    DEFAULT_LOCAL_PORT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Profile {
    /// Profile addressing GameLift Local on `port`
    pub fn local(port: u16) -> Self {
        Self {
            use_local: true,
            local_port: port,
            ..Self::default()
        }
    }

    /// Profile addressing the regional service
    pub fn regional(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Endpoint URL this profile connects to
    ///
    /// Resolution order:
    /// 1. `GAMELIFT_ENDPOINT` environment variable
    /// 2. Explicit `endpoint`
    /// 3. `http://localhost:<local_port>` when `use_local` is set
    /// 4. `https://gamelift.<region>.amazonaws.com`, with `AWS_REGION` overriding `region`
    pub fn endpoint_url(&self) -> String {
        if let Ok(endpoint) = std::env::var("GAMELIFT_ENDPOINT")
            && !endpoint.is_empty()
        {
            return endpoint;
        }

        if let Some(endpoint) = &self.endpoint {
            return endpoint.clone();
        }

        if self.use_local {
            return format!("http://localhost:{}", self.local_port);
        }

        let region = std::env::var("AWS_REGION")
            .ok()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.region.clone());
        format!("https://gamelift.{}.amazonaws.com", region)
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that can never produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.use_local && self.local_port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "local_port".to_string(),
                reason: "must be a non-zero port".to_string(),
            });
        }
        if !self.use_local && self.endpoint.is_none() && self.region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "region".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    /// Resolve the profile name to use
    ///
    /// Explicit name first, then `default_profile`, then the alphabetically
    /// first profile.
    pub fn resolve_profile_name(&self, explicit_profile: Option<&str>) -> Result<String> {
        if let Some(profile_name) = explicit_profile {
            return Ok(profile_name.to_string());
        }

        if let Some(ref default) = self.default_profile {
            return Ok(default.clone());
        }

        if let Some((name, _)) = self.list_profiles().first() {
            return Ok((*name).clone());
        }

        Err(ConfigError::NoProfiles {
            suggestion: "Add a [profiles.<name>] table to the config file or pass --local."
                .to_string(),
        })
    }

    /// Resolve and fetch the profile to use
    pub fn resolve_profile(&self, explicit_profile: Option<&str>) -> Result<&Profile> {
        let name = self.resolve_profile_name(explicit_profile)?;
        self.profiles
            .get(&name)
            .ok_or(ConfigError::ProfileNotFound { name })
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        let expanded_content = Self::expand_env_vars(&content);

        let config: Config = toml::from_str(&expanded_content)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| ConfigError::SaveError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// Set or update a profile
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Remove a profile by name
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        self.profiles.remove(name)
    }

    /// List all profiles sorted by name
    pub fn list_profiles(&self) -> Vec<(&String, &Profile)> {
        let mut profiles: Vec<_> = self.profiles.iter().collect();
        profiles.sort_by_key(|(name, _)| *name);
        profiles
    }

    /// Get the path to the configuration file
    ///
    /// On Linux: ~/.config/gameliftctl/config.toml
    /// On macOS: ~/Library/Application Support/com.yetitech.gameliftctl/config.toml
    /// On Windows: %APPDATA%\yetitech\gameliftctl\config.toml
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "yetitech", "gameliftctl")
            .ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand environment variables in configuration content
    ///
    /// Supports ${VAR} and ${VAR:-default}. Unset variables without a
    /// default are left as-is so unused profiles don't fail to load.
    fn expand_env_vars(content: &str) -> String {
        let expanded =
            shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok());
        expanded.to_string()
    }
}
