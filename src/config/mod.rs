// ABOUTME: Configuration types and parsing for berth.yml.
// ABOUTME: Every key is optional; a missing file means all defaults.

mod init;
mod stop;

pub use init::{init_config, template_yaml};
pub use stop::StopConfig;

use crate::error::{Error, Result};
use crate::reachability::DEFAULT_LAUNCH_HOST;
use crate::runtime::{RuntimeConfig, RuntimeType};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "berth.yml";
pub const CONFIG_FILENAME_ALT: &str = "berth.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".berth/config.yml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Explicit runtime type (overrides auto-detection).
    #[serde(default)]
    pub runtime: Option<RuntimeType>,

    /// Explicit socket path (overrides the runtime's default).
    #[serde(default)]
    pub socket: Option<String>,

    /// Bound on every runtime call except pull and prune.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Bound on pull and prune, which can take minutes.
    #[serde(default = "default_pull_timeout", with = "humantime_serde")]
    pub pull_timeout: Duration,

    #[serde(default)]
    pub stop: StopConfig,

    #[serde(default)]
    pub launch: LaunchConfig,

    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub prune: PruneConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchConfig {
    /// Host name put into launch URLs.
    #[serde(default = "default_launch_host")]
    pub host: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            host: default_launch_host(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_tail")]
    pub tail: u64,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            tail: default_log_tail(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PruneConfig {
    #[serde(default)]
    pub volumes: bool,
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_pull_timeout() -> Duration {
    Duration::from_secs(600)
}

fn default_launch_host() -> String {
    DEFAULT_LAUNCH_HOST.to_string()
}

fn default_log_tail() -> u64 {
    500
}

fn default_search_limit() -> u32 {
    25
}

impl Default for Config {
    fn default() -> Self {
        Config {
            runtime: None,
            socket: None,
            timeout: default_timeout(),
            pull_timeout: default_pull_timeout(),
            stop: StopConfig::default(),
            launch: LaunchConfig::default(),
            logs: LogsConfig::default(),
            search: SearchConfig::default(),
            prune: PruneConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Load `explicit` if given, otherwise discover in `dir`, falling back to
    /// defaults when there is no file. An explicit path must exist.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::discover(dir) {
                Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
                other => other,
            },
        }
    }

    /// Apply command-line overrides for runtime selection.
    pub fn with_overrides(mut self, runtime: Option<RuntimeType>, socket: Option<String>) -> Self {
        if runtime.is_some() {
            self.runtime = runtime;
        }
        if socket.is_some() {
            self.socket = socket;
        }
        self
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            runtime: self.runtime,
            socket: self.socket.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be greater than zero".into()));
        }
        if self.pull_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "pull_timeout must be greater than zero".into(),
            ));
        }
        if self.launch.host.trim().is_empty() {
            return Err(Error::InvalidConfig("launch.host must not be empty".into()));
        }
        if self.search.limit == 0 {
            return Err(Error::InvalidConfig(
                "search.limit must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
