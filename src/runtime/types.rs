// ABOUTME: Runtime flavour and socket location types.
// ABOUTME: RuntimeType, the detected RuntimeInfo, and the RuntimeConfig override.

use serde::{Deserialize, Serialize};

/// The container runtime flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Docker,
    Podman,
}

impl RuntimeType {
    /// Display name used in summaries.
    pub fn product_name(self) -> &'static str {
        match self {
            RuntimeType::Docker => "Docker",
            RuntimeType::Podman => "Podman",
        }
    }
}

impl std::fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeType::Docker => write!(f, "docker"),
            RuntimeType::Podman => write!(f, "podman"),
        }
    }
}

/// Where the runtime was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub runtime_type: RuntimeType,
    /// Filesystem path of the API socket (no `unix://` prefix).
    pub socket_path: String,
}

/// Explicit runtime override from config or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    /// Explicit runtime type (overrides auto-detection).
    #[serde(default)]
    pub runtime: Option<RuntimeType>,
    /// Explicit socket path (overrides the runtime's default).
    #[serde(default)]
    pub socket: Option<String>,
}
