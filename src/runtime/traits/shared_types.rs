// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: Raw containers/images as reported by the daemon, port maps, stats samples, prune reports.

use crate::types::{ContainerId, ImageId, ImageRef, PortSpec};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Configuration for creating a container.
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// Name for the container; the runtime picks one when absent.
    pub name: Option<String>,
    /// Image to run.
    pub image: ImageRef,
    /// Published ports (container port to host port), bound on all interfaces.
    pub ports: PortSpec,
}

/// Container lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    /// The runtime reported no state, or one we do not recognise.
    Unknown,
}

impl ContainerState {
    /// Map a daemon-reported state string. Anything unrecognised (Podman's
    /// "stopping", an empty string) becomes `Unknown`.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "created" => ContainerState::Created,
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "restarting" => ContainerState::Restarting,
            "removing" => ContainerState::Removing,
            "exited" => ContainerState::Exited,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }

    pub fn is_running(self) -> bool {
        self == ContainerState::Running
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Removing => "removing",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
            ContainerState::Unknown => "unknown",
        })
    }
}

/// Network protocol of a container port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

/// A container-side port such as `80/tcp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerPort {
    pub port: u16,
    pub protocol: Protocol,
}

impl ContainerPort {
    pub fn tcp(port: u16) -> Self {
        Self {
            port,
            protocol: Protocol::Tcp,
        }
    }
}

impl FromStr for ContainerPort {
    type Err = String;

    /// Parses the daemon's port keys: `80/tcp`, `53/udp`, or a bare `80`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (port, proto) = s.split_once('/').unwrap_or((s, "tcp"));
        let port = port
            .parse::<u16>()
            .map_err(|_| format!("invalid container port: {s}"))?;
        let protocol = match proto {
            "tcp" => Protocol::Tcp,
            "udp" => Protocol::Udp,
            "sctp" => Protocol::Sctp,
            other => return Err(format!("unknown protocol {other:?} in {s}")),
        };
        Ok(Self { port, protocol })
    }
}

impl fmt::Display for ContainerPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proto = match self.protocol {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Sctp => "sctp",
        };
        write!(f, "{}/{}", self.port, proto)
    }
}

impl Serialize for ContainerPort {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One host-side binding of a container port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostBinding {
    /// Host interface address; empty means the runtime did not say.
    pub host_ip: String,
    /// Host port as reported (the daemon uses strings here).
    pub host_port: String,
}

impl HostBinding {
    pub fn new(host_ip: impl Into<String>, host_port: impl Into<String>) -> Self {
        Self {
            host_ip: host_ip.into(),
            host_port: host_port.into(),
        }
    }
}

/// Port bindings by container port. Iterates in ascending port order; the
/// bindings of one port keep the order the runtime reported them in.
pub type PortMap = BTreeMap<ContainerPort, Vec<HostBinding>>;

/// A container as reported by the list call.
#[derive(Debug, Clone)]
pub struct RawContainer {
    pub id: ContainerId,
    pub name: String,
    /// Image as the container was created from (name or ID).
    pub image: String,
    /// ID of the image the container references; may point at a deleted image.
    pub image_id: ImageId,
    pub state: ContainerState,
    /// Human status text, e.g. "Up 3 minutes".
    pub status: String,
    /// Unix timestamp of creation.
    pub created: i64,
    pub ports: PortMap,
}

/// Detailed container information from inspect.
#[derive(Debug, Clone)]
pub struct ContainerDetails {
    pub id: ContainerId,
    pub name: String,
    pub image: String,
    pub image_id: ImageId,
    pub state: ContainerState,
    pub ports: PortMap,
    /// The full inspect document.
    pub raw: serde_json::Value,
}

/// An image as reported by the list call.
#[derive(Debug, Clone)]
pub struct RawImage {
    pub id: ImageId,
    /// Human tags; `<none>:<none>` placeholders are already dropped.
    pub tags: Vec<String>,
    pub size: u64,
    /// Unix timestamp of creation.
    pub created: i64,
}

/// Image details from inspect.
#[derive(Debug, Clone)]
pub struct ImageDetails {
    pub id: ImageId,
    pub tags: Vec<String>,
    pub size: u64,
}

/// A registry search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryHit {
    pub name: String,
    pub description: String,
    pub stars: u64,
    pub official: bool,
}

/// Cumulative usage counters of one container at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageSample {
    /// CPU time consumed by the container, in nanoseconds.
    pub container_cpu_time: u64,
    /// CPU time consumed by the whole host, in nanoseconds.
    pub system_cpu_time: u64,
    /// Online CPUs; 0 when the runtime did not report it.
    pub online_cpus: u32,
    /// Number of per-CPU counters reported; fallback for `online_cpus`.
    pub percpu_count: u32,
    pub memory_usage: u64,
    pub memory_limit: u64,
}

/// The previous/current pair returned by one non-streaming stats call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsPair {
    pub previous: UsageSample,
    pub current: UsageSample,
}

/// Runtime-wide summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemSummary {
    /// Runtime flavour, "Docker" or "Podman".
    pub runtime: String,
    pub version: String,
    pub os: String,
    pub arch: String,
    pub containers: u64,
    pub running: u64,
    pub images: u64,
}

/// Which object kinds a prune should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneScope {
    pub containers: bool,
    /// Removes every unused image, not only dangling ones.
    pub images: bool,
    pub networks: bool,
    pub volumes: bool,
}

impl PruneScope {
    /// Stopped containers, unused images and unused networks.
    pub fn system(include_volumes: bool) -> Self {
        Self {
            containers: true,
            images: true,
            networks: true,
            volumes: include_volumes,
        }
    }
}

/// Result of a prune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    pub reclaimed_bytes: u64,
    pub containers_deleted: usize,
    pub images_deleted: usize,
    pub networks_deleted: usize,
    pub volumes_deleted: usize,
}

/// One line of container output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub content: String,
    pub stream: LogStream,
}

/// Log stream type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStream {
    Stdout,
    Stderr,
}
