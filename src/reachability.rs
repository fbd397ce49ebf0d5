// ABOUTME: Maps a running container's port bindings to externally dialable URLs.
// ABOUTME: Only wildcard-interface bindings count; containers without any are not launchable.

use crate::runtime::{HostBinding, PortMap};
use nonempty::NonEmpty;
use serde::Serialize;

/// Host used in launch URLs unless configured otherwise.
pub const DEFAULT_LAUNCH_HOST: &str = "localhost";

/// A container with at least one reachable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchableEndpoint {
    pub name: String,
    /// In ascending container-port order, then runtime binding order.
    pub urls: NonEmpty<String>,
}

/// Whether a binding listens on every IPv4 interface.
///
/// An empty host interface means the same thing. The IPv6 wildcard is left
/// out: the daemon reports it next to `0.0.0.0` for the same host port.
pub fn is_wildcard(binding: &HostBinding) -> bool {
    matches!(binding.host_ip.trim(), "" | "0.0.0.0")
}

/// Reachable URLs for a container, or `None` when it has no wildcard binding.
pub fn resolve(name: &str, ports: &PortMap, host: &str) -> Option<LaunchableEndpoint> {
    let urls: Vec<String> = ports
        .values()
        .flatten()
        .filter(|binding| is_wildcard(binding) && !binding.host_port.trim().is_empty())
        .map(|binding| format!("http://{host}:{}", binding.host_port.trim()))
        .collect();

    NonEmpty::from_vec(urls).map(|urls| LaunchableEndpoint {
        name: name.to_string(),
        urls,
    })
}
