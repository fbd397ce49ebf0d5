// ABOUTME: Runtime socket detection on the local host.
// ABOUTME: Honours explicit config and DOCKER_HOST, then checks Podman sockets before Docker.

use super::types::{RuntimeConfig, RuntimeInfo, RuntimeType};
use std::path::Path;

/// Error during runtime detection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectionError {
    #[error("no container runtime found (checked DOCKER_HOST, Podman and Docker sockets)")]
    NoRuntimeFound,

    #[error("unsupported DOCKER_HOST {0:?}: only unix:// sockets are supported")]
    UnsupportedHost(String),
}

const ROOTFUL_PODMAN: &str = "/run/podman/podman.sock";
const DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Facts about the host that detection depends on.
pub(crate) struct HostProbe<'a> {
    pub docker_host: Option<String>,
    pub uid: Option<String>,
    pub socket_exists: &'a dyn Fn(&str) -> bool,
}

/// Detect the container runtime on the local system.
///
/// Detection order:
/// 1. Explicit `runtime`/`socket` from config
/// 2. `DOCKER_HOST` (unix sockets only)
/// 3. Rootless Podman socket (`/run/user/$UID/podman/podman.sock`)
/// 4. Rootful Podman socket (`/run/podman/podman.sock`)
/// 5. Docker socket (`/var/run/docker.sock`)
pub fn detect_local(config: &RuntimeConfig) -> Result<RuntimeInfo, DetectionError> {
    let exists = |path: &str| Path::new(path).exists();
    let probe = HostProbe {
        docker_host: std::env::var("DOCKER_HOST").ok().filter(|h| !h.is_empty()),
        uid: get_uid(),
        socket_exists: &exists,
    };
    detect_with(config, &probe)
}

pub(crate) fn detect_with(
    config: &RuntimeConfig,
    probe: &HostProbe<'_>,
) -> Result<RuntimeInfo, DetectionError> {
    if let Some(socket) = &config.socket {
        let socket_path = strip_unix_scheme(socket).to_string();
        let runtime_type = config
            .runtime
            .unwrap_or_else(|| guess_runtime_type(&socket_path));
        return Ok(RuntimeInfo {
            runtime_type,
            socket_path,
        });
    }

    if let Some(runtime_type) = config.runtime {
        let socket_path = match runtime_type {
            RuntimeType::Podman => probe
                .uid
                .as_deref()
                .map(rootless_podman_socket)
                .filter(|s| (probe.socket_exists)(s))
                .unwrap_or_else(|| ROOTFUL_PODMAN.to_string()),
            RuntimeType::Docker => DOCKER_SOCKET.to_string(),
        };
        return Ok(RuntimeInfo {
            runtime_type,
            socket_path,
        });
    }

    if let Some(host) = &probe.docker_host {
        let Some(path) = host.strip_prefix("unix://") else {
            return Err(DetectionError::UnsupportedHost(host.clone()));
        };
        return Ok(RuntimeInfo {
            runtime_type: guess_runtime_type(path),
            socket_path: path.to_string(),
        });
    }

    if let Some(uid) = &probe.uid {
        let rootless = rootless_podman_socket(uid);
        if (probe.socket_exists)(&rootless) {
            return Ok(RuntimeInfo {
                runtime_type: RuntimeType::Podman,
                socket_path: rootless,
            });
        }
    }

    if (probe.socket_exists)(ROOTFUL_PODMAN) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Podman,
            socket_path: ROOTFUL_PODMAN.to_string(),
        });
    }

    if (probe.socket_exists)(DOCKER_SOCKET) {
        return Ok(RuntimeInfo {
            runtime_type: RuntimeType::Docker,
            socket_path: DOCKER_SOCKET.to_string(),
        });
    }

    Err(DetectionError::NoRuntimeFound)
}

fn rootless_podman_socket(uid: &str) -> String {
    format!("/run/user/{uid}/podman/podman.sock")
}

fn strip_unix_scheme(socket: &str) -> &str {
    socket.strip_prefix("unix://").unwrap_or(socket)
}

fn guess_runtime_type(socket_path: &str) -> RuntimeType {
    if socket_path.contains("podman") {
        RuntimeType::Podman
    } else {
        RuntimeType::Docker
    }
}

fn get_uid() -> Option<String> {
    std::env::var("UID").ok().or_else(|| {
        // Fall back to reading /proc/self/status
        std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|s| {
                s.lines()
                    .find(|l| l.starts_with("Uid:"))
                    .and_then(|l| l.split_whitespace().nth(1))
                    .map(|s| s.to_string())
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe<'a>(
        docker_host: Option<&str>,
        exists: &'a dyn Fn(&str) -> bool,
    ) -> HostProbe<'a> {
        HostProbe {
            docker_host: docker_host.map(str::to_string),
            uid: Some("1000".to_string()),
            socket_exists: exists,
        }
    }

    #[test]
    fn explicit_socket_wins() {
        let config = RuntimeConfig {
            runtime: None,
            socket: Some("unix:///tmp/podman.sock".to_string()),
        };
        let info = detect_with(&config, &probe(Some("unix:///x"), &|_| true)).unwrap();
        assert_eq!(info.socket_path, "/tmp/podman.sock");
        assert_eq!(info.runtime_type, RuntimeType::Podman);
    }

    #[test]
    fn explicit_docker_uses_default_socket() {
        let config = RuntimeConfig {
            runtime: Some(RuntimeType::Docker),
            socket: None,
        };
        let info = detect_with(&config, &probe(None, &|_| false)).unwrap();
        assert_eq!(info.socket_path, DOCKER_SOCKET);
    }

    #[test]
    fn docker_host_is_honoured() {
        let info = detect_with(
            &RuntimeConfig::default(),
            &probe(Some("unix:///home/me/.docker/desktop/docker.sock"), &|_| true),
        )
        .unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Docker);
        assert_eq!(info.socket_path, "/home/me/.docker/desktop/docker.sock");
    }

    #[test]
    fn tcp_docker_host_is_rejected() {
        let err = detect_with(
            &RuntimeConfig::default(),
            &probe(Some("tcp://10.0.0.1:2375"), &|_| true),
        )
        .unwrap_err();
        assert!(matches!(err, DetectionError::UnsupportedHost(_)));
    }

    #[test]
    fn prefers_rootless_podman_then_docker() {
        let only_docker = |p: &str| p == DOCKER_SOCKET;
        let info = detect_with(&RuntimeConfig::default(), &probe(None, &only_docker)).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Docker);

        let both = |p: &str| p == DOCKER_SOCKET || p == "/run/user/1000/podman/podman.sock";
        let info = detect_with(&RuntimeConfig::default(), &probe(None, &both)).unwrap();
        assert_eq!(info.runtime_type, RuntimeType::Podman);
        assert_eq!(info.socket_path, "/run/user/1000/podman/podman.sock");
    }

    #[test]
    fn nothing_found() {
        let err = detect_with(&RuntimeConfig::default(), &probe(None, &|_| false)).unwrap_err();
        assert_eq!(err, DetectionError::NoRuntimeFound);
    }
}
