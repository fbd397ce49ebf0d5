// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports Docker and Podman via the Docker-compatible API, bounding every call by a timeout.

use crate::runtime::traits::sealed::Sealed;
use crate::runtime::traits::{
    ContainerConfig, ContainerDetails, ContainerOps, ContainerPort, ContainerState, HostBinding,
    ImageDetails, ImageOps, LogLine, LogOps, LogStream, PortMap, Protocol, PruneReport,
    PruneScope, RawContainer, RawImage, RegistryHit, RuntimeError, StatsOps, StatsPair,
    SystemOps, SystemSummary, UsageSample,
};
use crate::runtime::types::{RuntimeInfo, RuntimeType};
use crate::types::{ContainerId, ImageId, ImageRef};
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{
    ContainerCreateBody, ContainerSummaryStateEnum, HostConfig, PortBinding, PortSummary,
    PortSummaryTypeEnum,
};
use bollard::query_parameters::{
    CreateContainerOptions, CreateImageOptions, InspectContainerOptions, ListContainersOptions,
    ListImagesOptions, LogsOptions, PruneContainersOptions, PruneImagesOptions,
    PruneNetworksOptions, PruneVolumesOptions, RemoveContainerOptions, RemoveImageOptions,
    SearchImagesOptions, StartContainerOptions, StatsOptions, StopContainerOptions,
};
use futures::StreamExt;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Placeholder tag the daemon reports for untagged images.
const UNTAGGED: &str = "<none>:<none>";

// =============================================================================
// Error Mapping Helpers
// =============================================================================

/// Sort a bollard error into the runtime taxonomy. `subject` names the object
/// or operation for the diagnostic message.
fn map_error(e: bollard::errors::Error, subject: &str) -> RuntimeError {
    use bollard::errors::Error as B;

    match e {
        B::DockerResponseServerError {
            status_code: 404,
            message,
        } => RuntimeError::NotFound(format!("{subject}: {message}")),
        // 409: in use or name taken.
        B::DockerResponseServerError {
            status_code: 409,
            message,
        } => RuntimeError::Conflict(format!("{subject}: {message}")),
        B::DockerResponseServerError {
            status_code,
            message,
        } => RuntimeError::Unknown(format!("{subject}: {message} (status {status_code})")),
        B::RequestTimeoutError => RuntimeError::Transport(format!("{subject}: request timed out")),
        B::SocketNotFoundError(path) => {
            RuntimeError::Transport(format!("{subject}: socket not found: {path}"))
        }
        e @ (B::IOError { .. } | B::HyperResponseError { .. } | B::HyperLegacyError { .. }) => {
            RuntimeError::Transport(format!("{subject}: {e}"))
        }
        other => RuntimeError::Unknown(format!("{subject}: {other}")),
    }
}

fn map_image_remove_error(e: bollard::errors::Error, image: &str) -> RuntimeError {
    match map_error(e, image) {
        RuntimeError::Conflict(_) => RuntimeError::Conflict(format!(
            "{image}: image is being used by one or more containers"
        )),
        other => other,
    }
}

fn timed_out(subject: &str, limit: Duration) -> RuntimeError {
    RuntimeError::Transport(format!("{subject}: timed out after {}s", limit.as_secs()))
}

// =============================================================================
// Model Conversion Helpers
// =============================================================================

fn trim_name(name: &str) -> String {
    name.trim_start_matches('/').to_string()
}

fn human_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    tags.into_iter().filter(|t| t != UNTAGGED).collect()
}

/// State from the list call; the enum's wire name matches `from_status`.
fn summary_state(state: Option<ContainerSummaryStateEnum>) -> ContainerState {
    state
        .map(|s| ContainerState::from_status(&s.to_string()))
        .unwrap_or(ContainerState::Unknown)
}

/// Build a port map from the list call's flat port entries.
fn port_map_from_list(ports: &[PortSummary]) -> PortMap {
    let mut map = PortMap::new();
    for port in ports {
        let protocol = match port.typ {
            Some(PortSummaryTypeEnum::UDP) => Protocol::Udp,
            Some(PortSummaryTypeEnum::SCTP) => Protocol::Sctp,
            _ => Protocol::Tcp,
        };
        let key = ContainerPort {
            port: port.private_port,
            protocol,
        };
        let bindings = map.entry(key).or_default();
        if let Some(public) = port.public_port {
            bindings.push(HostBinding::new(
                port.ip.clone().unwrap_or_default(),
                public.to_string(),
            ));
        }
    }
    map
}

/// Build a port map from inspect's `NetworkSettings.Ports`.
fn port_map_from_inspect(ports: &HashMap<String, Option<Vec<PortBinding>>>) -> PortMap {
    let mut map = PortMap::new();
    for (key, bindings) in ports {
        let Ok(port) = key.parse::<ContainerPort>() else {
            tracing::debug!(port = %key, "skipping unparsable port key");
            continue;
        };
        let bindings = bindings
            .iter()
            .flatten()
            .map(|b| {
                HostBinding::new(
                    b.host_ip.clone().unwrap_or_default(),
                    b.host_port.clone().unwrap_or_default(),
                )
            })
            .collect();
        map.insert(port, bindings);
    }
    map
}

fn non_negative(v: Option<i64>) -> u64 {
    v.and_then(|v| u64::try_from(v).ok()).unwrap_or(0)
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Every call is bounded: ordinary calls by `call_timeout`, pulls and prunes
/// by `long_timeout`. A call that runs out of time fails with
/// [`RuntimeError::Transport`].
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
    call_timeout: Duration,
    long_timeout: Duration,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(
        client: Docker,
        runtime_type: RuntimeType,
        call_timeout: Duration,
        long_timeout: Duration,
    ) -> Self {
        Self {
            client,
            runtime_type,
            call_timeout,
            long_timeout,
        }
    }

    /// Connect to the runtime socket described by `info`.
    ///
    /// This does not talk to the daemon yet; use
    /// [`connect`](crate::runtime::connect) for a health-checked handle.
    pub fn connect(
        info: &RuntimeInfo,
        call_timeout: Duration,
        long_timeout: Duration,
    ) -> Result<Self, RuntimeError> {
        // The client's own timeout must not cut long calls short.
        let client_timeout = call_timeout.max(long_timeout).as_secs().max(1);
        let client =
            Docker::connect_with_unix(&info.socket_path, client_timeout, bollard::API_DEFAULT_VERSION)
                .map_err(|e| map_error(e, &info.socket_path))?;
        Ok(Self::new(client, info.runtime_type, call_timeout, long_timeout))
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    async fn bounded<T, F>(&self, subject: &str, fut: F) -> Result<T, RuntimeError>
    where
        F: Future<Output = Result<T, bollard::errors::Error>>,
    {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result.map_err(|e| map_error(e, subject)),
            Err(_) => Err(timed_out(subject, self.call_timeout)),
        }
    }

    async fn bounded_long<T, F>(&self, subject: &str, fut: F) -> Result<T, RuntimeError>
    where
        F: Future<Output = Result<T, RuntimeError>>,
    {
        tokio::time::timeout(self.long_timeout, fut)
            .await
            .unwrap_or_else(|_| Err(timed_out(subject, self.long_timeout)))
    }
}

// Implement Sealed trait to allow runtime trait implementations
impl Sealed for BollardRuntime {}

#[async_trait]
impl SystemOps for BollardRuntime {
    async fn info(&self) -> Result<SystemSummary, RuntimeError> {
        let info = self.bounded("system info", self.client.info()).await?;

        Ok(SystemSummary {
            runtime: self.runtime_type.product_name().to_string(),
            version: info.server_version.unwrap_or_default(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
            containers: non_negative(info.containers),
            running: non_negative(info.containers_running),
            images: non_negative(info.images),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeError> {
        self.bounded("ping", self.client.ping()).await?;
        Ok(())
    }

    async fn prune(&self, scope: PruneScope) -> Result<PruneReport, RuntimeError> {
        self.bounded_long("prune", async {
            let mut report = PruneReport::default();

            if scope.containers {
                let resp = self
                    .client
                    .prune_containers(None::<PruneContainersOptions>)
                    .await
                    .map_err(|e| map_error(e, "prune containers"))?;
                report.containers_deleted = resp.containers_deleted.map_or(0, |d| d.len());
                report.reclaimed_bytes += non_negative(resp.space_reclaimed);
            }

            if scope.images {
                // dangling=false widens the prune to every unused image.
                let mut filters = HashMap::new();
                filters.insert("dangling".to_string(), vec!["false".to_string()]);
                let opts = PruneImagesOptions {
                    filters: Some(filters),
                };
                let resp = self
                    .client
                    .prune_images(Some(opts))
                    .await
                    .map_err(|e| map_error(e, "prune images"))?;
                report.images_deleted = resp.images_deleted.map_or(0, |d| d.len());
                report.reclaimed_bytes += non_negative(resp.space_reclaimed);
            }

            if scope.networks {
                let resp = self
                    .client
                    .prune_networks(None::<PruneNetworksOptions>)
                    .await
                    .map_err(|e| map_error(e, "prune networks"))?;
                report.networks_deleted = resp.networks_deleted.map_or(0, |d| d.len());
            }

            if scope.volumes {
                let resp = self
                    .client
                    .prune_volumes(None::<PruneVolumesOptions>)
                    .await
                    .map_err(|e| map_error(e, "prune volumes"))?;
                report.volumes_deleted = resp.volumes_deleted.map_or(0, |d| d.len());
                report.reclaimed_bytes += non_negative(resp.space_reclaimed);
            }

            Ok::<_, RuntimeError>(report)
        })
        .await
    }
}

#[async_trait]
impl ImageOps for BollardRuntime {
    async fn list_images(&self) -> Result<Vec<RawImage>, RuntimeError> {
        let opts = ListImagesOptions {
            all: false,
            ..Default::default()
        };
        let images = self
            .bounded("list images", self.client.list_images(Some(opts)))
            .await?;

        Ok(images
            .into_iter()
            .map(|img| RawImage {
                id: ImageId::new(img.id),
                tags: human_tags(img.repo_tags),
                size: u64::try_from(img.size).unwrap_or(0),
                created: img.created,
            })
            .collect())
    }

    async fn inspect_image(&self, id: &ImageId) -> Result<ImageDetails, RuntimeError> {
        let subject = format!("image {id}");
        let details = self
            .bounded(&subject, self.client.inspect_image(id.as_str()))
            .await?;

        Ok(ImageDetails {
            id: ImageId::new(details.id.unwrap_or_else(|| id.to_string())),
            tags: human_tags(details.repo_tags.unwrap_or_default()),
            size: non_negative(details.size),
        })
    }

    async fn pull_image(&self, reference: &ImageRef) -> Result<(), RuntimeError> {
        let image_name = reference.to_string();
        let opts = CreateImageOptions {
            from_image: Some(image_name.clone()),
            ..Default::default()
        };

        self.bounded_long(&image_name, async {
            // Pull returns a stream of progress updates - consume it
            let mut stream = self.client.create_image(Some(opts), None, None);
            while let Some(progress) = stream.next().await {
                progress.map_err(|e| map_error(e, &image_name))?;
            }
            Ok::<_, RuntimeError>(())
        })
        .await
    }

    async fn remove_image(&self, id: &ImageId, force: bool) -> Result<(), RuntimeError> {
        let opts = RemoveImageOptions {
            force,
            ..Default::default()
        };

        match tokio::time::timeout(
            self.call_timeout,
            self.client.remove_image(id.as_str(), Some(opts), None),
        )
        .await
        {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(map_image_remove_error(e, id.as_str())),
            Err(_) => Err(timed_out(id.as_str(), self.call_timeout)),
        }
    }

    async fn search_images(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<RegistryHit>, RuntimeError> {
        let opts = SearchImagesOptions {
            term: term.to_string(),
            limit: i32::try_from(limit).ok(),
            ..Default::default()
        };
        let subject = format!("search {term:?}");
        let hits = self
            .bounded(&subject, self.client.search_images(opts))
            .await?;

        Ok(hits
            .into_iter()
            .map(|hit| RegistryHit {
                name: hit.name.unwrap_or_default(),
                description: hit.description.unwrap_or_default(),
                stars: non_negative(hit.star_count),
                official: hit.is_official.unwrap_or(false),
            })
            .collect())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>, RuntimeError> {
        let opts = ListContainersOptions {
            all,
            ..Default::default()
        };
        let containers = self
            .bounded("list containers", self.client.list_containers(Some(opts)))
            .await?;

        Ok(containers
            .into_iter()
            .map(|c| {
                let name = c
                    .names
                    .as_deref()
                    .and_then(|names| names.first())
                    .map(|n| trim_name(n))
                    .unwrap_or_default();
                let state = summary_state(c.state);

                RawContainer {
                    id: ContainerId::new(c.id.unwrap_or_default()),
                    name,
                    image: c.image.unwrap_or_default(),
                    image_id: ImageId::new(c.image_id.unwrap_or_default()),
                    state,
                    status: c.status.unwrap_or_default(),
                    created: c.created.unwrap_or_default(),
                    ports: port_map_from_list(c.ports.as_deref().unwrap_or_default()),
                }
            })
            .collect())
    }

    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetails, RuntimeError> {
        let subject = format!("container {id}");
        let details = self
            .bounded(
                &subject,
                self.client
                    .inspect_container(id.as_str(), None::<InspectContainerOptions>),
            )
            .await?;

        let raw = serde_json::to_value(&details)
            .map_err(|e| RuntimeError::Unknown(format!("{subject}: {e}")))?;

        let state = details
            .state
            .as_ref()
            .and_then(|s| s.status)
            .map(|s| match s {
                bollard::models::ContainerStateStatusEnum::CREATED => ContainerState::Created,
                bollard::models::ContainerStateStatusEnum::RUNNING => ContainerState::Running,
                bollard::models::ContainerStateStatusEnum::PAUSED => ContainerState::Paused,
                bollard::models::ContainerStateStatusEnum::RESTARTING => ContainerState::Restarting,
                bollard::models::ContainerStateStatusEnum::REMOVING => ContainerState::Removing,
                bollard::models::ContainerStateStatusEnum::EXITED => ContainerState::Exited,
                bollard::models::ContainerStateStatusEnum::DEAD => ContainerState::Dead,
                _ => ContainerState::Unknown,
            })
            .unwrap_or(ContainerState::Unknown);

        let ports = details
            .network_settings
            .as_ref()
            .and_then(|n| n.ports.as_ref())
            .map(port_map_from_inspect)
            .unwrap_or_default();

        Ok(ContainerDetails {
            id: ContainerId::new(details.id.clone().unwrap_or_else(|| id.to_string())),
            name: trim_name(details.name.as_deref().unwrap_or_default()),
            image: details
                .config
                .as_ref()
                .and_then(|c| c.image.clone())
                .unwrap_or_default(),
            image_id: ImageId::new(details.image.clone().unwrap_or_default()),
            state,
            ports,
            raw,
        })
    }

    async fn create_container(
        &self,
        config: &ContainerConfig,
    ) -> Result<ContainerId, RuntimeError> {
        let image_name = config.image.to_string();

        // Bind every published port on all interfaces.
        let mut port_bindings: HashMap<String, Option<Vec<PortBinding>>> = HashMap::new();
        let mut exposed_ports: Vec<String> = Vec::new();
        for (container_port, host_port) in config.ports.iter() {
            let key = ContainerPort::tcp(container_port).to_string();
            exposed_ports.push(key.clone());
            port_bindings.insert(
                key,
                Some(vec![PortBinding {
                    host_ip: None,
                    host_port: Some(host_port.to_string()),
                }]),
            );
        }

        let host_config = HostConfig {
            port_bindings: (!port_bindings.is_empty()).then_some(port_bindings),
            ..Default::default()
        };

        let body = ContainerCreateBody {
            image: Some(image_name.clone()),
            exposed_ports: (!exposed_ports.is_empty()).then_some(exposed_ports),
            host_config: Some(host_config),
            ..Default::default()
        };

        let opts = CreateContainerOptions {
            name: config.name.clone(),
            ..Default::default()
        };

        let response = self
            .bounded(
                &format!("create from {image_name}"),
                self.client.create_container(Some(opts), body),
            )
            .await?;

        Ok(ContainerId::new(response.id))
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        self.bounded(
            &format!("start {id}"),
            self.client
                .start_container(id.as_str(), None::<StartContainerOptions>),
        )
        .await
    }

    async fn stop_container(&self, id: &ContainerId, timeout: Duration) -> Result<(), RuntimeError> {
        let opts = StopContainerOptions {
            t: i32::try_from(timeout.as_secs()).ok(),
            signal: None,
        };

        // The daemon waits up to `timeout` before killing, so allow for it.
        let limit = self.call_timeout + timeout;
        match tokio::time::timeout(limit, self.client.stop_container(id.as_str(), Some(opts))).await
        {
            Ok(result) => result.map_err(|e| map_error(e, &format!("stop {id}"))),
            Err(_) => Err(timed_out(&format!("stop {id}"), limit)),
        }
    }

    async fn remove_container(&self, id: &ContainerId, force: bool) -> Result<(), RuntimeError> {
        let opts = RemoveContainerOptions {
            force,
            ..Default::default()
        };

        self.bounded(
            &format!("remove {id}"),
            self.client.remove_container(id.as_str(), Some(opts)),
        )
        .await
    }
}

#[async_trait]
impl StatsOps for BollardRuntime {
    async fn stats_snapshot(&self, id: &ContainerId) -> Result<StatsPair, RuntimeError> {
        // one_shot=false makes the daemon take two samples so precpu is filled.
        let opts = StatsOptions {
            stream: false,
            one_shot: false,
        };
        let subject = format!("stats {id}");
        let mut stream = self.client.stats(id.as_str(), Some(opts));

        let stats = match tokio::time::timeout(self.call_timeout, stream.next()).await {
            Ok(Some(result)) => result.map_err(|e| map_error(e, &subject))?,
            Ok(None) => return Err(RuntimeError::Unknown(format!("{subject}: no sample returned"))),
            Err(_) => return Err(timed_out(&subject, self.call_timeout)),
        };

        let memory_usage = stats
            .memory_stats
            .as_ref()
            .and_then(|m| m.usage)
            .unwrap_or(0);
        let memory_limit = stats
            .memory_stats
            .as_ref()
            .and_then(|m| m.limit)
            .unwrap_or(0);

        // The daemon only reports memory once; both samples share it.
        let sample = |cpu: Option<&bollard::models::ContainerCpuStats>| UsageSample {
            container_cpu_time: cpu
                .and_then(|c| c.cpu_usage.as_ref())
                .and_then(|u| u.total_usage)
                .unwrap_or(0),
            system_cpu_time: cpu.and_then(|c| c.system_cpu_usage).unwrap_or(0),
            online_cpus: cpu.and_then(|c| c.online_cpus).unwrap_or(0),
            percpu_count: cpu
                .and_then(|c| c.cpu_usage.as_ref())
                .and_then(|u| u.percpu_usage.as_ref())
                .map_or(0, |p| u32::try_from(p.len()).unwrap_or(u32::MAX)),
            memory_usage,
            memory_limit,
        };

        Ok(StatsPair {
            previous: sample(stats.precpu_stats.as_ref()),
            current: sample(stats.cpu_stats.as_ref()),
        })
    }
}

#[async_trait]
impl LogOps for BollardRuntime {
    async fn tail_logs(&self, id: &ContainerId, tail: u64) -> Result<Vec<LogLine>, RuntimeError> {
        let opts = LogsOptions {
            stdout: true,
            stderr: true,
            follow: false,
            timestamps: false,
            tail: tail.to_string(),
            ..Default::default()
        };
        let subject = format!("logs {id}");

        let collect = async {
            let mut lines = Vec::new();
            let mut stream = self.client.logs(id.as_str(), Some(opts));
            while let Some(item) = stream.next().await {
                let (stream_type, data) = match item.map_err(|e| map_error(e, &subject))? {
                    bollard::container::LogOutput::StdErr { message } => {
                        (LogStream::Stderr, message)
                    }
                    bollard::container::LogOutput::StdOut { message }
                    | bollard::container::LogOutput::StdIn { message }
                    | bollard::container::LogOutput::Console { message } => {
                        (LogStream::Stdout, message)
                    }
                };
                lines.push(LogLine {
                    content: String::from_utf8_lossy(&data).into_owned(),
                    stream: stream_type,
                });
            }
            Ok::<_, RuntimeError>(lines)
        };

        tokio::time::timeout(self.call_timeout, collect)
            .await
            .unwrap_or_else(|_| Err(timed_out(&subject, self.call_timeout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(status_code: u16) -> bollard::errors::Error {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn maps_status_codes_to_taxonomy() {
        assert!(matches!(map_error(server_error(404), "x"), RuntimeError::NotFound(_)));
        assert!(matches!(map_error(server_error(409), "x"), RuntimeError::Conflict(_)));
        assert!(matches!(map_error(server_error(500), "x"), RuntimeError::Unknown(_)));
    }

    #[test]
    fn maps_timeouts_and_missing_sockets_to_transport() {
        assert!(matches!(
            map_error(bollard::errors::Error::RequestTimeoutError, "x"),
            RuntimeError::Transport(_)
        ));
        assert!(matches!(
            map_error(
                bollard::errors::Error::SocketNotFoundError("/nope".to_string()),
                "x"
            ),
            RuntimeError::Transport(_)
        ));
    }

    #[test]
    fn image_in_use_is_conflict_with_explanation() {
        let err = map_image_remove_error(server_error(409), "nginx:latest");
        assert_eq!(
            err,
            RuntimeError::Conflict(
                "nginx:latest: image is being used by one or more containers".to_string()
            )
        );
    }

    #[test]
    fn list_ports_keep_only_published_bindings() {
        let ports = vec![
            PortSummary {
                ip: Some("0.0.0.0".to_string()),
                private_port: 80,
                public_port: Some(8080),
                typ: Some(PortSummaryTypeEnum::TCP),
            },
            PortSummary {
                ip: None,
                private_port: 443,
                public_port: None,
                typ: Some(PortSummaryTypeEnum::TCP),
            },
        ];
        let map = port_map_from_list(&ports);
        assert_eq!(
            map.get(&ContainerPort::tcp(80)),
            Some(&vec![HostBinding::new("0.0.0.0", "8080")])
        );
        assert_eq!(map.get(&ContainerPort::tcp(443)), Some(&vec![]));
    }

    #[test]
    fn list_states_map_by_wire_name() {
        assert_eq!(
            summary_state(Some(ContainerSummaryStateEnum::RUNNING)),
            ContainerState::Running
        );
        assert_eq!(
            summary_state(Some(ContainerSummaryStateEnum::EXITED)),
            ContainerState::Exited
        );
        assert_eq!(
            summary_state(Some(ContainerSummaryStateEnum::RESTARTING)),
            ContainerState::Restarting
        );
        assert_eq!(summary_state(None), ContainerState::Unknown);
    }

    #[test]
    fn not_modified_is_not_a_conflict() {
        assert!(matches!(
            map_error(server_error(304), "x"),
            RuntimeError::Unknown(_)
        ));
    }

    #[test]
    fn list_ports_keep_protocol() {
        let ports = vec![PortSummary {
            ip: Some("0.0.0.0".to_string()),
            private_port: 53,
            public_port: Some(5353),
            typ: Some(PortSummaryTypeEnum::UDP),
        }];
        let map = port_map_from_list(&ports);
        let key = ContainerPort {
            port: 53,
            protocol: Protocol::Udp,
        };
        assert_eq!(map.get(&key), Some(&vec![HostBinding::new("0.0.0.0", "5353")]));
    }

    #[test]
    fn inspect_ports_tolerate_null_bindings() {
        let mut raw = HashMap::new();
        raw.insert(
            "80/tcp".to_string(),
            Some(vec![PortBinding {
                host_ip: Some("127.0.0.1".to_string()),
                host_port: Some("8080".to_string()),
            }]),
        );
        raw.insert("9000/tcp".to_string(), None);
        let map = port_map_from_inspect(&raw);
        assert_eq!(map.len(), 2);
        assert!(map[&ContainerPort::tcp(9000)].is_empty());
    }

    #[test]
    fn untagged_placeholder_is_dropped() {
        let tags = human_tags(vec!["<none>:<none>".to_string(), "nginx:1.25".to_string()]);
        assert_eq!(tags, vec!["nginx:1.25".to_string()]);
    }
}
