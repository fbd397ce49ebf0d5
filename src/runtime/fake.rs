// ABOUTME: In-memory runtime used by unit tests of the reconciler, views and commands.
// ABOUTME: Canned responses per object, injectable failures, and a log of every call made.

use super::traits::sealed::Sealed;
use super::traits::{
    ContainerConfig, ContainerDetails, ContainerOps, ContainerState, ImageDetails, ImageOps,
    LogLine, LogOps, LogStream, PortMap, PruneReport, PruneScope, RawContainer, RawImage,
    RegistryHit, RuntimeError, StatsOps, StatsPair, SystemOps, SystemSummary,
};
use crate::types::{ContainerId, ImageId, ImageRef};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Fake runtime with builder-style setup.
#[derive(Default)]
pub struct FakeRuntime {
    pub containers: Vec<RawContainer>,
    pub images: Vec<RawImage>,
    pub hits: Vec<RegistryHit>,
    pub logs: Vec<LogLine>,
    pub prune_report: PruneReport,
    /// Stats by container id; containers without an entry get a zero pair.
    pub stats: HashMap<String, Result<StatsPair, RuntimeError>>,
    /// Forced failures by image id, returned from `inspect_image`.
    pub image_errors: HashMap<String, RuntimeError>,
    pub list_error: Option<RuntimeError>,
    pub list_images_error: Option<RuntimeError>,
    /// Fails `info`; `list_error` fails it too.
    pub info_error: Option<RuntimeError>,
    pub search_error: Option<RuntimeError>,
    pub action_error: Option<RuntimeError>,
    pub pull_error: Option<RuntimeError>,
    pub remove_image_error: Option<RuntimeError>,
    calls: Mutex<Vec<String>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, container: RawContainer) -> Self {
        self.containers.push(container);
        self
    }

    pub fn with_image(mut self, id: &str, tags: &[&str]) -> Self {
        self.images.push(RawImage {
            id: ImageId::new(id),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            size: 1024 * 1024,
            created: 1_700_000_000,
        });
        self
    }

    pub fn with_stats(mut self, id: &str, stats: Result<StatsPair, RuntimeError>) -> Self {
        self.stats.insert(id.to_string(), stats);
        self
    }

    pub fn with_image_error(mut self, id: &str, error: RuntimeError) -> Self {
        self.image_errors.insert(id.to_string(), error);
        self
    }

    pub fn with_list_error(mut self, error: RuntimeError) -> Self {
        self.list_error = Some(error);
        self
    }

    pub fn with_list_images_error(mut self, error: RuntimeError) -> Self {
        self.list_images_error = Some(error);
        self
    }

    pub fn with_action_error(mut self, error: RuntimeError) -> Self {
        self.action_error = Some(error);
        self
    }

    pub fn with_pull_error(mut self, error: RuntimeError) -> Self {
        self.pull_error = Some(error);
        self
    }

    pub fn with_remove_image_error(mut self, error: RuntimeError) -> Self {
        self.remove_image_error = Some(error);
        self
    }

    pub fn with_info_error(mut self, error: RuntimeError) -> Self {
        self.info_error = Some(error);
        self
    }

    pub fn with_search_error(mut self, error: RuntimeError) -> Self {
        self.search_error = Some(error);
        self
    }

    /// Every runtime call made so far, as `"op subject"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: impl Into<String>) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.into());
        }
    }

    fn find_container(&self, id: &ContainerId) -> Result<&RawContainer, RuntimeError> {
        let wanted = id.as_str();
        self.containers
            .iter()
            .find(|c| c.id.as_str().starts_with(wanted) || c.name == wanted)
            .ok_or_else(|| RuntimeError::NotFound(format!("container {wanted}")))
    }

    fn find_image(&self, id: &ImageId) -> Option<&RawImage> {
        let wanted = id.as_str();
        self.images
            .iter()
            .find(|i| i.id.as_str() == wanted || i.tags.iter().any(|t| t == wanted))
    }

    fn action(&self, op: &str, id: &ContainerId) -> Result<(), RuntimeError> {
        self.record(format!("{op} {id}"));
        self.find_container(id)?;
        match &self.action_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

/// A container row for tests.
pub fn container(id: &str, name: &str, image_id: &str, state: ContainerState) -> RawContainer {
    RawContainer {
        id: ContainerId::new(id),
        name: name.to_string(),
        image: image_id.to_string(),
        image_id: ImageId::new(image_id),
        state,
        status: state.to_string(),
        created: 1_700_000_000,
        ports: PortMap::new(),
    }
}

impl Sealed for FakeRuntime {}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self, all: bool) -> Result<Vec<RawContainer>, RuntimeError> {
        self.record(format!("list_containers all={all}"));
        if let Some(e) = &self.list_error {
            return Err(e.clone());
        }
        Ok(self
            .containers
            .iter()
            .filter(|c| all || c.state.is_running())
            .cloned()
            .collect())
    }

    async fn inspect_container(&self, id: &ContainerId) -> Result<ContainerDetails, RuntimeError> {
        self.record(format!("inspect_container {id}"));
        let c = self.find_container(id)?;
        Ok(ContainerDetails {
            id: c.id.clone(),
            name: c.name.clone(),
            image: c.image.clone(),
            image_id: c.image_id.clone(),
            state: c.state,
            ports: c.ports.clone(),
            raw: serde_json::json!({ "Id": c.id.as_str(), "Name": format!("/{}", c.name) }),
        })
    }

    async fn create_container(
        &self,
        config: &ContainerConfig,
    ) -> Result<ContainerId, RuntimeError> {
        self.record(format!("create_container {}", config.image));
        match &self.action_error {
            Some(e) => Err(e.clone()),
            None => Ok(ContainerId::new("c0ffee000000000000000000")),
        }
    }

    async fn start_container(&self, id: &ContainerId) -> Result<(), RuntimeError> {
        self.record(format!("start_container {id}"));
        match &self.action_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn stop_container(
        &self,
        id: &ContainerId,
        _timeout: Duration,
    ) -> Result<(), RuntimeError> {
        self.action("stop_container", id)
    }

    async fn remove_container(&self, id: &ContainerId, force: bool) -> Result<(), RuntimeError> {
        self.action(&format!("remove_container force={force}"), id)
    }
}

#[async_trait]
impl ImageOps for FakeRuntime {
    async fn list_images(&self) -> Result<Vec<RawImage>, RuntimeError> {
        self.record("list_images");
        match &self.list_images_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.images.clone()),
        }
    }

    async fn inspect_image(&self, id: &ImageId) -> Result<ImageDetails, RuntimeError> {
        self.record(format!("inspect_image {id}"));
        if let Some(e) = self.image_errors.get(id.as_str()) {
            return Err(e.clone());
        }
        self.find_image(id)
            .map(|i| ImageDetails {
                id: i.id.clone(),
                tags: i.tags.clone(),
                size: i.size,
            })
            .ok_or_else(|| RuntimeError::NotFound(format!("image {id}")))
    }

    async fn pull_image(&self, reference: &ImageRef) -> Result<(), RuntimeError> {
        self.record(format!("pull_image {reference}"));
        match &self.pull_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn remove_image(&self, id: &ImageId, force: bool) -> Result<(), RuntimeError> {
        self.record(format!("remove_image {id} force={force}"));
        match &self.remove_image_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn search_images(
        &self,
        term: &str,
        limit: u32,
    ) -> Result<Vec<RegistryHit>, RuntimeError> {
        self.record(format!("search_images {term} limit={limit}"));
        match &self.search_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.hits.iter().take(limit as usize).cloned().collect()),
        }
    }
}

#[async_trait]
impl StatsOps for FakeRuntime {
    async fn stats_snapshot(&self, id: &ContainerId) -> Result<StatsPair, RuntimeError> {
        self.record(format!("stats_snapshot {id}"));
        self.stats
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| Ok(StatsPair::default()))
    }
}

#[async_trait]
impl SystemOps for FakeRuntime {
    async fn info(&self) -> Result<SystemSummary, RuntimeError> {
        self.record("info");
        if let Some(e) = self.info_error.as_ref().or(self.list_error.as_ref()) {
            return Err(e.clone());
        }
        Ok(SystemSummary {
            runtime: "Docker".to_string(),
            version: "27.0.1".to_string(),
            os: "linux".to_string(),
            arch: "x86_64".to_string(),
            containers: self.containers.len() as u64,
            running: self.containers.iter().filter(|c| c.state.is_running()).count() as u64,
            images: self.images.len() as u64,
        })
    }

    async fn ping(&self) -> Result<(), RuntimeError> {
        self.record("ping");
        Ok(())
    }

    async fn prune(&self, scope: PruneScope) -> Result<PruneReport, RuntimeError> {
        self.record(format!("prune volumes={}", scope.volumes));
        match &self.action_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.prune_report),
        }
    }
}

#[async_trait]
impl LogOps for FakeRuntime {
    async fn tail_logs(&self, id: &ContainerId, tail: u64) -> Result<Vec<LogLine>, RuntimeError> {
        self.record(format!("tail_logs {id} tail={tail}"));
        self.find_container(id)?;
        let skip = self.logs.len().saturating_sub(tail as usize);
        Ok(self.logs.iter().skip(skip).cloned().collect())
    }
}

/// A stdout log line for tests.
pub fn stdout(content: &str) -> LogLine {
    LogLine {
        content: content.to_string(),
        stream: LogStream::Stdout,
    }
}
