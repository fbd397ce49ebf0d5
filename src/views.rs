// ABOUTME: Read-only view builders: dashboard, images, launch menu, container details and logs.
// ABOUTME: Each call takes a fresh snapshot from the runtime; nothing is cached between calls.

use crate::diagnostics::Diagnostics;
use crate::inventory::{self, ContainerSummary, ImageSummary, Listing};
use crate::reachability::{self, LaunchableEndpoint};
use crate::runtime::{
    ContainerOps, ContainerState, ImageOps, LogLine, LogOps, RegistryHit, RuntimeError, StatsOps,
    SystemOps, SystemSummary,
};
use crate::types::ContainerId;
use serde::Serialize;

/// Runtime summary plus the container listing.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_error: Option<RuntimeError>,
    pub containers: Listing<ContainerSummary>,
}

impl Dashboard {
    /// Either half failed at the top level.
    pub fn is_degraded(&self) -> bool {
        self.system_error.is_some() || self.containers.is_degraded()
    }
}

/// Local images plus optional registry search results.
#[derive(Debug, Clone, Serialize)]
pub struct ImagesView {
    pub images: Listing<ImageSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub hits: Vec<RegistryHit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_error: Option<RuntimeError>,
}

/// Inspect output for one container.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerDetailsView {
    pub id: String,
    pub name: String,
    pub state: ContainerState,
    pub image: String,
    /// The full inspect document, pretty-printed.
    pub document: String,
}

/// Tail of one container's output.
#[derive(Debug, Clone, Serialize)]
pub struct ContainerLogsView {
    pub id: String,
    pub lines: Vec<LogLine>,
}

/// System summary and every container, enriched.
///
/// The summary and the listing are fetched concurrently and fail
/// independently.
pub async fn build_dashboard<R>(runtime: &R) -> Dashboard
where
    R: ContainerOps + ImageOps + StatsOps + SystemOps + ?Sized,
{
    let (system, containers) = futures::join!(
        runtime.info(),
        inventory::build_container_listing(runtime)
    );

    let (system, system_error) = match system {
        Ok(summary) => (Some(summary), None),
        Err(e) => {
            tracing::warn!(error = %e, "system info unavailable");
            (None, Some(e))
        }
    };

    Dashboard {
        system,
        system_error,
        containers,
    }
}

/// Local images and, when `query` is non-blank, registry hits for it.
pub async fn build_images_view<R: ImageOps + ?Sized>(
    runtime: &R,
    query: Option<&str>,
    limit: u32,
) -> ImagesView {
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let images = inventory::build_image_listing(runtime).await;

    let Some(term) = query else {
        return ImagesView {
            images,
            query: None,
            hits: Vec::new(),
            search_error: None,
        };
    };

    let (hits, search_error) = match runtime.search_images(term, limit).await {
        Ok(hits) => (hits, None),
        Err(e) => {
            tracing::warn!(error = %e, term, "registry search failed");
            (Vec::new(), Some(e))
        }
    };

    ImagesView {
        images,
        query: Some(term.to_string()),
        hits,
        search_error,
    }
}

/// Running containers that can be opened in a browser.
///
/// Containers without a wildcard host binding are left out.
pub async fn build_launch_menu<R: ContainerOps + ?Sized>(
    runtime: &R,
    host: &str,
) -> Listing<LaunchableEndpoint> {
    let containers = match runtime.list_containers(false).await {
        Ok(containers) => containers,
        Err(e) => {
            tracing::warn!(error = %e, "container listing failed");
            return Listing::failed(e);
        }
    };

    let endpoints = containers
        .iter()
        .filter(|c| c.state.is_running())
        .filter_map(|c| reachability::resolve(&c.name, &c.ports, host))
        .collect();

    Listing::complete(endpoints, Diagnostics::default())
}

pub async fn build_container_details<R: ContainerOps + ?Sized>(
    runtime: &R,
    id: &ContainerId,
) -> Result<ContainerDetailsView, RuntimeError> {
    let details = runtime.inspect_container(id).await?;
    let document = serde_json::to_string_pretty(&details.raw)
        .map_err(|e| RuntimeError::Unknown(format!("rendering inspect output: {e}")))?;

    Ok(ContainerDetailsView {
        id: details.id.short().to_string(),
        name: details.name,
        state: details.state,
        image: details.image,
        document,
    })
}

pub async fn build_container_logs<R: LogOps + ?Sized>(
    runtime: &R,
    id: &ContainerId,
    tail: u64,
) -> Result<ContainerLogsView, RuntimeError> {
    let lines = runtime.tail_logs(id, tail).await?;
    Ok(ContainerLogsView {
        id: id.to_string(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::fake::{FakeRuntime, container, stdout};
    use crate::runtime::{ContainerPort, HostBinding};

    fn published(id: &str, name: &str, bindings: &[(&str, &str)]) -> crate::runtime::RawContainer {
        let mut c = container(id, name, "sha256:aaa", ContainerState::Running);
        c.ports.insert(
            ContainerPort::tcp(80),
            bindings
                .iter()
                .map(|(ip, port)| HostBinding::new(*ip, *port))
                .collect(),
        );
        c
    }

    #[tokio::test]
    async fn dashboard_combines_summary_and_listing() {
        let runtime = FakeRuntime::new()
            .with_image("sha256:aaa", &["nginx:latest"])
            .with_container(container("1111", "web", "sha256:aaa", ContainerState::Running))
            .with_container(container("2222", "old", "sha256:aaa", ContainerState::Exited));

        let dashboard = build_dashboard(&runtime).await;

        let system = dashboard.system.expect("summary present");
        assert_eq!(system.containers, 2);
        assert_eq!(system.running, 1);
        assert_eq!(dashboard.containers.items.len(), 2);
        assert!(dashboard.system_error.is_none());
    }

    #[tokio::test]
    async fn unreachable_runtime_empties_dashboard() {
        let runtime = FakeRuntime::new()
            .with_list_error(RuntimeError::Transport("connection refused".to_string()))
            .with_container(container("1111", "web", "sha256:aaa", ContainerState::Running));

        let dashboard = build_dashboard(&runtime).await;

        assert!(dashboard.system.is_none());
        assert!(dashboard.containers.items.is_empty());
        assert!(matches!(
            dashboard.containers.error,
            Some(RuntimeError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn failed_summary_degrades_dashboard_but_keeps_rows() {
        let runtime = FakeRuntime::new()
            .with_info_error(RuntimeError::Unknown("info: boom (status 500)".to_string()))
            .with_image("sha256:aaa", &["nginx:latest"])
            .with_container(container("1111", "web", "sha256:aaa", ContainerState::Exited));

        let dashboard = build_dashboard(&runtime).await;

        assert!(dashboard.system.is_none());
        assert!(matches!(dashboard.system_error, Some(RuntimeError::Unknown(_))));
        assert_eq!(dashboard.containers.items.len(), 1);
        assert!(!dashboard.containers.is_degraded());
        assert!(dashboard.is_degraded());
    }

    #[tokio::test]
    async fn images_view_searches_only_with_query() {
        let mut runtime = FakeRuntime::new().with_image("sha256:aaa", &["nginx:latest"]);
        runtime.hits = vec![RegistryHit {
            name: "nginx".to_string(),
            description: "Official build of Nginx.".to_string(),
            stars: 20_000,
            official: true,
        }];

        let view = build_images_view(&runtime, Some("  "), 25).await;
        assert!(view.hits.is_empty());
        assert!(view.query.is_none());

        let view = build_images_view(&runtime, Some("nginx"), 25).await;
        assert_eq!(view.hits.len(), 1);
        assert_eq!(view.images.items.len(), 1);
        assert!(runtime.calls().contains(&"search_images nginx limit=25".to_string()));
    }

    #[tokio::test]
    async fn failed_search_keeps_local_images() {
        let runtime = FakeRuntime::new()
            .with_image("sha256:aaa", &["nginx:latest"])
            .with_search_error(RuntimeError::Transport("registry unreachable".to_string()));

        let view = build_images_view(&runtime, Some("nginx"), 25).await;

        assert!(matches!(view.search_error, Some(RuntimeError::Transport(_))));
        assert!(view.hits.is_empty());
        assert_eq!(view.query.as_deref(), Some("nginx"));
        assert_eq!(view.images.items.len(), 1);
        assert!(!view.images.is_degraded());
    }

    #[tokio::test]
    async fn launch_menu_keeps_wildcard_bindings_only() {
        let runtime = FakeRuntime::new()
            .with_container(published("1111", "public", &[("0.0.0.0", "8080")]))
            .with_container(published("2222", "private", &[("127.0.0.1", "8081")]))
            .with_container(container("3333", "quiet", "sha256:aaa", ContainerState::Running));

        let menu = build_launch_menu(&runtime, "localhost").await;

        assert!(menu.error.is_none());
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].name, "public");
        assert_eq!(menu.items[0].urls.head, "http://localhost:8080");
    }

    #[tokio::test]
    async fn container_details_render_pretty_json() {
        let runtime = FakeRuntime::new().with_container(container(
            "0123456789abcdef",
            "web",
            "sha256:aaa",
            ContainerState::Running,
        ));

        let view = build_container_details(&runtime, &ContainerId::new("web"))
            .await
            .unwrap();

        assert_eq!(view.id, "0123456789ab");
        assert!(view.document.contains("\n  \"Name\": \"/web\""));
    }

    #[tokio::test]
    async fn missing_container_details_is_not_found() {
        let runtime = FakeRuntime::new();
        let err = build_container_details(&runtime, &ContainerId::new("ghost"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn logs_are_tailed() {
        let mut runtime = FakeRuntime::new().with_container(container(
            "1111",
            "web",
            "sha256:aaa",
            ContainerState::Running,
        ));
        runtime.logs = vec![stdout("one"), stdout("two"), stdout("three")];

        let view = build_container_logs(&runtime, &ContainerId::new("web"), 2)
            .await
            .unwrap();

        let lines: Vec<&str> = view.lines.iter().map(|l| l.content.as_str()).collect();
        assert_eq!(lines, vec!["two", "three"]);
    }
}
