// ABOUTME: Output formatting for CLI feedback and views.
// ABOUTME: Supports normal (tables), quiet (results only) and JSON output modes.

use crate::commands::Outcome;
use crate::diagnostics::Warning;
use crate::inventory::{ContainerSummary, ImageSummary, Listing};
use crate::reachability::LaunchableEndpoint;
use crate::runtime::{LogStream, RuntimeError};
use crate::views::{ContainerDetailsView, ContainerLogsView, Dashboard, ImagesView};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly tables with progress messages
    Normal,
    /// Only results, no headers or progress
    Quiet,
    /// One JSON document per view or event
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Report a successful command.
    pub fn outcome(&self, outcome: &Outcome) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{} ({:.1}s)", outcome.message, elapsed);
                } else {
                    println!("{}", outcome.message);
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{}", outcome.subject.as_deref().unwrap_or(&outcome.message));
            }
            OutputMode::Json => self.event("success", outcome),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.start_time.map(|_| self.elapsed_secs()),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    pub fn dashboard(&self, dashboard: &Dashboard) {
        self.view(dashboard, || render_dashboard(dashboard), || {
            quiet_lines(dashboard.containers.items.iter().map(|c| c.id.clone()))
        });
    }

    pub fn images(&self, view: &ImagesView) {
        self.view(view, || render_images(view), || {
            quiet_lines(view.images.items.iter().map(|i| i.id.short().to_string()))
        });
    }

    pub fn launch_menu(&self, menu: &Listing<LaunchableEndpoint>) {
        self.view(menu, || render_launch_menu(menu), || {
            quiet_lines(menu.items.iter().flat_map(|e| e.urls.iter().cloned()))
        });
    }

    pub fn details(&self, view: &ContainerDetailsView) {
        self.view(view, || view.document.clone(), || view.document.clone());
    }

    pub fn logs(&self, view: &ContainerLogsView) {
        self.view(view, || render_logs(view), || render_logs(view));
    }

    fn view<T: Serialize>(
        &self,
        value: &T,
        normal: impl FnOnce() -> String,
        quiet: impl FnOnce() -> String,
    ) {
        let text = match self.mode {
            OutputMode::Normal => normal(),
            OutputMode::Quiet => quiet(),
            OutputMode::Json => match serde_json::to_string(value) {
                Ok(json) => json,
                Err(e) => {
                    self.error(&format!("cannot serialize output: {e}"));
                    return;
                }
            },
        };
        if !text.is_empty() {
            println!("{}", text.trim_end_matches('\n'));
        }
    }

    fn event<T: Serialize>(&self, event: &str, payload: &T) {
        #[derive(Serialize)]
        struct Event<'a, T> {
            event: &'a str,
            #[serde(flatten)]
            payload: &'a T,
            #[serde(skip_serializing_if = "Option::is_none")]
            duration_secs: Option<f64>,
        }

        let event = Event {
            event,
            payload,
            duration_secs: self.start_time.map(|_| self.elapsed_secs()),
        };
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

fn quiet_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

/// Bytes as megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

fn push_listing_notes<T>(out: &mut String, what: &str, listing: &Listing<T>) {
    if let Some(e) = &listing.error {
        let _ = writeln!(out, "Error listing {what}: {e}");
    }
    for warning in &listing.warnings {
        push_warning(out, warning);
    }
}

fn push_warning(out: &mut String, warning: &Warning) {
    let _ = writeln!(out, "warning: {}: {}", warning.subject, warning.message);
}

fn push_error(out: &mut String, context: &str, error: &RuntimeError) {
    let _ = writeln!(out, "Error {context}: {error}");
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    match (&dashboard.system, &dashboard.system_error) {
        (Some(s), _) => {
            let _ = writeln!(
                out,
                "{} {} on {}/{}: {} containers ({} running), {} images\n",
                s.runtime, s.version, s.os, s.arch, s.containers, s.running, s.images
            );
        }
        (None, Some(e)) => push_error(&mut out, "reading system info", e),
        (None, None) => {}
    }

    out.push_str(&render_containers(&dashboard.containers.items));
    push_listing_notes(&mut out, "containers", &dashboard.containers);
    out
}

pub fn render_containers(rows: &[ContainerSummary]) -> String {
    let mut out = format!(
        "{:<12}  {:<24}  {:<10}  {:<32}  {:>7}  {:>19}\n",
        "ID", "NAME", "STATE", "IMAGE", "CPU %", "MEMORY"
    );
    for row in rows {
        let (cpu, memory) = match &row.metrics {
            Some(m) => (
                format!("{:.2}", m.cpu_percent),
                format!(
                    "{} ({:.1}%)",
                    format_megabytes(m.memory_used),
                    m.memory_percent
                ),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        let _ = writeln!(
            out,
            "{:<12}  {:<24}  {:<10}  {:<32}  {:>7}  {:>19}",
            row.id,
            row.name,
            row.state.to_string(),
            row.image.to_string(),
            cpu,
            memory
        );
    }
    out
}

pub fn render_images(view: &ImagesView) -> String {
    let mut out = format!(
        "{:<12}  {:<40}  {:>12}  {:<20}\n",
        "ID", "TAGS", "SIZE", "CREATED"
    );
    for image in &view.images.items {
        out.push_str(&render_image_row(image));
    }
    push_listing_notes(&mut out, "images", &view.images);

    if let Some(query) = &view.query {
        let _ = writeln!(out, "\nSearch results for {query:?}:");
        if let Some(e) = &view.search_error {
            push_error(&mut out, "searching registry", e);
        }
        for hit in &view.hits {
            let _ = writeln!(
                out,
                "{:<40}  {:>6}  {:<8}  {}",
                hit.name,
                hit.stars,
                if hit.official { "official" } else { "" },
                hit.description
            );
        }
    }
    out
}

fn render_image_row(image: &ImageSummary) -> String {
    let tags = if image.tags.is_empty() {
        "<none>".to_string()
    } else {
        image.tags.join(", ")
    };
    let created = image
        .created
        .map(|c| c.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<12}  {:<40}  {:>12}  {:<20}\n",
        image.id.short(),
        tags,
        format_megabytes(image.size),
        created
    )
}

pub fn render_launch_menu(menu: &Listing<LaunchableEndpoint>) -> String {
    let mut out = String::new();
    if menu.items.is_empty() && menu.error.is_none() {
        out.push_str("No running containers publish ports on all interfaces.\n");
    }
    for endpoint in &menu.items {
        let urls: Vec<&str> = endpoint.urls.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{:<24}  {}", endpoint.name, urls.join("  "));
    }
    push_listing_notes(&mut out, "containers", menu);
    out
}

pub fn render_logs(view: &ContainerLogsView) -> String {
    let mut out = String::new();
    for line in &view.lines {
        match line.stream {
            LogStream::Stdout => out.push_str(&line.content),
            LogStream::Stderr => {
                out.push_str("stderr: ");
                out.push_str(&line.content);
            }
        }
        if !line.content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
