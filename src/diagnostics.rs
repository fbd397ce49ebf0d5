// ABOUTME: Diagnostics accumulator for non-fatal warnings while building views.
// ABOUTME: A row that could not be fully enriched still renders; the reason is kept here.

use serde::Serialize;

/// Collects non-fatal warnings while a listing is assembled.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(subject = %warning.subject, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal problem attached to one row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// The container or image the warning is about.
    pub subject: String,
    pub message: String,
}

impl Warning {
    /// The image a container references could not be looked up.
    pub fn image_unresolved(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ImageUnresolved,
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Stats for a running container could not be sampled.
    pub fn metrics_unavailable(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MetricsUnavailable,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Categories of per-row warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Image lookup failed; the row shows the unresolved sentinel.
    ImageUnresolved,
    /// Stats call failed; the row has no metrics.
    MetricsUnavailable,
}
