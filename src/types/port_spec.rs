// ABOUTME: Parser for user-supplied port publishing specs.
// ABOUTME: Accepts comma-separated HOST:CONTAINER pairs, e.g. "8080:80, 9000:9000".

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePortSpecError {
    #[error("invalid port mapping {0:?}: expected HOST:CONTAINER, e.g. 8080:80")]
    MalformedEntry(String),

    #[error("invalid port {port:?} in mapping {entry:?}: must be 1-65535")]
    InvalidPort { entry: String, port: String },
}

/// Published ports keyed by container port, valued by host port.
///
/// A later entry for the same container port replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSpec {
    mappings: BTreeMap<u16, u16>,
}

impl PortSpec {
    /// Parse a spec. Blank input means "publish nothing"; any malformed entry
    /// rejects the whole spec.
    pub fn parse(input: &str) -> Result<Self, ParsePortSpecError> {
        let mut mappings = BTreeMap::new();
        if input.trim().is_empty() {
            return Ok(Self { mappings });
        }

        for raw in input.split(',') {
            let entry = raw.trim();
            let (host, container) = entry
                .split_once(':')
                .filter(|(_, container)| !container.contains(':'))
                .ok_or_else(|| ParsePortSpecError::MalformedEntry(entry.to_string()))?;

            let host = parse_port(entry, host)?;
            let container = parse_port(entry, container)?;
            mappings.insert(container, host);
        }

        Ok(Self { mappings })
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Host port published for the given container port.
    pub fn host_port(&self, container_port: u16) -> Option<u16> {
        self.mappings.get(&container_port).copied()
    }

    /// `(container_port, host_port)` pairs in ascending container-port order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.mappings.iter().map(|(c, h)| (*c, *h))
    }
}

fn parse_port(entry: &str, raw: &str) -> Result<u16, ParsePortSpecError> {
    let raw = raw.trim();
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ParsePortSpecError::InvalidPort {
            entry: entry.to_string(),
            port: raw.to_string(),
        }),
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (container, host) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{host}:{container}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for PortSpec {
    type Err = ParsePortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
