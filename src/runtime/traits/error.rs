// ABOUTME: Uniform error taxonomy for every runtime capability trait.
// ABOUTME: NotFound, Conflict, Transport and Unknown, with a kind() accessor.

/// Failure of a single runtime call.
///
/// Every adapter operation reports failures through this closed set so that
/// call sites can match exhaustively. Nothing here is ever retried by the
/// adapter itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The object does not exist (anymore).
    #[error("not found: {0}")]
    NotFound(String),

    /// The object's current state forbids the operation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The daemon is unreachable, the connection failed, or the call timed out.
    #[error("runtime unreachable: {0}")]
    Transport(String),

    /// Any other daemon-reported failure.
    #[error("runtime error: {0}")]
    Unknown(String),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeErrorKind {
    NotFound,
    Conflict,
    Transport,
    Unknown,
}

impl RuntimeError {
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::NotFound(_) => RuntimeErrorKind::NotFound,
            RuntimeError::Conflict(_) => RuntimeErrorKind::Conflict,
            RuntimeError::Transport(_) => RuntimeErrorKind::Transport,
            RuntimeError::Unknown(_) => RuntimeErrorKind::Unknown,
        }
    }

    /// The diagnostic message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            RuntimeError::NotFound(m)
            | RuntimeError::Conflict(m)
            | RuntimeError::Transport(m)
            | RuntimeError::Unknown(m) => m,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == RuntimeErrorKind::NotFound
    }
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuntimeErrorKind::NotFound => "not found",
            RuntimeErrorKind::Conflict => "conflict",
            RuntimeErrorKind::Transport => "transport",
            RuntimeErrorKind::Unknown => "unknown",
        })
    }
}

/// Serialized as `{"kind": ..., "message": ...}` for JSON output.
impl serde::Serialize for RuntimeError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RuntimeError", 2)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
