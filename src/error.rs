//! Error types for agentfetch.

use thiserror::Error;

/// Errors surfaced by catalog fetching and persistence.
///
/// Transport and status failures are recovered inside the pipeline (the
/// offending document is skipped); serialization, I/O, and configuration
/// failures are fatal to the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection failure or timeout while fetching a document.
    #[error("transport failure for '{name}': {reason}")]
    Transport { name: String, reason: String },

    /// Fetch completed with a non-success HTTP status.
    #[error("HTTP {status} for '{name}'")]
    Status { name: String, status: u16 },

    /// Catalog could not be rendered as JSON.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_display_names_document() {
        let err = FetchError::Transport {
            name: "debugger.md".to_string(),
            reason: "connection refused".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("debugger.md"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn status_display_carries_code() {
        let err = FetchError::Status {
            name: "missing.md".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 for 'missing.md'");
    }
}
