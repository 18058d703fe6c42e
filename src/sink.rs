//! Catalog sink: persist the aggregated catalog.

use crate::catalog::AgentCatalog;
use crate::error::FetchError;
use std::fs;
use std::path::PathBuf;

/// Persistence capability injected into the pipeline.
///
/// Invoked exactly once per run, after the whole manifest is processed.
/// A failure here is fatal to the run.
pub trait CatalogSink: Send + Sync {
    fn persist(&self, catalog: &AgentCatalog) -> Result<(), FetchError>;
}

/// Writes the catalog as pretty-printed JSON, fully overwriting the target.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl CatalogSink for JsonFileSink {
    fn persist(&self, catalog: &AgentCatalog) -> Result<(), FetchError> {
        let text = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AgentRecord;
    use tempfile::TempDir;

    #[test]
    fn writes_pretty_json_catalog() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("opencode.json");
        let sink = JsonFileSink::new(path.clone());

        let catalog = AgentCatalog::new(vec![AgentRecord {
            name: "foo".to_string(),
            description: "bar".to_string(),
            prompt: "Hello world".to_string(),
            model: Some("x".to_string()),
            tools: None,
        }]);
        sink.persist(&catalog).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        let agents = parsed.get("agents").and_then(|v| v.as_array()).unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].get("model").and_then(|v| v.as_str()), Some("x"));
        assert!(agents[0].get("tools").is_none());
        // Indented output, not a single line.
        assert!(written.lines().count() > 1);
    }

    #[test]
    fn overwrites_existing_content_entirely() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("opencode.json");
        fs::write(&path, "stale content that is much longer than the new output").unwrap();

        let sink = JsonFileSink::new(path.clone());
        sink.persist(&AgentCatalog::default()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, serde_json::json!({ "agents": [] }));
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let temp = TempDir::new().unwrap();
        let sink = JsonFileSink::new(temp.path().join("missing-dir").join("opencode.json"));
        let err = sink.persist(&AgentCatalog::default()).unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
