//! Catalog data model: agent records and the aggregated catalog.
//!
//! An [`AgentRecord`] is the structured result of parsing one agent
//! definition document. Records are collected in fetch order into an
//! [`AgentCatalog`], the single-field container serialized as the final
//! output document.

use serde::{Deserialize, Serialize};

/// One parsed agent definition.
///
/// `model` and `tools` are present in serialized output only when the
/// source frontmatter carried them; absence is distinct from an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Agent name from the frontmatter `name` key; empty if absent.
    pub name: String,

    /// Human-readable description; empty if absent.
    pub description: String,

    /// Whitespace-trimmed body text following the frontmatter block.
    pub prompt: String,

    /// Model override, if the frontmatter declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tool configuration, if the frontmatter declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
}

/// The aggregated catalog, wrapping records under the `agents` key.
///
/// Record order matches the order in which source identifiers were
/// processed successfully. Not mutated after serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCatalog {
    pub agents: Vec<AgentRecord>,
}

impl AgentCatalog {
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
