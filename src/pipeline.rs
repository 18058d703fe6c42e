//! Aggregation pipeline: fetch, parse, collect, persist.
//!
//! Identifiers are processed strictly in order, one at a time. A failed
//! fetch or an unrecognized document skips that identifier and the run
//! continues; only persistence failures are fatal. Survivor order always
//! matches manifest order.

use crate::catalog::AgentCatalog;
use crate::error::FetchError;
use crate::frontmatter;
use crate::sink::CatalogSink;
use crate::source::DocumentSource;
use serde::Serialize;
use tracing::{info, warn};

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchReport {
    /// Identifiers attempted, in manifest order.
    pub attempted: usize,
    /// Records collected and persisted.
    pub collected: usize,
    /// Identifiers skipped on fetch failure.
    pub transport_failures: usize,
    /// Identifiers skipped because the content had no frontmatter header.
    pub format_failures: usize,
}

/// Run the pipeline over `identifiers`, persisting the catalog through `sink`.
///
/// Returns the persisted catalog together with a run summary.
pub async fn run(
    identifiers: &[String],
    source: &dyn DocumentSource,
    sink: &dyn CatalogSink,
) -> Result<(AgentCatalog, FetchReport), FetchError> {
    let mut agents = Vec::new();
    let mut transport_failures = 0;
    let mut format_failures = 0;

    for name in identifiers {
        info!(document = %name, "fetching");

        let content = match source.fetch(name).await {
            Ok(content) => content,
            Err(err) => {
                warn!(document = %name, error = %err, "skipped: fetch failed");
                transport_failures += 1;
                continue;
            }
        };

        match frontmatter::parse(&content) {
            Some(record) => {
                info!(document = %name, agent = %record.name, "parsed");
                agents.push(record);
            }
            None => {
                warn!(document = %name, "skipped: no frontmatter header");
                format_failures += 1;
            }
        }
    }

    let catalog = AgentCatalog::new(agents);
    sink.persist(&catalog)?;

    let report = FetchReport {
        attempted: identifiers.len(),
        collected: catalog.len(),
        transport_failures,
        format_failures,
    };
    info!(
        collected = report.collected,
        attempted = report.attempted,
        "catalog persisted"
    );

    Ok((catalog, report))
}
