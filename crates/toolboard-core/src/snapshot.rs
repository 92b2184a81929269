use crate::catalog::ToolCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::record::ToolStatusRecord;
use crate::summary::StatusSummary;
use crate::{aggregate, docs, progress, report, table};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The aggregated status inventory at one point in time. Recomputed fresh
/// on every parse; the source documents are the only durable state and are
/// never written by this crate.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tools: BTreeMap<String, ToolStatusRecord>,
    pub generated_at: DateTime<Utc>,
}

impl Snapshot {
    /// Pure pipeline over in-memory document text: table and detailed
    /// records come from the status report, progress entries from the
    /// progress log, merged in that order.
    pub fn parse(status_text: &str, progress_text: &str) -> Self {
        let table = table::parse_status_table(status_text);
        let detailed = report::parse_detailed_reports(status_text);
        let progress = progress::parse_progress_log(progress_text);
        tracing::debug!(
            table = table.len(),
            detailed = detailed.len(),
            progress = progress.len(),
            "parsed status documents"
        );
        Snapshot {
            tools: aggregate::merge(table, detailed, progress),
            generated_at: Utc::now(),
        }
    }

    /// Read the configured documents under `root` and parse them. Missing
    /// documents behave as empty; other I/O errors propagate.
    pub fn load(root: &Path, config: &Config) -> Result<Self> {
        let status = docs::read_document(&root.join(&config.status_doc))?;
        let progress = docs::read_document(&root.join(&config.progress_doc))?;
        Ok(Self::parse(&status, &progress))
    }

    pub fn get(&self, name: &str) -> Option<&ToolStatusRecord> {
        self.tools.get(name)
    }

    pub fn summary(&self, catalog: &ToolCatalog) -> StatusSummary {
        StatusSummary::compute(catalog, &self.tools)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
