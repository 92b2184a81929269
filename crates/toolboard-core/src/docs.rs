use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Default status-report document name.
pub const STATUS_DOC: &str = "MCP_TOOL_TESTING_STATUS.md";
/// Default progress-log document name.
pub const PROGRESS_DOC: &str = "TESTING_PROGRESS.md";

/// Read a source document, treating a missing file as an empty document.
/// Any other I/O failure propagates to the caller.
pub fn read_document(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// DocumentInfo
// ---------------------------------------------------------------------------

/// Size and freshness of one source document, for the status panel.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentInfo {
    pub name: String,
    pub exists: bool,
    pub bytes: u64,
    pub lines: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// Stat one document under `root`. A missing file yields an all-zero entry
/// rather than an error.
pub fn document_info(root: &Path, name: &str) -> Result<DocumentInfo> {
    let path = root.join(name);
    let Ok(meta) = std::fs::metadata(&path) else {
        return Ok(DocumentInfo {
            name: name.to_string(),
            exists: false,
            bytes: 0,
            lines: 0,
            modified: None,
        });
    };

    let text = read_document(&path)?;
    let modified = meta.modified().ok().map(DateTime::<Utc>::from);

    Ok(DocumentInfo {
        name: name.to_string(),
        exists: true,
        bytes: meta.len(),
        lines: text.lines().count(),
        modified,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
