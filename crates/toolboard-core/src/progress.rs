use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static CODE_SPAN_RE: OnceLock<Regex> = OnceLock::new();

fn code_span_re() -> &'static Regex {
    // Bold+code span: **`tool_name`**
    CODE_SPAN_RE.get_or_init(|| Regex::new(r"\*\*`([^`]+)`\*\*").unwrap())
}

/// One completion note from the progress log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressEntry {
    pub name: String,
    pub status_text: String,
    /// The source line, trimmed, kept for display.
    pub detail: String,
}

/// Extract completed-validation notes from the progress log.
///
/// The log is parsed loosely: any line carrying a bold+code tool name
/// together with a completion marker (`✅` or `VALIDATED`) counts. Lines
/// without both are ignored.
pub fn parse_progress_log(document: &str) -> Vec<ProgressEntry> {
    let mut entries = Vec::new();

    for line in document.lines() {
        if !line.contains("**`") {
            continue;
        }
        let has_check = line.contains('✅');
        if !has_check && !line.contains("VALIDATED") {
            continue;
        }
        if let Some(name) = code_span_re()
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
        {
            let status_text = if has_check { "✅ Verified" } else { "✅ Validated" };
            entries.push(ProgressEntry {
                name: name.to_string(),
                status_text: status_text.to_string(),
                detail: line.trim().to_string(),
            });
        }
    }

    entries
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
