use crate::record::ToolStatusRecord;
use crate::types::StatusCategory;
use regex::Regex;
use std::sync::OnceLock;

static BOLD_SPAN_RE: OnceLock<Regex> = OnceLock::new();

fn bold_span_re() -> &'static Regex {
    BOLD_SPAN_RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap())
}

/// Text inside the first `**bold**` span on a line, if any.
fn first_bold_span(line: &str) -> Option<&str> {
    bold_span_re()
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Section subheaders within a detailed tool report. Bullets are collected
/// into whichever section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Working,
    Issues,
    Technical,
    NextSteps,
}

fn section_for(line: &str) -> Option<Section> {
    if line.contains("#### ✅ **Working Components:**") {
        Some(Section::Working)
    } else if line.contains("#### ❌ **Current Issues:**") {
        Some(Section::Issues)
    } else if line.contains("#### 🔍 **Technical Details:**") {
        Some(Section::Technical)
    } else if line.contains("#### 🎯 **Next Steps:**") {
        Some(Section::NextSteps)
    } else {
        None
    }
}

/// Extract the richer per-tool records from `### `-headed report sections.
///
/// A `### ` line containing a bold span opens a record named by the span; a
/// `### ` line without one closes any open record but opens nothing. Within
/// an open record, a `**Status**:` line sets the detailed status and its
/// category, section subheaders switch the active bullet list, and `- `
/// bullets accumulate into it. Records without a status line carry no
/// category and resolve to `untested` at consumption time.
pub fn parse_detailed_reports(document: &str) -> Vec<ToolStatusRecord> {
    let mut records = Vec::new();
    let mut current: Option<ToolStatusRecord> = None;
    let mut section: Option<Section> = None;

    for line in document.lines() {
        if line.starts_with("### ") {
            if let Some(done) = current.take() {
                records.push(done);
            }
            section = None;
            if let Some(name) = first_bold_span(line) {
                current = Some(ToolStatusRecord::new(name));
            }
            continue;
        }

        let Some(record) = current.as_mut() else {
            continue;
        };

        if let Some(rest) = line.strip_prefix("**Status**:") {
            let text = rest.trim().to_string();
            record.status_category = Some(StatusCategory::classify_or_untested(&text));
            record.detailed_status = Some(text);
        } else if let Some(next) = section_for(line) {
            section = Some(next);
        } else if let Some(bullet) = line.trim_start().strip_prefix("- ") {
            let bullet = bullet.trim().to_string();
            match section {
                Some(Section::Working) => record.working_components.push(bullet),
                Some(Section::Issues) => record.current_issues.push(bullet),
                Some(Section::NextSteps) => record.next_steps.push(bullet),
                Some(Section::Technical) => match record.technical_details.as_mut() {
                    Some(details) => {
                        details.push('\n');
                        details.push_str(&bullet);
                    }
                    None => record.technical_details = Some(bullet),
                },
                None => {}
            }
        }
    }

    if let Some(done) = current.take() {
        records.push(done);
    }

    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
