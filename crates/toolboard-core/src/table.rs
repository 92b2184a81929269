use crate::record::ToolStatusRecord;
use crate::types::StatusCategory;

/// Exact header row that opens the tool status table.
pub const STATUS_TABLE_HEADER: &str = "| Tool | Status | Issues | Priority |";

/// Extract tool records from the fixed 4-column status table.
///
/// Scans lines in order. The table opens at a line equal to
/// [`STATUS_TABLE_HEADER`] (after trimming) and closes at the first
/// subsequent line that does not start with `|`, or at end of input.
/// Separator rows, repeated header rows, and rows with fewer than three
/// non-empty cells are skipped. A document without the header yields an
/// empty vec.
pub fn parse_status_table(document: &str) -> Vec<ToolStatusRecord> {
    let mut records = Vec::new();
    let mut in_table = false;

    for line in document.lines() {
        if !in_table {
            if line.trim() == STATUS_TABLE_HEADER {
                in_table = true;
            }
            continue;
        }

        if !line.starts_with('|') {
            break;
        }
        if line.contains("---") || line.trim() == STATUS_TABLE_HEADER {
            continue;
        }

        if let Some(record) = parse_row(line) {
            records.push(record);
        }
    }

    records
}

fn parse_row(line: &str) -> Option<ToolStatusRecord> {
    let raw: Vec<&str> = line.split('|').collect();
    if raw.len() < 2 {
        return None;
    }
    // Leading and trailing pipes produce empty first/last segments.
    let cells: Vec<&str> = raw[1..raw.len() - 1].iter().map(|c| c.trim()).collect();
    if cells.len() < 3 || cells.iter().filter(|c| !c.is_empty()).count() < 3 {
        return None;
    }

    let status = cells[1].to_string();
    let mut record = ToolStatusRecord::new(cells[0]);
    record.status_category = Some(StatusCategory::classify_or_untested(&status));
    record.status_text = Some(status);
    record.issues = Some(cells[2].to_string());
    record.priority = Some(cells.get(3).copied().unwrap_or("-").to_string());
    Some(record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Tool Testing Status

| Tool | Status | Issues | Priority |
|------|--------|--------|----------|
| list_cleanrooms | ✅ Verified | None | - |
| create_aws_s3_connection | 🟡 Partial | Needs retry | High |

Some trailing prose.
";

    #[test]
    fn parses_rows_after_header() {
        let records = parse_status_table(DOC);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name, "list_cleanrooms");
        assert_eq!(records[0].category(), StatusCategory::Verified);
        assert_eq!(records[0].issues.as_deref(), Some("None"));
        assert_eq!(records[0].priority.as_deref(), Some("-"));

        assert_eq!(records[1].name, "create_aws_s3_connection");
        assert_eq!(records[1].category(), StatusCategory::Partial);
        assert_eq!(records[1].issues.as_deref(), Some("Needs retry"));
        assert_eq!(records[1].priority.as_deref(), Some("High"));
    }

    #[test]
    fn no_header_yields_empty() {
        assert!(parse_status_table("| a | b | c |\nplain text").is_empty());
        assert!(parse_status_table("").is_empty());
    }

    #[test]
    fn table_closed_by_non_pipe_line() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| tool_a | ✅ Verified | None | - |
done
| tool_b | ✅ Verified | None | - |
";
        let records = parse_status_table(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "tool_a");
    }

    #[test]
    fn unclosed_table_at_eof() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| tool_a | ❌ Broken | Auth error | High |";
        let records = parse_status_table(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), StatusCategory::Issue);
    }

    #[test]
    fn short_rows_are_skipped() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| only_two | cells |
| tool_a | ✅ Verified | None | - |
";
        let records = parse_status_table(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "tool_a");
    }

    #[test]
    fn missing_priority_defaults_to_dash() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| tool_a | ✅ Verified | None |
";
        let records = parse_status_table(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].priority.as_deref(), Some("-"));
    }

    #[test]
    fn repeated_header_row_is_skipped() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| Tool | Status | Issues | Priority |
| tool_a | ✅ Verified | None | - |
";
        let records = parse_status_table(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "tool_a");
    }

    #[test]
    fn parse_is_idempotent() {
        let first = parse_status_table(DOC);
        let second = parse_status_table(DOC);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognized_status_is_untested() {
        let doc = "\
| Tool | Status | Issues | Priority |
|---|---|---|---|
| tool_a | pending review | - | Low |
";
        let records = parse_status_table(doc);
        assert_eq!(records[0].category(), StatusCategory::Untested);
        // Category is always resolvable to one of the four fixed values.
        assert!(StatusCategory::all().contains(&records[0].category()));
    }
}
