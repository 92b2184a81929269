use crate::progress::ProgressEntry;
use crate::record::ToolStatusRecord;
use crate::types::StatusCategory;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Merge the three record sources into one mapping keyed by tool name.
///
/// Order is part of the contract: table records seed the mapping, detailed
/// records shallow-merge over (or insert beside) them, and progress entries
/// only fill gaps — a progress note never overwrites a record the other two
/// sources already produced. The result has exactly one entry per distinct
/// name.
pub fn merge(
    table: Vec<ToolStatusRecord>,
    detailed: Vec<ToolStatusRecord>,
    progress: Vec<ProgressEntry>,
) -> BTreeMap<String, ToolStatusRecord> {
    let mut merged: BTreeMap<String, ToolStatusRecord> = BTreeMap::new();

    for record in table {
        match merged.entry(record.name.clone()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge_from(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    for record in detailed {
        match merged.entry(record.name.clone()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge_from(record),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    for entry in progress {
        merged
            .entry(entry.name.clone())
            .or_insert_with(|| minimal_verified(&entry));
    }

    merged
}

/// Minimal record for a tool known only from the progress log.
fn minimal_verified(entry: &ProgressEntry) -> ToolStatusRecord {
    let mut record = ToolStatusRecord::new(&entry.name);
    record.status_text = Some(entry.status_text.clone());
    record.status_category = Some(StatusCategory::Verified);
    record.issues = Some("None".to_string());
    record.priority = Some("-".to_string());
    record
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table_record(name: &str, status: &str) -> ToolStatusRecord {
        let mut r = ToolStatusRecord::new(name);
        r.status_category = Some(StatusCategory::classify_or_untested(status));
        r.status_text = Some(status.to_string());
        r.issues = Some("None".to_string());
        r.priority = Some("-".to_string());
        r
    }

    fn progress_entry(name: &str) -> ProgressEntry {
        ProgressEntry {
            name: name.to_string(),
            status_text: "✅ Verified".to_string(),
            detail: format!("- **`{name}`** ✅ VALIDATED"),
        }
    }

    #[test]
    fn detailed_overrides_table_and_keeps_table_fields() {
        let table = vec![table_record("tool_a", "🟡 Partial")];
        let mut detailed = ToolStatusRecord::new("tool_a");
        detailed.detailed_status = Some("✅ Verified after fix".to_string());
        detailed.status_category = Some(StatusCategory::Verified);
        detailed.working_components = vec!["All paths".to_string()];

        let merged = merge(table, vec![detailed], vec![progress_entry("tool_a")]);
        assert_eq!(merged.len(), 1);

        let record = &merged["tool_a"];
        // Detailed category wins over the table's.
        assert_eq!(record.category(), StatusCategory::Verified);
        // Detailed-only field preserved.
        assert_eq!(record.working_components, vec!["All paths"]);
        // Table-only fields not erased.
        assert_eq!(record.issues.as_deref(), Some("None"));
        // Progress did not replace anything.
        assert_eq!(
            record.detailed_status.as_deref(),
            Some("✅ Verified after fix")
        );
    }

    #[test]
    fn detailed_only_tool_is_inserted() {
        let mut detailed = ToolStatusRecord::new("tool_b");
        detailed.status_category = Some(StatusCategory::Issue);
        let merged = merge(Vec::new(), vec![detailed], Vec::new());
        assert_eq!(merged["tool_b"].category(), StatusCategory::Issue);
    }

    #[test]
    fn progress_fills_gaps_only() {
        let table = vec![table_record("tool_a", "❌ Broken")];
        let merged = merge(
            table,
            Vec::new(),
            vec![progress_entry("tool_a"), progress_entry("tool_c")],
        );

        // Existing entry untouched by the progress note.
        assert_eq!(merged["tool_a"].category(), StatusCategory::Issue);

        // Gap filled with a minimal verified record.
        let filled = &merged["tool_c"];
        assert_eq!(filled.category(), StatusCategory::Verified);
        assert_eq!(filled.issues.as_deref(), Some("None"));
        assert_eq!(filled.priority.as_deref(), Some("-"));
    }

    #[test]
    fn one_entry_per_distinct_name() {
        let table = vec![
            table_record("tool_a", "✅ Verified"),
            table_record("tool_a", "🟡 Partial"),
        ];
        let merged = merge(table, Vec::new(), Vec::new());
        assert_eq!(merged.len(), 1);
        // Later row wins within the same source.
        assert_eq!(merged["tool_a"].category(), StatusCategory::Partial);
    }

    #[test]
    fn names_are_case_sensitive() {
        let table = vec![
            table_record("Tool_A", "✅ Verified"),
            table_record("tool_a", "🟡 Partial"),
        ];
        let merged = merge(table, Vec::new(), Vec::new());
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn empty_sources_yield_empty_mapping() {
        assert!(merge(Vec::new(), Vec::new(), Vec::new()).is_empty());
    }
}
