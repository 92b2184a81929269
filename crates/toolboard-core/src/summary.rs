use crate::catalog::{ToolCatalog, UNCATEGORIZED};
use crate::record::ToolStatusRecord;
use crate::types::StatusCategory;
use serde::Serialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// StatusSummary
// ---------------------------------------------------------------------------

/// One catalog-joined row. Tools absent from the parsed documents appear
/// with `status = untested`; parsed tools absent from the catalog appear
/// under `uncategorized`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolRow {
    pub name: String,
    pub category: String,
    pub status: StatusCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusCounts {
    pub verified: usize,
    pub partial: usize,
    pub issue: usize,
    pub untested: usize,
    pub total: usize,
}

impl StatusCounts {
    fn add(&mut self, status: StatusCategory) {
        match status {
            StatusCategory::Verified => self.verified += 1,
            StatusCategory::Partial => self.partial += 1,
            StatusCategory::Issue => self.issue += 1,
            StatusCategory::Untested => self.untested += 1,
        }
        self.total += 1;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    #[serde(flatten)]
    pub counts: StatusCounts,
}

/// The testing-dashboard numbers, shared by the CLI and the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub rows: Vec<ToolRow>,
    pub counts: StatusCounts,
    /// Percentage of rows whose status is `verified`.
    pub coverage_percent: f64,
    pub categories: Vec<CategoryBreakdown>,
}

impl StatusSummary {
    /// Join aggregated records against the catalog, in catalog order, then
    /// append any parsed tools the catalog does not know.
    pub fn compute(
        catalog: &ToolCatalog,
        tools: &BTreeMap<String, ToolStatusRecord>,
    ) -> StatusSummary {
        let mut rows = Vec::new();

        for category in catalog.categories() {
            for name in &category.tools {
                let record = tools.get(name);
                rows.push(ToolRow {
                    name: name.clone(),
                    category: category.label.clone(),
                    status: record.map(|r| r.category()).unwrap_or(StatusCategory::Untested),
                    status_text: record.and_then(|r| r.status_text.clone()),
                });
            }
        }

        // BTreeMap iteration keeps the uncategorized tail deterministic.
        for (name, record) in tools {
            if !catalog.contains(name) {
                rows.push(ToolRow {
                    name: name.clone(),
                    category: UNCATEGORIZED.to_string(),
                    status: record.category(),
                    status_text: record.status_text.clone(),
                });
            }
        }

        let mut counts = StatusCounts::default();
        let mut per_category: BTreeMap<&str, StatusCounts> = BTreeMap::new();
        for row in &rows {
            counts.add(row.status);
            per_category
                .entry(row.category.as_str())
                .or_default()
                .add(row.status);
        }

        let coverage_percent = if counts.total == 0 {
            0.0
        } else {
            counts.verified as f64 * 100.0 / counts.total as f64
        };

        // Emit breakdowns in catalog declaration order, uncategorized last.
        let mut categories: Vec<CategoryBreakdown> = catalog
            .categories()
            .iter()
            .filter_map(|c| {
                per_category.remove(c.label.as_str()).map(|counts| CategoryBreakdown {
                    category: c.label.clone(),
                    counts,
                })
            })
            .collect();
        if let Some(counts) = per_category.remove(UNCATEGORIZED) {
            categories.push(CategoryBreakdown {
                category: UNCATEGORIZED.to_string(),
                counts,
            });
        }

        StatusSummary {
            rows,
            counts,
            coverage_percent,
            categories,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: StatusCategory) -> (String, ToolStatusRecord) {
        let mut r = ToolStatusRecord::new(name);
        r.status_category = Some(status);
        r.status_text = Some(format!("{} {}", status.icon(), status));
        (name.to_string(), r)
    }

    #[test]
    fn absent_tools_default_to_untested() {
        let catalog = ToolCatalog::builtin();
        let tools = BTreeMap::new();
        let summary = StatusSummary::compute(&catalog, &tools);

        assert_eq!(summary.counts.total, 45);
        assert_eq!(summary.counts.untested, 45);
        assert_eq!(summary.counts.verified, 0);
        assert_eq!(summary.coverage_percent, 0.0);
        assert!(summary.rows.iter().all(|r| r.status == StatusCategory::Untested));
    }

    #[test]
    fn parsed_records_override_default() {
        let catalog = ToolCatalog::builtin();
        let tools: BTreeMap<_, _> = [
            record("list_cleanrooms", StatusCategory::Verified),
            record("create_aws_s3_connection", StatusCategory::Partial),
        ]
        .into_iter()
        .collect();

        let summary = StatusSummary::compute(&catalog, &tools);
        assert_eq!(summary.counts.verified, 1);
        assert_eq!(summary.counts.partial, 1);
        assert_eq!(summary.counts.untested, 43);
        assert!((summary.coverage_percent - 100.0 / 45.0).abs() < 1e-9);

        let row = summary
            .rows
            .iter()
            .find(|r| r.name == "list_cleanrooms")
            .unwrap();
        assert_eq!(row.category, "Foundation Tools");
        assert_eq!(row.status, StatusCategory::Verified);
    }

    #[test]
    fn unknown_tools_land_in_uncategorized() {
        let catalog = ToolCatalog::builtin();
        let tools: BTreeMap<_, _> = [record("experimental_tool", StatusCategory::Issue)]
            .into_iter()
            .collect();

        let summary = StatusSummary::compute(&catalog, &tools);
        assert_eq!(summary.counts.total, 46);

        let row = summary.rows.last().unwrap();
        assert_eq!(row.name, "experimental_tool");
        assert_eq!(row.category, UNCATEGORIZED);

        let breakdown = summary.categories.last().unwrap();
        assert_eq!(breakdown.category, UNCATEGORIZED);
        assert_eq!(breakdown.counts.issue, 1);
    }

    #[test]
    fn category_breakdowns_sum_to_overall() {
        let catalog = ToolCatalog::builtin();
        let tools: BTreeMap<_, _> = [
            record("list_cleanrooms", StatusCategory::Verified),
            record("execute_question_run", StatusCategory::Verified),
            record("partner_onboarding_wizard", StatusCategory::Issue),
        ]
        .into_iter()
        .collect();

        let summary = StatusSummary::compute(&catalog, &tools);
        let total: usize = summary.categories.iter().map(|c| c.counts.total).sum();
        assert_eq!(total, summary.counts.total);
        let verified: usize = summary.categories.iter().map(|c| c.counts.verified).sum();
        assert_eq!(verified, 2);
    }
}
