use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;
use std::str::FromStr;
use toolboard_core::catalog::ToolCatalog;
use toolboard_core::config::Config;
use toolboard_core::snapshot::Snapshot;
use toolboard_core::summary::ToolRow;
use toolboard_core::types::StatusCategory;

pub fn run(
    root: &Path,
    category: Option<&str>,
    status: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let status_filter = status
        .map(StatusCategory::from_str)
        .transpose()
        .context("unknown --status value")?;

    let config = Config::load(root).context("failed to load config")?;
    let snapshot = Snapshot::load(root, &config).context("failed to parse status documents")?;
    let catalog = ToolCatalog::builtin();
    let summary = snapshot.summary(&catalog);

    let rows: Vec<&ToolRow> = summary
        .rows
        .iter()
        .filter(|r| category.map(|c| r.category == c).unwrap_or(true))
        .filter(|r| status_filter.map(|s| r.status == s).unwrap_or(true))
        .filter(|r| search.map(|s| r.name.contains(s)).unwrap_or(true))
        .collect();

    if json {
        return print_json(&rows);
    }

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let record = snapshot.get(&r.name);
            vec![
                format!("{} {}", r.status.icon(), r.name),
                r.category.clone(),
                r.status.to_string(),
                record.map(|rec| rec.issues_display().to_string()).unwrap_or_else(|| "-".into()),
                record
                    .map(|rec| rec.priority_display().to_string())
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();

    print_table(&["TOOL", "CATEGORY", "STATUS", "ISSUES", "PRIORITY"], table_rows);
    println!();
    println!("{} of {} tools shown", rows.len(), summary.counts.total);

    Ok(())
}
