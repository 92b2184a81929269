use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;
use toolboard_core::catalog::ToolCatalog;
use toolboard_core::config::Config;
use toolboard_core::snapshot::Snapshot;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let snapshot = Snapshot::load(root, &config).context("failed to parse status documents")?;
    let catalog = ToolCatalog::builtin();
    let summary = snapshot.summary(&catalog);

    if json {
        return print_json(&summary);
    }

    println!(
        "Tools verified: {}/{} ({:.1}%)",
        summary.counts.verified, summary.counts.total, summary.coverage_percent
    );
    println!(
        "Partial: {}   Issues: {}   Untested: {}",
        summary.counts.partial, summary.counts.issue, summary.counts.untested
    );
    println!();

    let rows: Vec<Vec<String>> = summary
        .categories
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                c.counts.verified.to_string(),
                c.counts.partial.to_string(),
                c.counts.issue.to_string(),
                c.counts.untested.to_string(),
                c.counts.total.to_string(),
            ]
        })
        .collect();
    print_table(
        &["CATEGORY", "VERIFIED", "PARTIAL", "ISSUE", "UNTESTED", "TOTAL"],
        rows,
    );

    Ok(())
}
