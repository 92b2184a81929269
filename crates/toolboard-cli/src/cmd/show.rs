use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use toolboard_core::catalog::ToolCatalog;
use toolboard_core::config::Config;
use toolboard_core::snapshot::Snapshot;
use toolboard_core::BoardError;

pub fn run(root: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let snapshot = Snapshot::load(root, &config).context("failed to parse status documents")?;
    let catalog = ToolCatalog::builtin();

    let record = snapshot
        .get(name)
        .ok_or_else(|| BoardError::ToolNotFound(name.to_string()))?;

    if json {
        return print_json(record);
    }

    println!(
        "{} {}   [{}]",
        record.category().icon(),
        record.name,
        catalog.category_of(&record.name)
    );
    println!("Status:   {}", record.status_display());
    println!("Category: {}", record.category());
    println!("Issues:   {}", record.issues_display());
    println!("Priority: {}", record.priority_display());

    if let Some(detailed) = &record.detailed_status {
        println!();
        println!("Detailed status: {detailed}");
    }
    print_bullets("Working components", &record.working_components);
    print_bullets("Current issues", &record.current_issues);
    if let Some(technical) = &record.technical_details {
        println!();
        println!("Technical details:");
        for line in technical.lines() {
            println!("  {line}");
        }
    }
    print_bullets("Next steps", &record.next_steps);

    Ok(())
}

fn print_bullets(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}
