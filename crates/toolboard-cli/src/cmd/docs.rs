use crate::output::{print_json, print_table};
use anyhow::Context;
use std::path::Path;
use toolboard_core::config::Config;
use toolboard_core::docs;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    let infos = vec![
        docs::document_info(root, &config.status_doc)?,
        docs::document_info(root, &config.progress_doc)?,
    ];

    if json {
        return print_json(&infos);
    }

    let rows: Vec<Vec<String>> = infos
        .iter()
        .map(|i| {
            vec![
                i.name.clone(),
                (if i.exists { "yes" } else { "no" }).to_string(),
                i.lines.to_string(),
                i.bytes.to_string(),
                i.modified
                    .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    print_table(&["DOCUMENT", "EXISTS", "LINES", "BYTES", "MODIFIED"], rows);
    Ok(())
}
