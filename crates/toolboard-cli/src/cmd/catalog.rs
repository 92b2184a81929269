use crate::output::{print_json, print_table};
use toolboard_core::catalog::ToolCatalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    let catalog = ToolCatalog::builtin();

    if json {
        return print_json(&catalog);
    }

    let rows: Vec<Vec<String>> = catalog
        .categories()
        .iter()
        .flat_map(|c| {
            c.tools
                .iter()
                .map(|t| vec![t.clone(), c.label.clone()])
                .collect::<Vec<_>>()
        })
        .collect();

    print_table(&["TOOL", "CATEGORY"], rows);
    println!();
    println!(
        "{} tools across {} categories",
        catalog.tool_count(),
        catalog.categories().len()
    );

    Ok(())
}
