//! `bkit list`.

use anyhow::Result;
use bridgekit_core::ModuleRegistry;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

pub fn list_modules(registry: &ModuleRegistry, json: bool) -> Result<()> {
    let manifests = registry.manifests();

    if json {
        let summary: Vec<serde_json::Value> = manifests
            .iter()
            .map(|m| {
                serde_json::json!({
                    "name": m.name,
                    "functions": m.object.functions.len(),
                    "views": m.views.keys().collect::<Vec<_>>(),
                    "classes": m.classes.len(),
                    "listeners": m.listeners,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if manifests.is_empty() {
        println!();
        println!(
            "  {} No modules registered. Check {} in your config.",
            style("i").blue().bold(),
            style("disabled_modules").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Module").fg(Color::White),
        Cell::new("Functions").fg(Color::White),
        Cell::new("Views").fg(Color::White),
        Cell::new("Classes").fg(Color::White),
        Cell::new("Listeners").fg(Color::White),
    ]);

    for manifest in &manifests {
        let views: Vec<&str> = manifest
            .views
            .iter()
            .filter(|(key, _)| key.as_str() != bridgekit_core::DEFAULT_MODULE_VIEW)
            .map(|(key, _)| key.as_str())
            .collect();
        table.add_row(vec![
            Cell::new(&manifest.name).fg(Color::Cyan),
            Cell::new(manifest.object.functions.len()),
            Cell::new(views.join(", ")),
            Cell::new(manifest.classes.len()),
            Cell::new(manifest.listeners.len()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} module{}",
        style(manifests.len()).bold(),
        if manifests.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
