//! `bkit inspect <module>`.

use anyhow::Result;
use bridgekit_core::{DEFAULT_MODULE_VIEW, ModuleRegistry};
use bridgekit_types::manifest::ObjectManifest;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

pub fn inspect_module(registry: &ModuleRegistry, name: &str, json: bool) -> Result<()> {
    let manifest = registry.require(name)?.manifest();

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("◆").bold(), style(&manifest.name).cyan().bold());
    print_object(&manifest.object, "  ");

    let default_view = manifest.views.get(DEFAULT_MODULE_VIEW);
    for (key, view) in manifest.views.iter().filter(|(k, _)| k.as_str() != DEFAULT_MODULE_VIEW) {
        let is_default = default_view == Some(view);
        println!();
        println!(
            "  {} view {}{}",
            style("▸").bold(),
            style(key).green(),
            if is_default { style(" (default)").dim().to_string() } else { String::new() }
        );
        println!("    type:   {}", style(&view.view_type).dim());
        println!("    props:  {}", view.props.join(", "));
        if !view.events.is_empty() {
            println!("    events: {}", view.events.join(", "));
        }
    }
    if let Some(view) = default_view.filter(|v| v.name.is_none()) {
        println!();
        println!("  {} default view {}", style("▸").bold(), style(&view.view_type).green());
        println!("    props:  {}", view.props.join(", "));
    }

    for class in &manifest.classes {
        println!();
        println!(
            "  {} class {}{}",
            style("▸").bold(),
            style(&class.name).magenta(),
            match &class.owner_type {
                Some(owner) => style(format!(" ({owner})")).dim().to_string(),
                None => String::new(),
            }
        );
        print_object(&class.object, "    ");
    }

    if !manifest.listeners.is_empty() {
        println!();
        let listeners: Vec<String> = manifest.listeners.iter().map(|e| e.to_string()).collect();
        println!("  {} listeners: {}", style("▸").bold(), listeners.join(", "));
    }
    if manifest.registers_activity_contracts {
        println!("  {} registers activity contracts", style("▸").bold());
    }
    println!();

    Ok(())
}

fn print_object(object: &ObjectManifest, indent: &str) {
    if !object.constants.is_empty() {
        for (key, value) in &object.constants {
            println!("{indent}const {} = {}", style(key).yellow(), value);
        }
    }

    if !object.functions.is_empty() || !object.properties.is_empty() {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Member").fg(Color::White),
            Cell::new("Kind").fg(Color::White),
            Cell::new("Signature").fg(Color::White),
        ]);
        for function in &object.functions {
            let kind = if function.is_async { "async function" } else { "function" };
            table.add_row(vec![
                Cell::new(&function.name).fg(Color::Cyan),
                Cell::new(kind),
                Cell::new(format!("({})", function.args.join(", "))).fg(Color::DarkGrey),
            ]);
        }
        for property in &object.properties {
            let kind = if property.writable { "property (rw)" } else { "property" };
            table.add_row(vec![
                Cell::new(&property.name).fg(Color::Cyan),
                Cell::new(kind),
                Cell::new(""),
            ]);
        }
        for line in table.to_string().lines() {
            println!("{indent}{line}");
        }
    }

    if !object.events.is_empty() {
        println!("{indent}events: {}", object.events.join(", "));
    }
}
