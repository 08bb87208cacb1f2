//! `bkit simulate`: drive every registered module through one lifecycle.

use anyhow::Result;
use bridgekit_core::ModuleRegistry;
use bridgekit_types::event::EventName;
use bridgekit_types::payload::{Activity, ActivityResultPayload, Intent, RESULT_OK};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde::Serialize;

/// One posted event and how many listeners received it.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationStep {
    pub step: usize,
    pub event: EventName,
    pub listeners: usize,
}

/// Post the full lifecycle sequence and collect per-event delivery counts.
pub async fn run_lifecycle(registry: &ModuleRegistry, url: &str) -> Vec<SimulationStep> {
    let activity = Activity::new("main", "MainActivity");
    let intent = Intent::new("android.intent.action.VIEW").with_data(url);
    let result = ActivityResultPayload {
        request_code: 1,
        result_code: RESULT_OK,
        data: Some(intent.clone()),
    };

    let mut deliveries = Vec::new();

    let created = registry.create_all().await;
    tracing::info!(contracts = created.contracts, "activity contracts registered");
    deliveries.push((EventName::ModuleCreate, created.listeners));

    deliveries.push((
        EventName::ActivityEntersForeground,
        registry.post(EventName::ActivityEntersForeground),
    ));
    deliveries.push((EventName::OnNewIntent, registry.post_new_intent(&intent)));
    deliveries.push((
        EventName::OnActivityResult,
        registry.post_activity_result(&activity, &result),
    ));
    deliveries.push((
        EventName::OnUserLeavesActivity,
        registry.post(EventName::OnUserLeavesActivity),
    ));
    deliveries.push((
        EventName::ActivityEntersBackground,
        registry.post(EventName::ActivityEntersBackground),
    ));
    deliveries.push((
        EventName::ActivityDestroys,
        registry.post(EventName::ActivityDestroys),
    ));
    deliveries.push((EventName::ModuleDestroy, registry.destroy_all()));

    deliveries
        .into_iter()
        .enumerate()
        .map(|(i, (event, listeners))| SimulationStep {
            step: i + 1,
            event,
            listeners,
        })
        .collect()
}

pub async fn simulate(registry: &ModuleRegistry, url: &str, json: bool) -> Result<()> {
    let steps = run_lifecycle(registry, url).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Step").fg(Color::White),
        Cell::new("Event").fg(Color::White),
        Cell::new("Listeners").fg(Color::White),
    ]);

    for step in &steps {
        let count = if step.listeners == 0 {
            Cell::new(step.listeners).fg(Color::DarkGrey)
        } else {
            Cell::new(step.listeners).fg(Color::Green)
        };
        table.add_row(vec![
            Cell::new(step.step),
            Cell::new(step.event).fg(Color::Cyan),
            count,
        ]);
    }

    println!();
    println!(
        "  {} Simulating lifecycle for {} module{}",
        style("▸").bold(),
        style(registry.len()).bold(),
        if registry.len() == 1 { "" } else { "s" }
    );
    println!();
    println!("{table}");

    let contracts = registry.caller().contracts();
    if !contracts.is_empty() {
        println!();
        println!("  Activity contracts: {}", style(contracts.join(", ")).yellow());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use bridgekit_types::config::RegistryConfig;

    #[tokio::test]
    async fn lifecycle_visits_every_event_once() {
        let registry = samples::registry(RegistryConfig::default()).unwrap();
        let steps = run_lifecycle(&registry, "bkit://settings").await;

        assert_eq!(steps.len(), EventName::ALL.len());
        for event in EventName::ALL {
            assert_eq!(steps.iter().filter(|s| s.event == event).count(), 1);
        }
        assert_eq!(steps.first().unwrap().event, EventName::ModuleCreate);
        assert_eq!(steps.last().unwrap().event, EventName::ModuleDestroy);
    }

    #[tokio::test]
    async fn linking_module_receives_every_event() {
        let registry = samples::registry(RegistryConfig::default()).unwrap();
        let steps = run_lifecycle(&registry, "bkit://settings").await;

        // Only ExpoLinking registers listeners.
        assert!(steps.iter().all(|s| s.listeners == 1));
        assert_eq!(registry.caller().contracts(), vec!["OpenDocument"]);
    }

    #[tokio::test]
    async fn repeated_simulation_keeps_one_contract() {
        let registry = samples::registry(RegistryConfig::default()).unwrap();
        run_lifecycle(&registry, "bkit://settings").await;
        let steps = run_lifecycle(&registry, "bkit://home").await;

        assert_eq!(steps[0].listeners, 1);
        assert_eq!(registry.caller().contracts(), vec!["OpenDocument"]);
    }

    #[tokio::test]
    async fn disabled_modules_receive_nothing() {
        let registry = samples::registry(RegistryConfig {
            disabled_modules: vec!["ExpoLinking".to_string()],
            ..RegistryConfig::default()
        })
        .unwrap();
        let steps = run_lifecycle(&registry, "bkit://settings").await;

        assert!(steps.iter().all(|s| s.listeners == 0));
        assert!(registry.caller().is_empty());
    }
}
