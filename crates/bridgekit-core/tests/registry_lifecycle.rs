//! End-to-end lifecycle of a module through the host registry.

use std::sync::{Arc, Mutex};

use bridgekit_core::view::ViewContext;
use bridgekit_core::{Module, ModuleDefinitionBuilder, ModuleRegistry, ObjectDefinitionScope};
use bridgekit_types::config::RegistryConfig;
use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::{DefinitionError, RegistryError};
use bridgekit_types::event::EventName;
use bridgekit_types::payload::{Activity, ActivityResultPayload, Intent, RESULT_OK};
use serde_json::json;

#[derive(Default)]
struct ShareView {
    url: Option<String>,
}

/// Records every lifecycle callback it receives, in order.
struct ShareModule {
    log: Arc<Mutex<Vec<String>>>,
}

impl ShareModule {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Self { log: Arc::clone(&log) }, log)
    }
}

impl Module for ShareModule {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new("share::ShareModule")
    }

    fn definition(&self, b: &mut ModuleDefinitionBuilder) -> Result<(), DefinitionError> {
        let record = |entry: &'static str, log: &Arc<Mutex<Vec<String>>>| {
            let log = Arc::clone(log);
            move || log.lock().unwrap().push(entry.to_string())
        };

        b.name("ExpoShare")
            .constant("maxItems", 10)
            .function("isAvailable", [], |_| Ok(json!(true)))
            .on_create(record("create", &self.log))
            .on_destroy(record("destroy", &self.log))
            .on_activity_enters_foreground(record("foreground", &self.log))
            .on_activity_enters_background(record("background", &self.log));

        let intents = Arc::clone(&self.log);
        b.on_new_intent(move |intent| {
            intents
                .lock()
                .unwrap()
                .push(format!("intent:{}", intent.data.as_deref().unwrap_or("")));
        });

        let results = Arc::clone(&self.log);
        b.on_activity_result(move |activity, payload| {
            results
                .lock()
                .unwrap()
                .push(format!("result:{}:{}", activity.name, payload.request_code));
        });

        let contracts = Arc::clone(&self.log);
        b.register_activity_contracts(move |caller| {
            let contracts = Arc::clone(&contracts);
            async move {
                contracts.lock().unwrap().push("contracts".to_string());
                caller.register_for_activity_result("ShareSheet", |_, _| {});
            }
        });

        b.view(TypeDescriptor::of::<ShareView>(), |_| ShareView::default(), |view| {
            view.name("ShareButton")
                .prop("url", |view: &mut ShareView, url: Option<String>| view.url = url)
                .events(["onShared"]);
        })?;

        b.class("ShareOptions", |class| {
            class.property("defaultTitle", || json!("Share"));
        });
        Ok(())
    }
}

#[tokio::test]
async fn full_lifecycle_runs_listeners_in_order() {
    let (module, log) = ShareModule::new();
    let registry = ModuleRegistry::default();
    assert!(registry.register_module(&module).unwrap());

    let created = registry.create_all().await;
    assert_eq!(created.listeners, 1);
    assert_eq!(created.contracts, 1);
    registry.post(EventName::ActivityEntersForeground);
    registry.post_new_intent(&Intent::new("android.intent.action.VIEW").with_data("app://share"));
    registry.post_activity_result(
        &Activity::new("1", "MainActivity"),
        &ActivityResultPayload {
            request_code: 42,
            result_code: RESULT_OK,
            data: None,
        },
    );
    registry.post(EventName::ActivityEntersBackground);
    assert_eq!(registry.destroy_all(), 1);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "create",
            "contracts",
            "foreground",
            "intent:app://share",
            "result:MainActivity:42",
            "background",
            "destroy",
        ]
    );
    assert_eq!(registry.caller().contracts(), vec!["ShareSheet"]);
}

#[tokio::test]
async fn events_without_listeners_are_not_delivered() {
    let (module, _log) = ShareModule::new();
    let registry = ModuleRegistry::default();
    registry.register_module(&module).unwrap();

    assert_eq!(registry.post(EventName::OnUserLeavesActivity), 0);
    assert_eq!(registry.post(EventName::ActivityDestroys), 0);
}

#[test]
fn registered_definition_exposes_declarations() {
    let (module, _log) = ShareModule::new();
    let registry = ModuleRegistry::default();
    registry.register_module(&module).unwrap();

    let def = registry.require("ExpoShare").unwrap();
    assert_eq!(
        def.object().function("isAvailable").unwrap().call_sync(Vec::new()).unwrap(),
        json!(true)
    );

    let view = def.view(None).unwrap();
    assert_eq!(view.name(), Some("ShareButton"));
    let mut native = view.create_view(&ViewContext::new(11));
    view.set_prop(&mut native, "url", json!("https://expo.dev")).unwrap();
    view.set_prop(&mut native, "borderRadius", json!(8)).unwrap();
    assert_eq!(
        native.downcast_ref::<ShareView>().unwrap().url.as_deref(),
        Some("https://expo.dev")
    );
    assert_eq!(native.style().get("borderRadius"), Some(&json!(8)));

    let class = &def.classes()[0];
    assert_eq!(class.object().property("defaultTitle").unwrap().get(), json!("Share"));
}

#[test]
fn manifest_round_trips_through_json() {
    let (module, _log) = ShareModule::new();
    let registry = ModuleRegistry::default();
    registry.register_module(&module).unwrap();

    let manifests = registry.manifests();
    let json = serde_json::to_value(&manifests).unwrap();
    assert_eq!(json[0]["name"], "ExpoShare");
    assert_eq!(json[0]["registers_activity_contracts"], true);
    assert_eq!(json[0]["views"]["ShareButton"]["events"][0], "onShared");
    assert_eq!(json[0]["listeners"][0], "module_create");
}

#[test]
fn disabled_module_is_skipped_and_duplicate_is_rejected() {
    let registry = ModuleRegistry::new(RegistryConfig {
        disabled_modules: vec!["ExpoShare".to_string()],
        ..RegistryConfig::default()
    });
    let (module, _log) = ShareModule::new();
    assert!(!registry.register_module(&module).unwrap());

    let registry = ModuleRegistry::default();
    registry.register_module(&module).unwrap();
    assert_eq!(
        registry.register_module(&module).unwrap_err(),
        RegistryError::DuplicateModule("ExpoShare".to_string())
    );
}

#[test]
fn duplicate_view_name_aborts_declaration() {
    struct TwoViews;

    impl Module for TwoViews {
        fn type_descriptor(&self) -> TypeDescriptor {
            TypeDescriptor::new("TwoViews")
        }

        fn definition(&self, b: &mut ModuleDefinitionBuilder) -> Result<(), DefinitionError> {
            b.view(TypeDescriptor::new("A"), |_| (), |v| {
                v.name("Same");
            })?;
            b.view(TypeDescriptor::new("B"), |_| (), |v| {
                v.name("Same");
            })?;
            Ok(())
        }
    }

    let registry = ModuleRegistry::default();
    assert_eq!(
        registry.register_module(&TwoViews).unwrap_err(),
        RegistryError::Definition(DefinitionError::DuplicateView("Same".to_string()))
    );
    assert!(registry.is_empty());
}
