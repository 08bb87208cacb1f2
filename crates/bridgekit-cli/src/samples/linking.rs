//! `ExpoLinking`: deep links, lifecycle listeners and activity contracts.

use bridgekit_core::{Module, ModuleDefinitionBuilder, ObjectDefinitionScope};
use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::{CodedError, DefinitionError};
use serde_json::{Value, json};

pub const SCHEME: &str = "bkit";

/// Native handle for a parsed URL, exported as a class.
pub struct ParsedUrl;

pub struct LinkingModule;

/// Split `scheme://host/path` into its parts.
fn parse_url(url: &str) -> Result<Value, CodedError> {
    let (scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| CodedError::new("ERR_INVALID_URL", format!("'{url}' has no scheme")))?;
    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, format!("/{path}")),
        None => (rest, "/".to_string()),
    };
    Ok(json!({ "scheme": scheme, "host": host, "path": path }))
}

impl Module for LinkingModule {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    fn definition(&self, b: &mut ModuleDefinitionBuilder) -> Result<(), DefinitionError> {
        b.name("ExpoLinking")
            .constant("scheme", SCHEME)
            .function("parse", [TypeDescriptor::new("String")], |args| {
                let url = args[0].as_str().ok_or_else(|| {
                    CodedError::new("ERR_INVALID_URL", "url must be a string")
                })?;
                parse_url(url)
            })
            .events(["onUrl"]);

        b.on_create(|| tracing::info!(module = "ExpoLinking", "created"))
            .on_destroy(|| tracing::info!(module = "ExpoLinking", "destroyed"))
            .on_activity_enters_foreground(|| tracing::info!(module = "ExpoLinking", "foreground"))
            .on_activity_enters_background(|| tracing::info!(module = "ExpoLinking", "background"))
            .on_user_leaves_activity(|| tracing::info!(module = "ExpoLinking", "user leaving"))
            .on_activity_destroys(|| tracing::info!(module = "ExpoLinking", "activity destroyed"))
            .on_new_intent(|intent| {
                tracing::info!(
                    module = "ExpoLinking",
                    action = intent.action.as_deref().unwrap_or(""),
                    data = intent.data.as_deref().unwrap_or(""),
                    "new intent"
                )
            })
            .on_activity_result(|activity, payload| {
                tracing::info!(
                    module = "ExpoLinking",
                    activity = %activity.name,
                    request_code = payload.request_code,
                    ok = payload.is_ok(),
                    "activity result"
                )
            })
            .register_activity_contracts(|caller| async move {
                caller.register_for_activity_result("OpenDocument", |input, result| {
                    tracing::info!(?input, ok = result.is_ok(), "document picked");
                });
            });

        b.class_for_type(TypeDescriptor::of::<ParsedUrl>(), |class| {
            class
                .constructor([TypeDescriptor::new("String")], |args| {
                    let url = args[0].as_str().unwrap_or_default();
                    parse_url(url)
                })
                .events(["onChange"]);
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_splits_parts() {
        let parsed = parse_url("bkit://settings/notifications").unwrap();
        assert_eq!(parsed["scheme"], "bkit");
        assert_eq!(parsed["host"], "settings");
        assert_eq!(parsed["path"], "/notifications");

        assert_eq!(parse_url("bkit://home").unwrap()["path"], "/");
        assert_eq!(parse_url("home").unwrap_err().code, "ERR_INVALID_URL");
    }

    #[test]
    fn definition_exports_class_named_after_type() {
        let def = LinkingModule.build_definition().unwrap();
        assert_eq!(def.name(), "ExpoLinking");
        assert_eq!(def.classes()[0].name(), "ParsedUrl");
        assert!(def.classes()[0].is_shared_object());
        assert!(def.has_activity_contracts());
        assert_eq!(def.listened_events().len(), 8);
    }

    #[test]
    fn parse_function_rejects_non_string() {
        let def = LinkingModule.build_definition().unwrap();
        let parse = def.object().function("parse").unwrap();
        assert!(parse.call_sync(vec![json!(5)]).is_err());
        assert_eq!(
            parse.call_sync(vec![json!("bkit://a/b")]).unwrap()["host"],
            "a"
        );
    }
}
