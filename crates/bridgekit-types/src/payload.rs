//! Payloads delivered to lifecycle listeners.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result code reported by an activity that completed normally.
pub const RESULT_OK: i32 = -1;

/// Result code reported by an activity that was cancelled.
pub const RESULT_CANCELED: i32 = 0;

/// An incoming intent: a request to perform an action, optionally on some data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub action: Option<String>,
    /// URI the action operates on (e.g. a deep link).
    pub data: Option<String>,
    #[serde(default)]
    pub extras: Map<String, Value>,
}

impl Intent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// The host activity that sent an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Stable identifier assigned by the host.
    pub id: String,
    /// Simple class name of the activity (e.g. "MainActivity").
    pub name: String,
}

impl Activity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The result an activity handed back to the one that launched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResultPayload {
    pub request_code: i32,
    pub result_code: i32,
    pub data: Option<Intent>,
}

impl ActivityResultPayload {
    pub fn is_ok(&self) -> bool {
        self.result_code == RESULT_OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_builder_methods() {
        let intent = Intent::new("android.intent.action.VIEW")
            .with_data("myapp://settings")
            .with_extra("source", "push");
        assert_eq!(intent.action.as_deref(), Some("android.intent.action.VIEW"));
        assert_eq!(intent.data.as_deref(), Some("myapp://settings"));
        assert_eq!(intent.extras["source"], "push");
    }

    #[test]
    fn test_intent_deserialize_without_extras() {
        let intent: Intent = serde_json::from_str(r#"{"action":"a","data":null}"#).unwrap();
        assert!(intent.extras.is_empty());
    }

    #[test]
    fn test_activity_result_is_ok() {
        let ok = ActivityResultPayload {
            request_code: 7,
            result_code: RESULT_OK,
            data: None,
        };
        let cancelled = ActivityResultPayload {
            result_code: RESULT_CANCELED,
            ..ok.clone()
        };
        assert!(ok.is_ok());
        assert!(!cancelled.is_ok());
    }
}
