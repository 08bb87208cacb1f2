//! Lifecycle event names.
//!
//! `EventName` is the fixed set of points in the host application and
//! activity lifecycle at which a module's listeners fire. A module holds at
//! most one listener per name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named point in the module or activity lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    ModuleCreate,
    ModuleDestroy,
    ActivityEntersForeground,
    ActivityEntersBackground,
    ActivityDestroys,
    OnNewIntent,
    OnActivityResult,
    OnUserLeavesActivity,
}

/// The payload shape a listener for a given event expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadShape {
    None,
    Payload,
    SenderAndPayload,
}

impl EventName {
    pub const ALL: [EventName; 8] = [
        EventName::ModuleCreate,
        EventName::ModuleDestroy,
        EventName::ActivityEntersForeground,
        EventName::ActivityEntersBackground,
        EventName::ActivityDestroys,
        EventName::OnNewIntent,
        EventName::OnActivityResult,
        EventName::OnUserLeavesActivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::ModuleCreate => "module_create",
            EventName::ModuleDestroy => "module_destroy",
            EventName::ActivityEntersForeground => "activity_enters_foreground",
            EventName::ActivityEntersBackground => "activity_enters_background",
            EventName::ActivityDestroys => "activity_destroys",
            EventName::OnNewIntent => "on_new_intent",
            EventName::OnActivityResult => "on_activity_result",
            EventName::OnUserLeavesActivity => "on_user_leaves_activity",
        }
    }

    /// The payload shape the host delivers for this event.
    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            EventName::OnNewIntent => PayloadShape::Payload,
            EventName::OnActivityResult => PayloadShape::SenderAndPayload,
            _ => PayloadShape::None,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == needle)
            .ok_or_else(|| format!("invalid event name: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_display_from_str_agree() {
        for name in EventName::ALL {
            assert_eq!(name.to_string().parse::<EventName>().unwrap(), name);
        }
    }

    #[test]
    fn test_event_name_from_str_case_insensitive() {
        assert_eq!(
            "MODULE_CREATE".parse::<EventName>().unwrap(),
            EventName::ModuleCreate
        );
        assert!("module_created".parse::<EventName>().is_err());
    }

    #[test]
    fn test_payload_shapes() {
        assert_eq!(EventName::ModuleCreate.payload_shape(), PayloadShape::None);
        assert_eq!(EventName::OnNewIntent.payload_shape(), PayloadShape::Payload);
        assert_eq!(
            EventName::OnActivityResult.payload_shape(),
            PayloadShape::SenderAndPayload
        );
    }

    #[test]
    fn test_event_name_serializes_snake_case() {
        let json = serde_json::to_string(&EventName::OnUserLeavesActivity).unwrap();
        assert_eq!(json, "\"on_user_leaves_activity\"");
    }
}
