//! Default styling props shared by every view that opts into them.

use std::collections::BTreeMap;

use bridgekit_types::error::CodedError;
use serde_json::Value;

/// Style props registered by `use_css_props`.
pub const CSS_PROPS: [&str; 9] = [
    "backgroundColor",
    "opacity",
    "borderRadius",
    "borderWidth",
    "borderColor",
    "width",
    "height",
    "padding",
    "margin",
];

const COLOR_PROPS: [&str; 2] = ["backgroundColor", "borderColor"];

/// Style values applied to a native view, keyed by prop name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewStyle {
    values: BTreeMap<String, Value>,
}

impl ViewStyle {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply one style prop. `null` resets the prop.
    ///
    /// Colors accept a string or a packed ARGB number; every other style
    /// prop must be numeric.
    pub(crate) fn apply(&mut self, name: &str, value: Value) -> Result<(), CodedError> {
        if value.is_null() {
            self.values.remove(name);
            return Ok(());
        }

        let valid = if COLOR_PROPS.contains(&name) {
            value.is_string() || value.is_u64()
        } else {
            value.is_number()
        };
        if !valid {
            return Err(CodedError::new(
                CodedError::PROP_CONVERSION,
                format!("invalid value for style prop '{name}': {value}"),
            ));
        }

        self.values.insert(name.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn apply_and_reset_style_prop() {
        let mut style = ViewStyle::default();
        style.apply("opacity", json!(0.5)).unwrap();
        assert_eq!(style.get("opacity"), Some(&json!(0.5)));

        style.apply("opacity", Value::Null).unwrap();
        assert!(style.is_empty());
    }

    #[test]
    fn color_accepts_string_or_packed_number() {
        let mut style = ViewStyle::default();
        style.apply("backgroundColor", json!("#ff0000")).unwrap();
        style.apply("borderColor", json!(0xff00ff00u64)).unwrap();
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn numeric_prop_rejects_string() {
        let mut style = ViewStyle::default();
        let err = style.apply("width", json!("wide")).unwrap_err();
        assert_eq!(err.code, CodedError::PROP_CONVERSION);
        assert!(style.is_empty());
    }
}
