//! `ExpoUI`: native picker views.

use bridgekit_core::{Module, ModuleDefinitionBuilder};
use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::DefinitionError;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateTimePickerVariant {
    #[default]
    Picker,
    Input,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayedComponents {
    #[default]
    Date,
    HourAndMinute,
    DateAndTime,
}

/// Native state of a date/time picker.
#[derive(Debug, Default)]
pub struct DateTimePickerView {
    pub initial_date: Option<DateTime<Utc>>,
    pub variant: DateTimePickerVariant,
    pub displayed_components: DisplayedComponents,
    pub is_24_hour: bool,
    pub show_variant_toggle: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PickerVariant {
    #[default]
    Segmented,
    Radio,
}

/// Native state of an option picker.
#[derive(Debug, Default)]
pub struct PickerView {
    pub options: Vec<String>,
    pub selected_index: Option<usize>,
    pub variant: PickerVariant,
}

pub struct ExpoUiModule;

impl Module for ExpoUiModule {
    fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    fn definition(&self, b: &mut ModuleDefinitionBuilder) -> Result<(), DefinitionError> {
        b.name("ExpoUI");

        b.view(
            TypeDescriptor::of::<DateTimePickerView>(),
            |_| DateTimePickerView::default(),
            |view| {
                view.name("DateTimePickerView")
                    .prop("initialDate", |v: &mut DateTimePickerView, date: Option<DateTime<Utc>>| {
                        v.initial_date = date
                    })
                    .prop("variant", |v: &mut DateTimePickerView, variant: Option<DateTimePickerVariant>| {
                        v.variant = variant.unwrap_or_default()
                    })
                    .prop(
                        "displayedComponents",
                        |v: &mut DateTimePickerView, components: Option<DisplayedComponents>| {
                            v.displayed_components = components.unwrap_or_default()
                        },
                    )
                    .prop("is24Hour", |v: &mut DateTimePickerView, value: bool| v.is_24_hour = value)
                    .prop("showVariantToggle", |v: &mut DateTimePickerView, value: bool| {
                        v.show_variant_toggle = value
                    })
                    .events(["onDateSelected"]);
            },
        )?;

        b.view(TypeDescriptor::of::<PickerView>(), |_| PickerView::default(), |view| {
            view.name("PickerView")
                .prop("options", |v: &mut PickerView, options: Vec<String>| v.options = options)
                .prop("selectedIndex", |v: &mut PickerView, index: Option<usize>| {
                    v.selected_index = index
                })
                .prop("variant", |v: &mut PickerView, variant: Option<PickerVariant>| {
                    v.variant = variant.unwrap_or_default()
                })
                .events(["onOptionSelected"]);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgekit_core::view::ViewContext;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn date_time_picker_is_the_default_view() {
        let def = ExpoUiModule.build_definition().unwrap();
        let default = def.view(None).unwrap();
        assert_eq!(default.name(), Some("DateTimePickerView"));
        assert!(def.view(Some("PickerView")).is_some());
    }

    #[test]
    fn date_time_picker_props_apply() {
        let def = ExpoUiModule.build_definition().unwrap();
        let view_def = def.view(Some("DateTimePickerView")).unwrap();
        let mut view = view_def.create_view(&ViewContext::new(1));

        view_def
            .set_prop(&mut view, "initialDate", json!("2026-10-19T08:30:00Z"))
            .unwrap();
        view_def.set_prop(&mut view, "variant", json!("input")).unwrap();
        view_def
            .set_prop(&mut view, "displayedComponents", json!("hourAndMinute"))
            .unwrap();
        view_def.set_prop(&mut view, "is24Hour", json!(true)).unwrap();
        view_def.set_prop(&mut view, "height", json!(520)).unwrap();

        let picker = view.downcast_ref::<DateTimePickerView>().unwrap();
        assert_eq!(picker.initial_date.unwrap().day(), 19);
        assert_eq!(picker.variant, DateTimePickerVariant::Input);
        assert_eq!(picker.displayed_components, DisplayedComponents::HourAndMinute);
        assert!(picker.is_24_hour);
        assert_eq!(view.style().get("height"), Some(&json!(520)));
    }

    #[test]
    fn invalid_variant_is_rejected() {
        let def = ExpoUiModule.build_definition().unwrap();
        let view_def = def.view(Some("DateTimePickerView")).unwrap();
        let mut view = view_def.create_view(&ViewContext::new(2));
        assert!(view_def.set_prop(&mut view, "variant", json!("wheel")).is_err());
    }

    #[test]
    fn picker_options_apply() {
        let def = ExpoUiModule.build_definition().unwrap();
        let view_def = def.view(Some("PickerView")).unwrap();
        let mut view = view_def.create_view(&ViewContext::new(3));

        view_def
            .set_prop(&mut view, "options", json!(["date", "hourAndMinute", "dateAndTime"]))
            .unwrap();
        view_def.set_prop(&mut view, "selectedIndex", json!(2)).unwrap();

        let picker = view.downcast_ref::<PickerView>().unwrap();
        assert_eq!(picker.options.len(), 3);
        assert_eq!(picker.selected_index, Some(2));
        assert_eq!(picker.variant, PickerVariant::Segmented);
    }
}
