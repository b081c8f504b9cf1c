//! The `select-component` element: a labeled dropdown driven by attributes.

mod control;
mod option;

use std::any::Any;

use hostdom::CustomEvent;
use log::debug;
use serde_json::json;

use crate::component::{Component, Host};
use crate::registration::ElementDefinition;

use control::SelectControl;
pub use option::SelectOption;

/// Tag the dropdown registers under.
pub const SELECT_TAG: &str = "select-component";

/// Name of the event emitted on user-driven selection changes.
pub const VALUE_CHANGE: &str = "value-change";

/// Attributes whose changes re-synchronize the dropdown.
pub const OBSERVED_ATTRIBUTES: &[&str] = &["label", "name", "disabled", "value", "options"];

inventory::submit! {
    ElementDefinition::new(SELECT_TAG, OBSERVED_ATTRIBUTES, || {
        Box::new(Select::new()) as Box<dyn Component>
    })
}

/// The caption rendered above the embedded control.
#[derive(Debug, Default)]
struct LabelPart {
    text: String,
    visible: bool,
}

/// A labeled single-selection dropdown.
///
/// All rendered content is a pure function of the host element's
/// attributes: `label`, `name`, `disabled` (presence only), `value` and
/// `options` (a JSON array of `{"value","label"}` objects). The widget
/// re-derives that content when it is attached to the live tree and on
/// every observed attribute change, so attribute writes in any order
/// converge to the same rendered state.
///
/// Setting the selection programmatically means writing the `value`
/// attribute on the host node; [`Select::choose`] is the user-driven
/// path and the only one that emits [`VALUE_CHANGE`].
///
/// # Example
///
/// ```ignore
/// let mut view = View::new();
/// let select = view.create_element(SELECT_TAG);
/// view.set_attribute(select, "label", "Fruit");
/// view.set_attribute(select, "options", r#"[{"value":"1","label":"One"}]"#);
/// view.append(view.root(), select);
/// ```
#[derive(Debug, Default)]
pub struct Select {
    label: LabelPart,
    control: SelectControl,
}

impl Select {
    /// Create a dropdown with no options and no selection.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read surface
    // -------------------------------------------------------------------------

    /// The selected value, or "" when nothing is selected.
    pub fn value(&self) -> &str {
        self.control.value()
    }

    /// The rendered options, placeholder included, in display order.
    pub fn options(&self) -> &[SelectOption] {
        self.control.options()
    }

    /// Index of the selected rendered option.
    pub fn selected_index(&self) -> Option<usize> {
        self.control.selected_index()
    }

    /// Caption text.
    pub fn label_text(&self) -> &str {
        &self.label.text
    }

    /// Whether the caption is shown. Hidden while the text is empty.
    pub fn label_visible(&self) -> bool {
        self.label.visible
    }

    /// Form name forwarded to the embedded control.
    pub fn name(&self) -> &str {
        self.control.name()
    }

    /// Whether user interaction is blocked.
    pub fn disabled(&self) -> bool {
        self.control.disabled()
    }

    // -------------------------------------------------------------------------
    // Methods
    // -------------------------------------------------------------------------

    /// Replace the option list.
    ///
    /// A non-empty list is rendered behind a leading `("", "None")`
    /// placeholder entry; an empty list renders nothing at all. The
    /// host's `value` attribute, when non-empty, is re-applied against
    /// the new list afterwards.
    pub fn set_options(&mut self, host: &Host<'_>, options: &[SelectOption]) {
        let current = host.attribute("value").unwrap_or_default().to_string();
        let mut rendered = Vec::with_capacity(options.len() + 1);
        if !options.is_empty() {
            rendered.push(SelectOption::new("", "None"));
        }
        rendered.extend_from_slice(options);
        self.control.replace_options(rendered);
        if !current.is_empty() {
            self.control.set_value(&current);
        }
    }

    /// Apply a user selection, as the embedded control reports it.
    ///
    /// Moves the selection to the first option matching `value` and
    /// emits one bubbling `value-change` event carrying the new value.
    /// Does nothing when the control is disabled, no option matches, or
    /// the value is already selected. Returns whether the selection
    /// moved.
    pub fn choose(&mut self, host: &mut Host<'_>, value: &str) -> bool {
        if self.control.disabled() {
            return false;
        }
        if !self.control.select_value(value) {
            return false;
        }
        host.emit(
            CustomEvent::new(VALUE_CHANGE)
                .with_detail(json!({ "value": self.control.value() }))
                .bubbling()
                .composed(),
        );
        true
    }

    // -------------------------------------------------------------------------
    // Attribute synchronization
    // -------------------------------------------------------------------------

    /// Re-derive label, name, disabled state, selection and options from
    /// the host's attributes. Idempotent.
    fn resync(&mut self, host: &Host<'_>) {
        let text = host.attribute("label").unwrap_or_default();
        self.label.text = text.to_string();
        self.label.visible = !self.label.text.is_empty();

        self.control.set_name(host.attribute("name").unwrap_or_default());
        self.control.set_disabled(host.has_attribute("disabled"));

        if let Some(value) = host.attribute("value") {
            self.control.set_value(value);
        }

        // An absent or empty options attribute leaves the rendered list
        // alone.
        match host.attribute("options") {
            Some(payload) if !payload.is_empty() => self.apply_options_payload(host, payload),
            _ => {}
        }
    }

    fn apply_options_payload(&mut self, host: &Host<'_>, payload: &str) {
        match serde_json::from_str::<Vec<SelectOption>>(payload) {
            Ok(options) => self.set_options(host, &options),
            Err(e) => {
                // Malformed payloads keep the current list.
                debug!("<{}> ignoring malformed options attribute: {}", SELECT_TAG, e);
            }
        }
    }
}

impl Component for Select {
    fn connected(&mut self, host: &mut Host<'_>) {
        self.resync(host);
    }

    fn attribute_changed(&mut self, host: &mut Host<'_>, _name: &str) {
        self.resync(host);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
