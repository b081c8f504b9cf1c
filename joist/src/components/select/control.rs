//! Headless model of the embedded single-select control.

use super::SelectOption;

/// State of the native-style select embedded in the dropdown.
///
/// Selection follows native single-select rules: replacing the option
/// list selects the first entry (or nothing when the list is empty), and
/// assigning a value binds to the first option with that exact value.
#[derive(Debug, Default)]
pub(crate) struct SelectControl {
    name: String,
    disabled: bool,
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    /// Form name reported by the control.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Whether user interaction is blocked.
    pub(crate) fn disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The rendered option list, in display order.
    pub(crate) fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Index of the selected option.
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected option's value, or "" when nothing is selected.
    pub(crate) fn value(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|option| option.value.as_str())
            .unwrap_or("")
    }

    /// Replace the option list. Selection resets to the default.
    pub(crate) fn replace_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.selected = self.default_selection();
    }

    /// Bind the selection to the first option whose value matches.
    /// Falls back to the default selection when no option matches.
    pub(crate) fn set_value(&mut self, value: &str) {
        self.selected = self.position_of(value).or_else(|| self.default_selection());
    }

    /// Move the selection to the first option whose value matches.
    ///
    /// Returns true only when a match exists and the selection actually
    /// moved.
    pub(crate) fn select_value(&mut self, value: &str) -> bool {
        let Some(index) = self.position_of(value) else {
            return false;
        };
        if self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// First option, or nothing when the list is empty.
    fn default_selection(&self) -> Option<usize> {
        if self.options.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}
