//! Option entries for the dropdown.

use serde::{Deserialize, Serialize};

/// One dropdown entry: the value reported on selection and the text shown.
///
/// The `options` attribute carries these as a JSON array:
/// `[{"value":"1","label":"One"}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value reported when this option is selected.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl SelectOption {
    /// Create an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// (value, label) pairs convert directly
impl<V, L> From<(V, L)> for SelectOption
where
    V: Into<String>,
    L: Into<String>,
{
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}
