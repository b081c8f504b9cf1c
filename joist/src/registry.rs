//! Tag registry mapping element names to their definitions.

use std::collections::HashMap;

use log::debug;

use crate::registration::{registered_elements, ElementDefinition};

/// Registry of defined custom elements.
///
/// Definition is first-wins: defining a tag that is already defined is a
/// silent no-op, never an error, so a module can be loaded any number of
/// times without clobbering the live definition.
pub struct Registry {
    definitions: HashMap<&'static str, &'static ElementDefinition>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with every inventory-registered
    /// element definition.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for definition in registered_elements() {
            registry.define(definition);
        }
        registry
    }

    /// Define an element. Returns false when the tag was already defined
    /// and the new definition was ignored.
    pub fn define(&mut self, definition: &'static ElementDefinition) -> bool {
        if self.definitions.contains_key(definition.tag) {
            debug!("element '{}' already defined, keeping the first", definition.tag);
            return false;
        }
        self.definitions.insert(definition.tag, definition);
        true
    }

    /// Look up the definition for a tag.
    pub fn get(&self, tag: &str) -> Option<&'static ElementDefinition> {
        self.definitions.get(tag).copied()
    }

    /// Whether a tag is defined.
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
