//! Registration types for inventory-based element discovery.

use crate::component::Component;

/// Element definition entry for inventory.
pub struct ElementDefinition {
    /// Tag name the element registers under.
    pub tag: &'static str,
    /// Attribute names whose changes are delivered to the component.
    pub observed: &'static [&'static str],
    /// Factory function to create a component instance.
    pub factory: fn() -> Box<dyn Component>,
}

impl ElementDefinition {
    /// Create a new element definition.
    pub const fn new(
        tag: &'static str,
        observed: &'static [&'static str],
        factory: fn() -> Box<dyn Component>,
    ) -> Self {
        Self {
            tag,
            observed,
            factory,
        }
    }
}

inventory::collect!(ElementDefinition);

/// Get all registered element definitions.
pub fn registered_elements() -> impl Iterator<Item = &'static ElementDefinition> {
    inventory::iter::<ElementDefinition>()
}
