//! Event value types.

use serde_json::Value;

/// A named event with a JSON payload.
///
/// Two routing flags control delivery: `bubbles` walks the event up the
/// ancestor chain, and `composed` lets it cross the emitting component's
/// encapsulation boundary. Components here own no document nodes of
/// their own, so a composed event simply surfaces at the host element.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEvent {
    /// Name listeners subscribe to.
    pub name: String,
    /// Arbitrary JSON payload.
    pub detail: Value,
    /// Deliver to ancestor listeners as well.
    pub bubbles: bool,
    /// Allowed to escape the emitting component.
    pub composed: bool,
}

impl CustomEvent {
    /// Create an event with a null detail and no routing flags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Value::Null,
            bubbles: false,
            composed: false,
        }
    }

    /// Attach a JSON detail payload.
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = detail;
        self
    }

    /// Mark the event as bubbling.
    pub fn bubbling(mut self) -> Self {
        self.bubbles = true;
        self
    }

    /// Mark the event as crossing component boundaries.
    pub fn composed(mut self) -> Self {
        self.composed = true;
        self
    }
}
