//! Component trait and the host handle passed into notifications.

use std::any::Any;

use hostdom::{CustomEvent, Document, NodeId};

/// A component backing an upgraded element.
///
/// Implementations receive two lifecycle notifications from the view:
/// `connected` when the host node lands in the live tree, and
/// `attribute_changed` after an observed attribute on the host node is
/// written or removed. Both run synchronously; the triggering call does
/// not return until the handler does.
pub trait Component: Any {
    /// Called when the host node becomes part of the connected tree.
    fn connected(&mut self, host: &mut Host<'_>);

    /// Called after an observed attribute on the host node changed.
    fn attribute_changed(&mut self, host: &mut Host<'_>, name: &str);

    /// Upcast for typed access.
    fn as_any(&self) -> &dyn Any;

    /// Upcast for typed mutable access.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The capability handed to component code during notifications and
/// update scopes: read access to the host node's attributes, plus event
/// emission.
///
/// Components cannot mutate the document from inside a notification;
/// emitted events are queued and dispatched after the handler returns.
pub struct Host<'a> {
    doc: &'a Document,
    node: NodeId,
    emitted: &'a mut Vec<CustomEvent>,
}

impl<'a> Host<'a> {
    pub(crate) fn new(doc: &'a Document, node: NodeId, emitted: &'a mut Vec<CustomEvent>) -> Self {
        Self { doc, node, emitted }
    }

    /// The host node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Read an attribute off the host node.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.doc.attribute(self.node, name)
    }

    /// Whether the host node carries an attribute, regardless of value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.doc.has_attribute(self.node, name)
    }

    /// Queue an event for dispatch from the host node.
    pub fn emit(&mut self, event: CustomEvent) {
        self.emitted.push(event);
    }
}
