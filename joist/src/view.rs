//! Live view hosting upgraded components.
//!
//! The view owns the document, the component instances backing upgraded
//! elements, and the event listeners. All writes to the tree go through
//! it so that lifecycle notifications fire at the right moments:
//! `connected` when a node lands in the live tree, `attribute_changed`
//! when an observed attribute is written or removed.

use std::collections::HashMap;

use hostdom::{CustomEvent, Document, NodeId};
use log::trace;

use crate::component::{Component, Host};
use crate::registry::Registry;

type EventListener = Box<dyn FnMut(&CustomEvent, NodeId)>;

/// A document plus the live state layered on top of it.
///
/// Single-threaded and synchronous: every notification and every event
/// dispatch completes before the call that triggered it returns.
pub struct View {
    doc: Document,
    registry: Registry,
    instances: HashMap<NodeId, Box<dyn Component>>,
    observed: HashMap<NodeId, &'static [&'static str]>,
    listeners: HashMap<NodeId, Vec<(String, EventListener)>>,
}

impl View {
    /// Create a view over a fresh document, with every inventory-registered
    /// element defined.
    pub fn new() -> Self {
        Self::with_registry(Registry::with_builtins())
    }

    /// Create a view with a caller-assembled registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            doc: Document::new(),
            registry,
            instances: HashMap::new(),
            observed: HashMap::new(),
            listeners: HashMap::new(),
        }
    }

    /// Read access to the underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.doc.root()
    }

    /// Create an element, upgrading it immediately when its tag is defined.
    ///
    /// Upgrading runs the definition's factory once; the component's
    /// internal parts live for the node's whole lifetime.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = self.doc.create_element(tag);
        if let Some(definition) = self.registry.get(tag) {
            trace!("upgrading <{}> at {}", tag, node);
            self.instances.insert(node, (definition.factory)());
            self.observed.insert(node, definition.observed);
        }
        node
    }

    /// Append `child` under `parent`.
    ///
    /// When the child ends up in the connected tree, every upgraded
    /// element in the moved subtree receives `connected`, in document
    /// order. Returns false when the document refuses the move.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.doc.append(parent, child) {
            return false;
        }
        if self.doc.is_connected(child) {
            for node in self.doc.subtree(child) {
                self.notify_connected(node);
            }
        }
        true
    }

    /// Write an attribute on a node.
    ///
    /// The node's component is notified if the name is in its observed
    /// set. Writing the same value again still notifies.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        self.doc.set_attribute(node, name, value);
        self.notify_attribute_changed(node, name);
    }

    /// Remove an attribute from a node.
    ///
    /// The node's component is notified if the name is observed and the
    /// attribute was actually present.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if self.doc.remove_attribute(node, name).is_some() {
            self.notify_attribute_changed(node, name);
        }
    }

    /// Typed access to the component backing a node.
    pub fn component<T: Component>(&self, node: NodeId) -> Option<&T> {
        self.instances
            .get(&node)
            .and_then(|instance| instance.as_any().downcast_ref::<T>())
    }

    /// Run a closure against the typed component backing a node.
    ///
    /// The closure receives the component and a host handle; events
    /// emitted through the host are dispatched after the closure
    /// returns. Yields None when the node has no component of the
    /// requested type.
    pub fn update<T, F, R>(&mut self, node: NodeId, f: F) -> Option<R>
    where
        T: Component,
        F: FnOnce(&mut T, &mut Host<'_>) -> R,
    {
        let mut emitted = Vec::new();
        let result = {
            let instance = self.instances.get_mut(&node)?;
            let component = instance.as_any_mut().downcast_mut::<T>()?;
            let mut host = Host::new(&self.doc, node, &mut emitted);
            f(component, &mut host)
        };
        self.dispatch_all(node, emitted);
        Some(result)
    }

    /// Attach a listener for a named event on a node.
    ///
    /// The listener receives the event and the node it was emitted from.
    pub fn add_event_listener<F>(&mut self, node: NodeId, event: &str, listener: F)
    where
        F: FnMut(&CustomEvent, NodeId) + 'static,
    {
        self.listeners
            .entry(node)
            .or_default()
            .push((event.to_string(), Box::new(listener)));
    }

    fn notify_connected(&mut self, node: NodeId) {
        let mut emitted = Vec::new();
        if let Some(instance) = self.instances.get_mut(&node) {
            trace!("connected: {} <{}>", node, self.doc.tag(node));
            let mut host = Host::new(&self.doc, node, &mut emitted);
            instance.connected(&mut host);
        }
        self.dispatch_all(node, emitted);
    }

    fn notify_attribute_changed(&mut self, node: NodeId, name: &str) {
        let is_observed = self
            .observed
            .get(&node)
            .is_some_and(|names| names.iter().any(|n| *n == name));
        if !is_observed {
            return;
        }
        let mut emitted = Vec::new();
        if let Some(instance) = self.instances.get_mut(&node) {
            let mut host = Host::new(&self.doc, node, &mut emitted);
            instance.attribute_changed(&mut host, name);
        }
        self.dispatch_all(node, emitted);
    }

    fn dispatch_all(&mut self, target: NodeId, events: Vec<CustomEvent>) {
        for event in events {
            self.dispatch(target, &event);
        }
    }

    /// Deliver an event to the target's listeners and, when it bubbles,
    /// to each ancestor's listeners on the way up to the root.
    fn dispatch(&mut self, target: NodeId, event: &CustomEvent) {
        let path = if event.bubbles {
            self.doc.ancestors_inclusive(target)
        } else {
            vec![target]
        };
        trace!("dispatch '{}' from {}", event.name, target);
        for current in path {
            let Some(entries) = self.listeners.get_mut(&current) else {
                continue;
            };
            for (name, listener) in entries.iter_mut() {
                if *name == event.name {
                    listener(event, target);
                }
            }
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}
