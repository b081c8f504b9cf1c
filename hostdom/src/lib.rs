pub mod document;
pub mod event;

pub use document::{Document, NodeId};
pub use event::CustomEvent;
