//! Built-in components.

pub mod select;

pub use select::{Select, SelectOption};
