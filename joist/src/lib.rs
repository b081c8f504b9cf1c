pub mod component;
pub mod components;
pub mod registration;
pub mod registry;
pub mod view;

pub use component::{Component, Host};
pub use registration::{registered_elements, ElementDefinition};
pub use registry::Registry;
pub use view::View;

pub mod prelude {
    pub use crate::component::{Component, Host};
    pub use crate::components::select::{
        Select, SelectOption, OBSERVED_ATTRIBUTES, SELECT_TAG, VALUE_CHANGE,
    };
    pub use crate::registration::ElementDefinition;
    pub use crate::registry::Registry;
    pub use crate::view::View;

    pub use hostdom::{CustomEvent, Document, NodeId};
}
