//! Dropdown Component Example
//!
//! Drives the `<select-component>` element through its surface:
//! - Registration through the element registry
//! - Attribute-driven configuration (label, name, options)
//! - Programmatic selection with change events
//! - Listening for `value-change` on an ancestor

use std::fs::File;

use joist::prelude::*;
use log::LevelFilter;
use serde_json::json;
use simplelog::{Config, WriteLogger};

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("select_demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut view = View::new();
    let root = view.root();
    view.add_event_listener(root, VALUE_CHANGE, |event, target| {
        println!("{} from {}: {}", VALUE_CHANGE, target, event.detail);
    });

    let dropdown = view.create_element(SELECT_TAG);
    view.set_attribute(dropdown, "label", "Favourite fruit");
    view.set_attribute(dropdown, "name", "fruit");
    view.set_attribute(
        dropdown,
        "options",
        json!([
            { "value": "apple", "label": "Apple" },
            { "value": "banana", "label": "Banana" },
            { "value": "cherry", "label": "Cherry" }
        ])
        .to_string(),
    );
    view.append(root, dropdown);

    if let Some(select) = view.component::<Select>(dropdown) {
        println!("rendered options for '{}':", select.label_text());
        for option in select.options() {
            println!("  [{}] {}", option.value, option.label);
        }
    }

    // Attribute writes re-sync the control without firing events.
    view.set_attribute(dropdown, "value", "banana");
    if let Some(select) = view.component::<Select>(dropdown) {
        println!("value after attribute write: '{}'", select.value());
    }

    // User-driven selection goes through the component and fires one.
    view.update(dropdown, |select: &mut Select, host| {
        select.choose(host, "cherry");
    });
}
