use std::cell::RefCell;
use std::rc::Rc;

use joist::prelude::*;
use serde_json::{json, Value};

fn options_json(options: &[(&str, &str)]) -> String {
    let entries: Vec<SelectOption> = options
        .iter()
        .map(|&(value, label)| SelectOption::new(value, label))
        .collect();
    serde_json::to_string(&entries).expect("options should serialize")
}

fn attached_select(view: &mut View) -> NodeId {
    let node = view.create_element(SELECT_TAG);
    view.append(view.root(), node);
    node
}

fn rendered_values(view: &View, node: NodeId) -> Vec<String> {
    view.component::<Select>(node)
        .map(|select| select.options().iter().map(|o| o.value.clone()).collect())
        .unwrap_or_default()
}

fn rendered_labels(view: &View, node: NodeId) -> Vec<String> {
    view.component::<Select>(node)
        .map(|select| select.options().iter().map(|o| o.label.clone()).collect())
        .unwrap_or_default()
}

fn current_value(view: &View, node: NodeId) -> String {
    view.component::<Select>(node)
        .map(|select| select.value().to_string())
        .unwrap_or_default()
}

fn collect_events(view: &mut View, node: NodeId) -> Rc<RefCell<Vec<Value>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    view.add_event_listener(node, VALUE_CHANGE, move |event, _target| {
        sink.borrow_mut().push(event.detail.clone());
    });
    seen
}

// ============================================================================
// Options and the placeholder
// ============================================================================

#[test]
fn test_options_attribute_renders_with_placeholder() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));

    assert_eq!(rendered_values(&view, node), vec!["", "1", "2"]);
    assert_eq!(rendered_labels(&view, node), vec!["None", "One", "Two"]);
}

#[test]
fn test_set_options_method_renders_with_placeholder() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    view.update(node, |select: &mut Select, host| {
        select.set_options(
            host,
            &[SelectOption::new("1", "One"), SelectOption::new("2", "Two")],
        );
    });

    assert_eq!(rendered_values(&view, node), vec!["", "1", "2"]);
    assert_eq!(rendered_labels(&view, node), vec!["None", "One", "Two"]);
    // Default selection is the placeholder.
    assert_eq!(current_value(&view, node), "");
}

#[test]
fn test_empty_options_render_nothing() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    view.set_attribute(node, "options", "[]");
    assert!(rendered_values(&view, node).is_empty());

    view.update(node, |select: &mut Select, host| {
        select.set_options(host, &[]);
    });
    assert!(rendered_values(&view, node).is_empty());
    assert_eq!(current_value(&view, node), "");
}

#[test]
fn test_empty_options_attribute_is_ignored() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One")]));

    view.set_attribute(node, "options", "");

    assert_eq!(rendered_values(&view, node), vec!["", "1"]);
}

#[test]
fn test_malformed_options_are_swallowed() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));

    view.set_attribute(node, "options", "not valid json");

    assert_eq!(rendered_values(&view, node), vec!["", "1", "2"]);
    assert_eq!(rendered_labels(&view, node), vec!["None", "One", "Two"]);

    // A widget that never had options stays empty.
    let fresh = attached_select(&mut view);
    view.set_attribute(fresh, "options", "{broken");
    assert!(rendered_values(&view, fresh).is_empty());
}

// ============================================================================
// Value binding
// ============================================================================

#[test]
fn test_value_attribute_selects_matching_option() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("a", "A"), ("b", "B")]));

    view.set_attribute(node, "value", "b");

    assert_eq!(current_value(&view, node), "b");
    let selected = view.component::<Select>(node).and_then(Select::selected_index);
    assert_eq!(selected, Some(2));
}

#[test]
fn test_unknown_value_falls_back_to_first_option() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("a", "A"), ("b", "B")]));

    view.set_attribute(node, "value", "zzz");

    // First rendered option is the placeholder, whose value is "".
    assert_eq!(current_value(&view, node), "");
    let selected = view.component::<Select>(node).and_then(Select::selected_index);
    assert_eq!(selected, Some(0));
}

#[test]
fn test_empty_value_attribute_selects_placeholder() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("a", "A")]));
    view.set_attribute(node, "value", "a");

    // Present-but-empty still counts as a value to apply.
    view.set_attribute(node, "value", "");

    assert_eq!(current_value(&view, node), "");
    let selected = view.component::<Select>(node).and_then(Select::selected_index);
    assert_eq!(selected, Some(0));
}

#[test]
fn test_duplicate_values_bind_first_match() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(
        node,
        "options",
        options_json(&[("x", "First x"), ("y", "Y"), ("x", "Second x")]),
    );

    view.set_attribute(node, "value", "x");

    let selected = view.component::<Select>(node).and_then(Select::selected_index);
    assert_eq!(selected, Some(1));
}

#[test]
fn test_attributes_applied_before_attach() {
    let mut view = View::new();
    let node = view.create_element(SELECT_TAG);
    view.set_attribute(node, "value", "a");
    view.set_attribute(node, "options", options_json(&[("a", "A"), ("b", "B")]));

    view.append(view.root(), node);

    assert_eq!(current_value(&view, node), "a");
}

#[test]
fn test_value_reapplied_after_options_replacement() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "value", "2");

    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));

    assert_eq!(current_value(&view, node), "2");
}

// ============================================================================
// Label, name, disabled
// ============================================================================

#[test]
fn test_label_shown_and_hidden() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    let select = view.component::<Select>(node).expect("upgraded");
    assert_eq!(select.label_text(), "");
    assert!(!select.label_visible());

    view.set_attribute(node, "label", "Fruit");
    let select = view.component::<Select>(node).expect("upgraded");
    assert_eq!(select.label_text(), "Fruit");
    assert!(select.label_visible());

    // Empty text hides the label, it does not just blank it.
    view.set_attribute(node, "label", "");
    let select = view.component::<Select>(node).expect("upgraded");
    assert!(!select.label_visible());
}

#[test]
fn test_name_forwarded_to_control() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    view.set_attribute(node, "name", "fruit");
    assert_eq!(view.component::<Select>(node).map(Select::name), Some("fruit"));

    view.remove_attribute(node, "name");
    assert_eq!(view.component::<Select>(node).map(Select::name), Some(""));
}

#[test]
fn test_disabled_is_presence_only() {
    let mut view = View::new();
    let node = attached_select(&mut view);

    view.set_attribute(node, "disabled", "");
    assert_eq!(view.component::<Select>(node).map(Select::disabled), Some(true));

    // Any value counts, including ones that read like "off".
    view.set_attribute(node, "disabled", "false");
    assert_eq!(view.component::<Select>(node).map(Select::disabled), Some(true));

    view.remove_attribute(node, "disabled");
    assert_eq!(view.component::<Select>(node).map(Select::disabled), Some(false));
}

// ============================================================================
// Change notification
// ============================================================================

#[test]
fn test_user_selection_emits_single_event() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));
    let root = view.root();
    let on_node = collect_events(&mut view, node);
    let on_root = collect_events(&mut view, root);

    let moved = view.update(node, |select: &mut Select, host| select.choose(host, "2"));

    assert_eq!(moved, Some(true));
    assert_eq!(on_node.borrow().as_slice(), &[json!({ "value": "2" })]);
    assert_eq!(on_root.borrow().as_slice(), &[json!({ "value": "2" })]);
    assert_eq!(current_value(&view, node), "2");
}

#[test]
fn test_event_bubbles_through_wrappers() {
    let mut view = View::new();
    let wrapper = view.create_element("div");
    view.append(view.root(), wrapper);
    let node = view.create_element(SELECT_TAG);
    view.append(wrapper, node);
    view.set_attribute(node, "options", options_json(&[("1", "One")]));

    let targets = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&targets);
    view.add_event_listener(wrapper, VALUE_CHANGE, move |_event, target| {
        sink.borrow_mut().push(target);
    });

    view.update(node, |select: &mut Select, host| select.choose(host, "1"));

    assert_eq!(targets.borrow().as_slice(), &[node]);
}

#[test]
fn test_attribute_writes_do_not_emit() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    let seen = collect_events(&mut view, node);

    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));
    view.set_attribute(node, "value", "2");
    view.remove_attribute(node, "value");

    assert!(seen.borrow().is_empty());
}

#[test]
fn test_choose_without_movement_is_silent() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One")]));
    view.set_attribute(node, "value", "1");
    let seen = collect_events(&mut view, node);

    // Already selected.
    let moved = view.update(node, |select: &mut Select, host| select.choose(host, "1"));
    assert_eq!(moved, Some(false));

    // No such option.
    let moved = view.update(node, |select: &mut Select, host| select.choose(host, "9"));
    assert_eq!(moved, Some(false));

    assert!(seen.borrow().is_empty());
    assert_eq!(current_value(&view, node), "1");
}

#[test]
fn test_disabled_blocks_user_selection() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));
    view.set_attribute(node, "disabled", "");
    let seen = collect_events(&mut view, node);

    let moved = view.update(node, |select: &mut Select, host| select.choose(host, "2"));

    assert_eq!(moved, Some(false));
    assert!(seen.borrow().is_empty());
    assert_eq!(current_value(&view, node), "");
}

#[test]
fn test_attribute_resync_rederives_selection() {
    let mut view = View::new();
    let node = attached_select(&mut view);
    view.set_attribute(node, "options", options_json(&[("1", "One"), ("2", "Two")]));
    let seen = collect_events(&mut view, node);

    view.update(node, |select: &mut Select, host| select.choose(host, "2"));
    assert_eq!(current_value(&view, node), "2");

    // Without a value attribute to pin it, any observed attribute change
    // rebuilds the options and the selection returns to the placeholder.
    view.set_attribute(node, "label", "Fruit");

    assert_eq!(current_value(&view, node), "");
    assert_eq!(seen.borrow().len(), 1);
}
