//! The UI overlay: presentation hints living alongside a schema.
//!
//! An overlay document mirrors the schema's nesting. Keys containing the
//! reserved marker `:` carry hints for the node they sit on; every other
//! key whose value is an object descends into the child of the same name.
//! Array items are addressed through the literal `items` key.
//!
//! Parsing is total and normalizing: unknown reserved keys are ignored,
//! non-object child values are dropped at the boundary, and malformed
//! dependency records resolve to "no dependency".

use serde_json::Value;

/// Marker character distinguishing reserved hint keys from child names.
pub const RESERVED_MARKER: char = ':';

/// Explicit numeric sort rank for a node and its subtree.
pub const SORT_ORDER_KEY: &str = "ui:sortOrder";
/// Custom field renderer binding.
pub const FIELD_KEY: &str = "ui:field";
/// Custom widget binding.
pub const WIDGET_KEY: &str = "ui:widget";
/// Visibility dependency descriptor.
pub const DEPENDENCY_KEY: &str = "ui:dependency";
/// Explicit property order; produced by this crate, consumed by renderers.
pub const ORDER_KEY: &str = "ui:order";

const TITLE_KEY: &str = "ui:title";
const DESCRIPTION_KEY: &str = "ui:description";
const LABEL_KEY: &str = "ui:label";
const OPTIONS_KEY: &str = "ui:options";

/// "This node is shown or hidden based on the value of the named control
/// field located at `control_field_path`."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDependency {
    /// Path of the control field, rooted at the document.
    pub control_field_path: Vec<String>,

    /// Name of the control field (the last path segment, pre-resolved by
    /// the overlay author).
    pub control_field_name: String,
}

/// Presentation options (label visibility and text overrides).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiOptions {
    /// Whether to render a label at all. Absent means yes.
    pub label: Option<bool>,

    /// Label text override.
    pub title: Option<String>,

    /// Description text override.
    pub description: Option<String>,
}

/// One parsed overlay node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiSchemaNode {
    /// Explicit sort rank from `ui:sortOrder`.
    pub sort_order: Option<f64>,

    /// Custom field renderer name from `ui:field`.
    pub field: Option<String>,

    /// Custom widget name from `ui:widget`.
    pub widget: Option<String>,

    /// Dependency descriptor from `ui:dependency`.
    pub dependency: Option<FieldDependency>,

    /// Presentation options from `ui:options` and the individual hint keys
    /// (individual keys win).
    pub options: UiOptions,

    /// Child overlay nodes in declaration order.
    pub children: Vec<(String, UiSchemaNode)>,
}

impl UiSchemaNode {
    /// Parse an overlay node from a JSON document. Total: non-object input
    /// yields an empty node.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let mut node = Self::default();

        if let Some(Value::Object(options)) = map.get(OPTIONS_KEY) {
            node.options.label = options.get("label").and_then(Value::as_bool);
            node.options.title = string_entry(options.get("title"));
            node.options.description = string_entry(options.get("description"));
        }

        for (key, child) in map {
            if !key.contains(RESERVED_MARKER) {
                if child.is_object() {
                    node.children.push((key.clone(), Self::from_value(child)));
                }
                continue;
            }
            match key.as_str() {
                SORT_ORDER_KEY => node.sort_order = child.as_f64(),
                FIELD_KEY => node.field = string_entry(Some(child)),
                WIDGET_KEY => node.widget = string_entry(Some(child)),
                DEPENDENCY_KEY => node.dependency = parse_dependency(child),
                TITLE_KEY => {
                    if let Some(title) = string_entry(Some(child)) {
                        node.options.title = Some(title);
                    }
                }
                DESCRIPTION_KEY => {
                    if let Some(description) = string_entry(Some(child)) {
                        node.options.description = Some(description);
                    }
                }
                LABEL_KEY => {
                    if let Some(label) = child.as_bool() {
                        node.options.label = Some(label);
                    }
                }
                _ => {}
            }
        }

        node
    }

    /// Look up a child overlay node by name.
    pub fn child(&self, name: &str) -> Option<&UiSchemaNode> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    /// Whether an explicit renderer is bound to this node.
    pub fn has_field_or_widget(&self) -> bool {
        self.field.is_some() || self.widget.is_some()
    }
}

fn string_entry(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

/// Both fields are mandatory; anything less resolves to "no dependency".
fn parse_dependency(value: &Value) -> Option<FieldDependency> {
    let Value::Object(map) = value else {
        return None;
    };
    let control_field_path = match map.get("controlFieldPath") {
        Some(Value::Array(segments)) => segments
            .iter()
            .map(|segment| match segment {
                Value::String(segment) => Some(segment.clone()),
                Value::Number(index) => Some(index.to_string()),
                _ => None,
            })
            .collect::<Option<Vec<String>>>()?,
        _ => return None,
    };
    let control_field_name = map.get("controlFieldName").and_then(Value::as_str)?;
    Some(FieldDependency {
        control_field_path,
        control_field_name: control_field_name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_keys_are_hints_not_children() {
        let node = UiSchemaNode::from_value(&json!({
            "ui:sortOrder": 2,
            "ui:widget": "select",
            "address": {"ui:sortOrder": 1},
        }));
        assert_eq!(node.sort_order, Some(2.0));
        assert_eq!(node.widget.as_deref(), Some("select"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.child("address").unwrap().sort_order, Some(1.0));
    }

    #[test]
    fn non_object_children_are_normalized_away() {
        let node = UiSchemaNode::from_value(&json!({"stray": "not an overlay"}));
        assert!(node.children.is_empty());
    }

    #[test]
    fn dependency_requires_both_fields() {
        let node = UiSchemaNode::from_value(&json!({
            "ui:dependency": {
                "controlFieldPath": ["spec", "mode"],
                "controlFieldName": "mode",
            },
        }));
        let dependency = node.dependency.expect("dependency should parse");
        assert_eq!(dependency.control_field_path, ["spec", "mode"]);
        assert_eq!(dependency.control_field_name, "mode");

        let node = UiSchemaNode::from_value(&json!({
            "ui:dependency": {"controlFieldPath": ["spec", "mode"]},
        }));
        assert!(node.dependency.is_none());
    }

    #[test]
    fn individual_hint_keys_override_options() {
        let node = UiSchemaNode::from_value(&json!({
            "ui:options": {"label": false, "title": "From options"},
            "ui:title": "From hint",
        }));
        assert_eq!(node.options.label, Some(false));
        assert_eq!(node.options.title.as_deref(), Some("From hint"));
    }

    #[test]
    fn empty_child_object_still_counts_as_metadata() {
        let node = UiSchemaNode::from_value(&json!({"age": {}}));
        assert!(node.child("age").is_some());
    }
}
