//! Per-property facts the weight function consumes.
//!
//! Three questions are answered here, each against a (schema, overlay)
//! pair: would this node render any form control at all, which fields does
//! an overlay subtree designate as its controllers, and what is the
//! strongest sort hint declared anywhere below a node.

use crate::schema::{SchemaNode, SchemaShape};
use crate::uischema::UiSchemaNode;

/// Whether a node, given its overlay, would render zero form controls.
///
/// Schema errors (empty fragments, composition keywords) derive no fields.
/// An explicit field or widget binding always renders something, so it
/// short-circuits the recursion; otherwise objects require every property
/// to be empty and arrays defer to their item schema. Untyped arrays
/// derive nothing.
pub fn has_no_fields(schema: &SchemaNode, ui: Option<&UiSchemaNode>) -> bool {
    if schema.has_schema_error() {
        return true;
    }

    let no_binding = !ui.is_some_and(UiSchemaNode::has_field_or_widget);
    match &schema.shape {
        SchemaShape::Array { items } => {
            no_binding
                && match items {
                    Some(items) => has_no_fields(items, ui.and_then(|ui| ui.child("items"))),
                    None => true,
                }
        }
        SchemaShape::Object { properties, .. } => {
            no_binding
                && properties
                    .iter()
                    .all(|(name, child)| has_no_fields(child, ui.and_then(|ui| ui.child(name))))
        }
        SchemaShape::Primitive(_) => false,
        SchemaShape::Unknown => no_binding,
    }
}

/// Collect the control field names that `ui` and its descendants declare
/// for dependencies anchored at `path`.
///
/// A dependency is anchored at `path` when its `control_field_path` with
/// the last segment dropped equals `path`. Traversal is depth-first,
/// parent before children, and descends only into plain child nodes;
/// reserved hint keys never nest further overlay nodes.
pub fn control_fields_at(ui: Option<&UiSchemaNode>, path: &[String]) -> Vec<String> {
    let mut names = Vec::new();
    collect_control_fields(ui, path, &mut names);
    names
}

fn collect_control_fields(ui: Option<&UiSchemaNode>, path: &[String], names: &mut Vec<String>) {
    let Some(ui) = ui else {
        return;
    };
    if let Some(dependency) = &ui.dependency {
        let anchor = dependency
            .control_field_path
            .split_last()
            .map_or(&[][..], |(_, anchor)| anchor);
        if anchor == path {
            names.push(dependency.control_field_name.clone());
        }
    }
    for (_, child) in &ui.children {
        collect_control_fields(Some(child), path, names);
    }
}

/// The minimum explicit sort rank declared at `ui` or anywhere below it.
///
/// `fallback` is conventionally the sibling property count at the
/// enclosing level, so fields declaring no rank sort after every field
/// that does, within their tier.
pub fn min_sort_order(ui: Option<&UiSchemaNode>, fallback: f64) -> f64 {
    let Some(ui) = ui else {
        return fallback;
    };
    if let Some(order) = ui.sort_order {
        return order;
    }
    ui.children
        .iter()
        .map(|(_, child)| min_sort_order(Some(child), fallback))
        .reduce(f64::min)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> SchemaNode {
        SchemaNode::from_value(&value)
    }

    fn ui(value: serde_json::Value) -> UiSchemaNode {
        UiSchemaNode::from_value(&value)
    }

    #[test]
    fn primitives_always_render() {
        assert!(!has_no_fields(&schema(json!({"type": "string"})), None));
        assert!(!has_no_fields(&schema(json!({"type": "boolean"})), None));
    }

    #[test]
    fn empty_and_unsupported_schemas_render_nothing() {
        assert!(has_no_fields(&schema(json!({})), None));
        let composed = schema(json!({"type": "object", "anyOf": [], "properties": {}}));
        assert!(has_no_fields(&composed, None));
    }

    #[test]
    fn widget_binding_short_circuits() {
        let node = schema(json!({"type": "object", "properties": {}}));
        assert!(has_no_fields(&node, None));

        let overlay = ui(json!({"ui:widget": "editor"}));
        assert!(!has_no_fields(&node, Some(&overlay)));
    }

    #[test]
    fn object_requires_every_property_empty() {
        let node = schema(json!({
            "type": "object",
            "properties": {
                "empty": {"type": "object", "properties": {}},
                "real": {"type": "string"},
            },
        }));
        assert!(!has_no_fields(&node, None));

        let all_empty = schema(json!({
            "type": "object",
            "properties": {
                "empty": {"type": "object", "properties": {}},
            },
        }));
        assert!(has_no_fields(&all_empty, None));
    }

    #[test]
    fn untyped_array_renders_nothing_without_binding() {
        let node = schema(json!({"type": "array"}));
        assert!(has_no_fields(&node, None));

        let overlay = ui(json!({"ui:field": "list"}));
        assert!(!has_no_fields(&node, Some(&overlay)));
    }

    #[test]
    fn control_fields_collected_from_descendants() {
        let overlay = ui(json!({
            "ui:dependency": {
                "controlFieldPath": ["mode"],
                "controlFieldName": "mode",
            },
            "nested": {
                "ui:dependency": {
                    "controlFieldPath": ["level"],
                    "controlFieldName": "level",
                },
            },
        }));
        assert_eq!(control_fields_at(Some(&overlay), &[]), ["mode", "level"]);
    }

    #[test]
    fn control_fields_respect_the_anchor_path() {
        let overlay = ui(json!({
            "ui:dependency": {
                "controlFieldPath": ["spec", "mode"],
                "controlFieldName": "mode",
            },
        }));
        let spec = ["spec".to_owned()];
        assert_eq!(control_fields_at(Some(&overlay), &spec), ["mode"]);
        assert!(control_fields_at(Some(&overlay), &[]).is_empty());
    }

    #[test]
    fn min_sort_order_prefers_explicit_then_descendants() {
        assert_eq!(min_sort_order(None, 4.0), 4.0);

        let explicit = ui(json!({"ui:sortOrder": 2, "child": {"ui:sortOrder": 0}}));
        assert_eq!(min_sort_order(Some(&explicit), 4.0), 2.0);

        let nested = ui(json!({"a": {"ui:sortOrder": 3}, "b": {}}));
        assert_eq!(min_sort_order(Some(&nested), 4.0), 3.0);

        let silent = ui(json!({"a": {}}));
        assert_eq!(min_sort_order(Some(&silent), 4.0), 4.0);
    }
}
