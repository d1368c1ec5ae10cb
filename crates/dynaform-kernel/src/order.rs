//! Order synthesis: from a (schema, overlay) pair to an [`OrderTree`].
//!
//! The output instructs a renderer in which sequence to lay out fields at
//! each nesting level. A level with no `order` means declaration order is
//! already right; a renderer must treat properties missing from an `order`
//! sequence as "render after, in declaration order".

use serde_json::Value;

use crate::schema::{SchemaNode, SchemaShape};
use crate::uischema::{ORDER_KEY, UiSchemaNode};
use crate::weight::LevelWeights;

/// The ordering overlay for one nesting level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderTree {
    /// Explicit property sequence for this level, when one is needed.
    pub order: Option<Vec<String>>,

    /// Sub-orders for properties (or `items`) that produced one,
    /// in declaration order.
    pub children: Vec<(String, OrderTree)>,
}

impl OrderTree {
    /// True when this level carries no ordering information at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.children.is_empty()
    }

    /// Look up the sub-order for a property by name.
    pub fn child(&self, name: &str) -> Option<&OrderTree> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, tree)| tree)
    }

    /// Walk down a field path (property names and the `items` token).
    pub fn at(&self, path: &[String]) -> Option<&OrderTree> {
        path.iter()
            .try_fold(self, |tree, segment| tree.child(segment))
    }

    /// Render as the overlay fragment consumed by form renderers:
    /// the `ui:order` key first, then one key per nested sub-order.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(order) = &self.order {
            map.insert(
                ORDER_KEY.to_owned(),
                Value::Array(order.iter().cloned().map(Value::String).collect()),
            );
        }
        for (name, child) in &self.children {
            map.insert(name.clone(), child.to_value());
        }
        Value::Object(map)
    }
}

/// Compute the ordering overlay for a schema document pair.
pub fn schema_order(schema: &Value, ui_schema: &Value) -> OrderTree {
    let schema = SchemaNode::from_value(schema);
    let ui = UiSchemaNode::from_value(ui_schema);
    build_order(&schema, Some(&ui), &[])
}

/// Recursive synthesis over the typed model.
///
/// Objects sort their properties by ascending weight; the sort is stable,
/// so fields the weight function cannot separate keep declaration order.
/// An explicit `order` is only emitted when it could differ from
/// declaration order (more than one property, at least one of them
/// ranked). Arrays recurse into their item schema under the `items` token.
pub fn build_order(schema: &SchemaNode, ui: Option<&UiSchemaNode>, path: &[String]) -> OrderTree {
    match &schema.shape {
        SchemaShape::Array { items: Some(items) } => {
            let child_path = child_path(path, "items");
            let descendant = build_order(items, ui.and_then(|ui| ui.child("items")), &child_path);
            if descendant.is_empty() {
                OrderTree::default()
            } else {
                OrderTree {
                    order: None,
                    children: vec![("items".to_owned(), descendant)],
                }
            }
        }
        SchemaShape::Object {
            properties,
            required,
        } => {
            if properties.is_empty() {
                return OrderTree::default();
            }

            let mut weights = LevelWeights::new(properties, required, ui, path);
            let mut ranked: Vec<(String, f64)> = properties
                .iter()
                .map(|(name, _)| {
                    let weight = weights.weight(name);
                    (name.clone(), weight)
                })
                .collect();
            ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

            let any_ranked = ranked.iter().any(|(_, weight)| weight.is_finite());
            let order = (ranked.len() > 1 && any_ranked)
                .then(|| ranked.into_iter().map(|(name, _)| name).collect());

            let mut children = Vec::new();
            for (name, child_schema) in properties {
                let descendant = build_order(
                    child_schema,
                    ui.and_then(|ui| ui.child(name)),
                    &child_path(path, name),
                );
                if !descendant.is_empty() {
                    children.push((name.clone(), descendant));
                }
            }

            OrderTree { order, children }
        }
        _ => OrderTree::default(),
    }
}

fn child_path(path: &[String], segment: &str) -> Vec<String> {
    let mut child = path.to_vec();
    child.push(segment.to_owned());
    child
}
