//! Banded sort weights for the properties of one object level.
//!
//! Every property gets a numeric weight; ascending weight is display
//! order. Weights live in five disjoint tiers:
//!
//! ```text
//! Tier 1  -(REQUIRED_BAND + UI_BAND) + offset   required, with overlay
//! Tier 2  -REQUIRED_BAND + offset               required, no overlay
//! Tier 3  -UI_BAND + offset                     optional, with overlay
//! Tier 4  0 + offset                            control fields not above
//! Tier 5  +infinity                             everything else
//! ```
//!
//! `offset` is the intra-tier refinement: the node's minimum sort hint,
//! multiplied by `CONTROL_BAND` when the property controls a sibling so
//! dependent fields can slot in directly after it. A field that depends on
//! control fields takes the strongest controller's weight plus its own
//! offset instead of a tier base.
//!
//! Invariant: the maximum intra-tier offset stays below the smallest gap
//! between tiers as long as sort hints and sibling counts stay below
//! `CONTROL_BAND`. Asserted in tests.

use std::collections::{BTreeSet, HashMap};

use crate::introspect::{control_fields_at, min_sort_order};
use crate::schema::SchemaNode;
use crate::uischema::UiSchemaNode;

/// Multiplier applied to a control field's sort hint.
pub const CONTROL_BAND: f64 = 1_000.0;
/// Tier width separating overlay-carrying fields from the rest.
pub const UI_BAND: f64 = 1_000_000.0;
/// Tier width separating required fields from the rest.
pub const REQUIRED_BAND: f64 = 1_000_000_000.0;

/// Weight computation for one object level.
///
/// Weights are memoized per property name for the lifetime of the level,
/// and control-field recursion carries an in-progress stack: a reference
/// back into the stack contributes `0.0`, so cyclic dependency overlays
/// terminate with a deterministic order instead of recursing forever.
pub struct LevelWeights<'a> {
    properties: &'a [(String, SchemaNode)],
    required: &'a BTreeSet<String>,
    ui: Option<&'a UiSchemaNode>,
    path: &'a [String],
    memo: HashMap<String, f64>,
}

impl<'a> LevelWeights<'a> {
    pub fn new(
        properties: &'a [(String, SchemaNode)],
        required: &'a BTreeSet<String>,
        ui: Option<&'a UiSchemaNode>,
        path: &'a [String],
    ) -> Self {
        Self {
            properties,
            required,
            ui,
            path,
            memo: HashMap::new(),
        }
    }

    /// The sort weight of one property at this level.
    pub fn weight(&mut self, property: &str) -> f64 {
        let mut stack = Vec::new();
        self.weight_guarded(property, &mut stack)
    }

    fn weight_guarded(&mut self, property: &str, stack: &mut Vec<String>) -> f64 {
        if let Some(weight) = self.memo.get(property) {
            return *weight;
        }
        if stack.iter().any(|entry| entry == property) {
            return 0.0;
        }
        stack.push(property.to_owned());
        let weight = self.compute(property, stack);
        stack.pop();
        self.memo.insert(property.to_owned(), weight);
        weight
    }

    fn compute(&mut self, property: &str, stack: &mut Vec<String>) -> f64 {
        let is_required = self.required.contains(property);
        let property_ui = self.ui.and_then(|ui| ui.child(property));

        // Fields this property's subtree designates as its controllers.
        // References to fields that don't exist at this level resolve to
        // "no dependency".
        let control_fields: Vec<String> = control_fields_at(property_ui, self.path)
            .into_iter()
            .filter(|name| self.declares(name))
            .collect();

        let is_control_field = self.controls_a_sibling(property);

        let sibling_count = self.properties.len() as f64;
        let ui_sort_order = min_sort_order(property_ui, sibling_count);

        let control_field_offset = if is_control_field {
            ui_sort_order * CONTROL_BAND
        } else {
            0.0
        };
        let offset = control_field_offset + ui_sort_order;

        // A dependent field sorts directly after the strongest of its
        // controllers.
        if !control_fields.is_empty() {
            let strongest = control_fields
                .iter()
                .map(|name| self.weight_guarded(name, stack))
                .fold(f64::NEG_INFINITY, f64::max);
            return strongest + offset;
        }

        let unranked = !is_required && property_ui.is_none() && control_field_offset == 0.0;
        let base = if unranked { f64::INFINITY } else { 0.0 };
        let required_band = if is_required { REQUIRED_BAND } else { 0.0 };
        let ui_band = if property_ui.is_some() { UI_BAND } else { 0.0 };
        base - required_band - ui_band + offset
    }

    fn declares(&self, name: &str) -> bool {
        self.properties.iter().any(|(property, _)| property == name)
    }

    /// Whether any sibling overlay names this property as its control
    /// field, by exact path match.
    fn controls_a_sibling(&self, property: &str) -> bool {
        let Some(ui) = self.ui else {
            return false;
        };
        ui.children.iter().any(|(_, sibling)| {
            sibling.dependency.as_ref().is_some_and(|dependency| {
                let path = &dependency.control_field_path;
                path.len() == self.path.len() + 1
                    && path[..self.path.len()] == *self.path
                    && path[self.path.len()] == property
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaShape;
    use serde_json::json;

    fn level(schema: serde_json::Value) -> (Vec<(String, SchemaNode)>, BTreeSet<String>) {
        let node = SchemaNode::from_value(&schema);
        match node.shape {
            SchemaShape::Object {
                properties,
                required,
            } => (properties, required),
            _ => panic!("expected object schema"),
        }
    }

    #[test]
    fn bands_never_overlap_below_the_control_band() {
        // Largest offset a field can carry while hints stay in-band.
        let max_offset = (CONTROL_BAND - 1.0) * CONTROL_BAND + (CONTROL_BAND - 1.0);
        assert!(max_offset < UI_BAND);
        assert!(UI_BAND < REQUIRED_BAND - UI_BAND);
    }

    #[test]
    fn tier_order_is_total() {
        let (properties, required) = level(json!({
            "type": "object",
            "required": ["ranked", "plain"],
            "properties": {
                "ranked": {"type": "string"},
                "plain": {"type": "string"},
                "hinted": {"type": "string"},
                "rest": {"type": "string"},
            },
        }));
        let overlay = UiSchemaNode::from_value(&json!({
            "ranked": {"ui:sortOrder": 0},
            "hinted": {"ui:sortOrder": 0},
        }));

        let mut weights = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        let ranked = weights.weight("ranked");
        let plain = weights.weight("plain");
        let hinted = weights.weight("hinted");
        let rest = weights.weight("rest");

        assert!(ranked < plain, "tier 1 before tier 2");
        assert!(plain < hinted, "tier 2 before tier 3");
        assert!(hinted < rest, "tier 3 before tier 5");
        assert_eq!(rest, f64::INFINITY);
    }

    #[test]
    fn required_outranks_explicit_sort_hints() {
        let (properties, required) = level(json!({
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"},
            },
        }));
        let overlay = UiSchemaNode::from_value(&json!({"age": {"ui:sortOrder": 0}}));
        let mut weights = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        assert!(weights.weight("name") < weights.weight("age"));
    }

    #[test]
    fn dependent_field_sorts_directly_after_its_controller() {
        let (properties, required) = level(json!({
            "type": "object",
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string"},
                "c": {"type": "string"},
            },
        }));
        let overlay = UiSchemaNode::from_value(&json!({
            "b": {
                "ui:dependency": {
                    "controlFieldPath": ["a"],
                    "controlFieldName": "a",
                },
            },
        }));

        let mut weights = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        let a = weights.weight("a");
        let b = weights.weight("b");
        let c = weights.weight("c");
        assert!(a < b, "control field first");
        assert!(b < c, "dependent field before unranked fields");
        assert_eq!(c, f64::INFINITY);
    }

    #[test]
    fn dangling_controller_references_resolve_to_no_dependency() {
        let (properties, required) = level(json!({
            "type": "object",
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string"},
            },
        }));
        let overlay = UiSchemaNode::from_value(&json!({
            "b": {
                "ui:dependency": {
                    "controlFieldPath": ["ghost"],
                    "controlFieldName": "ghost",
                },
            },
        }));

        // `b` still carries overlay metadata (tier 3); the ghost reference
        // contributes nothing.
        let mut weights = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        let b = weights.weight("b");
        assert!(b < 0.0);
        assert!(b.is_finite());
        assert_eq!(weights.weight("a"), f64::INFINITY);
    }

    #[test]
    fn self_referential_dependency_terminates() {
        let (properties, required) = level(json!({
            "type": "object",
            "properties": {"a": {"type": "string"}},
        }));
        let overlay = UiSchemaNode::from_value(&json!({
            "a": {
                "ui:dependency": {
                    "controlFieldPath": ["a"],
                    "controlFieldName": "a",
                },
            },
        }));

        let mut weights = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        let first = weights.weight("a");
        let again = weights.weight("a");
        assert!(first.is_finite());
        assert_eq!(first, again);
    }

    #[test]
    fn cyclic_dependencies_terminate_deterministically() {
        let (properties, required) = level(json!({
            "type": "object",
            "properties": {
                "a": {"type": "string"},
                "b": {"type": "string"},
            },
        }));
        let overlay = UiSchemaNode::from_value(&json!({
            "a": {
                "ui:dependency": {
                    "controlFieldPath": ["b"],
                    "controlFieldName": "b",
                },
            },
            "b": {
                "ui:dependency": {
                    "controlFieldPath": ["a"],
                    "controlFieldName": "a",
                },
            },
        }));

        let mut first = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        let mut second = LevelWeights::new(&properties, &required, Some(&overlay), &[]);
        assert_eq!(first.weight("a"), second.weight("a"));
        assert_eq!(first.weight("b"), second.weight("b"));
        assert!(first.weight("a").is_finite());
    }
}
