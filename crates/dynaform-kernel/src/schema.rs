//! JSON-Schema fragments as a typed model.
//!
//! The ordering engine consumes a draft-07-like subset of JSON Schema:
//! `type`, `properties`, `items`, `required`, `title`, `description`.
//! Composition keywords (`allOf`/`anyOf`/`oneOf`) cannot be turned into
//! form fields; they are recorded on the fragment so validation can report
//! them and renderability checks can fail closed.
//!
//! Parsing is total. Malformed fragments normalize to [`SchemaShape::Unknown`]
//! instead of failing. The worst case for a broken schema is a less useful
//! order, never an error.

use std::collections::BTreeSet;

use serde_json::Value;

/// Composition keywords the form engine cannot derive fields from.
pub const UNSUPPORTED_KEYWORDS: [&str; 3] = ["allOf", "anyOf", "oneOf"];

/// Primitive schema types. Each renders exactly one form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

/// The structural shape of a schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaShape {
    /// An object whose `properties` keep document declaration order.
    ///
    /// Declaration order is not authoritative for display order, but it is
    /// the tie-breaker for fields the weight function cannot separate.
    Object {
        properties: Vec<(String, SchemaNode)>,
        required: BTreeSet<String>,
    },

    /// An array; `items` may be absent (untyped array).
    Array { items: Option<Box<SchemaNode>> },

    /// A single form control.
    Primitive(Primitive),

    /// Absent, empty, or unrecognized fragment.
    Unknown,
}

/// One parsed JSON-Schema fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    /// Declared `title`, if any.
    pub title: Option<String>,

    /// Declared `description`, if any.
    pub description: Option<String>,

    /// Composition keywords present on this fragment.
    pub unsupported: Vec<String>,

    /// True when the source fragment was absent or had no keys at all.
    pub empty: bool,

    /// Structural shape.
    pub shape: SchemaShape,
}

impl SchemaNode {
    /// Parse a schema fragment from a JSON document. Total: any input
    /// yields a node, with unrecognized shapes normalized to `Unknown`.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::unknown(true);
        };
        if map.is_empty() {
            return Self::unknown(true);
        }

        let unsupported = UNSUPPORTED_KEYWORDS
            .iter()
            .filter(|keyword| map.contains_key(**keyword))
            .map(|keyword| (*keyword).to_string())
            .collect();

        Self {
            title: string_field(map, "title"),
            description: string_field(map, "description"),
            unsupported,
            empty: false,
            shape: shape_of(map),
        }
    }

    /// Whether this fragment alone is a schema error: empty, or carrying a
    /// composition keyword no fields can be derived from.
    pub fn has_schema_error(&self) -> bool {
        self.empty || !self.unsupported.is_empty()
    }

    /// Look up a property schema by name (object shapes only).
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        match &self.shape {
            SchemaShape::Object { properties, .. } => properties
                .iter()
                .find(|(property, _)| property == name)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    fn unknown(empty: bool) -> Self {
        Self {
            title: None,
            description: None,
            unsupported: Vec::new(),
            empty,
            shape: SchemaShape::Unknown,
        }
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Resolve the declared `type` tag, or infer one from `properties`/`items`.
///
/// `type` may be a draft-07 type array; the first recognized entry wins.
fn shape_of(map: &serde_json::Map<String, Value>) -> SchemaShape {
    let declared = match map.get("type") {
        Some(Value::String(tag)) => Some(tag.as_str()),
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .find(|tag| is_known_type(tag)),
        _ => None,
    };

    match declared {
        Some("object") => object_shape(map),
        Some("array") => array_shape(map),
        Some("string") => SchemaShape::Primitive(Primitive::String),
        Some("number") => SchemaShape::Primitive(Primitive::Number),
        Some("integer") => SchemaShape::Primitive(Primitive::Integer),
        Some("boolean") => SchemaShape::Primitive(Primitive::Boolean),
        Some("null") => SchemaShape::Primitive(Primitive::Null),
        Some(_) => SchemaShape::Unknown,
        None if map.contains_key("properties") => object_shape(map),
        None if map.contains_key("items") => array_shape(map),
        None => SchemaShape::Unknown,
    }
}

fn is_known_type(tag: &str) -> bool {
    matches!(
        tag,
        "object" | "array" | "string" | "number" | "integer" | "boolean" | "null"
    )
}

fn object_shape(map: &serde_json::Map<String, Value>) -> SchemaShape {
    let properties = match map.get("properties") {
        Some(Value::Object(properties)) => properties
            .iter()
            .map(|(name, value)| (name.clone(), SchemaNode::from_value(value)))
            .collect(),
        _ => Vec::new(),
    };

    let required = match map.get("required") {
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => BTreeSet::new(),
    };

    SchemaShape::Object {
        properties,
        required,
    }
}

fn array_shape(map: &serde_json::Map<String, Value>) -> SchemaShape {
    SchemaShape::Array {
        items: map
            .get("items")
            .map(|items| Box::new(SchemaNode::from_value(items))),
    }
}
