//! Schema validation diagnostics.
//!
//! Validation never fails the ordering computation: diagnostics are a
//! descriptive list the caller may surface next to the form. Two
//! independent runs over the same schema MUST produce identical
//! diagnostics, fingerprints included.
//!
//! Fingerprint algorithm:
//! 1. Build the canonical key `{path, schema: 1, title}`
//! 2. Serialize with lexicographically sorted keys and no whitespace
//! 3. fingerprint = "d1_" || hex(SHA256(keyBytes))[..32]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::schema::{SchemaNode, SchemaShape};

/// One non-fatal schema problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDiagnostic {
    /// Deterministic identity of this diagnostic.
    pub fingerprint: String,

    /// Short classification, e.g. "Empty Schema".
    pub title: String,

    /// Human-readable description.
    pub message: String,

    /// Schema path the diagnostic refers to (empty for the root).
    pub path: Vec<String>,
}

impl SchemaDiagnostic {
    fn new(title: &str, message: String, path: &[String]) -> Self {
        Self {
            fingerprint: compute_fingerprint(title, path),
            title: title.to_owned(),
            message,
            path: path.to_vec(),
        }
    }

    fn sort_key(&self) -> (&[String], &str, &str) {
        (&self.path, &self.title, &self.message)
    }
}

/// Validate a schema document for form generation.
///
/// Reports an empty root document, and every composition keyword
/// (`allOf`/`anyOf`/`oneOf`) found anywhere in the tree. The list is
/// sorted by `(path, title, message)`.
pub fn validate_schema(schema: &Value) -> Vec<SchemaDiagnostic> {
    let node = SchemaNode::from_value(schema);
    let mut diagnostics = Vec::new();

    if node.empty {
        diagnostics.push(SchemaDiagnostic::new(
            "Empty Schema",
            "Schema is empty.".to_owned(),
            &[],
        ));
    }

    let mut path = Vec::new();
    collect_unsupported(&node, &mut path, &mut diagnostics);
    diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    diagnostics
}

fn collect_unsupported(
    node: &SchemaNode,
    path: &mut Vec<String>,
    diagnostics: &mut Vec<SchemaDiagnostic>,
) {
    for keyword in &node.unsupported {
        diagnostics.push(SchemaDiagnostic::new(
            "Unsupported Property",
            format!("Cannot generate form fields for JSON schema with {keyword} property."),
            path,
        ));
    }
    match &node.shape {
        SchemaShape::Object { properties, .. } => {
            for (name, child) in properties {
                path.push(name.clone());
                collect_unsupported(child, path, diagnostics);
                path.pop();
            }
        }
        SchemaShape::Array { items: Some(items) } => {
            path.push("items".to_owned());
            collect_unsupported(items, path, diagnostics);
            path.pop();
        }
        _ => {}
    }
}

/// Compute the deterministic fingerprint for a diagnostic.
pub fn compute_fingerprint(title: &str, path: &[String]) -> String {
    let key = canonical_key(title, path);
    let key_bytes = canonical_serialize(&key);
    let hash = Sha256::digest(&key_bytes);
    let mut encoded = String::with_capacity(32);
    for byte in hash.iter().take(16) {
        encoded.push_str(&format!("{byte:02x}"));
    }
    format!("d1_{encoded}")
}

/// Only identity-bearing fields contribute: the message is derived from the
/// title and path, so it stays out of the key.
fn canonical_key(title: &str, path: &[String]) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(
        "path".to_owned(),
        Value::Array(path.iter().cloned().map(Value::String).collect()),
    );
    map.insert("schema".to_owned(), Value::Number(1.into()));
    map.insert("title".to_owned(), Value::String(title.to_owned()));
    Value::Object(map)
}

/// Canonical JSON bytes: sorted object keys, no insignificant whitespace.
///
/// Keys are sorted explicitly: the crate enables `preserve_order`, so the
/// underlying map cannot be relied on for ordering.
fn canonical_serialize(value: &Value) -> Vec<u8> {
    match value {
        Value::Null => b"null".to_vec(),
        Value::Bool(true) => b"true".to_vec(),
        Value::Bool(false) => b"false".to_vec(),
        Value::Number(n) => n.to_string().into_bytes(),
        Value::String(_) => serde_json::to_vec(value).unwrap(),
        Value::Array(items) => {
            let mut buf = vec![b'['];
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                buf.extend_from_slice(&canonical_serialize(item));
            }
            buf.push(b']');
            buf
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut buf = vec![b'{'];
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                buf.extend_from_slice(&serde_json::to_vec(&Value::String((*key).clone())).unwrap());
                buf.push(b':');
                buf.extend_from_slice(&canonical_serialize(&map[*key]));
            }
            buf.push(b'}');
            buf
        }
    }
}
