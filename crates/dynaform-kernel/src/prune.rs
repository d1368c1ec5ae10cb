//! Deep pruning of empty values.
//!
//! Form editors accumulate empty strings, nulls, and hollow containers as
//! the user types and deletes. `prune` strips them out of a document
//! before submission, except where a parallel sample document explicitly
//! defines the key as an empty value, which marks the emptiness as
//! intentional.
//!
//! Pure: returns a new document and never mutates the input.

use serde_json::Value;

/// Deeply remove empty values from a document.
///
/// A value is empty when it is null, an empty string, or an object/array
/// with nothing left after its own pruning. Numbers and booleans are
/// never empty. A key survives despite an empty value when `sample`
/// defines that key as an explicitly empty value.
pub fn prune(value: &Value, sample: Option<&Value>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter_map(|(key, child)| {
                    let child_sample = sample.and_then(|sample| sample.get(key));
                    let pruned = prune(child, child_sample);
                    should_keep(&pruned, child_sample).then(|| (key.clone(), pruned))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .filter_map(|(index, child)| {
                    let child_sample = sample.and_then(|sample| sample.get(index));
                    let pruned = prune(child, child_sample);
                    should_keep(&pruned, child_sample).then_some(pruned)
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn should_keep(value: &Value, sample: Option<&Value>) -> bool {
    !is_empty_value(value) || sample.is_some_and(defined_and_empty)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Whether a sample entry marks its key as intentionally empty.
/// Scalars count: they have no elements to begin with.
fn defined_and_empty(sample: &Value) -> bool {
    match sample {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
