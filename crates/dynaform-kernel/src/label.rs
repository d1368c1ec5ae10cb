//! Field labels and descriptions.
//!
//! Precedence is overlay over schema over a start-cased fallback derived
//! from the property name, so untitled schemas still get readable labels.

use crate::schema::SchemaNode;
use crate::uischema::UiSchemaNode;

/// Resolve whether to show a label, and its text.
///
/// The overlay's `label` option can suppress the label entirely; text
/// comes from the overlay title, then the schema title, then the
/// start-cased default (conventionally the property name).
pub fn schema_label(
    schema: &SchemaNode,
    ui: Option<&UiSchemaNode>,
    default: &str,
) -> (bool, String) {
    let show = ui.and_then(|ui| ui.options.label).unwrap_or(true);
    let label = ui
        .and_then(|ui| ui.options.title.clone())
        .or_else(|| schema.title.clone())
        .unwrap_or_else(|| start_case(default));
    (show, label)
}

/// Resolve a field description with the same precedence as labels.
pub fn schema_description(
    schema: &SchemaNode,
    ui: Option<&UiSchemaNode>,
    default: Option<&str>,
) -> Option<String> {
    ui.and_then(|ui| ui.options.description.clone())
        .or_else(|| schema.description.clone())
        .or_else(|| default.map(str::to_owned))
}

/// Start-case an identifier: `podCount`, `pod_count`, and `pod-count` all
/// become `Pod Count`. Word boundaries are separators, lower-to-upper
/// transitions, and letter/digit transitions; characters after the first
/// of each word are kept as written.
pub fn start_case(input: &str) -> String {
    let mut cased = String::new();
    let mut previous: Option<char> = None;

    for character in input.chars() {
        if matches!(character, '_' | '-' | ' ') {
            previous = None;
            continue;
        }
        let boundary = match previous {
            None => true,
            Some(previous) => {
                (previous.is_lowercase() && character.is_uppercase())
                    || (previous.is_ascii_digit() != character.is_ascii_digit())
            }
        };
        if boundary {
            if !cased.is_empty() {
                cased.push(' ');
            }
            cased.extend(character.to_uppercase());
        } else {
            cased.push(character);
        }
        previous = Some(character);
    }

    cased
}
