//! String field paths.
//!
//! Callers address fields with lodash-style path strings such as
//! `spec.containers[0].resources['limits.cpu']`. Overlay documents address
//! array elements through the literal `items` token instead of indices, so
//! purely numeric segments are rewritten after splitting.

use crate::error::PathError;

/// Token standing in for every array index in an overlay path.
pub const ITEMS_TOKEN: &str = "items";

/// Split a string field path and rewrite numeric segments to the
/// `items` token.
///
/// Dots separate segments; brackets address array indices or quoted keys
/// (single or double quotes, which may contain dots). Empty dot-segments
/// are dropped; empty or unterminated bracket segments are rejected.
pub fn string_path_to_ui_path(path: &str) -> Result<Vec<String>, PathError> {
    let segments = split_path(path)?;
    Ok(segments
        .into_iter()
        .map(|segment| {
            if is_index(&segment) {
                ITEMS_TOKEN.to_owned()
            } else {
                segment
            }
        })
        .collect())
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit())
}

fn split_path(path: &str) -> Result<Vec<String>, PathError> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut position = 0;

    while position < bytes.len() {
        match bytes[position] {
            b'.' => {
                flush(&mut buffer, &mut segments);
                position += 1;
            }
            b'[' => {
                flush(&mut buffer, &mut segments);
                let open = position;
                position += 1;
                let segment = if position < bytes.len() && matches!(bytes[position], b'\'' | b'"') {
                    let quote = bytes[position];
                    let start = position;
                    position += 1;
                    let key_start = position;
                    while position < bytes.len() && bytes[position] != quote {
                        position += 1;
                    }
                    if position >= bytes.len() {
                        return Err(PathError::UnterminatedQuote(start));
                    }
                    let key = path[key_start..position].to_owned();
                    position += 1;
                    key
                } else {
                    let key_start = position;
                    while position < bytes.len() && bytes[position] != b']' {
                        position += 1;
                    }
                    path[key_start..position].to_owned()
                };
                if bytes.get(position) != Some(&b']') {
                    return Err(PathError::UnterminatedBracket(open));
                }
                if segment.is_empty() {
                    return Err(PathError::EmptyBracket(open));
                }
                position += 1;
                segments.push(segment);
            }
            _ => {
                // Segments are built bytewise; paths are expected to be
                // ASCII but multi-byte characters pass through intact.
                let start = position;
                while position < bytes.len() && !matches!(bytes[position], b'.' | b'[') {
                    position += 1;
                }
                buffer.push_str(&path[start..position]);
            }
        }
    }
    flush(&mut buffer, &mut segments);
    Ok(segments)
}

fn flush(buffer: &mut String, segments: &mut Vec<String>) {
    if !buffer.is_empty() {
        segments.push(std::mem::take(buffer));
    }
}
