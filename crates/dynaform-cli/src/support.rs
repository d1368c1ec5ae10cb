use serde_json::Value;
use std::fs;

/// Read and parse a JSON document, exiting with status 2 on failure.
pub fn load_json_or_exit(path: &str) -> Value {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {path}: {e}");
        std::process::exit(2);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {path}: {e}");
        std::process::exit(2);
    })
}

/// Load the overlay document, or an empty overlay when no path was given.
pub fn load_ui_schema_or_exit(path: Option<&str>) -> Value {
    match path {
        Some(path) => load_json_or_exit(path),
        None => Value::Object(serde_json::Map::new()),
    }
}

/// Pretty-print a JSON payload, exiting with status 2 on failure.
pub fn print_json_or_exit(payload: &impl serde::Serialize) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|e| {
        eprintln!("error: failed to render JSON output: {e}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
