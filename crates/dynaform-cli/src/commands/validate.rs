use dynaform_kernel::{SchemaDiagnostic, SchemaNode, UiSchemaNode, has_no_fields, validate_schema};
use serde::Serialize;

use crate::support::{load_json_or_exit, load_ui_schema_or_exit, print_json_or_exit};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    result: &'static str,
    renders_fields: bool,
    diagnostics: Vec<SchemaDiagnostic>,
}

pub fn run(schema: String, ui_schema: Option<String>, json_output: bool) {
    let schema_doc = load_json_or_exit(&schema);
    let ui_doc = load_ui_schema_or_exit(ui_schema.as_deref());

    let diagnostics = validate_schema(&schema_doc);
    let schema_node = SchemaNode::from_value(&schema_doc);
    let ui_node = UiSchemaNode::from_value(&ui_doc);
    let renders_fields = !has_no_fields(&schema_node, Some(&ui_node));

    let report = ValidationReport {
        result: if diagnostics.is_empty() {
            "accepted"
        } else {
            "rejected"
        },
        renders_fields,
        diagnostics,
    };

    if json_output {
        print_json_or_exit(&report);
    } else {
        print_human_summary(&schema, &report);
    }

    if report.result != "accepted" {
        std::process::exit(1);
    }
}

fn print_human_summary(schema: &str, report: &ValidationReport) {
    println!("dynaform validate {schema}");
    println!("  Result: {}", report.result);
    println!(
        "  Fields: {}",
        if report.renders_fields {
            "present"
        } else {
            "none"
        }
    );
    for diagnostic in &report.diagnostics {
        let location = if diagnostic.path.is_empty() {
            "(root)".to_owned()
        } else {
            diagnostic.path.join(".")
        };
        println!(
            "  - {} at {location}: {} [{}]",
            diagnostic.title, diagnostic.message, diagnostic.fingerprint
        );
    }
}
