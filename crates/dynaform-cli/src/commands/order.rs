use dynaform_kernel::{OrderTree, schema_order, string_path_to_ui_path};

use crate::support::{load_json_or_exit, load_ui_schema_or_exit, print_json_or_exit};

pub fn run(schema: String, ui_schema: Option<String>, at: Option<String>, json_output: bool) {
    let schema_doc = load_json_or_exit(&schema);
    let ui_doc = load_ui_schema_or_exit(ui_schema.as_deref());

    let tree = schema_order(&schema_doc, &ui_doc);
    let tree = match at {
        Some(expression) => {
            let path = string_path_to_ui_path(&expression).unwrap_or_else(|e| {
                eprintln!("error: invalid --at path {expression:?}: {e}");
                std::process::exit(2);
            });
            tree.at(&path).cloned().unwrap_or_default()
        }
        None => tree,
    };

    if json_output {
        print_json_or_exit(&tree.to_value());
    } else {
        print_human_summary(&schema, &tree);
    }
}

fn print_human_summary(schema: &str, tree: &OrderTree) {
    println!("dynaform order {schema}");
    if tree.is_empty() {
        println!("  (declaration order, no explicit order needed)");
        return;
    }
    print_level(tree, "$");
}

fn print_level(tree: &OrderTree, path: &str) {
    if let Some(order) = &tree.order {
        println!("  {path}: {}", order.join(", "));
    }
    for (name, child) in &tree.children {
        print_level(child, &format!("{path}.{name}"));
    }
}
