use dynaform_kernel::prune;

use crate::support::{load_json_or_exit, print_json_or_exit};

pub fn run(input: String, sample: Option<String>) {
    let input_doc = load_json_or_exit(&input);
    let sample_doc = sample.map(|path| load_json_or_exit(&path));

    let pruned = prune(&input_doc, sample_doc.as_ref());
    print_json_or_exit(&pruned);
}
