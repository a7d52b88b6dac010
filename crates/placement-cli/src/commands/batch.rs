use crate::support::{print_json_or_exit, read_json_file_or_exit, yes_no};
use placement_kernel::{PolicyTable, ReorderOperation};
use serde::Deserialize;
use serde_json::json;

const BATCH_KIND: &str = "placement.batch_reorder.v1";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchInput {
    List(Vec<ReorderOperation>),
    Wrapped { operations: Vec<ReorderOperation> },
}

impl BatchInput {
    fn into_operations(self) -> Vec<ReorderOperation> {
        match self {
            Self::List(operations) | Self::Wrapped { operations } => operations,
        }
    }
}

pub fn run(policy: &PolicyTable, operations_path: String, json_output: bool) {
    let input: BatchInput = read_json_file_or_exit(&operations_path, "batch operations");
    let operations = input.into_operations();
    let result = policy.validate_batch_reorder(&operations);

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": BATCH_KIND,
            "operationsPath": operations_path,
            "operationCount": operations.len(),
            "result": result,
        });
        print_json_or_exit(&payload, "batch");
        return;
    }

    println!("placement batch");
    println!("  Operations path: {operations_path}");
    println!("  Operations: {}", operations.len());
    println!("  Valid: {}", yes_no(result.is_valid));
    if let Some(reason) = &result.reason {
        println!("  Reason: {reason}");
    }
    if let Some(action) = &result.suggested_action {
        println!("  Suggestion: {action}");
    }
}
