//! Integration tests: run the placement fixture vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the operation and its inputs
//! - expect.json: the expected JSON output
//!
//! Outputs are compared as JSON, so reason strings are checked verbatim.

use placement_kernel::{
    CurrentSections, DragItem, DropZone, GroupId, ReorderOperation, get_valid_drop_zones,
    validate_batch_reorder, validate_drag_operation,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn field<T: DeserializeOwned>(case: &Value, name: &str) -> T {
    serde_json::from_value(case.get(name).cloned().unwrap_or(Value::Null))
        .unwrap_or_else(|e| panic!("invalid `{name}` in case: {e}"))
}

fn run_case(case: &Value) -> Value {
    let operation = case["operation"].as_str().expect("missing operation field");
    match operation {
        "validateDragOperation" => {
            let drag_item: DragItem = field(case, "dragItem");
            let drop_zone: Option<DropZone> = field(case, "dropZone");
            let current: CurrentSections = field(case, "currentSections");
            let result = validate_drag_operation(&drag_item, drop_zone.as_ref(), &current);
            serde_json::to_value(result).expect("failed to serialize result")
        }
        "getValidDropZones" => {
            let drag_item: DragItem = field(case, "dragItem");
            let all_groups: Vec<GroupId> = field(case, "allGroups");
            let zones = get_valid_drop_zones(&drag_item, &all_groups);
            serde_json::to_value(zones).expect("failed to serialize zones")
        }
        "validateBatchReorder" => {
            let operations: Vec<ReorderOperation> = field(case, "operations");
            let result = validate_batch_reorder(&operations);
            serde_json::to_value(result).expect("failed to serialize result")
        }
        other => panic!("unknown operation: {other}"),
    }
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);

    let case_path = dir.join("case.json");
    let expect_path = dir.join("expect.json");

    let case_str = std::fs::read_to_string(&case_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", case_path.display()));
    let expect_str = std::fs::read_to_string(&expect_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", expect_path.display()));

    let case: Value = serde_json::from_str(&case_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", case_path.display()));
    let expected: Value = serde_json::from_str(&expect_str)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", expect_path.display()));

    let actual = run_case(&case);

    assert_eq!(
        actual,
        expected,
        "\n\nFixture: {name}\n\nGot:\n{}\n\nExpected:\n{}\n",
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap(),
    );
}

#[test]
fn header_to_footer_rejected() {
    run_fixture("header_to_footer_rejected");
}

#[test]
fn product_grid_template_reorder() {
    run_fixture("product_grid_template_reorder");
}

#[test]
fn cart_drawer_into_template_rejected() {
    run_fixture("cart_drawer_into_template_rejected");
}

#[test]
fn announcement_bar_valid_zones() {
    run_fixture("announcement_bar_valid_zones");
}

#[test]
fn batch_with_cross_group_move_rejected() {
    run_fixture("batch_with_cross_group_move_rejected");
}

#[test]
fn header_above_announcement_bar_rejected() {
    run_fixture("header_above_announcement_bar_rejected");
}

#[test]
fn all_fixtures_have_a_test() {
    let mut names: Vec<String> = std::fs::read_dir(fixtures_dir())
        .expect("fixtures dir should exist")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "announcement_bar_valid_zones",
            "batch_with_cross_group_move_rejected",
            "cart_drawer_into_template_rejected",
            "header_above_announcement_bar_rejected",
            "header_to_footer_rejected",
            "product_grid_template_reorder",
        ]
    );
}
