use crate::support::{Scenario, print_json_or_exit, read_json_file_or_exit, yes_no};
use placement_kernel::PolicyTable;
use serde_json::json;

const VALIDATE_KIND: &str = "placement.validate.v1";

pub fn run(policy: &PolicyTable, scenario_path: String, json_output: bool) {
    let scenario: Scenario = read_json_file_or_exit(&scenario_path, "scenario");
    let item = &scenario.drag_item;
    let result = policy.validate_drag_operation(
        item,
        scenario.drop_zone.as_ref(),
        &scenario.current_sections,
    );

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": VALIDATE_KIND,
            "scenarioPath": scenario_path,
            "sectionId": item.id,
            "from": { "groupId": item.group_id, "index": item.index },
            "to": scenario.drop_zone.as_ref().map(|zone| json!({
                "groupId": zone.group_id,
                "index": zone.index,
            })),
            "result": result,
        });
        print_json_or_exit(&payload, "validate");
        return;
    }

    println!("placement validate");
    println!("  Scenario: {scenario_path}");
    println!(
        "  Section: {} ({}) at {}[{}]",
        item.id, item.kind, item.group_id, item.index
    );
    match &scenario.drop_zone {
        Some(zone) => println!("  Target: {}[{}]", zone.group_id, zone.index),
        None => println!("  Target: none"),
    }
    println!("  Valid: {}", yes_no(result.is_valid));
    if let Some(reason) = &result.reason {
        println!("  Reason: {reason}");
    }
    if let Some(action) = &result.suggested_action {
        println!("  Suggestion: {action}");
    }
}
