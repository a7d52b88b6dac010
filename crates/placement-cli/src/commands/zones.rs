use crate::support::{Scenario, print_json_or_exit, read_json_file_or_exit};
use placement_kernel::{GroupId, PolicyTable};
use serde_json::json;

const ZONES_KIND: &str = "placement.valid_drop_zones.v1";

pub fn run(policy: &PolicyTable, scenario_path: String, json_output: bool) {
    let scenario: Scenario = read_json_file_or_exit(&scenario_path, "scenario");
    let all_groups = scenario
        .all_groups
        .clone()
        .unwrap_or_else(|| GroupId::ALL.to_vec());
    let zones = policy.get_valid_drop_zones(&scenario.drag_item, &all_groups);

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": ZONES_KIND,
            "scenarioPath": scenario_path,
            "sectionId": scenario.drag_item.id,
            "kind": scenario.drag_item.kind,
            "candidates": all_groups,
            "validZones": zones,
        });
        print_json_or_exit(&payload, "zones");
        return;
    }

    println!("placement zones");
    println!("  Scenario: {scenario_path}");
    println!(
        "  Section: {} ({}) from {}",
        scenario.drag_item.id, scenario.drag_item.kind, scenario.drag_item.group_id
    );
    if zones.is_empty() {
        println!("  Valid zones: none");
    } else {
        let names: Vec<&str> = zones.iter().map(|group| group.as_str()).collect();
        println!("  Valid zones: {}", names.join(", "));
    }
}
