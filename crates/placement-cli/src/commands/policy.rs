use crate::support::print_json_or_exit;
use placement_kernel::PolicyTable;
use serde_json::{Map, Value, json};

pub fn run(policy: &PolicyTable, source: Option<&str>, json_output: bool) {
    if json_output {
        let groups: Map<String, Value> = policy
            .iter()
            .map(|(group, restrictions)| {
                let rendered = serde_json::to_value(restrictions).unwrap_or_else(|err| {
                    eprintln!("error: failed to render policy group {group}: {err}");
                    std::process::exit(2);
                });
                (group.to_string(), rendered)
            })
            .collect();
        let payload = json!({
            "schema": 1,
            "registryKind": "placement.policy_table.v1",
            "source": source.unwrap_or("builtin"),
            "groups": groups,
            "nesting": policy.nesting(),
            "exclusiveKinds": policy.exclusive_kinds(),
        });
        print_json_or_exit(&payload, "policy");
        return;
    }

    let rendered = policy.to_toml_string().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });
    println!("# source: {}", source.unwrap_or("builtin"));
    print!("{rendered}");
}
