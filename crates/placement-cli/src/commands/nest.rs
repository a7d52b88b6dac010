use crate::support::{print_json_or_exit, yes_no};
use placement_kernel::{PolicyTable, SectionKind};
use serde_json::json;

pub fn run(policy: &PolicyTable, parent: SectionKind, child: SectionKind, json_output: bool) {
    let allowed = policy.can_nest_section(parent, child);

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": "placement.nest.v1",
            "parent": parent,
            "child": child,
            "canNest": allowed,
        });
        print_json_or_exit(&payload, "nest");
        return;
    }

    println!("placement nest");
    println!("  Parent: {parent}");
    println!("  Child: {child}");
    println!("  Can nest: {}", yes_no(allowed));
}
