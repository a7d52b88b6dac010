use crate::support::{print_json_or_exit, yes_no};
use placement_kernel::{GroupId, PolicyTable, Section, SectionKind};
use serde_json::json;

pub struct Args {
    pub kind_a: SectionKind,
    pub group_a: GroupId,
    pub kind_b: SectionKind,
    pub group_b: GroupId,
    pub json: bool,
}

pub fn run(policy: &PolicyTable, args: Args) {
    let a = Section::new("a", args.kind_a);
    let b = Section::new("b", args.kind_b);
    let allowed = policy.can_swap_sections(&a, &b, args.group_a, args.group_b);

    if args.json {
        let payload = json!({
            "schema": 1,
            "checkKind": "placement.swap.v1",
            "a": { "kind": args.kind_a, "groupId": args.group_a },
            "b": { "kind": args.kind_b, "groupId": args.group_b },
            "canSwap": allowed,
        });
        print_json_or_exit(&payload, "swap");
        return;
    }

    println!("placement swap");
    println!("  A: {} in {}", args.kind_a, args.group_a);
    println!("  B: {} in {}", args.kind_b, args.group_b);
    println!("  Can swap: {}", yes_no(allowed));
}
