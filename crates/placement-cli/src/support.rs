use placement_kernel::{CurrentSections, DragItem, DropZone, GroupId, PolicyTable};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Input for `validate` and `zones`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub drag_item: DragItem,
    #[serde(default)]
    pub drop_zone: Option<DropZone>,
    #[serde(default)]
    pub current_sections: CurrentSections,
    #[serde(default)]
    pub all_groups: Option<Vec<GroupId>>,
}

/// Logs go to stderr so `--json` output stays machine-readable.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn load_policy_or_exit(path: Option<&str>) -> PolicyTable {
    let Some(path) = path else {
        return PolicyTable::default_table().clone();
    };
    PolicyTable::from_toml_path(Path::new(path)).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn read_json_file_or_exit<T>(path: &str, label: &str) -> T
where
    T: serde::de::DeserializeOwned,
{
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {label} at {}: {e}", path);
        std::process::exit(1);
    });
    serde_json::from_slice::<T>(&bytes).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {label} JSON at {}: {e}", path);
        std::process::exit(1);
    })
}

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
