use clap::{Parser, Subcommand};
use placement_kernel::{GroupId, SectionKind};

#[derive(Parser)]
#[command(
    name = "placement",
    about = "Placement: check page-builder section moves against a group policy",
    version
)]
pub struct Cli {
    /// Policy TOML file (defaults to the built-in storefront policy)
    #[arg(long, global = true, env = "PLACEMENT_POLICY")]
    pub policy: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate one drag operation from a scenario file
    Validate {
        /// Scenario JSON: dragItem, dropZone, currentSections
        scenario: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every group the scenario's dragged item may be dropped into
    Zones {
        /// Scenario JSON: dragItem, optional allGroups
        scenario: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a batch of reorder operations (all-or-nothing)
    Batch {
        /// JSON array of operations, or an object with an `operations` array
        operations: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether two sections may swap places
    Swap {
        /// Kind of the first section
        #[arg(long)]
        kind_a: SectionKind,

        /// Group of the first section
        #[arg(long)]
        group_a: GroupId,

        /// Kind of the second section
        #[arg(long)]
        kind_b: SectionKind,

        /// Group of the second section
        #[arg(long)]
        group_b: GroupId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether one section kind may be nested inside another
    Nest {
        /// Parent section kind
        parent: SectionKind,

        /// Child section kind
        child: SectionKind,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate and print the active policy table
    Policy {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}
