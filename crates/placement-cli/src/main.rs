//! Placement CLI: the `placement` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing();

    let policy = support::load_policy_or_exit(cli.policy.as_deref());

    match cli.command {
        Commands::Validate { scenario, json } => commands::validate::run(&policy, scenario, json),

        Commands::Zones { scenario, json } => commands::zones::run(&policy, scenario, json),

        Commands::Batch { operations, json } => commands::batch::run(&policy, operations, json),

        Commands::Swap {
            kind_a,
            group_a,
            kind_b,
            group_b,
            json,
        } => commands::swap::run(
            &policy,
            commands::swap::Args {
                kind_a,
                group_a,
                kind_b,
                group_b,
                json,
            },
        ),

        Commands::Nest {
            parent,
            child,
            json,
        } => commands::nest::run(&policy, parent, child, json),

        Commands::Policy { json } => commands::policy::run(&policy, cli.policy.as_deref(), json),
    }
}
