//! `ranq priorities` commands - inspect and reorder the priority list
//!
//! `move` applies the stable single-element move and prints the resulting
//! order. Persisting the new order is the caller's job; nothing is written.

use crate::cli::{Cli, OutputFormat};
use ranq_core::error::Result;
use ranq_core::priority::move_priority;
use ranq_core::rule::PriorityRule;

/// Execute `priorities list`
pub fn list(cli: &Cli, priorities: &[PriorityRule]) -> Result<()> {
    output(cli, priorities)
}

/// Execute `priorities move`
pub fn move_rule(cli: &Cli, priorities: &[PriorityRule], from: usize, to: usize) -> Result<()> {
    let moved = move_priority(priorities, from, to)?;

    tracing::debug!(from, to, "move_priority");

    output(cli, &moved)
}

fn output(cli: &Cli, priorities: &[PriorityRule]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for (index, rule) in priorities.iter().enumerate() {
                println!("{} {} ({})", index, rule.kind, rule.label);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(priorities)?);
        }
        OutputFormat::Records => {
            for (index, rule) in priorities.iter().enumerate() {
                println!("P {} {}", index, rule.kind);
            }
        }
    }
    Ok(())
}
