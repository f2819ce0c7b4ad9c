//! Command dispatch logic for ranq

use std::time::Instant;

use crate::cli::{Cli, Commands, PriorityCommands};
use crate::commands;
use ranq_core::error::{RanqError, Result};
use ranq_core::item::Item;
use ranq_core::rule::{PriorityRule, RuleKind};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(RanqError::UsageError(
            "no command specified (try --help)".to_string(),
        )),

        Some(Commands::Rank {
            query,
            priority,
            limit,
        }) => {
            let items = load_items(cli)?;
            let priorities = effective_priorities(priority);
            if cli.verbose {
                tracing::debug!(elapsed = ?start.elapsed(), "load_inputs");
            }
            commands::rank::execute(cli, query, &items, &priorities, *limit)
        }

        Some(Commands::Priorities { command }) => match command {
            PriorityCommands::List { priority } => {
                let priorities = effective_priorities(priority);
                commands::priorities::list(cli, &priorities)
            }
            PriorityCommands::Move { from, to, priority } => {
                let priorities = effective_priorities(priority);
                commands::priorities::move_rule(cli, &priorities, *from, *to)
            }
        },

        Some(Commands::Items) => {
            let items = load_items(cli)?;
            commands::items::execute(cli, &items)
        }
    }
}

/// Resolve the item collection: the --items file if given, samples otherwise
fn load_items(cli: &Cli) -> Result<Vec<Item>> {
    match &cli.items {
        Some(path) => Item::load_all(path),
        None => Ok(Item::samples()),
    }
}

/// Resolve the priority order: --priority overrides win over the defaults
fn effective_priorities(override_kinds: &[RuleKind]) -> Vec<PriorityRule> {
    if override_kinds.is_empty() {
        PriorityRule::defaults()
    } else {
        override_kinds
            .iter()
            .copied()
            .map(PriorityRule::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_priorities_default() {
        let priorities = effective_priorities(&[]);
        assert_eq!(priorities, PriorityRule::defaults());
    }

    #[test]
    fn test_effective_priorities_override() {
        let priorities = effective_priorities(&[RuleKind::TextMatch, RuleKind::TagMatch]);
        let kinds: Vec<RuleKind> = priorities.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RuleKind::TextMatch, RuleKind::TagMatch]);
    }
}
