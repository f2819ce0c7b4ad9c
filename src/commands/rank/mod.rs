//! `ranq rank` command - rank items against a query
//!
//! Runs the ranking engine over the resolved item collection and priority
//! order, then prints the scored results in the selected output format.

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use ranq_core::error::Result;
use ranq_core::item::Item;
use ranq_core::rank::rank;
use ranq_core::rule::PriorityRule;

use self::format::{output_human, output_json, output_records};

/// Execute the rank command
pub fn execute(
    cli: &Cli,
    query: &str,
    items: &[Item],
    priorities: &[PriorityRule],
    limit: Option<usize>,
) -> Result<()> {
    let start = Instant::now();

    let mut results = rank(query, items, priorities);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if cli.verbose {
        debug!(result_count = results.len(), elapsed = ?start.elapsed(), "rank_command");
    }

    match cli.format {
        OutputFormat::Human => output_human(cli, &results, query),
        OutputFormat::Json => output_json(&results)?,
        OutputFormat::Records => output_records(&results),
    }

    Ok(())
}
