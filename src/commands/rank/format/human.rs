//! Human-readable output formatting for rank command

use crate::cli::Cli;
use ranq_core::rank::ScoredItem;

/// Output in human-readable format
pub fn output_human(cli: &Cli, results: &[ScoredItem], query: &str) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No results found for '{}'", query);
        }
        return;
    }

    for result in results {
        println!("{} [{:.1}] {}", result.id, result.score, result.name);
        if cli.verbose {
            println!("    {}", result.text);
            if !result.tags.is_empty() {
                println!("    tags: {}", result.tags.join(", "));
            }
        }
    }
}
